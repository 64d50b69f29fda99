//! Node arena for one parsed file.
//!
//! All expressions and statements of a file live in two flat `Vec`s owned by
//! [`Ast`]; nodes refer to each other by index. The syntactic parent of a
//! node is not stored in the node: [`Ast::link_parents`] fills a side table
//! once a top-level statement is complete.

use std::fmt;

use crate::ast::{Expr, Stmt};
use crate::visitor::{walk_expr, walk_stmt, Visitor};
use crate::{ExprId, NodeId, StmtId};

/// Arena of all nodes parsed from one source file.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Ast {
    filename: String,

    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// All statements (indexed by `StmtId`).
    stmts: Vec<Stmt>,

    /// Parent of each expression; `None` until linked.
    expr_parents: Vec<Option<NodeId>>,

    /// Parent of each statement; stays `None` for top-level statements.
    stmt_parents: Vec<Option<NodeId>>,
}

impl Ast {
    pub fn new(filename: impl Into<String>) -> Self {
        Ast {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 expression per 8 bytes of source.
    pub fn with_capacity(filename: impl Into<String>, source_len: usize) -> Self {
        let estimated_exprs = source_len / 8;
        Ast {
            filename: filename.into(),
            exprs: Vec::with_capacity(estimated_exprs),
            stmts: Vec::with_capacity(estimated_exprs / 4),
            expr_parents: Vec::new(),
            stmt_parents: Vec::new(),
        }
    }

    /// Name of the source file every node belongs to.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    // ===== Allocation =====

    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a source file never holds u32::MAX nodes"
    )]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a source file never holds u32::MAX nodes"
    )]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    // ===== Lookup =====

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    // ===== Parents =====

    /// Record the parent of every node reachable from `root`.
    ///
    /// `root` itself is left without a parent. Linking the same subtree
    /// twice is harmless.
    pub fn link_parents(&mut self, root: StmtId) {
        let links = {
            let mut linker = ParentLinker {
                stack: Vec::new(),
                links: Vec::new(),
            };
            linker.visit_stmt(root, self);
            linker.links
        };

        self.expr_parents.resize(self.exprs.len(), None);
        self.stmt_parents.resize(self.stmts.len(), None);
        for (child, parent) in links {
            match child {
                NodeId::Expr(id) => self.expr_parents[id.index()] = Some(parent),
                NodeId::Stmt(id) => self.stmt_parents[id.index()] = Some(parent),
            }
        }
    }

    /// Syntactic parent of `node`, once its top-level statement is linked.
    pub fn parent(&self, node: impl Into<NodeId>) -> Option<NodeId> {
        match node.into() {
            NodeId::Expr(id) => self.expr_parents.get(id.index()).copied().flatten(),
            NodeId::Stmt(id) => self.stmt_parents.get(id.index()).copied().flatten(),
        }
    }
}

impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ast")
            .field("filename", &self.filename)
            .field("exprs", &self.exprs.len())
            .field("stmts", &self.stmts.len())
            .finish_non_exhaustive()
    }
}

/// Walks one subtree and records `(child, parent)` pairs.
struct ParentLinker {
    stack: Vec<NodeId>,
    links: Vec<(NodeId, NodeId)>,
}

impl ParentLinker {
    fn enter(&mut self, node: NodeId) {
        if let Some(&parent) = self.stack.last() {
            self.links.push((node, parent));
        }
        self.stack.push(node);
    }
}

impl<'ast> Visitor<'ast> for ParentLinker {
    fn visit_stmt(&mut self, id: StmtId, ast: &'ast Ast) {
        self.enter(NodeId::Stmt(id));
        walk_stmt(self, id, ast);
        self.stack.pop();
    }

    fn visit_expr(&mut self, id: ExprId, ast: &'ast Ast) {
        self.enter(NodeId::Expr(id));
        walk_expr(self, id, ast);
        self.stack.pop();
    }
}
