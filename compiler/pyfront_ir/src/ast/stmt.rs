//! Statement nodes.
//!
//! Every block (`if` body, `def` body, `else` branch) is a [`StmtKind::Suite`]
//! statement referenced by `StmtId`. A simple-statement line such as
//! `a = 1; b = 2` is also a `Suite`.

use std::fmt;

use super::collections::{
    AliasedName, Argument, Decorator, DottedName, ExceptHandler, ImportNames, Param, WithItem,
};
use crate::{ExprId, Span, StmtId};

/// Text of the placeholder statement recovery mode emits for a statement
/// it could not parse.
pub const PARSER_ERROR_MARKER: &str = "<parser-error>";

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    /// Trailing `# comment` on the statement's line, text after `#`.
    pub comment: Option<String>,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt {
            kind,
            span,
            comment: None,
        }
    }

    /// True for the recovery placeholder.
    pub fn is_error_marker(&self) -> bool {
        matches!(&self.kind, StmtKind::Comment(text) if text == PARSER_ERROR_MARKER)
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)?;
        if let Some(comment) = &self.comment {
            write!(f, " #{comment}")?;
        }
        Ok(())
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    // === Simple statements ===
    Expr(ExprId),

    /// A block or a `;`-separated line.
    Suite(Vec<StmtId>),

    /// Comment line, text after `#`.
    Comment(String),

    /// Python 2 `print`. `parenthesized` is set for `print(...)`.
    Print {
        dest: Option<ExprId>,
        args: Vec<Argument>,
        trailing_comma: bool,
        parenthesized: bool,
    },

    /// `exec code [in globals [, locals]]`
    Exec {
        code: ExprId,
        globals: Option<ExprId>,
        locals: Option<ExprId>,
    },

    Del(ExprId),
    Pass,
    Break,
    Continue,
    Return(Option<ExprId>),

    /// `raise [exc [from cause]]`. The legacy `raise E, V, T` form stores
    /// `(V, T)` as the cause.
    Raise {
        exc: Option<ExprId>,
        cause: Option<ExprId>,
    },

    /// `yield` used as a statement; the expression is a `Yield`/`YieldFrom`.
    Yield(ExprId),

    Import(Vec<AliasedName>),

    /// `from [.]*module import names`. `level` counts the leading dots.
    From {
        module: Option<DottedName>,
        level: u32,
        names: ImportNames,
    },

    Global(Vec<String>),
    Nonlocal(Vec<String>),

    Assert { test: ExprId, msg: Option<ExprId> },

    // === Compound statements ===
    /// `orelse` is another `If` for `elif`, a `Suite` for `else`.
    If {
        test: ExprId,
        body: StmtId,
        orelse: Option<StmtId>,
    },

    While {
        test: ExprId,
        body: StmtId,
        orelse: Option<StmtId>,
    },

    For {
        target: ExprId,
        iter: ExprId,
        body: StmtId,
        orelse: Option<StmtId>,
    },

    Try {
        body: StmtId,
        handlers: Vec<ExceptHandler>,
        orelse: Option<StmtId>,
        finalbody: Option<StmtId>,
    },

    With { items: Vec<WithItem>, body: StmtId },

    FunctionDef {
        name: String,
        params: Vec<Param>,
        returns: Option<ExprId>,
        body: StmtId,
        decorators: Vec<Decorator>,
    },

    ClassDef {
        name: String,
        args: Vec<Argument>,
        body: StmtId,
        decorators: Vec<Decorator>,
    },

    /// `async` prefix on a `def`, `for` or `with`.
    Async(StmtId),
}

impl StmtKind {
    /// Attach a decorator run to a `def` or `class`. Returns `false` for
    /// any other statement.
    pub fn set_decorators(&mut self, run: Vec<Decorator>) -> bool {
        match self {
            StmtKind::FunctionDef { decorators, .. } | StmtKind::ClassDef { decorators, .. } => {
                *decorators = run;
                true
            }
            _ => false,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            StmtKind::If { .. }
                | StmtKind::While { .. }
                | StmtKind::For { .. }
                | StmtKind::Try { .. }
                | StmtKind::With { .. }
                | StmtKind::FunctionDef { .. }
                | StmtKind::ClassDef { .. }
                | StmtKind::Async(_)
        )
    }
}
