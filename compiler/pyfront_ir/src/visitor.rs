//! AST visitors.
//!
//! # Design
//!
//! Two families of traits sit on top of the [`Ast`] arena:
//!
//! - [`Visitor`] walks a whole subtree. Default `visit_*` methods call the
//!   `walk_*` free functions; override a method to act on a node and call
//!   the matching `walk_*` to keep descending. The walkers grow the stack
//!   on demand, so arbitrarily deep trees are safe to visit.
//! - The dispatch traits ([`ExprVisitor`], [`StmtVisitor`] and their
//!   `WithContext` variants) visit one node and return a value. Consumers
//!   match exhaustively on [`ExprKind`]/[`StmtKind`], so adding a variant is
//!   a compile error in every backend that forgot it.
//!
//! # Example
//!
//! ```text
//! struct CountNames {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountNames {
//!     fn visit_expr(&mut self, id: ExprId, ast: &'ast Ast) {
//!         if let ExprKind::Name(_) = ast.expr(id).kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, id, ast);
//!     }
//! }
//! ```

use crate::ast::{
    Argument, Decorator, DictEntry, ExprKind, Param, ParamTarget, StmtKind, SubscriptItem,
};
use crate::{Ast, ExprId, StmtId};
use pyfront_stack::ensure_sufficient_stack;

// Walking visitor

/// Subtree walker.
///
/// The AST stays immutable; the visitor may mutate its own state.
pub trait Visitor<'ast> {
    fn visit_stmt(&mut self, id: StmtId, ast: &'ast Ast) {
        walk_stmt(self, id, ast);
    }

    fn visit_expr(&mut self, id: ExprId, ast: &'ast Ast) {
        walk_expr(self, id, ast);
    }

    fn visit_param(&mut self, param: &'ast Param, ast: &'ast Ast) {
        walk_param(self, param, ast);
    }

    fn visit_argument(&mut self, arg: &'ast Argument, ast: &'ast Ast) {
        self.visit_expr(arg.value(), ast);
    }

    fn visit_decorator(&mut self, decorator: &'ast Decorator, ast: &'ast Ast) {
        walk_decorator(self, decorator, ast);
    }
}

fn visit_opt_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: Option<ExprId>,
    ast: &'ast Ast,
) {
    if let Some(id) = id {
        visitor.visit_expr(id, ast);
    }
}

fn visit_opt_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: Option<StmtId>,
    ast: &'ast Ast,
) {
    if let Some(id) = id {
        visitor.visit_stmt(id, ast);
    }
}

/// Visit every child of a statement, in source order.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, id: StmtId, ast: &'ast Ast) {
    ensure_sufficient_stack(|| stmt_children(visitor, id, ast));
}

fn stmt_children<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, id: StmtId, ast: &'ast Ast) {
    match &ast.stmt(id).kind {
        StmtKind::Expr(expr) | StmtKind::Del(expr) | StmtKind::Yield(expr) => {
            visitor.visit_expr(*expr, ast);
        }
        StmtKind::Suite(stmts) => {
            for stmt in stmts {
                visitor.visit_stmt(*stmt, ast);
            }
        }
        StmtKind::Comment(_)
        | StmtKind::Pass
        | StmtKind::Break
        | StmtKind::Continue
        | StmtKind::Import(_)
        | StmtKind::From { .. }
        | StmtKind::Global(_)
        | StmtKind::Nonlocal(_) => {}
        StmtKind::Print { dest, args, .. } => {
            visit_opt_expr(visitor, *dest, ast);
            for arg in args {
                visitor.visit_argument(arg, ast);
            }
        }
        StmtKind::Exec {
            code,
            globals,
            locals,
        } => {
            visitor.visit_expr(*code, ast);
            visit_opt_expr(visitor, *globals, ast);
            visit_opt_expr(visitor, *locals, ast);
        }
        StmtKind::Return(value) => visit_opt_expr(visitor, *value, ast),
        StmtKind::Raise { exc, cause } => {
            visit_opt_expr(visitor, *exc, ast);
            visit_opt_expr(visitor, *cause, ast);
        }
        StmtKind::Assert { test, msg } => {
            visitor.visit_expr(*test, ast);
            visit_opt_expr(visitor, *msg, ast);
        }
        StmtKind::If { test, body, orelse } | StmtKind::While { test, body, orelse } => {
            visitor.visit_expr(*test, ast);
            visitor.visit_stmt(*body, ast);
            visit_opt_stmt(visitor, *orelse, ast);
        }
        StmtKind::For {
            target,
            iter,
            body,
            orelse,
        } => {
            visitor.visit_expr(*target, ast);
            visitor.visit_expr(*iter, ast);
            visitor.visit_stmt(*body, ast);
            visit_opt_stmt(visitor, *orelse, ast);
        }
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
        } => {
            visitor.visit_stmt(*body, ast);
            for handler in handlers {
                visit_opt_expr(visitor, handler.type_, ast);
                visitor.visit_stmt(handler.body, ast);
            }
            visit_opt_stmt(visitor, *orelse, ast);
            visit_opt_stmt(visitor, *finalbody, ast);
        }
        StmtKind::With { items, body } => {
            for item in items {
                visitor.visit_expr(item.context, ast);
                visit_opt_expr(visitor, item.target, ast);
            }
            visitor.visit_stmt(*body, ast);
        }
        StmtKind::FunctionDef {
            params,
            returns,
            body,
            decorators,
            ..
        } => {
            for decorator in decorators {
                visitor.visit_decorator(decorator, ast);
            }
            for param in params {
                visitor.visit_param(param, ast);
            }
            visit_opt_expr(visitor, *returns, ast);
            visitor.visit_stmt(*body, ast);
        }
        StmtKind::ClassDef {
            args,
            body,
            decorators,
            ..
        } => {
            for decorator in decorators {
                visitor.visit_decorator(decorator, ast);
            }
            for arg in args {
                visitor.visit_argument(arg, ast);
            }
            visitor.visit_stmt(*body, ast);
        }
        StmtKind::Async(inner) => visitor.visit_stmt(*inner, ast),
    }
}

/// Visit every child of an expression, in source order.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, id: ExprId, ast: &'ast Ast) {
    ensure_sufficient_stack(|| expr_children(visitor, id, ast));
}

fn expr_children<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, id: ExprId, ast: &'ast Ast) {
    match &ast.expr(id).kind {
        ExprKind::Name(_)
        | ExprKind::Int { .. }
        | ExprKind::Long { .. }
        | ExprKind::Big { .. }
        | ExprKind::Real { .. }
        | ExprKind::Imaginary { .. }
        | ExprKind::Str(_)
        | ExprKind::Bytes(_)
        | ExprKind::Bool(_)
        | ExprKind::None
        | ExprKind::Ellipsis => {}
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(*left, ast);
            visitor.visit_expr(*right, ast);
        }
        ExprKind::Unary { operand, .. } => visitor.visit_expr(*operand, ast),
        ExprKind::Conditional { body, test, orelse } => {
            visitor.visit_expr(*body, ast);
            visitor.visit_expr(*test, ast);
            visitor.visit_expr(*orelse, ast);
        }
        ExprKind::Lambda { params, body } => {
            for param in params {
                visitor.visit_param(param, ast);
            }
            visitor.visit_expr(*body, ast);
        }
        ExprKind::Assign {
            target,
            value,
            annotation,
            ..
        } => {
            visitor.visit_expr(*target, ast);
            visit_opt_expr(visitor, *annotation, ast);
            visit_opt_expr(visitor, *value, ast);
        }
        ExprKind::Walrus { target, value } => {
            visitor.visit_expr(*target, ast);
            visitor.visit_expr(*value, ast);
        }
        ExprKind::Call { func, args } => {
            visitor.visit_expr(*func, ast);
            for arg in args {
                visitor.visit_argument(arg, ast);
            }
        }
        ExprKind::Subscript { value, items } => {
            visitor.visit_expr(*value, ast);
            for item in items {
                match item {
                    SubscriptItem::Index(index) => visitor.visit_expr(*index, ast),
                    SubscriptItem::Slice {
                        lower, upper, step, ..
                    } => {
                        visit_opt_expr(visitor, *lower, ast);
                        visit_opt_expr(visitor, *upper, ast);
                        visit_opt_expr(visitor, *step, ast);
                    }
                }
            }
        }
        ExprKind::Attribute { value, .. } => visitor.visit_expr(*value, ast),
        ExprKind::Tuple(items)
        | ExprKind::ExprList(items)
        | ExprKind::List(items)
        | ExprKind::Set(items) => {
            for item in items {
                visitor.visit_expr(*item, ast);
            }
        }
        ExprKind::Dict(entries) => {
            for DictEntry { key, value } in entries {
                visit_opt_expr(visitor, *key, ast);
                visitor.visit_expr(*value, ast);
            }
        }
        ExprKind::ListComp { element, generator }
        | ExprKind::SetComp { element, generator }
        | ExprKind::Generator { element, generator } => {
            visitor.visit_expr(*element, ast);
            visitor.visit_expr(*generator, ast);
        }
        ExprKind::DictComp {
            key,
            value,
            generator,
        } => {
            visitor.visit_expr(*key, ast);
            visitor.visit_expr(*value, ast);
            visitor.visit_expr(*generator, ast);
        }
        ExprKind::CompFor {
            target, iter, next, ..
        } => {
            visitor.visit_expr(*target, ast);
            visitor.visit_expr(*iter, ast);
            visit_opt_expr(visitor, *next, ast);
        }
        ExprKind::CompIf { test, next } => {
            visitor.visit_expr(*test, ast);
            visit_opt_expr(visitor, *next, ast);
        }
        ExprKind::Starred(value) | ExprKind::YieldFrom(value) | ExprKind::Await(value) => {
            visitor.visit_expr(*value, ast);
        }
        ExprKind::Yield(value) => visit_opt_expr(visitor, *value, ast),
    }
}

/// Visit a parameter's annotation, default and nested tuple targets.
pub fn walk_param<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    param: &'ast Param,
    ast: &'ast Ast,
) {
    if let ParamTarget::Tuple(inner) = &param.target {
        for nested in inner {
            visitor.visit_param(nested, ast);
        }
    }
    visit_opt_expr(visitor, param.annotation, ast);
    visit_opt_expr(visitor, param.default, ast);
}

pub fn walk_decorator<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    decorator: &'ast Decorator,
    ast: &'ast Ast,
) {
    for arg in decorator.args.iter().flatten() {
        visitor.visit_argument(arg, ast);
    }
}

// Dispatch visitors

/// Visits one expression and produces a value.
pub trait ExprVisitor {
    type Output;

    fn visit_expr(&mut self, ast: &Ast, id: ExprId) -> Self::Output;
}

/// Visits one statement and produces a value.
pub trait StmtVisitor {
    type Output;

    fn visit_stmt(&mut self, ast: &Ast, id: StmtId) -> Self::Output;
}

/// [`ExprVisitor`] threading a caller-owned context.
pub trait ExprVisitorWithContext<C> {
    type Output;

    fn visit_expr_with(&mut self, ast: &Ast, id: ExprId, ctx: &mut C) -> Self::Output;
}

/// [`StmtVisitor`] threading a caller-owned context.
pub trait StmtVisitorWithContext<C> {
    type Output;

    fn visit_stmt_with(&mut self, ast: &Ast, id: StmtId, ctx: &mut C) -> Self::Output;
}

impl Ast {
    pub fn accept_expr<V: ExprVisitor>(&self, id: ExprId, visitor: &mut V) -> V::Output {
        visitor.visit_expr(self, id)
    }

    pub fn accept_stmt<V: StmtVisitor>(&self, id: StmtId, visitor: &mut V) -> V::Output {
        visitor.visit_stmt(self, id)
    }

    pub fn accept_expr_with<C, V: ExprVisitorWithContext<C>>(
        &self,
        id: ExprId,
        visitor: &mut V,
        ctx: &mut C,
    ) -> V::Output {
        visitor.visit_expr_with(self, id, ctx)
    }

    pub fn accept_stmt_with<C, V: StmtVisitorWithContext<C>>(
        &self,
        id: StmtId,
        visitor: &mut V,
        ctx: &mut C,
    ) -> V::Output {
        visitor.visit_stmt_with(self, id, ctx)
    }
}
