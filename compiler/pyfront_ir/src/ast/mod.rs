//! Syntax tree as closed sum types.
//!
//! # Module Structure
//!
//! - `expr`: [`Expr`] and [`ExprKind`]
//! - `stmt`: [`Stmt`] and [`StmtKind`]
//! - `operators`: binary, unary and assignment operators
//! - `collections`: arguments, parameters, subscripts and the other records
//!   that hang off expressions and statements
//!
//! Nodes reference their children by `ExprId`/`StmtId`; the nodes themselves
//! live in the [`Ast`](crate::Ast) arena.

mod collections;
mod expr;
mod operators;
mod stmt;

pub use collections::{
    AliasedName, Argument, Decorator, DictEntry, DottedName, ExceptHandler, ImportNames, Param,
    ParamKind, ParamTarget, SubscriptItem, WithItem,
};
pub use expr::{Expr, ExprKind};
pub use operators::{AssignOp, BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind, PARSER_ERROR_MARKER};
