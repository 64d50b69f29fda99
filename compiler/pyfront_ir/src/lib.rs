//! pyfront IR - tokens and syntax tree for the Python front end
//!
//! This crate holds the data shared by every stage of the pipeline:
//! - Spans for source locations
//! - Tokens produced by the lexer and consumed by the parser
//! - AST sum types for expressions and statements
//! - The [`Ast`] arena with its parent side table
//! - Visitor traits and a source writer
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)`
//!   and `StmtId(u32)` indices
//! - **Closed Sum Types**: consumers match exhaustively on
//!   [`ExprKind`]/[`StmtKind`]
//! - **Parents on the Side**: back-references live in a table filled after
//!   parsing, never in the nodes
//!
//! Types that contain floats store them as u64 bits for `Eq`/`Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod span;
pub mod token;
pub mod visitor;
pub mod writer;

pub use arena::Ast;
pub use ast::{
    AliasedName, Argument, AssignOp, BinaryOp, Decorator, DictEntry, DottedName, ExceptHandler,
    Expr, ExprKind, ImportNames, Param, ParamKind, ParamTarget, Stmt, StmtKind, SubscriptItem,
    UnaryOp, WithItem, PARSER_ERROR_MARKER,
};
pub use expr_id::{ExprId, NodeId, StmtId};
pub use span::Span;
pub use token::{NumericValue, StrFlags, StrLiteral, Token, TokenKind, TokenValue};
pub use visitor::{
    ExprVisitor, ExprVisitorWithContext, StmtVisitor, StmtVisitorWithContext, Visitor,
};
pub use writer::{expr_to_string, module_to_string, stmt_to_string};
