//! Expression nodes.
//!
//! Children are `ExprId` indices into the [`Ast`](crate::Ast) arena. Floats
//! are stored as `u64` bits so every kind stays `Eq` and `Hash`.

use std::fmt;

use num_bigint::BigInt;

use super::collections::{Argument, DictEntry, Param, SubscriptItem};
use super::operators::{AssignOp, BinaryOp, UnaryOp};
use crate::token::StrLiteral;
use crate::{ExprId, Span};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    // === Atoms ===
    /// Identifier reference.
    Name(String),

    /// Integer literal that fits `i32`. `text` is the source spelling.
    Int { text: String, value: i32 },

    /// Integer literal in the `i64` tier, or any `L`-suffixed literal.
    Long { text: String, value: i64 },

    /// Integer literal wider than `i64`.
    Big { text: String, value: BigInt },

    /// Floating literal, value stored as bits.
    Real { text: String, bits: u64 },

    /// `1.5j`: `text` and `bits` describe the magnitude.
    Imaginary { text: String, bits: u64 },

    /// One or more adjacent string literals, concatenated.
    Str(StrLiteral),

    /// One or more adjacent bytes literals, concatenated.
    Bytes(StrLiteral),

    Bool(bool),
    None,
    Ellipsis,

    // === Operators ===
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    Unary { op: UnaryOp, operand: ExprId },

    /// `body if test else orelse`
    Conditional {
        body: ExprId,
        test: ExprId,
        orelse: ExprId,
    },

    Lambda { params: Vec<Param>, body: ExprId },

    /// Plain (`a = b`), augmented (`a += b`) or annotated (`a: T = b`)
    /// assignment. `value` is absent for a bare annotation `a: T`.
    Assign {
        target: ExprId,
        op: AssignOp,
        value: Option<ExprId>,
        annotation: Option<ExprId>,
    },

    /// `name := value`
    Walrus { target: ExprId, value: ExprId },

    // === Trailers ===
    Call { func: ExprId, args: Vec<Argument> },

    Subscript {
        value: ExprId,
        items: Vec<SubscriptItem>,
    },

    Attribute { value: ExprId, attr: String },

    // === Displays ===
    /// Parenthesised tuple `(a, b)`.
    Tuple(Vec<ExprId>),

    /// Bare comma-separated list `a, b` (assignment targets, `return a, b`).
    ExprList(Vec<ExprId>),

    List(Vec<ExprId>),
    Set(Vec<ExprId>),
    Dict(Vec<DictEntry>),

    // === Comprehensions ===
    /// `[element for ...]`; `generator` is the head of a `CompFor` chain.
    ListComp { element: ExprId, generator: ExprId },

    SetComp { element: ExprId, generator: ExprId },

    DictComp {
        key: ExprId,
        value: ExprId,
        generator: ExprId,
    },

    /// `(element for ...)`, also a bare generator argument `f(x for x in y)`.
    Generator { element: ExprId, generator: ExprId },

    /// `[async] for target in iter`, followed by the rest of the chain.
    CompFor {
        is_async: bool,
        target: ExprId,
        iter: ExprId,
        next: Option<ExprId>,
    },

    /// `if test`, followed by the rest of the chain.
    CompIf { test: ExprId, next: Option<ExprId> },

    // === Other ===
    /// `*value` in a display or assignment target.
    Starred(ExprId),

    Yield(Option<ExprId>),
    YieldFrom(ExprId),
    Await(ExprId),
}
