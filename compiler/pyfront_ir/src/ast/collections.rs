//! Supporting records: call arguments, parameters, subscripts, dict entries,
//! import names, decorators and the pieces of `with`/`try`.

use std::fmt;

use crate::{ExprId, Span, StmtId};

/// One call argument, in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Argument {
    /// `f(x)`
    Positional(ExprId),
    /// `f(name=value)`
    Keyword { name: String, value: ExprId },
    /// `f(*args)`
    Star(ExprId),
    /// `f(**kwargs)`
    DoubleStar(ExprId),
}

impl Argument {
    pub fn value(&self) -> ExprId {
        match self {
            Argument::Positional(value)
            | Argument::Keyword { value, .. }
            | Argument::Star(value)
            | Argument::DoubleStar(value) => *value,
        }
    }
}

/// What a parameter binds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamTarget {
    Name(String),
    /// Python 2 tuple unpacking: `def f((a, b)):`
    Tuple(Vec<Param>),
    /// Bare `*` separating keyword-only parameters.
    Anonymous,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParamKind {
    #[default]
    Normal,
    /// `*args`
    VarArgs,
    /// `**kwargs`
    KwArgs,
}

/// Function or lambda parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub target: ParamTarget,
    pub kind: ParamKind,
    pub annotation: Option<ExprId>,
    pub default: Option<ExprId>,
    pub span: Span,
}

impl Param {
    /// Bound name, if the parameter binds exactly one.
    pub fn name(&self) -> Option<&str> {
        match &self.target {
            ParamTarget::Name(name) => Some(name),
            ParamTarget::Tuple(_) | ParamTarget::Anonymous => None,
        }
    }
}

/// One comma-separated item inside `a[...]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SubscriptItem {
    Index(ExprId),
    /// `lower:upper:step`; `stepped` records a second colon even when the
    /// step itself is omitted (`a[::]`).
    Slice {
        lower: Option<ExprId>,
        upper: Option<ExprId>,
        step: Option<ExprId>,
        stepped: bool,
    },
}

/// `key: value` or `**value` in a dict display.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DictEntry {
    /// `None` for `**mapping` unpacking.
    pub key: Option<ExprId>,
    pub value: ExprId,
}

/// `context [as target]` in a `with` statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WithItem {
    pub context: ExprId,
    pub target: Option<ExprId>,
}

/// `except [type [as name]]: body`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExceptHandler {
    pub type_: Option<ExprId>,
    pub name: Option<String>,
    pub body: StmtId,
    pub span: Span,
}

/// `a.b.c`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DottedName(pub Vec<String>);

impl DottedName {
    pub fn single(name: impl Into<String>) -> Self {
        DottedName(vec![name.into()])
    }
}

impl fmt::Display for DottedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// `name [as alias]` in an import.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AliasedName {
    pub name: DottedName,
    pub alias: Option<String>,
}

impl fmt::Display for AliasedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} as {alias}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Names imported by `from m import ...`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ImportNames {
    /// `from m import *`
    Star,
    List(Vec<AliasedName>),
}

/// `@name.path(args)` line preceding a `def` or `class`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decorator {
    pub name: DottedName,
    /// `None` when the decorator has no parentheses.
    pub args: Option<Vec<Argument>>,
    pub span: Span,
}
