//! Renders an AST back to Python-like source.
//!
//! The output is meant for inspection and tests, not for byte-exact
//! round trips: binary operations are fully parenthesised, string escapes
//! are written as they were lexed, and every statement gets its own line
//! at four spaces per indentation level.

use std::fmt::Write as _;

use pyfront_stack::ensure_sufficient_stack;

use crate::ast::{
    Argument, Decorator, DictEntry, ExceptHandler, ExprKind, ImportNames, Param, ParamKind,
    ParamTarget, StmtKind, SubscriptItem, WithItem,
};
use crate::visitor::{ExprVisitor, StmtVisitorWithContext};
use crate::{Ast, ExprId, StmtId};

const INDENT: &str = "    ";

/// Render one expression.
pub fn expr_to_string(ast: &Ast, id: ExprId) -> String {
    ast.accept_expr(id, &mut ExprWriter)
}

/// Render one statement (and its nested blocks) at indentation depth 0.
pub fn stmt_to_string(ast: &Ast, id: StmtId) -> String {
    let mut writer = StmtWriter::new();
    ast.accept_stmt_with(id, &mut writer, &mut 0);
    writer.finish()
}

/// Render a sequence of top-level statements.
pub fn module_to_string(ast: &Ast, stmts: &[StmtId]) -> String {
    let mut writer = StmtWriter::new();
    for &stmt in stmts {
        ast.accept_stmt_with(stmt, &mut writer, &mut 0);
    }
    writer.finish()
}

// Expressions

/// Stateless expression renderer.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExprWriter;

impl ExprWriter {
    fn join(&mut self, ast: &Ast, items: &[ExprId]) -> String {
        items
            .iter()
            .map(|&item| self.visit_expr(ast, item))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn opt(&mut self, ast: &Ast, id: Option<ExprId>) -> String {
        id.map(|id| self.visit_expr(ast, id)).unwrap_or_default()
    }

    fn arguments(&mut self, ast: &Ast, args: &[Argument]) -> String {
        args.iter()
            .map(|arg| match arg {
                Argument::Positional(value) => self.visit_expr(ast, *value),
                Argument::Keyword { name, value } => {
                    format!("{name}={}", self.visit_expr(ast, *value))
                }
                Argument::Star(value) => format!("*{}", self.visit_expr(ast, *value)),
                Argument::DoubleStar(value) => format!("**{}", self.visit_expr(ast, *value)),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn params(&mut self, ast: &Ast, params: &[Param]) -> String {
        params
            .iter()
            .map(|param| self.param(ast, param))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn param(&mut self, ast: &Ast, param: &Param) -> String {
        let mut out = String::from(match param.kind {
            ParamKind::Normal => "",
            ParamKind::VarArgs => "*",
            ParamKind::KwArgs => "**",
        });
        match &param.target {
            ParamTarget::Name(name) => out.push_str(name),
            ParamTarget::Tuple(inner) => {
                let _ = write!(out, "({})", self.params(ast, inner));
            }
            ParamTarget::Anonymous => {}
        }
        if let Some(annotation) = param.annotation {
            let _ = write!(out, ": {}", self.visit_expr(ast, annotation));
        }
        if let Some(default) = param.default {
            let sep = if param.annotation.is_some() { " = " } else { "=" };
            let _ = write!(out, "{sep}{}", self.visit_expr(ast, default));
        }
        out
    }

    fn subscript_item(&mut self, ast: &Ast, item: &SubscriptItem) -> String {
        match item {
            SubscriptItem::Index(index) => self.visit_expr(ast, *index),
            SubscriptItem::Slice {
                lower,
                upper,
                step,
                stepped,
            } => {
                let mut out = format!("{}:{}", self.opt(ast, *lower), self.opt(ast, *upper));
                if *stepped || step.is_some() {
                    out.push(':');
                    out.push_str(&self.opt(ast, *step));
                }
                out
            }
        }
    }

    /// ` for x in y if z ...` for one comprehension chain.
    fn comp_chain(&mut self, ast: &Ast, mut link: Option<ExprId>) -> String {
        let mut out = String::new();
        while let Some(id) = link {
            match &ast.expr(id).kind {
                ExprKind::CompFor {
                    is_async,
                    target,
                    iter,
                    next,
                } => {
                    let prefix = if *is_async { " async for " } else { " for " };
                    let _ = write!(
                        out,
                        "{prefix}{} in {}",
                        self.visit_expr(ast, *target),
                        self.visit_expr(ast, *iter)
                    );
                    link = *next;
                }
                ExprKind::CompIf { test, next } => {
                    let _ = write!(out, " if {}", self.visit_expr(ast, *test));
                    link = *next;
                }
                _ => {
                    let _ = write!(out, " {}", self.visit_expr(ast, id));
                    link = None;
                }
            }
        }
        out
    }
}

impl ExprVisitor for ExprWriter {
    type Output = String;

    fn visit_expr(&mut self, ast: &Ast, id: ExprId) -> String {
        ensure_sufficient_stack(|| match &ast.expr(id).kind {
            ExprKind::Name(name) => name.clone(),
            ExprKind::Int { text, .. }
            | ExprKind::Long { text, .. }
            | ExprKind::Big { text, .. }
            | ExprKind::Real { text, .. } => text.clone(),
            ExprKind::Imaginary { text, .. } => format!("{text}j"),
            ExprKind::Str(lit) | ExprKind::Bytes(lit) => lit.to_string(),
            ExprKind::Bool(true) => "True".to_owned(),
            ExprKind::Bool(false) => "False".to_owned(),
            ExprKind::None => "None".to_owned(),
            ExprKind::Ellipsis => "...".to_owned(),
            ExprKind::Binary { op, left, right } => format!(
                "({} {} {})",
                self.visit_expr(ast, *left),
                op.as_symbol(),
                self.visit_expr(ast, *right)
            ),
            ExprKind::Unary { op, operand } => {
                format!("{}{}", op.as_symbol(), self.visit_expr(ast, *operand))
            }
            ExprKind::Conditional { body, test, orelse } => format!(
                "({} if {} else {})",
                self.visit_expr(ast, *body),
                self.visit_expr(ast, *test),
                self.visit_expr(ast, *orelse)
            ),
            ExprKind::Lambda { params, body } => {
                let body = self.visit_expr(ast, *body);
                if params.is_empty() {
                    format!("lambda: {body}")
                } else {
                    format!("lambda {}: {body}", self.params(ast, params))
                }
            }
            ExprKind::Assign {
                target,
                op,
                value,
                annotation,
            } => {
                let mut out = self.visit_expr(ast, *target);
                if let Some(annotation) = annotation {
                    let _ = write!(out, ": {}", self.visit_expr(ast, *annotation));
                }
                if let Some(value) = value {
                    let _ = write!(out, " {} {}", op.as_symbol(), self.visit_expr(ast, *value));
                }
                out
            }
            ExprKind::Walrus { target, value } => format!(
                "({} := {})",
                self.visit_expr(ast, *target),
                self.visit_expr(ast, *value)
            ),
            ExprKind::Call { func, args } => {
                format!(
                    "{}({})",
                    self.visit_expr(ast, *func),
                    self.arguments(ast, args)
                )
            }
            ExprKind::Subscript { value, items } => {
                let items = items
                    .iter()
                    .map(|item| self.subscript_item(ast, item))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}[{items}]", self.visit_expr(ast, *value))
            }
            ExprKind::Attribute { value, attr } => {
                format!("{}.{attr}", self.visit_expr(ast, *value))
            }
            ExprKind::Tuple(items) => match items.as_slice() {
                [single] => format!("({},)", self.visit_expr(ast, *single)),
                _ => format!("({})", self.join(ast, items)),
            },
            ExprKind::ExprList(items) => match items.as_slice() {
                [single] => format!("{},", self.visit_expr(ast, *single)),
                _ => self.join(ast, items),
            },
            ExprKind::List(items) => format!("[{}]", self.join(ast, items)),
            ExprKind::Set(items) => format!("{{{}}}", self.join(ast, items)),
            ExprKind::Dict(entries) => {
                let entries = entries
                    .iter()
                    .map(|DictEntry { key, value }| match key {
                        Some(key) => format!(
                            "{}: {}",
                            self.visit_expr(ast, *key),
                            self.visit_expr(ast, *value)
                        ),
                        None => format!("**{}", self.visit_expr(ast, *value)),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{entries}}}")
            }
            ExprKind::ListComp { element, generator } => format!(
                "[{}{}]",
                self.visit_expr(ast, *element),
                self.comp_chain(ast, Some(*generator))
            ),
            ExprKind::SetComp { element, generator } => format!(
                "{{{}{}}}",
                self.visit_expr(ast, *element),
                self.comp_chain(ast, Some(*generator))
            ),
            ExprKind::DictComp {
                key,
                value,
                generator,
            } => format!(
                "{{{}: {}{}}}",
                self.visit_expr(ast, *key),
                self.visit_expr(ast, *value),
                self.comp_chain(ast, Some(*generator))
            ),
            ExprKind::Generator { element, generator } => format!(
                "({}{})",
                self.visit_expr(ast, *element),
                self.comp_chain(ast, Some(*generator))
            ),
            ExprKind::CompFor { .. } | ExprKind::CompIf { .. } => {
                self.comp_chain(ast, Some(id)).trim_start().to_owned()
            }
            ExprKind::Starred(value) => format!("*{}", self.visit_expr(ast, *value)),
            ExprKind::Yield(None) => "yield".to_owned(),
            ExprKind::Yield(Some(value)) => format!("yield {}", self.visit_expr(ast, *value)),
            ExprKind::YieldFrom(value) => format!("yield from {}", self.visit_expr(ast, *value)),
            ExprKind::Await(value) => format!("await {}", self.visit_expr(ast, *value)),
        })
    }
}

// Statements

/// Statement renderer; the context is the indentation depth.
#[derive(Debug, Default)]
pub struct StmtWriter {
    out: String,
}

impl StmtWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered text.
    pub fn finish(self) -> String {
        self.out
    }

    fn expr(ast: &Ast, id: ExprId) -> String {
        expr_to_string(ast, id)
    }

    fn line(&mut self, depth: usize, text: &str, comment: Option<&str>) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        if let Some(comment) = comment {
            if !text.is_empty() {
                self.out.push_str("  ");
            }
            self.out.push('#');
            self.out.push_str(comment);
        }
        self.out.push('\n');
    }

    /// `header:` followed by the block's statements one level deeper.
    ///
    /// A comment on the block's suite is shown on the header line.
    fn block(&mut self, ast: &Ast, header: &str, body: StmtId, depth: usize) {
        let suite = ast.stmt(body);
        self.line(depth, &format!("{header}:"), suite.comment.as_deref());
        match &suite.kind {
            StmtKind::Suite(stmts) if stmts.is_empty() => self.line(depth + 1, "pass", None),
            StmtKind::Suite(stmts) => {
                for &stmt in stmts {
                    self.visit_stmt_with(ast, stmt, &mut (depth + 1));
                }
            }
            _ => self.visit_stmt_with(ast, body, &mut (depth + 1)),
        }
    }

    fn decorators(&mut self, ast: &Ast, decorators: &[Decorator], depth: usize) {
        for decorator in decorators {
            let text = match &decorator.args {
                Some(args) => format!(
                    "@{}({})",
                    decorator.name,
                    ExprWriter.arguments(ast, args)
                ),
                None => format!("@{}", decorator.name),
            };
            self.line(depth, &text, None);
        }
    }

    fn handler(&mut self, ast: &Ast, handler: &ExceptHandler, depth: usize) {
        let mut header = String::from("except");
        if let Some(type_) = handler.type_ {
            let _ = write!(header, " {}", Self::expr(ast, type_));
            if let Some(name) = &handler.name {
                let _ = write!(header, " as {name}");
            }
        }
        self.block(ast, &header, handler.body, depth);
    }

    /// Render an `else` branch; a nested `If` is written as `elif`.
    fn else_branch(&mut self, ast: &Ast, orelse: StmtId, depth: usize, prefix: &str) {
        ensure_sufficient_stack(|| self.write_else(ast, orelse, depth, prefix));
    }

    fn write_else(&mut self, ast: &Ast, orelse: StmtId, depth: usize, prefix: &str) {
        if let StmtKind::If { test, body, orelse } = &ast.stmt(orelse).kind {
            self.block(ast, &format!("elif {}", Self::expr(ast, *test)), *body, depth);
            if let Some(next) = orelse {
                self.else_branch(ast, *next, depth, prefix);
            }
        } else {
            self.block(ast, prefix, orelse, depth);
        }
    }

    /// Compound statements, with `async ` in `prefix` when wrapped.
    fn compound(&mut self, ast: &Ast, id: StmtId, depth: usize, prefix: &str) {
        match &ast.stmt(id).kind {
            StmtKind::If { test, body, orelse } => {
                self.block(ast, &format!("{prefix}if {}", Self::expr(ast, *test)), *body, depth);
                if let Some(orelse) = orelse {
                    self.else_branch(ast, *orelse, depth, "else");
                }
            }
            StmtKind::While { test, body, orelse } => {
                let header = format!("{prefix}while {}", Self::expr(ast, *test));
                self.block(ast, &header, *body, depth);
                if let Some(orelse) = orelse {
                    self.block(ast, "else", *orelse, depth);
                }
            }
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            } => {
                let header = format!(
                    "{prefix}for {} in {}",
                    Self::expr(ast, *target),
                    Self::expr(ast, *iter)
                );
                self.block(ast, &header, *body, depth);
                if let Some(orelse) = orelse {
                    self.block(ast, "else", *orelse, depth);
                }
            }
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
            } => {
                self.block(ast, &format!("{prefix}try"), *body, depth);
                for handler in handlers {
                    self.handler(ast, handler, depth);
                }
                if let Some(orelse) = orelse {
                    self.block(ast, "else", *orelse, depth);
                }
                if let Some(finalbody) = finalbody {
                    self.block(ast, "finally", *finalbody, depth);
                }
            }
            StmtKind::With { items, body } => {
                let items = items
                    .iter()
                    .map(|WithItem { context, target }| match target {
                        Some(target) => format!(
                            "{} as {}",
                            Self::expr(ast, *context),
                            Self::expr(ast, *target)
                        ),
                        None => Self::expr(ast, *context),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                self.block(ast, &format!("{prefix}with {items}"), *body, depth);
            }
            StmtKind::FunctionDef {
                name,
                params,
                returns,
                body,
                decorators,
            } => {
                self.decorators(ast, decorators, depth);
                let mut header = format!("{prefix}def {name}({})", ExprWriter.params(ast, params));
                if let Some(returns) = returns {
                    let _ = write!(header, " -> {}", Self::expr(ast, *returns));
                }
                self.block(ast, &header, *body, depth);
            }
            StmtKind::ClassDef {
                name,
                args,
                body,
                decorators,
            } => {
                self.decorators(ast, decorators, depth);
                let header = if args.is_empty() {
                    format!("{prefix}class {name}")
                } else {
                    format!("{prefix}class {name}({})", ExprWriter.arguments(ast, args))
                };
                self.block(ast, &header, *body, depth);
            }
            StmtKind::Async(inner) => self.compound(ast, *inner, depth, "async "),
            kind => {
                let text = Self::simple(ast, kind);
                self.line(depth, &text, ast.stmt(id).comment.as_deref());
            }
        }
    }

    fn write_stmt(&mut self, ast: &Ast, id: StmtId, depth: &mut usize) {
        let stmt = ast.stmt(id);
        match &stmt.kind {
            StmtKind::Suite(stmts) => {
                for &child in stmts {
                    self.visit_stmt_with(ast, child, depth);
                }
                if let Some(comment) = &stmt.comment {
                    if self.out.ends_with('\n') && !stmts.is_empty() {
                        self.out.pop();
                        self.out.push_str("  #");
                        self.out.push_str(comment);
                        self.out.push('\n');
                    } else {
                        self.line(*depth, "", Some(comment));
                    }
                }
            }
            StmtKind::Comment(text) => {
                self.line(*depth, "", Some(text));
            }
            kind if kind.is_compound() => self.compound(ast, id, *depth, ""),
            kind => {
                let text = Self::simple(ast, kind);
                self.line(*depth, &text, stmt.comment.as_deref());
            }
        }
    }

    /// Text of a simple statement, without indentation or comment.
    fn simple(ast: &Ast, kind: &StmtKind) -> String {
        match kind {
            StmtKind::Expr(expr) | StmtKind::Yield(expr) => Self::expr(ast, *expr),
            StmtKind::Comment(_) => String::new(),
            StmtKind::Print {
                dest,
                args,
                trailing_comma,
                parenthesized,
            } => {
                let args = ExprWriter.arguments(ast, args);
                if *parenthesized {
                    let comma = if *trailing_comma { "," } else { "" };
                    return format!("print({args}){comma}");
                }
                let mut parts = Vec::new();
                if let Some(dest) = dest {
                    parts.push(format!(">>{}", Self::expr(ast, *dest)));
                }
                if !args.is_empty() {
                    parts.push(args);
                }
                let mut out = String::from("print");
                if !parts.is_empty() {
                    out.push(' ');
                    out.push_str(&parts.join(", "));
                }
                if *trailing_comma {
                    out.push(',');
                }
                out
            }
            StmtKind::Exec {
                code,
                globals,
                locals,
            } => {
                let mut out = format!("exec {}", Self::expr(ast, *code));
                if let Some(globals) = globals {
                    let _ = write!(out, " in {}", Self::expr(ast, *globals));
                    if let Some(locals) = locals {
                        let _ = write!(out, ", {}", Self::expr(ast, *locals));
                    }
                }
                out
            }
            StmtKind::Del(target) => format!("del {}", Self::expr(ast, *target)),
            StmtKind::Pass => "pass".to_owned(),
            StmtKind::Break => "break".to_owned(),
            StmtKind::Continue => "continue".to_owned(),
            StmtKind::Return(None) => "return".to_owned(),
            StmtKind::Return(Some(value)) => format!("return {}", Self::expr(ast, *value)),
            StmtKind::Raise { exc, cause } => {
                let mut out = String::from("raise");
                if let Some(exc) = exc {
                    let _ = write!(out, " {}", Self::expr(ast, *exc));
                }
                if let Some(cause) = cause {
                    let _ = write!(out, " from {}", Self::expr(ast, *cause));
                }
                out
            }
            StmtKind::Import(names) => format!(
                "import {}",
                names
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            StmtKind::From {
                module,
                level,
                names,
            } => {
                let mut out = String::from("from ");
                for _ in 0..*level {
                    out.push('.');
                }
                if let Some(module) = module {
                    let _ = write!(out, "{module}");
                }
                out.push_str(" import ");
                match names {
                    ImportNames::Star => out.push('*'),
                    ImportNames::List(names) => out.push_str(
                        &names
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", "),
                    ),
                }
                out
            }
            StmtKind::Global(names) => format!("global {}", names.join(", ")),
            StmtKind::Nonlocal(names) => format!("nonlocal {}", names.join(", ")),
            StmtKind::Assert { test, msg } => match msg {
                Some(msg) => format!(
                    "assert {}, {}",
                    Self::expr(ast, *test),
                    Self::expr(ast, *msg)
                ),
                None => format!("assert {}", Self::expr(ast, *test)),
            },
            StmtKind::Suite(_)
            | StmtKind::If { .. }
            | StmtKind::While { .. }
            | StmtKind::For { .. }
            | StmtKind::Try { .. }
            | StmtKind::With { .. }
            | StmtKind::FunctionDef { .. }
            | StmtKind::ClassDef { .. }
            | StmtKind::Async(_) => String::new(),
        }
    }
}

impl StmtVisitorWithContext<usize> for StmtWriter {
    type Output = ();

    fn visit_stmt_with(&mut self, ast: &Ast, id: StmtId, depth: &mut usize) {
        ensure_sufficient_stack(|| self.write_stmt(ast, id, depth));
    }
}
