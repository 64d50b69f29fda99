//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write as _;

use pyfront_ir::visitor::{walk_stmt, Visitor};
use pyfront_ir::{Ast, StmtId, StmtKind, TokenKind};
use pyfront_lexer::{CommentFilter, LexError, Lexer, TokenSource};
use pyfront_parse::{CollectingLogger, ParseError, ParseOptions, Parser};

use super::read_file;

/// The token stream the parser sees, one token per line with its line
/// number.
pub fn render_tokens(filename: &str, source: &str) -> Result<String, LexError> {
    let mut tokens = CommentFilter::new(Lexer::new(filename, source));
    let mut lines = Vec::new();
    loop {
        let token = tokens.get()?;
        let done = token.kind == TokenKind::Eof;
        lines.push(format!("{:>5}  {token}", token.line));
        if done {
            break;
        }
    }
    let mut out = format!("Tokens for '{filename}' ({} tokens):\n", lines.len());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Lex a file and print the filtered token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match render_tokens(path, &content) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Counts and definitions collected from one parse.
#[derive(Debug, Default)]
pub struct Summary {
    pub statements: usize,
    pub expr_nodes: usize,
    pub stmt_nodes: usize,
    /// `def name(params)` and `class name` headers, nested ones indented.
    pub definitions: Vec<String>,
    /// Errors recovered from; empty unless recovery was enabled.
    pub recovered: Vec<ParseError>,
}

impl Summary {
    pub fn render(&self, filename: &str) -> String {
        let mut out = format!("Parse result for '{filename}':\n");
        let _ = writeln!(out, "  Statements: {}", self.statements);
        let _ = writeln!(
            out,
            "  Nodes: {} expressions, {} statements",
            self.expr_nodes, self.stmt_nodes
        );
        let _ = writeln!(out, "  Recovered errors: {}", self.recovered.len());
        if !self.definitions.is_empty() {
            out.push_str("\nDefinitions:\n");
            for def in &self.definitions {
                let _ = writeln!(out, "  {def}");
            }
        }
        if !self.recovered.is_empty() {
            out.push_str("\nErrors:\n");
            for err in &self.recovered {
                let _ = writeln!(out, "  {err}");
            }
        }
        out
    }
}

/// Collects `def`/`class` headers with their nesting depth.
#[derive(Default)]
struct Definitions {
    depth: usize,
    found: Vec<String>,
}

impl<'ast> Visitor<'ast> for Definitions {
    fn visit_stmt(&mut self, id: StmtId, ast: &'ast Ast) {
        let header = match &ast.stmt(id).kind {
            StmtKind::FunctionDef { name, params, .. } => {
                let names: Vec<_> = params.iter().filter_map(|p| p.name()).collect();
                Some(format!("def {name}({})", names.join(", ")))
            }
            StmtKind::ClassDef { name, .. } => Some(format!("class {name}")),
            _ => None,
        };
        let Some(header) = header else {
            walk_stmt(self, id, ast);
            return;
        };
        self.found.push(format!("{}{header}", "  ".repeat(self.depth)));
        self.depth += 1;
        walk_stmt(self, id, ast);
        self.depth -= 1;
    }
}

/// Parse `source` and summarize the result.
pub fn summarize(
    filename: &str,
    source: &str,
    options: ParseOptions,
) -> Result<Summary, ParseError> {
    let mut parser =
        Parser::with_options(filename, source, options).with_logger(CollectingLogger::new());
    let stmts = parser.parse_module()?;

    let ast = parser.ast();
    let mut definitions = Definitions::default();
    for &stmt in &stmts {
        definitions.visit_stmt(stmt, ast);
    }
    Ok(Summary {
        statements: stmts.len(),
        expr_nodes: ast.expr_count(),
        stmt_nodes: ast.stmt_count(),
        definitions: definitions.found,
        recovered: parser.logger().errors().to_vec(),
    })
}

/// Parse a file and print a summary of the tree.
pub fn parse_file(path: &str, options: ParseOptions) {
    let content = read_file(path);
    match summarize(path, &content, options) {
        Ok(summary) => print!("{}", summary.render(path)),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
