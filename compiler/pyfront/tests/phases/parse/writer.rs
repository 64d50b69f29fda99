//! Driver output: `fmt`, `parse` summaries and `lex` listings.

use pretty_assertions::assert_eq;
use pyfront::commands::{format_source, render_tokens, summarize};
use pyfront::ParseOptions;

const RECOVER: ParseOptions = ParseOptions { recover: true };

#[test]
fn format_source_normalizes_layout() {
    let source = "if x :\n\n    y=1 ;z=[1,2,]   # set\nelif w: pass\n";
    let formatted = format_source("test.py", source, ParseOptions::default()).unwrap();
    assert_eq!(
        formatted.text,
        "if x:\n    y = 1\n    z = [1, 2]  # set\nelif w:\n    pass\n"
    );
    assert!(formatted.recovered.is_empty());
}

#[test]
fn format_source_reports_recovered_errors() {
    let formatted = format_source("mod.py", "a = 1\nb = (]\nc = 3\n", RECOVER).unwrap();
    assert_eq!(formatted.recovered.len(), 1);
    assert_eq!(formatted.recovered[0].filename, "mod.py");
    assert!(formatted.text.starts_with("a = 1\n#<parser-error>\n"));
}

#[test]
fn format_source_fails_without_recovery() {
    let err = format_source("test.py", "def (\n", ParseOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "test.py(1): error: expected identifier, found '('"
    );
}

#[test]
fn summary_lists_nested_definitions() {
    let source = "class C:\n    def m(self, x=1):\n        pass\ndef f(*args):\n    pass\n";
    let summary = summarize("test.py", source, ParseOptions::default()).unwrap();
    assert_eq!(summary.statements, 2);
    assert_eq!(summary.expr_nodes, 1);
    assert_eq!(summary.stmt_nodes, 8);
    assert_eq!(
        summary.render("test.py"),
        "\
Parse result for 'test.py':
  Statements: 2
  Nodes: 1 expressions, 8 statements
  Recovered errors: 0

Definitions:
  class C
    def m(self, x)
  def f(args)
"
    );
}

#[test]
fn summary_includes_recovered_errors() {
    let summary = summarize("test.py", "x = = 1\n", RECOVER).unwrap();
    let rendered = summary.render("test.py");
    assert!(rendered.contains("  Recovered errors: 1\n"));
    assert!(rendered.ends_with(
        "\nErrors:\n  test.py(1): error: expected an expression, found '='\n"
    ));
}

#[test]
fn token_listing() {
    assert_eq!(
        render_tokens("test.py", "x = 1\n").unwrap(),
        "\
Tokens for 'test.py' (5 tokens):
    1  ID(x)
    1  '='
    1  1
    1  NEWLINE
    2  end of file
"
    );
}

#[test]
fn token_listing_stops_at_lexical_error() {
    let err = render_tokens("test.py", "x = 1\ny = 0x\n").unwrap_err();
    assert_eq!(err.line, 2);
}
