//! Error recovery through the public API.

use pretty_assertions::assert_eq;
use pyfront::{LexErrorKind, ParseErrorKind, ParseOptions, Parser};

use crate::common::{parse_err, recover};

#[test]
fn each_bad_statement_becomes_a_marker() {
    let source = "\
import os
x = 1 +
def ok():
    return 1
y = = 2
class C:
    pass
";
    let (text, errors) = recover(source);
    assert_eq!(
        text,
        "import os\n#<parser-error>\ndef ok():\n    return 1\n#<parser-error>\nclass C:\n    pass\n"
    );
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "test.py(2): error: expected an expression, found NEWLINE",
            "test.py(5): error: expected an expression, found '='",
        ]
    );
}

#[test]
fn error_inside_a_block_skips_to_next_definition() {
    let (text, errors) = recover("def f():\n    x = = 1\n    y = 2\ndef g():\n    pass\n");
    assert_eq!(text, "#<parser-error>\ndef g():\n    pass\n");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 2);
}

#[test]
fn clean_source_logs_nothing() {
    let (text, errors) = recover("x = 1\n");
    assert_eq!(text, "x = 1\n");
    assert!(errors.is_empty());
}

#[test]
fn without_recovery_the_first_error_ends_the_parse() {
    let err = parse_err("x = 1\ny = ]\nz = 3\n");
    assert_eq!(err.line, 2);
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression { found: "']'".into() }
    );
}

#[test]
fn lexical_errors_end_a_recovering_parse() {
    let mut parser = Parser::with_options(
        "test.py",
        "x = 1 +\ny = 'abc\n",
        ParseOptions { recover: true },
    );
    let err = parser.parse_module().map(|_| ()).unwrap_err();
    assert!(err.is_lexical());
    assert_eq!(err.kind, ParseErrorKind::Lexical(LexErrorKind::UnterminatedString));
    assert_eq!(err.to_string(), "test.py(2): error: unterminated string literal");
}
