//! Comment filter tests: where dedents land around comment-only lines.

use pretty_assertions::assert_eq;
use pyfront_ir::TokenKind::*;

use crate::common::{format, token_kinds};

#[test]
fn outer_comment_leads_the_next_statement() {
    assert_eq!(
        token_kinds("def f():\n    pass\n# about g\ndef g():\n    pass\n"),
        vec![
            KwDef, Ident, LParen, RParen, Colon, Newline, Indent, KwPass, Newline, Dedent,
            Comment, Newline, KwDef, Ident, LParen, RParen, Colon, Newline, Indent, KwPass,
            Newline, Dedent, Eof
        ]
    );
}

#[test]
fn inner_comment_stays_in_block() {
    assert_eq!(
        token_kinds("if a:\n    b\n    # still inside\nc\n"),
        vec![
            KwIf, Ident, Colon, Newline, Indent, Ident, Newline, Comment, Newline, Dedent, Ident,
            Newline, Eof
        ]
    );
}

#[test]
fn comment_placement_survives_formatting() {
    let source = "class A:\n    def f(self):\n        pass\n    # between methods\n    def g(self):\n        pass\n# after class\nx = 1\n";
    assert_eq!(format(source), source);
}

#[test]
fn comment_at_end_of_file() {
    assert_eq!(format("if a:\n    b\n# trailing\n"), "if a:\n    b\n# trailing\n");
}
