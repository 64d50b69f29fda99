use super::lookup;
use pyfront_ir::TokenKind;

#[test]
fn test_every_keyword_resolves() {
    let all = [
        ("False", TokenKind::KwFalse),
        ("None", TokenKind::KwNone),
        ("True", TokenKind::KwTrue),
        ("and", TokenKind::KwAnd),
        ("as", TokenKind::KwAs),
        ("assert", TokenKind::KwAssert),
        ("async", TokenKind::KwAsync),
        ("await", TokenKind::KwAwait),
        ("break", TokenKind::KwBreak),
        ("class", TokenKind::KwClass),
        ("continue", TokenKind::KwContinue),
        ("def", TokenKind::KwDef),
        ("del", TokenKind::KwDel),
        ("elif", TokenKind::KwElif),
        ("else", TokenKind::KwElse),
        ("except", TokenKind::KwExcept),
        ("exec", TokenKind::KwExec),
        ("finally", TokenKind::KwFinally),
        ("for", TokenKind::KwFor),
        ("from", TokenKind::KwFrom),
        ("global", TokenKind::KwGlobal),
        ("if", TokenKind::KwIf),
        ("import", TokenKind::KwImport),
        ("in", TokenKind::KwIn),
        ("is", TokenKind::KwIs),
        ("lambda", TokenKind::KwLambda),
        ("nonlocal", TokenKind::KwNonlocal),
        ("not", TokenKind::KwNot),
        ("or", TokenKind::KwOr),
        ("pass", TokenKind::KwPass),
        ("raise", TokenKind::KwRaise),
        ("return", TokenKind::KwReturn),
        ("try", TokenKind::KwTry),
        ("while", TokenKind::KwWhile),
        ("with", TokenKind::KwWith),
        ("yield", TokenKind::KwYield),
    ];
    for (text, kind) in all {
        assert_eq!(lookup(text), Some(kind), "keyword {text}");
        assert!(kind.is_keyword());
    }
}

#[test]
fn test_identifiers_are_not_keywords() {
    for text in ["print", "self", "x", "none", "TRUE", "_if", "classes", "", "nonlocals"] {
        assert_eq!(lookup(text), None, "identifier {text}");
    }
}
