//! Reserved keyword resolution.
//!
//! The table is the union of Python 2 and Python 3 keywords, so `exec` is
//! always a keyword while `print` is not: the parser recognises `print` by
//! its identifier text at statement start.
//!
//! Lookup uses the identifier's length as a first-pass filter (keywords are
//! 2-8 chars), then matches against the keywords of that length.

use pyfront_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-8 chars and start with ASCII alpha
    if !(2..=8).contains(&len) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::KwAs),
            "if" => Some(TokenKind::KwIf),
            "in" => Some(TokenKind::KwIn),
            "is" => Some(TokenKind::KwIs),
            "or" => Some(TokenKind::KwOr),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::KwAnd),
            "def" => Some(TokenKind::KwDef),
            "del" => Some(TokenKind::KwDel),
            "for" => Some(TokenKind::KwFor),
            "not" => Some(TokenKind::KwNot),
            "try" => Some(TokenKind::KwTry),
            _ => None,
        },
        4 => match text {
            "None" => Some(TokenKind::KwNone),
            "True" => Some(TokenKind::KwTrue),
            "elif" => Some(TokenKind::KwElif),
            "else" => Some(TokenKind::KwElse),
            "exec" => Some(TokenKind::KwExec),
            "from" => Some(TokenKind::KwFrom),
            "pass" => Some(TokenKind::KwPass),
            "with" => Some(TokenKind::KwWith),
            _ => None,
        },
        5 => match text {
            "False" => Some(TokenKind::KwFalse),
            "async" => Some(TokenKind::KwAsync),
            "await" => Some(TokenKind::KwAwait),
            "break" => Some(TokenKind::KwBreak),
            "class" => Some(TokenKind::KwClass),
            "raise" => Some(TokenKind::KwRaise),
            "while" => Some(TokenKind::KwWhile),
            "yield" => Some(TokenKind::KwYield),
            _ => None,
        },
        6 => match text {
            "assert" => Some(TokenKind::KwAssert),
            "except" => Some(TokenKind::KwExcept),
            "global" => Some(TokenKind::KwGlobal),
            "import" => Some(TokenKind::KwImport),
            "lambda" => Some(TokenKind::KwLambda),
            "return" => Some(TokenKind::KwReturn),
            _ => None,
        },
        7 => match text {
            "finally" => Some(TokenKind::KwFinally),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::KwContinue),
            "nonlocal" => Some(TokenKind::KwNonlocal),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
