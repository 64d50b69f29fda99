//! Token kinds.

use std::fmt;

/// Kind of a lexed token.
///
/// Fieldless so it stays `Copy` and fits the parser's `u128` token sets.
/// Payloads (identifier text, literal values) live on [`Token`](super::Token).
///
/// | Range | Category          |
/// |-------|-------------------|
/// | 0-10  | Literals, layout  |
/// | 11-46 | Keywords          |
/// | 47-67 | Operators         |
/// | 68-80 | Delimiters        |
/// | 81-93 | Augmented assign  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Literals and layout ===
    Ident = 0,
    Integer,
    LongInteger,
    Real,
    Imaginary,
    String,
    Comment,
    Newline,
    Indent,
    Dedent,
    Eof,

    // === Keywords ===
    KwFalse,
    KwNone,
    KwTrue,
    KwAnd,
    KwAs,
    KwAssert,
    KwAsync,
    KwAwait,
    KwBreak,
    KwClass,
    KwContinue,
    KwDef,
    KwDel,
    KwElif,
    KwElse,
    KwExcept,
    KwExec,
    KwFinally,
    KwFor,
    KwFrom,
    KwGlobal,
    KwIf,
    KwImport,
    KwIn,
    KwIs,
    KwLambda,
    KwNonlocal,
    KwNot,
    KwOr,
    KwPass,
    KwRaise,
    KwReturn,
    KwTry,
    KwWhile,
    KwWith,
    KwYield,

    // === Operators ===
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,
    At,
    Shl,
    Shr,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    Arrow,

    // === Delimiters ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Dot,
    Semi,
    Eq,
    Ellipsis,
    ColonEq,

    // === Augmented assignment ===
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    SlashSlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    StarStarEq,
    AtEq,
}

impl TokenKind {
    /// Highest discriminant; token sets rely on this staying below 128.
    pub const MAX_DISCRIMINANT: u8 = TokenKind::AtEq as u8;

    /// Bit index used by the parser's token sets.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// True for keyword kinds.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let idx = self as u8;
        idx >= TokenKind::KwFalse as u8 && idx <= TokenKind::KwYield as u8
    }

    /// True for the augmented assignment operators (`+=`, `//=`, ...).
    #[inline]
    pub const fn is_augmented_assign(self) -> bool {
        self as u8 >= TokenKind::PlusEq as u8
    }

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::LongInteger => "long integer",
            TokenKind::Real => "real number",
            TokenKind::Imaginary => "imaginary number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Eof => "end of file",
            TokenKind::KwFalse => "'False'",
            TokenKind::KwNone => "'None'",
            TokenKind::KwTrue => "'True'",
            TokenKind::KwAnd => "'and'",
            TokenKind::KwAs => "'as'",
            TokenKind::KwAssert => "'assert'",
            TokenKind::KwAsync => "'async'",
            TokenKind::KwAwait => "'await'",
            TokenKind::KwBreak => "'break'",
            TokenKind::KwClass => "'class'",
            TokenKind::KwContinue => "'continue'",
            TokenKind::KwDef => "'def'",
            TokenKind::KwDel => "'del'",
            TokenKind::KwElif => "'elif'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwExcept => "'except'",
            TokenKind::KwExec => "'exec'",
            TokenKind::KwFinally => "'finally'",
            TokenKind::KwFor => "'for'",
            TokenKind::KwFrom => "'from'",
            TokenKind::KwGlobal => "'global'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwImport => "'import'",
            TokenKind::KwIn => "'in'",
            TokenKind::KwIs => "'is'",
            TokenKind::KwLambda => "'lambda'",
            TokenKind::KwNonlocal => "'nonlocal'",
            TokenKind::KwNot => "'not'",
            TokenKind::KwOr => "'or'",
            TokenKind::KwPass => "'pass'",
            TokenKind::KwRaise => "'raise'",
            TokenKind::KwReturn => "'return'",
            TokenKind::KwTry => "'try'",
            TokenKind::KwWhile => "'while'",
            TokenKind::KwWith => "'with'",
            TokenKind::KwYield => "'yield'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::StarStar => "'**'",
            TokenKind::Slash => "'/'",
            TokenKind::SlashSlash => "'//'",
            TokenKind::Percent => "'%'",
            TokenKind::At => "'@'",
            TokenKind::Shl => "'<<'",
            TokenKind::Shr => "'>>'",
            TokenKind::Amp => "'&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Caret => "'^'",
            TokenKind::Tilde => "'~'",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Arrow => "'->'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::Semi => "';'",
            TokenKind::Eq => "'='",
            TokenKind::Ellipsis => "'...'",
            TokenKind::ColonEq => "':='",
            TokenKind::PlusEq => "'+='",
            TokenKind::MinusEq => "'-='",
            TokenKind::StarEq => "'*='",
            TokenKind::SlashEq => "'/='",
            TokenKind::SlashSlashEq => "'//='",
            TokenKind::PercentEq => "'%='",
            TokenKind::AmpEq => "'&='",
            TokenKind::PipeEq => "'|='",
            TokenKind::CaretEq => "'^='",
            TokenKind::ShlEq => "'<<='",
            TokenKind::ShrEq => "'>>='",
            TokenKind::StarStarEq => "'**='",
            TokenKind::AtEq => "'@='",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT < 128,
    "parser token sets use a u128 bitset"
);
