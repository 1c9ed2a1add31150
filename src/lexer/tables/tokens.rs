// src/lexer/tables/tokens.rs

/// Lexical categories of the Jack grammar, plus the two kinds the engine
/// owns: `White` (delimiter, never emitted) and `BadToken` (synthesized for
/// unrecognized spans).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TokenKind {
    // comment markers (recognized, suppressed, never emitted)
    CommentEol,
    CommentBlkStart,
    CommentBlkEnd,

    // keywords
    KwConst,
    KwType,
    KwVardec,
    KwSubdec,
    KwVar,
    KwVoid,
    KwClass,
    KwLet,
    KwIf,
    KwElse,
    KwWhile,
    KwDo,
    KwReturn,

    // symbols
    SyLparen,
    SyRparen,
    SyLbracket,
    SyRbracket,
    SyLbrace,
    SyRbrace,
    SySemi,
    SyPeriod,
    SyComma,
    SyEq,
    SyMinus,
    SyNot,
    SyOp,

    // identifiers / literals
    Ident,
    Integer,
    Str,

    // engine-owned kinds
    White,
    BadToken,
}

pub const ALL_KINDS: &[TokenKind] = &[
    TokenKind::CommentEol,
    TokenKind::CommentBlkStart,
    TokenKind::CommentBlkEnd,
    TokenKind::KwConst,
    TokenKind::KwType,
    TokenKind::KwVardec,
    TokenKind::KwSubdec,
    TokenKind::KwVar,
    TokenKind::KwVoid,
    TokenKind::KwClass,
    TokenKind::KwLet,
    TokenKind::KwIf,
    TokenKind::KwElse,
    TokenKind::KwWhile,
    TokenKind::KwDo,
    TokenKind::KwReturn,
    TokenKind::SyLparen,
    TokenKind::SyRparen,
    TokenKind::SyLbracket,
    TokenKind::SyRbracket,
    TokenKind::SyLbrace,
    TokenKind::SyRbrace,
    TokenKind::SySemi,
    TokenKind::SyPeriod,
    TokenKind::SyComma,
    TokenKind::SyEq,
    TokenKind::SyMinus,
    TokenKind::SyNot,
    TokenKind::SyOp,
    TokenKind::Ident,
    TokenKind::Integer,
    TokenKind::Str,
    TokenKind::White,
    TokenKind::BadToken,
];

impl TokenKind {
    /// Stable display name; this is the vocabulary of the `.tok` output
    /// format and of golden files.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            CommentEol => "COMMENT_EOL",
            CommentBlkStart => "COMMENT_BLK_START",
            CommentBlkEnd => "COMMENT_BLK_END",
            KwConst => "KW_CONST",
            KwType => "KW_TYPE",
            KwVardec => "KW_VARDEC",
            KwSubdec => "KW_SUBDEC",
            KwVar => "KW_VAR",
            KwVoid => "KW_VOID",
            KwClass => "KW_CLASS",
            KwLet => "KW_LET",
            KwIf => "KW_IF",
            KwElse => "KW_ELSE",
            KwWhile => "KW_WHILE",
            KwDo => "KW_DO",
            KwReturn => "KW_RETURN",
            SyLparen => "SY_LPAREN",
            SyRparen => "SY_RPAREN",
            SyLbracket => "SY_LBRACKET",
            SyRbracket => "SY_RBRACKET",
            SyLbrace => "SY_LBRACE",
            SyRbrace => "SY_RBRACE",
            SySemi => "SY_SEMI",
            SyPeriod => "SY_PERIOD",
            SyComma => "SY_COMMA",
            SyEq => "SY_EQ",
            SyMinus => "SY_MINUS",
            SyNot => "SY_NOT",
            SyOp => "SY_OP",
            Ident => "IDENT",
            Integer => "INTEGER",
            Str => "STRING",
            White => "WHITESPACE",
            BadToken => "BADTOKEN",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.name() == name)
    }

    /// Entering one of these switches the engine into comment suppression.
    pub fn is_comment_start(self) -> bool {
        matches!(self, TokenKind::CommentEol | TokenKind::CommentBlkStart)
    }

    /// Consulted only while suppressing a block comment.
    pub fn is_comment_end(self) -> bool {
        self == TokenKind::CommentBlkEnd
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
