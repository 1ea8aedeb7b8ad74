//! Token kind enumeration.

use std::fmt;

/// Lexical category of a Modula-2 token.
///
/// Discriminants are laid out in contiguous category ranges:
///
/// | Range | Category               |
/// |-------|------------------------|
/// | 0-4   | Identifiers, literals  |
/// | 5-44  | Reserved words         |
/// | 45-58 | Punctuation            |
/// | 59-68 | Operators              |
/// | 69-70 | Special                |
///
/// # Invariant
///
/// Discriminants are dense: `ALL[i].discriminant_index() == i` for every
/// `i < COUNT`. Bitsets and lookup tables in other crates index by them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Identifiers and literals (0-4) ===
    Ident = 0,
    Integer = 1,
    Real = 2,
    Char = 3,
    String = 4,

    // === Reserved words (5-44) ===
    And = 5,
    Array = 6,
    Begin = 7,
    By = 8,
    Case = 9,
    Const = 10,
    Definition = 11,
    Div = 12,
    Do = 13,
    Else = 14,
    Elsif = 15,
    End = 16,
    Exit = 17,
    Export = 18,
    For = 19,
    From = 20,
    If = 21,
    Implementation = 22,
    Import = 23,
    In = 24,
    Loop = 25,
    Mod = 26,
    Module = 27,
    Not = 28,
    Of = 29,
    Or = 30,
    Pointer = 31,
    Procedure = 32,
    Qualified = 33,
    Record = 34,
    Repeat = 35,
    Return = 36,
    Set = 37,
    Then = 38,
    To = 39,
    Type = 40,
    Until = 41,
    Var = 42,
    While = 43,
    With = 44,

    // === Punctuation (45-58) ===
    Dot = 45,       // .
    Comma = 46,     // ,
    Colon = 47,     // :
    Semicolon = 48, // ;
    Bar = 49,       // |
    Caret = 50,     // ^
    DotDot = 51,    // ..
    Assign = 52,    // :=
    LParen = 53,    // (
    RParen = 54,    // )
    LBracket = 55,  // [
    RBracket = 56,  // ]
    LBrace = 57,    // {
    RBrace = 58,    // }

    // === Operators (59-68) ===
    Eq = 59,    // =
    NotEq = 60, // # or <>
    Lt = 61,    // <
    LtEq = 62,  // <=
    Gt = 63,    // >
    GtEq = 64,  // >=
    Plus = 65,  // +
    Minus = 66, // -
    Star = 67,  // *
    Slash = 68, // /

    // === Special (69-70) ===
    Error = 69,
    Eof = 70,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Largest discriminant in use.
    pub const MAX_DISCRIMINANT: u8 = Self::Eof as u8;

    /// Every token kind, in discriminant order.
    pub const ALL: [TokenKind; 71] = [
        Self::Ident,
        Self::Integer,
        Self::Real,
        Self::Char,
        Self::String,
        Self::And,
        Self::Array,
        Self::Begin,
        Self::By,
        Self::Case,
        Self::Const,
        Self::Definition,
        Self::Div,
        Self::Do,
        Self::Else,
        Self::Elsif,
        Self::End,
        Self::Exit,
        Self::Export,
        Self::For,
        Self::From,
        Self::If,
        Self::Implementation,
        Self::Import,
        Self::In,
        Self::Loop,
        Self::Mod,
        Self::Module,
        Self::Not,
        Self::Of,
        Self::Or,
        Self::Pointer,
        Self::Procedure,
        Self::Qualified,
        Self::Record,
        Self::Repeat,
        Self::Return,
        Self::Set,
        Self::Then,
        Self::To,
        Self::Type,
        Self::Until,
        Self::Var,
        Self::While,
        Self::With,
        Self::Dot,
        Self::Comma,
        Self::Colon,
        Self::Semicolon,
        Self::Bar,
        Self::Caret,
        Self::DotDot,
        Self::Assign,
        Self::LParen,
        Self::RParen,
        Self::LBracket,
        Self::RBracket,
        Self::LBrace,
        Self::RBrace,
        Self::Eq,
        Self::NotEq,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::Error,
        Self::Eof,
    ];

    /// Ordinal of this kind, in `0..COUNT`.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`discriminant_index`](Self::discriminant_index).
    #[inline]
    pub const fn from_discriminant_index(index: u8) -> Option<TokenKind> {
        let index = index as usize;
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Whether this kind is a reserved word.
    #[inline]
    pub const fn is_reserved_word(self) -> bool {
        let index = self as u8;
        index >= Self::And as u8 && index <= Self::With as u8
    }

    /// Source spelling of this kind, or a description for kinds without one.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Char => "character",
            Self::String => "string",
            Self::And => "AND",
            Self::Array => "ARRAY",
            Self::Begin => "BEGIN",
            Self::By => "BY",
            Self::Case => "CASE",
            Self::Const => "CONST",
            Self::Definition => "DEFINITION",
            Self::Div => "DIV",
            Self::Do => "DO",
            Self::Else => "ELSE",
            Self::Elsif => "ELSIF",
            Self::End => "END",
            Self::Exit => "EXIT",
            Self::Export => "EXPORT",
            Self::For => "FOR",
            Self::From => "FROM",
            Self::If => "IF",
            Self::Implementation => "IMPLEMENTATION",
            Self::Import => "IMPORT",
            Self::In => "IN",
            Self::Loop => "LOOP",
            Self::Mod => "MOD",
            Self::Module => "MODULE",
            Self::Not => "NOT",
            Self::Of => "OF",
            Self::Or => "OR",
            Self::Pointer => "POINTER",
            Self::Procedure => "PROCEDURE",
            Self::Qualified => "QUALIFIED",
            Self::Record => "RECORD",
            Self::Repeat => "REPEAT",
            Self::Return => "RETURN",
            Self::Set => "SET",
            Self::Then => "THEN",
            Self::To => "TO",
            Self::Type => "TYPE",
            Self::Until => "UNTIL",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::With => "WITH",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Bar => "|",
            Self::Caret => "^",
            Self::DotDot => "..",
            Self::Assign => ":=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Eq => "=",
            Self::NotEq => "#",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Error => "error",
            Self::Eof => "end of file",
        }
    }

    /// Look a kind up by its [`name`](Self::name).
    ///
    /// Reserved words match ASCII-case-insensitively; everything else must
    /// match exactly.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL.iter().copied().find(|kind| {
            if kind.is_reserved_word() {
                kind.name().eq_ignore_ascii_case(name)
            } else {
                kind.name() == name
            }
        })
    }
}

const fn verify_dense_discriminants() {
    let mut i = 0;
    while i < TokenKind::COUNT {
        assert!(
            TokenKind::ALL[i] as usize == i,
            "TokenKind::ALL must list every kind in discriminant order"
        );
        i += 1;
    }
    assert!(
        TokenKind::MAX_DISCRIMINANT as usize + 1 == TokenKind::COUNT,
        "TokenKind discriminants must be dense"
    );
}

const _: () = verify_dense_discriminants();

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
