//! Registry of resynchronization sets.
//!
//! Each recovery situation the parser can hit has exactly one entry: its
//! identifier, a diagnostic name, and the set of tokens at which parsing may
//! resume. The table is a single array of composite records indexed by
//! [`ResyncSetId`] ordinal, checked at compile time.
//!
//! # Grammar
//!
//! Memberships follow the PIM4 Modula-2 productions that motivate each
//! situation. FIRST and FOLLOW sets shared between entries are named
//! constants below.

use std::collections::HashSet;
use std::fmt;

use m2_ir::TokenKind;

use crate::{InvalidResyncSetId, RegistryViolation, TokenSet};

/// A recovery situation in the parser.
///
/// The ordinal of each variant is its position in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ResyncSetId {
    ImportOrDefinitionOrEnd = 0,
    ImportOrIdentOrSemicolon = 1,
    IdentOrSemicolon = 2,
    CommaOrSemicolon = 3,
    DefinitionOrIdentOrSemicolon = 4,
    DefinitionOrSemicolon = 5,
    TypeOrCommaOrOf = 6,
    SemicolonOrEnd = 7,
    ElseOrEnd = 8,
    CommaOrRightParen = 9,
    ColonOrSemicolon = 10,
    ImportOrBlock = 11,
    DeclarationOrIdentOrSemicolon = 12,
    DeclarationOrSemicolon = 13,
    FirstOrFollowOfStatement = 14,
    ElsifOrElseOrEnd = 15,
    ForLoopBody = 16,
}

impl ResyncSetId {
    /// Number of recovery situations.
    pub const COUNT: usize = Self::ALL.len();

    /// Every situation, in ordinal order.
    pub const ALL: [ResyncSetId; 17] = [
        Self::ImportOrDefinitionOrEnd,
        Self::ImportOrIdentOrSemicolon,
        Self::IdentOrSemicolon,
        Self::CommaOrSemicolon,
        Self::DefinitionOrIdentOrSemicolon,
        Self::DefinitionOrSemicolon,
        Self::TypeOrCommaOrOf,
        Self::SemicolonOrEnd,
        Self::ElseOrEnd,
        Self::CommaOrRightParen,
        Self::ColonOrSemicolon,
        Self::ImportOrBlock,
        Self::DeclarationOrIdentOrSemicolon,
        Self::DeclarationOrSemicolon,
        Self::FirstOrFollowOfStatement,
        Self::ElsifOrElseOrEnd,
        Self::ForLoopBody,
    ];

    /// Position of this situation in the registry.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Position of this situation as a raw ordinal, the inverse of
    /// [`from_ordinal`](Self::from_ordinal).
    #[inline]
    pub const fn raw_ordinal(self) -> i64 {
        self as i64
    }

    /// Validate a raw ordinal.
    #[inline]
    pub const fn from_ordinal(ordinal: i64) -> Option<ResyncSetId> {
        let mut i = 0;
        while i < Self::COUNT {
            if Self::ALL[i].raw_ordinal() == ordinal {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Look a situation up by its diagnostic name.
    pub fn from_name(name: &str) -> Option<ResyncSetId> {
        REGISTRY
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.id)
    }

    /// The registry entry for this situation.
    #[inline]
    pub fn entry(self) -> &'static ResyncEntry {
        &REGISTRY[self.ordinal()]
    }

    /// Tokens at which parsing may resume.
    #[inline]
    pub fn set(self) -> &'static TokenSet {
        &self.entry().set
    }

    /// Diagnostic name, e.g. `"ident-or-semicolon"`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.entry().name
    }
}

impl TryFrom<i64> for ResyncSetId {
    type Error = InvalidResyncSetId;

    fn try_from(ordinal: i64) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(InvalidResyncSetId(ordinal))
    }
}

impl fmt::Display for ResyncSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the registry.
///
/// Entries are only built inside this crate; consumers read them through
/// [`entries`] or [`ResyncSetId::entry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResyncEntry {
    /// Situation this row describes; its ordinal is the row's position.
    id: ResyncSetId,
    /// Diagnostic name, non-empty and unique across the registry.
    name: &'static str,
    set: TokenSet,
}

impl ResyncEntry {
    const fn new(id: ResyncSetId, name: &'static str, set: TokenSet) -> Self {
        ResyncEntry { id, name, set }
    }

    #[inline]
    pub const fn id(&self) -> ResyncSetId {
        self.id
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Tokens at which parsing may resume.
    #[inline]
    pub const fn set(&self) -> &TokenSet {
        &self.set
    }
}

/// Kinds no resync set may contain. End of input is the skipping loop's
/// concern, and error tokens are never a place to resume.
const EXCLUDED_KINDS: [TokenKind; 2] = [TokenKind::Eof, TokenKind::Error];

// FIRST/FOLLOW sets shared between entries.

/// `import := FROM ident IMPORT identList ";" | IMPORT identList ";"`
const FIRST_OF_IMPORT: TokenSet = TokenSet::of(&[TokenKind::Import, TokenKind::From]);

/// Definitions allowed in a definition module.
const FIRST_OF_DEFINITION: TokenSet = TokenSet::of(&[
    TokenKind::Const,
    TokenKind::Type,
    TokenKind::Var,
    TokenKind::Procedure,
]);

/// Declarations allowed in a block; adds local modules to the definitions.
const FIRST_OF_DECLARATION: TokenSet = FIRST_OF_DEFINITION.with(TokenKind::Module);

/// `type := simpleType | ArrayType | RecordType | SetType | PointerType | ProcedureType`
/// where `simpleType := qualident | enumeration | SubrangeType`.
const FIRST_OF_TYPE: TokenSet = TokenSet::of(&[
    TokenKind::Ident,
    TokenKind::LParen,
    TokenKind::LBracket,
    TokenKind::Array,
    TokenKind::Record,
    TokenKind::Set,
    TokenKind::Pointer,
    TokenKind::Procedure,
]);

const FIRST_OF_STATEMENT: TokenSet = TokenSet::of(&[
    TokenKind::Ident,
    TokenKind::If,
    TokenKind::Case,
    TokenKind::While,
    TokenKind::Repeat,
    TokenKind::Loop,
    TokenKind::For,
    TokenKind::With,
    TokenKind::Exit,
    TokenKind::Return,
]);

/// Separator, block ends, and the case-label bar.
const FOLLOW_OF_STATEMENT: TokenSet = TokenSet::of(&[
    TokenKind::Semicolon,
    TokenKind::End,
    TokenKind::Elsif,
    TokenKind::Else,
    TokenKind::Until,
    TokenKind::Bar,
]);

const ENTRIES: [ResyncEntry; ResyncSetId::COUNT] = [
    // DEFINITION MODULE ident ";" import* definition* END ident "."
    ResyncEntry::new(
        ResyncSetId::ImportOrDefinitionOrEnd,
        "import-or-definition-or-end",
        FIRST_OF_IMPORT
            .union(FIRST_OF_DEFINITION)
            .with(TokenKind::End),
    ),
    // FROM ident IMPORT identList ";"
    ResyncEntry::new(
        ResyncSetId::ImportOrIdentOrSemicolon,
        "import-or-ident-or-semicolon",
        TokenSet::of(&[TokenKind::Import, TokenKind::Ident, TokenKind::Semicolon]),
    ),
    // IMPORT identList ";"
    ResyncEntry::new(
        ResyncSetId::IdentOrSemicolon,
        "ident-or-semicolon",
        TokenSet::of(&[TokenKind::Ident, TokenKind::Semicolon]),
    ),
    // identList := ident ("," ident)*
    ResyncEntry::new(
        ResyncSetId::CommaOrSemicolon,
        "comma-or-semicolon",
        TokenSet::of(&[TokenKind::Comma, TokenKind::Semicolon]),
    ),
    // CONST/TYPE/VAR sections: (ident ... ";")*
    ResyncEntry::new(
        ResyncSetId::DefinitionOrIdentOrSemicolon,
        "definition-or-ident-or-semicolon",
        FIRST_OF_DEFINITION
            .with(TokenKind::Ident)
            .with(TokenKind::Semicolon),
    ),
    // PROCEDURE heading ";"
    ResyncEntry::new(
        ResyncSetId::DefinitionOrSemicolon,
        "definition-or-semicolon",
        FIRST_OF_DEFINITION.with(TokenKind::Semicolon),
    ),
    // ARRAY simpleType ("," simpleType)* OF type
    ResyncEntry::new(
        ResyncSetId::TypeOrCommaOrOf,
        "type-or-comma-or-of",
        FIRST_OF_TYPE.with(TokenKind::Comma).with(TokenKind::Of),
    ),
    // RECORD fieldListSequence END, statementSequence END
    ResyncEntry::new(
        ResyncSetId::SemicolonOrEnd,
        "semicolon-or-end",
        TokenSet::of(&[TokenKind::Semicolon, TokenKind::End]),
    ),
    // CASE ... ("|" case)* (ELSE ...)? END
    ResyncEntry::new(
        ResyncSetId::ElseOrEnd,
        "else-or-end",
        TokenSet::of(&[TokenKind::Else, TokenKind::End]),
    ),
    // "(" ident ("," ident)* ")" and actual parameter lists
    ResyncEntry::new(
        ResyncSetId::CommaOrRightParen,
        "comma-or-right-paren",
        TokenSet::of(&[TokenKind::Comma, TokenKind::RParen]),
    ),
    // identList ":" type ";"
    ResyncEntry::new(
        ResyncSetId::ColonOrSemicolon,
        "colon-or-semicolon",
        TokenSet::of(&[TokenKind::Colon, TokenKind::Semicolon]),
    ),
    // MODULE ident ";" import* block ident "."
    ResyncEntry::new(
        ResyncSetId::ImportOrBlock,
        "import-or-block",
        FIRST_OF_IMPORT
            .union(FIRST_OF_DECLARATION)
            .with(TokenKind::Begin)
            .with(TokenKind::End),
    ),
    // CONST/TYPE/VAR sections inside a block
    ResyncEntry::new(
        ResyncSetId::DeclarationOrIdentOrSemicolon,
        "declaration-or-ident-or-semicolon",
        FIRST_OF_DECLARATION
            .with(TokenKind::Ident)
            .with(TokenKind::Semicolon),
    ),
    // block := declaration* (BEGIN statementSequence)? END
    ResyncEntry::new(
        ResyncSetId::DeclarationOrSemicolon,
        "declaration-or-semicolon",
        FIRST_OF_DECLARATION.with(TokenKind::Semicolon),
    ),
    // statementSequence := statement (";" statement)*
    ResyncEntry::new(
        ResyncSetId::FirstOrFollowOfStatement,
        "first-or-follow-of-statement",
        FIRST_OF_STATEMENT.union(FOLLOW_OF_STATEMENT),
    ),
    // IF expr THEN ... (ELSIF expr THEN ...)* (ELSE ...)? END
    ResyncEntry::new(
        ResyncSetId::ElsifOrElseOrEnd,
        "elsif-or-else-or-end",
        TokenSet::of(&[TokenKind::Elsif, TokenKind::Else, TokenKind::End]),
    ),
    // FOR ident ":=" expr TO expr (BY constExpr)? DO statementSequence END
    ResyncEntry::new(
        ResyncSetId::ForLoopBody,
        "for-loop-body",
        FIRST_OF_STATEMENT
            .with(TokenKind::Do)
            .with(TokenKind::End),
    ),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Registry invariants, evaluated at compile time.
const fn verify(entries: &[ResyncEntry]) {
    assert!(
        entries.len() == ResyncSetId::COUNT,
        "one registry entry per ResyncSetId"
    );
    let mut i = 0;
    while i < entries.len() {
        assert!(
            ResyncSetId::ALL[i] as usize == i,
            "ResyncSetId::ALL must be in ordinal order"
        );
        assert!(
            entries[i].id as usize == i,
            "registry entry out of position"
        );
        assert!(!entries[i].name.is_empty(), "registry entry with empty name");
        assert!(!entries[i].set.is_empty(), "registry entry with empty set");
        let mut k = 0;
        while k < EXCLUDED_KINDS.len() {
            assert!(
                !entries[i].set.contains(EXCLUDED_KINDS[k]),
                "registry entry contains an excluded token kind"
            );
            k += 1;
        }
        let mut j = i + 1;
        while j < entries.len() {
            assert!(
                !str_eq(entries[i].name, entries[j].name),
                "duplicate registry entry name"
            );
            j += 1;
        }
        i += 1;
    }
}

const _: () = verify(&ENTRIES);

/// Runtime counterpart of the compile-time registry check.
///
/// Applies the same rules to any table and reports every violation instead
/// of stopping at the first.
pub fn audit(table: &[ResyncEntry]) -> Vec<RegistryViolation> {
    let mut violations = Vec::new();
    if table.len() != ResyncSetId::COUNT {
        violations.push(RegistryViolation::WrongLength {
            expected: ResyncSetId::COUNT,
            found: table.len(),
        });
    }
    let mut names = HashSet::new();
    for (position, entry) in table.iter().enumerate() {
        if entry.id.ordinal() != position {
            violations.push(RegistryViolation::OutOfPosition {
                name: entry.name,
                position,
                ordinal: entry.id.ordinal(),
            });
        }
        if entry.name.is_empty() {
            violations.push(RegistryViolation::EmptyName { position });
        } else if !names.insert(entry.name) {
            violations.push(RegistryViolation::DuplicateName { name: entry.name });
        }
        if entry.set.is_empty() {
            violations.push(RegistryViolation::EmptySet { name: entry.name });
        }
        for kind in EXCLUDED_KINDS {
            if entry.set.contains(kind) {
                violations.push(RegistryViolation::ExcludedKind {
                    name: entry.name,
                    kind,
                });
            }
        }
    }
    violations
}

static REGISTRY: [ResyncEntry; ResyncSetId::COUNT] = ENTRIES;

/// All registry entries, in ordinal order.
pub fn entries() -> &'static [ResyncEntry] {
    &REGISTRY
}

/// Whether `ordinal` identifies a recovery situation.
pub fn is_valid(ordinal: i64) -> bool {
    ResyncSetId::from_ordinal(ordinal).is_some()
}

/// The resync set for a raw ordinal.
///
/// Returns the registry's own instance, so repeated calls yield the same
/// reference.
pub fn resync_set(ordinal: i64) -> Result<&'static TokenSet, InvalidResyncSetId> {
    ResyncSetId::try_from(ordinal).map(ResyncSetId::set)
}

/// The diagnostic name for a raw ordinal.
pub fn name_of(ordinal: i64) -> Result<&'static str, InvalidResyncSetId> {
    ResyncSetId::try_from(ordinal).map(ResyncSetId::name)
}

/// Situations whose resync set contains `kind`, in ordinal order.
pub fn sets_containing(kind: TokenKind) -> impl Iterator<Item = ResyncSetId> {
    REGISTRY
        .iter()
        .filter(move |entry| entry.set.contains(kind))
        .map(|entry| entry.id)
}
