//! Errors surfaced by registry lookups and audits.

use m2_ir::TokenKind;

use crate::ResyncSetId;

/// A raw resync set ordinal outside `0..ResyncSetId::COUNT`.
///
/// Carries the rejected ordinal. This is a programming error in the caller,
/// so retrying is never meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid resync set id {0}: expected an ordinal in 0..{count}", count = ResyncSetId::COUNT)]
pub struct InvalidResyncSetId(pub i64);

/// A registry table that breaks one of the registry invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryViolation {
    #[error("expected {expected} entries, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("entry `{name}` at position {position} belongs at {ordinal}")]
    OutOfPosition {
        name: &'static str,
        position: usize,
        ordinal: usize,
    },
    #[error("entry at position {position} has an empty name")]
    EmptyName { position: usize },
    #[error("duplicate name `{name}`")]
    DuplicateName { name: &'static str },
    #[error("`{name}` has an empty set")]
    EmptySet { name: &'static str },
    #[error("`{name}` contains `{kind}`")]
    ExcludedKind { name: &'static str, kind: TokenKind },
}
