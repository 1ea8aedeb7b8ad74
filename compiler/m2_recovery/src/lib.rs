//! Panic-mode error recovery data for the Modula-2 parser.
//!
//! When a grammar rule meets an unexpected token, the parser skips tokens
//! until it reaches one that can legally resume parsing. This crate supplies
//! those landing points: one immutable [`TokenSet`] per recovery situation
//! ([`ResyncSetId`]), plus a diagnostic name for each.
//!
//! The registry is a `static` table built at compile time. Lookups are pure
//! and safe to call from any number of threads.
//!
//! ```
//! use m2_ir::TokenKind;
//! use m2_recovery::{name_of, resync_set, ResyncSetId};
//!
//! let set = ResyncSetId::IdentOrSemicolon.set();
//! assert!(set.contains(TokenKind::Semicolon));
//!
//! // Raw ordinals are validated.
//! assert!(resync_set(17).is_err());
//! assert_eq!(name_of(16), Ok("for-loop-body"));
//! ```

mod error;
mod resync;
mod token_set;

pub use error::{InvalidResyncSetId, RegistryViolation};
pub use resync::{
    audit, entries, is_valid, name_of, resync_set, sets_containing, ResyncEntry, ResyncSetId,
};
pub use token_set::{TokenSet, TokenSetIter};
