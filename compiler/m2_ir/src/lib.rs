//! M2 IR - shared front-end vocabulary for the Modula-2 compiler.
//!
//! This crate owns the lexical taxonomy: the [`TokenKind`] enumeration the
//! lexer produces and every later stage (parser, error recovery) consumes.
//!
//! # Design Philosophy
//!
//! - **Stable ordinals**: every kind has a fixed discriminant in `0..COUNT`,
//!   so other crates can index tables and bitsets by it.
//! - **Plain data**: kinds are `Copy` and carry no payload; literal values
//!   and identifier text live on the token, not on its kind.

mod token;

pub use token::TokenKind;
