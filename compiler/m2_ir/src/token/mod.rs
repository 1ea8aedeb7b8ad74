//! Token types for the Modula-2 lexer.
//!
//! # Specification
//!
//! - Lexical grammar: PIM4 Modula-2, "Vocabulary and Representation".
//!   Reserved words are upper case; `&`, `~` and `<>` are synonyms the lexer
//!   folds into `AND`, `NOT` and `#`.

mod kind;

pub use kind::TokenKind;
