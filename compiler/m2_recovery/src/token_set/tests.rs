use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_token_set_empty() {
    let set = TokenSet::of(&[]);
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
    assert!(!set.contains(TokenKind::Ident));
    assert_eq!(set, TokenSet::default());
}

#[test]
fn test_token_set_of() {
    let set = TokenSet::of(&[TokenKind::Import, TokenKind::From, TokenKind::End]);

    assert_eq!(set.count(), 3);
    assert!(set.contains(TokenKind::Import));
    assert!(set.contains(TokenKind::From));
    assert!(set.contains(TokenKind::End));
    assert!(!set.contains(TokenKind::Begin));
}

#[test]
fn test_token_set_duplicates_are_idempotent() {
    let once = TokenSet::of(&[TokenKind::Comma, TokenKind::Semicolon]);
    let twice = TokenSet::of(&[
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Semicolon,
    ]);
    assert_eq!(once, twice);
    assert_eq!(twice.count(), 2);
}

#[test]
fn test_token_set_union() {
    let set1 = TokenSet::of(&[TokenKind::Const, TokenKind::Type]);
    let set2 = TokenSet::of(&[TokenKind::Var, TokenKind::Type]);

    let union = set1.union(set2);
    assert_eq!(union.count(), 3);
    assert!(union.contains(TokenKind::Const));
    assert!(union.contains(TokenKind::Type));
    assert!(union.contains(TokenKind::Var));
}

#[test]
fn test_token_set_boundary_kinds() {
    // First and last discriminants exercise bit 0 and the highest bit in use.
    let set = TokenSet::of(&[TokenKind::Ident, TokenKind::Eof]);
    assert!(set.contains(TokenKind::Ident));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::Error));
    assert_eq!(set.bits(), 1 | (1u128 << TokenKind::Eof.discriminant_index()));
}

#[test]
fn test_token_set_full() {
    let all = TokenSet::of(&TokenKind::ALL);
    assert_eq!(all.count() as usize, TokenKind::COUNT);
    assert!(TokenKind::ALL.iter().all(|kind| all.contains(*kind)));
}

#[test]
fn test_token_set_iter_in_discriminant_order() {
    let set = TokenSet::of(&[TokenKind::RParen, TokenKind::Ident, TokenKind::Comma]);
    let kinds: Vec<TokenKind> = set.iter().collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Comma, TokenKind::RParen]
    );
    assert_eq!(set.iter().len(), 3);
}

#[test]
fn test_token_set_into_iter() {
    let set = TokenSet::of(&[TokenKind::Do, TokenKind::End]);
    let mut seen = Vec::new();
    for kind in &set {
        seen.push(kind);
    }
    assert_eq!(seen, vec![TokenKind::Do, TokenKind::End]);
}

#[test]
fn test_token_set_display() {
    let set = TokenSet::of(&[TokenKind::Semicolon, TokenKind::Ident, TokenKind::End]);
    assert_eq!(set.to_string(), "{identifier, END, ;}");
    assert_eq!(TokenSet::of(&[]).to_string(), "{}");
}

#[test]
fn test_const_token_sets() {
    // Verify const token sets are computed at compile time
    const TEST_SET: TokenSet = TokenSet::of(&[TokenKind::Plus, TokenKind::Minus]);

    assert!(TEST_SET.contains(TokenKind::Plus));
    assert!(TEST_SET.contains(TokenKind::Minus));
    assert!(!TEST_SET.contains(TokenKind::Star));
}
