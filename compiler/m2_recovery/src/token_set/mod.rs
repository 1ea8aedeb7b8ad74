//! Bitset of token kinds.
//!
//! Uses bitset-based O(1) membership testing inspired by Go's parser.

use std::fmt;

use m2_ir::TokenKind;

// Compile-time assertion: TokenSet uses a u128 bitset, so all discriminant
// indices must fit in 0..127. If this fails, TokenSet needs a wider backing type.
const _: () = assert!(
    TokenKind::COUNT <= 128,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// An immutable set of token kinds using bitset representation.
///
/// Each bit in the u128 corresponds to a `TokenKind` discriminant index.
/// Sets are built once from an explicit list of kinds and never change
/// afterwards; there is no insertion API.
///
/// # Example
/// ```
/// use m2_ir::TokenKind;
/// use m2_recovery::TokenSet;
///
/// const SEMICOLON_OR_END: TokenSet = TokenSet::of(&[TokenKind::Semicolon, TokenKind::End]);
///
/// assert!(SEMICOLON_OR_END.contains(TokenKind::End));
/// assert!(!SEMICOLON_OR_END.contains(TokenKind::Comma));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Build a set from an explicit list of kinds.
    ///
    /// Listing a kind more than once has no further effect.
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut set = Self(0);
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// Add a token kind (builder step for const literals).
    #[inline]
    #[must_use]
    pub(crate) const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets (builder step for const literals).
    #[inline]
    #[must_use]
    pub(crate) const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    ///
    /// # Performance
    /// O(1) bitwise AND operation.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    /// Check if this set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Count the number of token kinds in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Get the raw bits of this set.
    #[inline]
    pub const fn bits(&self) -> u128 {
        self.0
    }

    /// Iterate over the members in discriminant order.
    pub fn iter(&self) -> TokenSetIter {
        TokenSetIter { bits: self.0 }
    }
}

impl IntoIterator for &TokenSet {
    type Item = TokenKind;
    type IntoIter = TokenSetIter;

    fn into_iter(self) -> TokenSetIter {
        self.iter()
    }
}

/// Iterator over the token kinds in a `TokenSet`.
#[derive(Clone, Debug)]
pub struct TokenSetIter {
    bits: u128,
}

impl Iterator for TokenSetIter {
    type Item = TokenKind;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "u128::trailing_zeros() max is 127"
        )]
        let idx = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1; // Clear the lowest set bit
        TokenKind::from_discriminant_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for TokenSetIter {}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.name())?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests;
