//! Property-based tests for the resync registry lookups.
//!
//! Every raw ordinal is either valid, in which case all three lookups agree
//! and succeed, or invalid, in which case all three reject it.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use m2_ir::TokenKind;
use m2_recovery::{is_valid, name_of, resync_set, InvalidResyncSetId, ResyncSetId, TokenSet};
use proptest::prelude::*;

fn token_kind_strategy() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(TokenKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn lookups_agree_with_is_valid(ordinal in any::<i64>()) {
        let valid = is_valid(ordinal);
        prop_assert_eq!(valid, (0..17).contains(&ordinal));
        prop_assert_eq!(resync_set(ordinal).is_ok(), valid);
        prop_assert_eq!(name_of(ordinal).is_ok(), valid);
        if !valid {
            prop_assert_eq!(resync_set(ordinal), Err(InvalidResyncSetId(ordinal)));
            prop_assert_eq!(name_of(ordinal), Err(InvalidResyncSetId(ordinal)));
        }
    }

    #[test]
    fn valid_ordinals_resolve_to_their_entry(ordinal in 0i64..17) {
        let id = ResyncSetId::try_from(ordinal).unwrap();
        prop_assert_eq!(id.raw_ordinal(), ordinal);
        prop_assert!(std::ptr::eq(resync_set(ordinal).unwrap(), id.set()));
        prop_assert_eq!(name_of(ordinal).unwrap(), id.name());
    }

    #[test]
    fn token_set_membership_matches_input(
        kinds in prop::collection::vec(token_kind_strategy(), 0..20),
        candidate in token_kind_strategy(),
    ) {
        let set = TokenSet::of(&kinds);
        prop_assert_eq!(set.contains(candidate), kinds.contains(&candidate));

        let mut distinct = kinds.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(set.count() as usize, distinct.len());
        prop_assert_eq!(set.iter().collect::<Vec<_>>(), distinct);
    }
}
