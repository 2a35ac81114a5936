//! Properties that must hold after every single operation.

use super::common::{assert_list_well_formed, ints, list_of, oracle_cmp};
use proptest::prelude::*;
use sortlink::{Element, Kind, SortedLinkedList};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate short words, mixed case and digits so byte order matters.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{0,8}").unwrap()
}

/// Words with multi-byte characters.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "cafe".to_string(),
        "naïve".to_string(),
        "über".to_string(),
        "Zebra".to_string(),
        "apple".to_string(),
        "తెలుగు".to_string(),
        String::new(),
    ])
}

/// Small integer range so duplicates are common.
fn small_int_strategy() -> impl Strategy<Value = i64> {
    -20i64..20
}

proptest! {
    /// Property: After every insert, the chain is non-decreasing.
    #[test]
    fn prop_sorted_after_every_insert(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut list = SortedLinkedList::new();
        for value in values {
            list.insert(value).unwrap();
            let snapshot = list.to_vec();
            for pair in snapshot.windows(2) {
                prop_assert!(
                    oracle_cmp(&pair[0], &pair[1]).is_le(),
                    "not sorted: {:?} before {:?}", pair[0], pair[1]
                );
            }
        }
    }

    /// Property: Text lists are sorted bytewise, including multi-byte text.
    #[test]
    fn prop_text_sorted_bytewise(
        words in prop::collection::vec(prop_oneof![word_strategy(), unicode_word_strategy()], 0..32)
    ) {
        let list = list_of(words.iter().map(String::as_str));
        let mut expected = words.clone();
        expected.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
        let actual: Vec<String> = list.iter().map(|e| e.to_string()).collect();
        prop_assert_eq!(actual, expected);
        assert_list_well_formed(&list);
    }

    /// Property: Inserting n values yields exactly those n values, as a multiset.
    #[test]
    fn prop_insert_preserves_multiset(values in prop::collection::vec(small_int_strategy(), 0..48)) {
        let list = list_of(values.clone());
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(ints(&list), expected);
    }

    /// Property: A rejected value of the other kind changes nothing.
    #[test]
    fn prop_mismatch_has_no_effect(
        values in prop::collection::vec(small_int_strategy(), 1..16),
        intruder in word_strategy(),
    ) {
        let mut list = list_of(values);
        let before = list.to_vec();
        let len = list.len();

        prop_assert!(list.insert(intruder.as_str()).is_err());
        prop_assert!(list.remove(intruder.as_str()).is_err());
        prop_assert!(list.contains(intruder.as_str()).is_err());

        prop_assert_eq!(list.to_vec(), before);
        prop_assert_eq!(list.len(), len);
        prop_assert_eq!(list.kind(), Kind::Integer);
    }

    /// Property: remove shrinks by exactly one when present, zero when absent.
    #[test]
    fn prop_remove_changes_length_by_presence(
        values in prop::collection::vec(small_int_strategy(), 0..32),
        target in small_int_strategy(),
    ) {
        let mut list = list_of(values.clone());
        let present = values.contains(&target);
        let len = list.len();
        let before = list.to_vec();

        let removed = list.remove(target).unwrap();
        prop_assert_eq!(removed, present);
        if present {
            prop_assert_eq!(list.len(), len - 1);
            let occurrences = |v: &[Element]| v.iter().filter(|e| **e == Element::from(target)).count();
            prop_assert_eq!(occurrences(list.to_vec().as_slice()), occurrences(before.as_slice()) - 1);
        } else {
            prop_assert_eq!(list.to_vec(), before);
        }
        assert_list_well_formed(&list);
    }

    /// Property: is_empty() is true exactly when to_vec() is empty.
    #[test]
    fn prop_emptiness_matches_snapshot(
        values in prop::collection::vec(small_int_strategy(), 0..8),
        removals in prop::collection::vec(small_int_strategy(), 0..8),
    ) {
        let mut list = list_of(values);
        for target in removals {
            list.remove(target).unwrap();
            prop_assert_eq!(list.is_empty(), list.to_vec().is_empty());
            prop_assert_eq!(list.len(), list.to_vec().len());
        }
    }

    /// Property: contains agrees with a linear search of the snapshot.
    #[test]
    fn prop_contains_matches_snapshot(
        values in prop::collection::vec(small_int_strategy(), 0..32),
        probe in small_int_strategy(),
    ) {
        let list = list_of(values);
        let expected = list.to_vec().contains(&Element::from(probe));
        prop_assert_eq!(list.contains(probe).unwrap(), expected);
        prop_assert_eq!(list.snapshot().contains(&Element::from(probe)), expected);
    }

    /// Property: render joins exactly the snapshot's text forms.
    #[test]
    fn prop_render_joins_snapshot(
        words in prop::collection::vec("[a-z]{1,5}", 0..10),
        separator in "[|;, ]{0,3}",
    ) {
        let list = list_of(words.iter().map(String::as_str));
        let expected: Vec<String> = list.to_vec().iter().map(|e| e.to_string()).collect();
        prop_assert_eq!(list.render(&separator), expected.join(separator.as_str()));
    }
}
