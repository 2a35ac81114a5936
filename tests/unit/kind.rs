//! Kind lock-in: first insert wins, mismatches change nothing, clear resets.

use super::common::{ints, list_of, texts};
use sortlink::{Kind, ListError, SortedLinkedList};

#[test]
fn test_empty_list_has_no_kind() {
    assert_eq!(SortedLinkedList::new().kind(), Kind::Unset);
}

#[test]
fn test_first_insert_fixes_kind() {
    let mut list = SortedLinkedList::new();
    list.insert(10).unwrap();
    assert_eq!(list.kind(), Kind::Integer);

    let mut list = SortedLinkedList::new();
    list.insert("a").unwrap();
    assert_eq!(list.kind(), Kind::Text);
}

#[test]
fn test_mixed_insert_is_rejected() {
    let mut list = list_of([1]);
    let err = list.insert("string").unwrap_err();
    assert_eq!(
        err,
        ListError::TypeMismatch {
            expected: Kind::Integer,
            found: Kind::Text,
        }
    );
    assert_eq!(ints(&list), vec![1]);
}

#[test]
fn test_mismatch_on_remove_and_contains_leaves_state() {
    let mut list = list_of(["x", "y"]);

    assert!(matches!(
        list.remove(1),
        Err(ListError::TypeMismatch {
            expected: Kind::Text,
            found: Kind::Integer
        })
    ));
    assert!(list.contains(1).is_err());

    assert_eq!(texts(&list), vec!["x", "y"]);
    assert_eq!(list.kind(), Kind::Text);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_mismatch_on_remove_even_when_nothing_could_match() {
    let mut list = list_of([1]);
    assert!(list.remove("1").is_err());
}

#[test]
fn test_clear_allows_opposite_kind() {
    let mut list = list_of([10]);
    list.clear();
    assert_eq!(list.kind(), Kind::Unset);

    list.insert("a").unwrap();
    assert_eq!(list.kind(), Kind::Text);
    assert_eq!(texts(&list), vec!["a"]);
}

#[test]
fn test_kind_survives_removing_every_element() {
    let mut list = list_of([7]);
    assert!(list.remove(7).unwrap());
    assert!(list.is_empty());
    assert_eq!(list.kind(), Kind::Integer);
    assert!(list.insert("seven").is_err());
}

#[test]
fn test_contains_on_empty_list_fixes_kind() {
    let list = SortedLinkedList::new();
    assert!(!list.contains(1).unwrap());
    assert_eq!(list.kind(), Kind::Integer);

    let mut list = list;
    assert_eq!(
        list.insert("a"),
        Err(ListError::TypeMismatch {
            expected: Kind::Integer,
            found: Kind::Text,
        })
    );
    assert!(list.is_empty());
}

#[test]
fn test_remove_on_empty_list_fixes_kind() {
    let mut list = SortedLinkedList::new();
    assert!(!list.remove("a").unwrap());
    assert_eq!(list.kind(), Kind::Text);
    assert!(list.contains(1).is_err());

    // Clearing is the only way back.
    list.clear();
    list.insert(1).unwrap();
    assert_eq!(ints(&list), vec![1]);
}

#[test]
fn test_type_mismatch_message() {
    let mut list = list_of(["a"]);
    let err = list.insert(1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: list holds text values, got integer value"
    );
}
