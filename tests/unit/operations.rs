//! Insert, remove, contains and clear, one scenario at a time.

use super::common::{assert_list_well_formed, ints, list_of, texts};
use sortlink::{Element, SortedLinkedList};

// ============================================================================
// INSERT
// ============================================================================

#[test]
fn test_insert_orders_integers() {
    let list = list_of([5, 1, 3]);
    assert_eq!(ints(&list), vec![1, 3, 5]);
    assert_list_well_formed(&list);
}

#[test]
fn test_insert_orders_text() {
    let list = list_of(["banana", "apple", "cherry"]);
    assert_eq!(texts(&list), vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_insert_ascending_and_descending_runs() {
    let ascending = list_of(0..50);
    let descending = list_of((0..50).rev());
    assert_eq!(ints(&ascending), (0..50).collect::<Vec<i64>>());
    assert_eq!(ints(&descending), (0..50).collect::<Vec<i64>>());
}

#[test]
fn test_insert_handles_extremes() {
    let list = list_of([0, i64::MAX, i64::MIN, -1]);
    assert_eq!(ints(&list), vec![i64::MIN, -1, 0, i64::MAX]);
}

#[test]
fn test_insert_text_is_case_sensitive_bytewise() {
    let list = list_of(["apple", "Banana", "cherry", "Apple"]);
    assert_eq!(texts(&list), vec!["Apple", "Banana", "apple", "cherry"]);
}

#[test]
fn test_insert_numeric_strings_sort_as_text() {
    let list = list_of(["10", "9", "100"]);
    assert_eq!(texts(&list), vec!["10", "100", "9"]);
}

#[test]
fn test_insert_empty_string() {
    let list = list_of(["b", "", "a"]);
    assert_eq!(texts(&list), vec!["", "a", "b"]);
}

// ============================================================================
// EQUAL KEYS
// ============================================================================

#[test]
fn test_three_equal_values_are_all_kept() {
    let mut list = list_of([5, 5]);
    list.insert(5).unwrap();
    assert_eq!(ints(&list), vec![5, 5, 5]);
    assert!(list.contains(5).unwrap());

    assert!(list.remove(5).unwrap());
    assert_eq!(ints(&list), vec![5, 5]);
    assert_list_well_formed(&list);
}

#[test]
fn test_equal_values_land_between_neighbors() {
    let list = list_of([1, 9, 5, 5, 5]);
    assert_eq!(ints(&list), vec![1, 5, 5, 5, 9]);
}

// ============================================================================
// REMOVE
// ============================================================================

#[test]
fn test_remove_existing_value() {
    let mut list = list_of([2, 1, 3]);
    assert!(list.remove(2).unwrap());
    assert_eq!(ints(&list), vec![1, 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_missing_value_returns_false() {
    let mut list = list_of([1]);
    assert!(!list.remove(999).unwrap());
    assert_eq!(ints(&list), vec![1]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_value_smaller_than_head() {
    let mut list = list_of([10, 20]);
    assert!(!list.remove(5).unwrap());
    assert_eq!(ints(&list), vec![10, 20]);
}

#[test]
fn test_remove_tail() {
    let mut list = list_of(["a", "b", "c"]);
    assert!(list.remove("c").unwrap());
    assert_eq!(texts(&list), vec!["a", "b"]);
}

#[test]
fn test_remove_from_empty_list() {
    let mut list = SortedLinkedList::new();
    assert!(!list.remove(1).unwrap());
    assert!(list.is_empty());
}

#[test]
fn test_remove_everything_one_by_one() {
    let mut list = list_of([3, 1, 2]);
    for n in [2, 3, 1] {
        assert!(list.remove(n).unwrap());
        assert_list_well_formed(&list);
    }
    assert!(list.is_empty());
    assert!(list.to_vec().is_empty());
}

// ============================================================================
// CONTAINS / EMPTINESS / CLEAR
// ============================================================================

#[test]
fn test_contains() {
    let list = list_of(["a"]);
    assert!(list.contains("a").unwrap());
    assert!(!list.contains("b").unwrap());
}

#[test]
fn test_contains_does_not_mutate() {
    let list = list_of([4, 2]);
    let before = list.to_vec();
    let _ = list.contains(2).unwrap();
    let _ = list.contains(7).unwrap();
    assert_eq!(list.to_vec(), before);
}

#[test]
fn test_is_empty_and_clear() {
    let mut list = SortedLinkedList::new();
    assert!(list.is_empty());
    list.insert(1).unwrap();
    assert!(!list.is_empty());
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_clear_on_empty_list_is_harmless() {
    let mut list = SortedLinkedList::new();
    list.clear();
    list.clear();
    assert!(list.is_empty());
}

#[test]
fn test_to_vec_returns_fresh_snapshots() {
    let mut list = list_of([3, 1, 2]);
    let first = list.to_vec();
    let second = list.to_vec();
    assert_eq!(first, second);

    list.clear();
    assert_eq!(first, vec![Element::from(1), Element::from(2), Element::from(3)]);
    assert!(list.to_vec().is_empty());
}

#[test]
fn test_to_vec_on_empty_list() {
    assert!(SortedLinkedList::new().to_vec().is_empty());
}
