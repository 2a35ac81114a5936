//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::list::SortedLinkedList;
use crate::types::Element;

/// Build a list by inserting `values` in the given order.
///
/// Panics if the values mix kinds; tests that exercise mismatches should
/// call `insert` themselves.
pub fn list_of<T: Into<Element>>(values: impl IntoIterator<Item = T>) -> SortedLinkedList {
    let mut list = SortedLinkedList::new();
    for value in values {
        list.insert(value).expect("test values must share one kind");
    }
    list
}

/// The integer payloads of a list, head to tail.
pub fn ints(list: &SortedLinkedList) -> Vec<i64> {
    list.iter().filter_map(Element::as_integer).collect()
}

/// The text payloads of a list, head to tail.
pub fn texts(list: &SortedLinkedList) -> Vec<String> {
    list.iter()
        .filter_map(Element::as_text)
        .map(str::to_string)
        .collect()
}
