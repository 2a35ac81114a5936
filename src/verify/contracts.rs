// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the list invariants.
//!
//! Debug-mode assertions that the chain is what the list claims it is:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Local checks on the hot path**: insert and remove only look at the
//!    nodes they touched, so debug builds stay linear
//! 3. **One full check**, [`check_list`], for tests and callers that want it
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Invariant                                   |
//! |-------------------------------|---------------------------------------------|
//! | `check_adjacent_ordered`      | Neighbors are non-decreasing                |
//! | `check_element_kind`          | Every element has the list's kind           |
//! | `check_len_matches_emptiness` | `len == 0` exactly when there is no head    |
//! | `check_splice_ordered`        | A new node sits between ordered neighbors   |
//! | `check_list`                  | All of the above over the whole chain       |

use crate::list::{SortedLinkedList, DEFAULT_SEPARATOR};
use crate::ordering::compare;
use crate::types::{Element, Kind};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // Rendering relies on a non-empty default separator to stay readable.
    assert!(!DEFAULT_SEPARATOR.is_empty());
};

// ============================================================================
// LOCAL CONTRACTS
// ============================================================================

/// Check that two neighboring elements are in order.
///
/// # Panics (debug builds only)
/// Panics if `prev` sorts strictly after `next`.
#[inline]
pub fn check_adjacent_ordered(prev: &Element, next: &Element) {
    debug_assert!(
        compare(prev, next).is_le(),
        "Contract violation: Chain.Sorted - '{}' precedes '{}'",
        prev,
        next
    );
}

/// Check that an element matches the list's established kind.
///
/// # Panics (debug builds only)
/// Panics if `kind` is unset or differs from the element's kind.
#[inline]
pub fn check_element_kind(element: &Element, kind: Kind) {
    debug_assert_eq!(
        element.kind(),
        kind,
        "Contract violation: Chain.SingleKind - element '{}' in a {} list",
        element,
        kind
    );
}

/// Check that the length counter agrees with the head link.
#[inline]
pub fn check_len_matches_emptiness(len: usize, is_empty: bool) {
    debug_assert_eq!(
        len == 0,
        is_empty,
        "Contract violation: Chain.Length - len {} but is_empty {}",
        len,
        is_empty
    );
}

/// Check the node spliced in at `at` against both of its neighbors.
///
/// Walks at most `at + 2` nodes, and nothing at all in release builds.
///
/// # Panics (debug builds only)
/// Panics if predecessor, new node and successor are not non-decreasing.
pub fn check_splice_ordered(list: &SortedLinkedList, at: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    let span = if at == 0 { 2 } else { 3 };
    let mut window = list.iter().skip(at.saturating_sub(1)).take(span);
    let Some(mut prev) = window.next() else {
        return;
    };
    for element in window {
        check_adjacent_ordered(prev, element);
        prev = element;
    }
}

// ============================================================================
// WHOLE-LIST CONTRACT
// ============================================================================

/// Check every invariant over the whole chain.
///
/// O(n). Use this in tests and at boundaries, not per operation.
///
/// # Panics (debug builds only)
/// Panics on the first violated invariant.
pub fn check_list(list: &SortedLinkedList) {
    let kind = list.kind();
    if !list.is_empty() {
        debug_assert!(
            kind.is_set(),
            "Contract violation: Chain.SingleKind - {} elements but kind is unset",
            list.len()
        );
    }

    let mut count = 0;
    let mut prev: Option<&Element> = None;
    for element in list.iter() {
        check_element_kind(element, kind);
        if let Some(prev) = prev {
            check_adjacent_ordered(prev, element);
        }
        prev = Some(element);
        count += 1;
    }

    debug_assert_eq!(
        count,
        list.len(),
        "Contract violation: Chain.Length - counted {} nodes, len() says {}",
        count,
        list.len()
    );
    check_len_matches_emptiness(list.len(), list.is_empty());
}
