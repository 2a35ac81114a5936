// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for sortlink's core decisions.
//!
//! This standalone crate extracts the two decisions every insert makes, where
//! to splice and whether the value's kind is acceptable, and proves them over
//! bounded inputs using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Sortedness**: splicing at `splice_index` keeps a sorted array sorted
//! 2. **Stability**: the new value lands after every equal value
//! 3. **Kind lock-in**: once set, a kind only accepts itself and never changes

/// Largest chain the proofs reason about.
pub const MAX_LEN: usize = 4;

// ============================================================================
// SPLICE POINT (mirrors the cursor walk in src/list.rs)
// ============================================================================

/// Number of leading elements that are <= `value`.
///
/// The cursor walk in `SortedLinkedList::insert` advances exactly this many
/// nodes before splicing.
pub fn splice_index(values: &[i64], value: i64) -> usize {
    let mut i = 0;
    while i < values.len() && values[i] <= value {
        i += 1;
    }
    i
}

/// Insert into a fixed buffer holding `len` sorted values. Returns the new length.
pub fn insert_sorted(buf: &mut [i64; MAX_LEN + 1], len: usize, value: i64) -> usize {
    let at = splice_index(&buf[..len], value);
    let mut i = len;
    while i > at {
        buf[i] = buf[i - 1];
        i -= 1;
    }
    buf[at] = value;
    len + 1
}

pub fn is_sorted(values: &[i64]) -> bool {
    let mut i = 1;
    while i < values.len() {
        if values[i - 1] > values[i] {
            return false;
        }
        i += 1;
    }
    true
}

// ============================================================================
// KIND RESOLUTION (mirrors SortedLinkedList::admit)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Unset,
    Integer,
    Text,
}

/// Returns the kind after accepting a value of `incoming`, or `None` on mismatch.
pub fn admit(current: Kind, incoming: Kind) -> Option<Kind> {
    match current {
        Kind::Unset => Some(incoming),
        k if k == incoming => Some(k),
        _ => None,
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_kind() -> Kind {
        match kani::any::<u8>() % 3 {
            0 => Kind::Unset,
            1 => Kind::Integer,
            _ => Kind::Text,
        }
    }

    fn any_value_kind() -> Kind {
        if kani::any() {
            Kind::Integer
        } else {
            Kind::Text
        }
    }

    /// Verify inserting into a sorted buffer keeps it sorted.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_insert_preserves_sortedness() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0i64; MAX_LEN + 1];
        for i in 0..len {
            buf[i] = kani::any();
        }
        kani::assume(is_sorted(&buf[..len]));

        let value: i64 = kani::any();
        let new_len = insert_sorted(&mut buf, len, value);

        kani::assert(new_len == len + 1, "Insert must grow by one");
        kani::assert(is_sorted(&buf[..new_len]), "Insert must keep the buffer sorted");
    }

    /// Verify the splice point comes after every equal element.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_splice_after_equals() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0i64; MAX_LEN];
        for i in 0..len {
            buf[i] = kani::any();
        }
        kani::assume(is_sorted(&buf[..len]));

        let value: i64 = kani::any();
        let at = splice_index(&buf[..len], value);

        kani::assert(at <= len, "Splice point must be in bounds");
        for i in 0..at {
            kani::assert(buf[i] <= value, "Everything before the splice is <= value");
        }
        for i in at..len {
            kani::assert(buf[i] > value, "Everything after the splice is > value");
        }
    }

    /// Verify a set kind never changes and only accepts itself.
    #[kani::proof]
    fn verify_kind_lock_in() {
        let current = any_kind();
        let incoming = any_value_kind();

        match admit(current, incoming) {
            Some(next) => {
                kani::assert(next == incoming, "Accepted kind must be the value's kind");
                kani::assert(
                    current == Kind::Unset || current == next,
                    "A set kind must never change",
                );
            }
            None => {
                kani::assert(
                    current != Kind::Unset && current != incoming,
                    "Only a set, different kind may reject",
                );
            }
        }
    }
}
