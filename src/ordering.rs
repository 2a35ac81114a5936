// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The comparator every list uses.
//!
//! Integers compare numerically as signed 64-bit values. Text compares byte by
//! byte, the same answer `strcmp` gives: no locale, no case folding, and
//! `"Z" < "a"`. Both are total orders, so the chain's non-decreasing invariant
//! is well defined.

use crate::types::Element;
use std::cmp::Ordering;

/// Three-way comparison of two elements of the same kind.
///
/// Lists never mix kinds, so the cross-kind arms only exist to keep the
/// function total: every integer sorts before every piece of text.
#[inline]
pub(crate) fn compare(a: &Element, b: &Element) -> Ordering {
    match (a, b) {
        (Element::Integer(x), Element::Integer(y)) => x.cmp(y),
        (Element::Text(x), Element::Text(y)) => x.as_bytes().cmp(y.as_bytes()),
        (Element::Integer(_), Element::Text(_)) => Ordering::Less,
        (Element::Text(_), Element::Integer(_)) => Ordering::Greater,
    }
}
