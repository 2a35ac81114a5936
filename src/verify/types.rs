// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make unsorted snapshots unrepresentable.
//!
//! A `Vec<Element>` can hold anything. A [`SortedSequence`] can only hold what a
//! list could have produced: one kind, non-decreasing order. The check is paid
//! once at construction, after which lookups can binary search instead of scan.
//!
//! | Type / Function      | What's Guaranteed                              |
//! |----------------------|------------------------------------------------|
//! | `SortedSequence`     | Single kind, non-decreasing under the comparator |
//! | `check_well_formed`  | A live list satisfies the same, plus its length |
//!
//! # Example
//!
//! ```
//! use sortlink::{Element, SortedSequence};
//!
//! let seq = SortedSequence::from_vec(vec![Element::from(1), Element::from(3)])?;
//! assert!(seq.contains(&Element::from(3)));
//! assert!(SortedSequence::from_vec(vec![Element::from(3), Element::from(1)]).is_err());
//! # Ok::<(), sortlink::InvariantError>(())
//! ```

use super::contracts;
use crate::list::SortedLinkedList;
use crate::ordering::compare;
use crate::types::{Element, Kind};
use serde::Serialize;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Element at `position` sorts before the one just ahead of it.
    UnsortedChain { position: usize },
    /// Element at `position` has a different kind from the first element.
    MixedKinds {
        position: usize,
        expected: Kind,
        found: Kind,
    },
    /// The list holds elements but claims no kind.
    UnsetKindWithElements { len: usize },
    /// The length counter disagrees with the number of nodes.
    LengthMismatch { claimed: usize, actual: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::UnsortedChain { position } => {
                write!(f, "chain not sorted at position {}", position)
            }
            InvariantError::MixedKinds {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "element at position {} is {}, expected {}",
                    position, found, expected
                )
            }
            InvariantError::UnsetKindWithElements { len } => {
                write!(f, "kind is unset but the list holds {} elements", len)
            }
            InvariantError::LengthMismatch { claimed, actual } => {
                write!(f, "len() {} != node count {}", claimed, actual)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Validate a run of elements: one kind, non-decreasing. Returns the kind.
fn validate<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Result<Kind, InvariantError> {
    let mut kind = Kind::Unset;
    let mut prev: Option<&Element> = None;

    for (position, element) in elements.into_iter().enumerate() {
        if kind == Kind::Unset {
            kind = element.kind();
        } else if element.kind() != kind {
            return Err(InvariantError::MixedKinds {
                position,
                expected: kind,
                found: element.kind(),
            });
        }

        if let Some(prev) = prev {
            if compare(prev, element).is_gt() {
                return Err(InvariantError::UnsortedChain { position });
            }
        }
        prev = Some(element);
    }

    Ok(kind)
}

/// Check every list invariant, returning the first violation.
///
/// The non-panicking twin of [`contracts::check_list`].
pub fn check_well_formed(list: &SortedLinkedList) -> Result<(), InvariantError> {
    let actual = list.iter().count();
    if actual > 0 && !list.kind().is_set() {
        return Err(InvariantError::UnsetKindWithElements { len: actual });
    }

    let found = validate(list.iter())?;
    if found.is_set() && found != list.kind() {
        return Err(InvariantError::MixedKinds {
            position: 0,
            expected: list.kind(),
            found,
        });
    }

    if actual != list.len() {
        return Err(InvariantError::LengthMismatch {
            claimed: list.len(),
            actual,
        });
    }
    Ok(())
}

/// An owned, sorted, single-kind snapshot of list contents.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `elements[i] ≤ elements[j]` under the list comparator
/// - All elements share `kind()`; `kind()` is `Unset` only when empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortedSequence {
    elements: Vec<Element>,
    #[serde(skip)]
    kind: Kind,
}

impl SortedSequence {
    /// Create a sorted sequence by validating an existing vector.
    ///
    /// Returns `Err` if the vector mixes kinds or is out of order.
    pub fn from_vec(elements: Vec<Element>) -> Result<Self, InvariantError> {
        let kind = validate(&elements)?;
        Ok(Self { elements, kind })
    }

    /// Copy a list's contents. The list already guarantees the invariants.
    pub(crate) fn from_list(list: &SortedLinkedList) -> Self {
        contracts::check_list(list);
        let elements = list.to_vec();
        let kind = elements.first().map_or(Kind::Unset, Element::kind);
        Self { elements, kind }
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The shared kind, or `Unset` for an empty sequence.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Iterate over elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.elements
    }

    /// Binary search for the first element >= target.
    ///
    /// Returns an index in `[0, len()]` such that:
    /// - All elements before this index are < target
    /// - All elements at and after are >= target
    pub fn find_first_ge(&self, target: &Element) -> usize {
        self.elements
            .partition_point(|element| compare(element, target).is_lt())
    }

    /// Exact membership in O(log n).
    pub fn contains(&self, target: &Element) -> bool {
        self.elements
            .get(self.find_first_ge(target))
            .is_some_and(|element| element == target)
    }
}
