// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sorted linked list.
//!
//! A singly linked chain of boxed nodes. The list owns the head, each node owns
//! its successor, and nothing else ever points at a node. Every public method
//! leaves the chain non-decreasing under [`compare`], with all elements of the
//! list's [`Kind`].
//!
//! # Algorithms
//!
//! Insert and remove both walk a `&mut Option<Box<Node>>` cursor down the chain
//! and splice at the cursor. Insert stops at the first element strictly greater
//! than the new value, so equal values queue up in arrival order. Remove stops at
//! the first element *equal* to the target; it does not cut the scan short when
//! it passes larger values.
//!
//! # Kind resolution
//!
//! Every call that takes a value resolves the kind first: `insert`, `remove`
//! and `contains` alike. On an `Unset` list the value's kind becomes the
//! list's kind, even when the call finds nothing. On a set list a value of the
//! other kind fails with [`ListError::TypeMismatch`] before anything is
//! touched. The kind lives in a `Cell` so `contains` can resolve it through
//! `&self`; the list is therefore not `Sync`.

use crate::error::ListError;
use crate::ordering::compare;
use crate::types::{Element, Kind};
use crate::verify::contracts;
use crate::verify::SortedSequence;
use serde::{Serialize, Serializer};
use std::cell::Cell;
use std::fmt;
use tracing::{debug, trace};

/// Separator used by `Display` and [`SortedLinkedList::render`] callers that
/// have no preference.
pub const DEFAULT_SEPARATOR: &str = ", ";

type Link = Option<Box<Node>>;

struct Node {
    value: Element,
    next: Link,
}

/// A linked list that keeps integers or text (never both) in sorted order.
///
/// # Example
///
/// ```
/// use sortlink::{Kind, SortedLinkedList};
///
/// let mut list = SortedLinkedList::new();
/// list.insert("banana")?;
/// list.insert("apple")?;
/// list.insert("cherry")?;
///
/// assert_eq!(list.kind(), Kind::Text);
/// assert_eq!(list.to_string(), "apple, banana, cherry");
/// assert!(list.insert(42).is_err());
/// # Ok::<(), sortlink::ListError>(())
/// ```
#[derive(Default)]
pub struct SortedLinkedList {
    head: Link,
    kind: Cell<Kind>,
    len: usize,
}

impl SortedLinkedList {
    /// Create an empty list with no kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value at its sorted position.
    ///
    /// The first value-taking call on an unset list fixes the kind. Equal values
    /// go after the ones already present.
    pub fn insert(&mut self, value: impl Into<Element>) -> Result<(), ListError> {
        let value = value.into();
        self.admit(&value)?;

        let mut at = 0;
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| compare(&node.value, &value).is_le())
        {
            if let Some(node) = cursor {
                cursor = &mut node.next;
                at += 1;
            }
        }

        trace!(value = %value, position = at, "insert");
        // INVARIANT: CHAIN_SORTED
        let next = cursor.take();
        let node = cursor.insert(Box::new(Node { value, next }));
        contracts::check_element_kind(&node.value, self.kind.get());
        self.len += 1;
        contracts::check_splice_ordered(self, at);
        Ok(())
    }

    /// Remove the first element equal to `value`.
    ///
    /// Returns `Ok(false)` when no such element exists; the chain is untouched,
    /// though an `Unset` list still takes the value's kind.
    pub fn remove(&mut self, value: impl Into<Element>) -> Result<bool, ListError> {
        let value = value.into();
        self.admit(&value)?;

        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        let Some(removed) = cursor.take() else {
            trace!(value = %value, "remove: not found");
            return Ok(false);
        };
        // INVARIANT: LEN_MATCHES_CHAIN
        *cursor = removed.next;
        self.len -= 1;

        trace!(value = %value, "remove: found");
        contracts::check_len_matches_emptiness(self.len, self.is_empty());
        Ok(true)
    }

    /// Whether an element exactly equal to `value` is in the list.
    ///
    /// Like `insert`, fixes the kind of an `Unset` list.
    pub fn contains(&self, value: impl Into<Element>) -> Result<bool, ListError> {
        let value = value.into();
        self.admit(&value)?;
        Ok(self.iter().any(|element| *element == value))
    }

    /// Drop every element and forget the kind.
    pub fn clear(&mut self) {
        // INVARIANT: KIND_UNSET_ONLY_AFTER_CLEAR
        self.release_chain();
        let kind = self.kind.replace(Kind::Unset);
        if kind.is_set() {
            debug!(kind = %kind, released = self.len, "list cleared");
        }
        self.len = 0;
    }

    /// The kind the list has committed to.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind.get()
    }

    /// Whether the chain has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Copy the elements out, head to tail.
    ///
    /// The vector is a snapshot; later changes to the list do not show up in it.
    pub fn to_vec(&self) -> Vec<Element> {
        self.iter().cloned().collect()
    }

    /// A validated snapshot of the current contents.
    pub fn snapshot(&self) -> SortedSequence {
        SortedSequence::from_list(self)
    }

    /// Join the elements' text forms with `separator`.
    ///
    /// An empty list renders as the empty string.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&element.to_string());
        }
        out
    }

    /// Unlink one node at a time. Dropping the head directly would recurse once
    /// per node through the boxed chain.
    fn release_chain(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Fix the kind on first use, or reject a value of the other kind.
    fn admit(&self, value: &Element) -> Result<(), ListError> {
        let found = value.kind();
        // INVARIANT: SINGLE_KIND
        match self.kind.get() {
            Kind::Unset => {
                self.kind.set(found);
                debug!(kind = %found, "list kind established");
                Ok(())
            }
            expected if expected != found => {
                debug!(expected = %expected, found = %found, "rejected value of the wrong kind");
                Err(ListError::TypeMismatch { expected, found })
            }
            _ => Ok(()),
        }
    }
}

impl Drop for SortedLinkedList {
    fn drop(&mut self) {
        self.release_chain();
    }
}

impl fmt::Debug for SortedLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for SortedLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}

impl Serialize for SortedLinkedList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// =============================================================================
// ITERATION
// =============================================================================

/// Borrowing iterator over a [`SortedLinkedList`], head to tail.
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SortedLinkedList {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
