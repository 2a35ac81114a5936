// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A sorted, single-kind linked list.
//!
//! [`SortedLinkedList`] holds integers or text, never both, and keeps them in
//! non-decreasing order as they arrive. The first value the list sees, through
//! `insert`, `remove` or `contains`, decides the kind; any later value of the
//! other kind is rejected with [`ListError::TypeMismatch`] and the list is left
//! exactly as it was. `clear` forgets the kind again.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│   list.rs    │◀────│ ordering.rs │
//! │ (Element,   │     │ (insert,     │     │  (compare)  │
//! │  Kind)      │     │  remove, …)  │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                         │
//! │  (SortedSequence, check_well_formed, contracts)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Ordering
//!
//! Integers compare as signed numbers. Text compares byte by byte: `"Zebra"`
//! sorts before `"apple"`, and `"10"` before `"9"`. Equal values are kept in
//! insertion order.
//!
//! # Usage
//!
//! ```
//! use sortlink::{Element, SortedLinkedList};
//!
//! let mut list = SortedLinkedList::new();
//! for n in [5, 1, 3] {
//!     list.insert(n)?;
//! }
//! assert_eq!(list.to_vec(), vec![Element::from(1), Element::from(3), Element::from(5)]);
//! assert!(list.remove(3)?);
//! assert!(!list.contains(3)?);
//! assert_eq!(list.render("|"), "1|5");
//! # Ok::<(), sortlink::ListError>(())
//! ```

// Module declarations
mod error;
mod list;
mod ordering;
mod types;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use error::ListError;
pub use list::{Iter, SortedLinkedList, DEFAULT_SEPARATOR};
pub use types::{Element, Kind};
pub use verify::{check_well_formed, InvariantError, SortedSequence};
