// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values a list holds and the kind marker that pins them down.
//!
//! A list accepts integers or text, never both. Whichever kind arrives first
//! wins, and the list remembers it in a three-state [`Kind`] until cleared.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Element**: carries exactly one of `i64` or `String`. The tag is the kind;
//!   there is no untyped escape hatch.
//!
//! - **Kind**: `Unset` only while nothing has been inserted since creation or the
//!   last `clear`. Once `Integer` or `Text`, it stays that way.
//!
//! Equality on [`Element`] is exact: same tag, same value. Ordering lives in
//! `ordering` and is only ever asked about two elements of the same kind.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ELEMENT
// =============================================================================

/// A single list value: an integer or a piece of text.
///
/// Serialized untagged, so JSON numbers become `Integer` and JSON strings
/// become `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Integer(i64),
    Text(String),
}

impl Element {
    /// The kind this element would pin an empty list to.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Element::Integer(_) => Kind::Integer,
            Element::Text(_) => Kind::Text,
        }
    }

    /// The integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Element::Integer(n) => Some(*n),
            Element::Text(_) => None,
        }
    }

    /// The text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Integer(_) => None,
            Element::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(n) => write!(f, "{}", n),
            Element::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Integer(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Integer(i64::from(value))
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

impl From<&Element> for Element {
    fn from(value: &Element) -> Self {
        value.clone()
    }
}

// =============================================================================
// KIND
// =============================================================================

/// Which kind of element a list has committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Nothing inserted yet (or cleared since).
    #[default]
    Unset,
    Integer,
    Text,
}

impl Kind {
    /// Whether an element has already fixed this kind.
    #[inline]
    pub fn is_set(self) -> bool {
        self != Kind::Unset
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Unset => "unset",
            Kind::Integer => "integer",
            Kind::Text => "text",
        };
        f.write_str(name)
    }
}
