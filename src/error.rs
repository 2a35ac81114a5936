// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by list operations.
//!
//! There is exactly one way to misuse a list: hand it a value of the other
//! kind. Looking for an absent value is not an error, it is `Ok(false)`.

use crate::types::Kind;
use std::fmt;

/// Error type for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The value's kind disagrees with the kind the list already holds.
    ///
    /// The list is left exactly as it was before the call.
    TypeMismatch { expected: Kind, found: Kind },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::TypeMismatch { expected, found } => {
                write!(
                    f,
                    "type mismatch: list holds {} values, got {} value",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for ListError {}
