// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validated snapshots and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`SortedSequence`) that can only be built from
//!    sorted, single-kind data. If you hold one, it satisfies the invariant.
//!
//! 2. **Runtime contracts** that panic in debug builds when a list's chain
//!    stops being sorted or single-kind.
//!
//! Use both. `check_well_formed` is the non-panicking version of the contracts
//! for callers that want a `Result`.

mod types;
pub mod contracts;

pub use types::*;
