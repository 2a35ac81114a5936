// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sortlink command-line interface.
//!
//! Two subcommands: `sort` feeds values through a list and prints the result,
//! `check` builds the same list and runs the well-formedness check on it.
//! Values come from the arguments, or one per line from stdin when there are
//! none.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use sortlink::{Element, DEFAULT_SEPARATOR};

#[derive(Parser)]
#[command(
    name = "sortlink",
    about = "Sort integers or text through a single-kind linked list",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where values come from and how they are read.
#[derive(Args)]
pub struct Input {
    /// Values to insert; read from stdin (one per line) when omitted
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Treat every value as text, even ones that parse as integers
    #[arg(long)]
    pub text: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert values and print them in sorted order
    Sort {
        #[command(flatten)]
        input: Input,

        /// String placed between rendered values
        #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
        separator: String,

        /// Print a JSON array instead of joined text
        #[arg(long)]
        json: bool,

        /// Remove one occurrence of this value after inserting (repeatable)
        #[arg(short, long = "remove", value_name = "VALUE")]
        removals: Vec<String>,
    },

    /// Build the list and verify its invariants
    Check {
        #[command(flatten)]
        input: Input,
    },
}

/// Read one raw token as a list element.
///
/// Anything that parses as an `i64` is an integer unless `force_text` is set.
pub fn parse_value(raw: &str, force_text: bool) -> Element {
    if !force_text {
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Element::Integer(n);
        }
    }
    Element::Text(raw.to_string())
}
