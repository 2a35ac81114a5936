// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

use sortlink::{check_well_formed, Element, SortedLinkedList};

mod cli;
use cli::{display, parse_value, Cli, Commands, Input};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Sort {
            input,
            separator,
            json,
            removals,
        } => run_sort(&input, &separator, json, &removals),
        Commands::Check { input } => run_check(&input),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise `-v` flags pick the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Arguments if any were given, else stdin lines (blank lines skipped).
fn read_values(input: &Input) -> Result<Vec<Element>, String> {
    if !input.values.is_empty() {
        return Ok(input
            .values
            .iter()
            .map(|raw| parse_value(raw, input.text))
            .collect());
    }

    let stdin = io::stdin();
    let mut values = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read stdin: {}", e))?;
        if line.trim().is_empty() {
            continue;
        }
        values.push(parse_value(&line, input.text));
    }
    Ok(values)
}

fn build_list(input: &Input) -> Result<SortedLinkedList, String> {
    let mut list = SortedLinkedList::new();
    for value in read_values(input)? {
        list.insert(value).map_err(|e| e.to_string())?;
    }
    Ok(list)
}

fn run_sort(input: &Input, separator: &str, json: bool, removals: &[String]) -> Result<(), String> {
    let mut list = build_list(input)?;

    for raw in removals {
        let value = parse_value(raw, input.text);
        if !list.remove(&value).map_err(|e| e.to_string())? {
            eprintln!("not found: {}", value);
        }
    }

    if json {
        let out = serde_json::to_string(&list)
            .map_err(|e| format!("Failed to serialize list: {}", e))?;
        println!("{}", out);
    } else {
        println!("{}", list.render(separator));
    }
    Ok(())
}

fn run_check(input: &Input) -> Result<(), String> {
    let list = build_list(input)?;
    let result = check_well_formed(&list);
    display::print_check_report(list.kind(), list.len(), &result);
    result.map_err(|e| e.to_string())
}
