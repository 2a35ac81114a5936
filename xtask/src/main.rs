//! Custom cargo commands for sortlink.
//!
//! Usage:
//!   cargo xtask verify    - Markers, tests, clippy, Kani harness tests
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask fuzz      - Run the operation-sequence fuzzer
//!   cargo xtask kani      - Run the Kani proofs
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The list's core invariants, each tagged once in `src/list.rs`.
const INVARIANT_MARKERS: &[&str] = &[
    "CHAIN_SORTED",
    "LEN_MATCHES_CHAIN",
    "SINGLE_KIND",
    "KIND_UNSET_ONLY_AFTER_CLEAR",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    let extra: Vec<String> = env::args().skip(2).collect();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("fuzz") => fuzz(&extra)?,
        Some("kani") => kani()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Invariant markers, tests, clippy, Kani harness unit tests
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  fuzz      Run the operation_sequence fuzz target (extra args go to libFuzzer)
  kani      Run the Kani proofs (needs cargo-kani)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sortlink Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Testing Kani harness model...");
    run_cargo_in(&project_root()?.join("kani-proofs"), &["test", "--quiet"])?;
    println!("✓ Harness model tests passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run the fuzzer (requires cargo-fuzz and a nightly toolchain)
fn fuzz(extra: &[String]) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let mut args = vec!["fuzz", "run", "operation_sequence"];
    if !extra.is_empty() {
        args.push("--");
        args.extend(extra.iter().map(String::as_str));
    }
    run_cargo_in(&fuzz_dir, &args)
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }
    run_cargo_in(&kani_dir, &["kani"])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed in {}", args, dir.display());
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let list_rs = project_root()?.join("src/list.rs");
    let source = std::fs::read_to_string(&list_rs)
        .with_context(|| format!("Failed to read {}", list_rs.display()))?;

    let missing: Vec<&str> = INVARIANT_MARKERS
        .iter()
        .copied()
        .filter(|name| !source.contains(&format!("INVARIANT: {}", name)))
        .collect();

    if !missing.is_empty() {
        bail!(
            "Missing INVARIANT markers in src/list.rs: {}. Someone may have removed safety comments!",
            missing.join(", ")
        );
    }

    Ok(())
}
