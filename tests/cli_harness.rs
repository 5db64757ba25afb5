#![allow(unused)]
//! CLI process-level integration harness.
//!
//! # What this covers
//!
//! Exercises `stringscope` as a compiled binary via [`std::process::Command`]:
//!
//! - `analyze <value>` prints the full record as JSON on stdout.
//! - `translate <query>` prints the parsed filters as JSON on stdout,
//!   `{}` for an unrecognised query, and still exits 0.
//! - Bad invocations exit non-zero.
//!
//! # What this does NOT cover
//!
//! - `serve` (the router is covered in-process by `api_harness`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test cli_harness
//! ```

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::process::Command;

fn stringscope() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stringscope"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("failed to run stringscope");
    assert!(
        output.status.success(),
        "stringscope failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn analyze_prints_record() {
    let record = stdout_json(stringscope().args(["analyze", "Racecar"]));
    assert_eq!(record["value"], "Racecar");
    assert_eq!(record["properties"]["is_palindrome"], true);
    assert_eq!(record["properties"]["length"], 7);
    assert_eq!(record["properties"]["unique_characters"], 5);
    assert_eq!(record["id"], record["properties"]["sha256_hash"]);
}

#[test]
fn translate_prints_parsed_filters() {
    let parsed = stdout_json(stringscope().args(["translate", "strings longer than 10 characters"]));
    assert_eq!(parsed, json!({ "min_length": 11 }));
}

#[test]
fn translate_unrecognised_query_prints_empty_object() {
    let parsed = stdout_json(stringscope().args(["translate", "gibberish xyzzy"]));
    assert_eq!(parsed, json!({}));
}

#[test]
fn missing_subcommand_exits_nonzero() {
    let status = stringscope().status().unwrap();
    assert!(!status.success());
}

#[test]
fn missing_explicit_config_exits_nonzero() {
    let status = stringscope()
        .args(["--config", "/definitely/not/here.toml", "analyze", "x"])
        .status()
        .unwrap();
    assert!(!status.success());
}
