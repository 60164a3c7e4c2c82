// crates/manifest-render-cli/src/main_tests.rs
// ============================================================================
// Module: Manifest Render CLI Unit Tests
// Description: Unit coverage for properties loading and output helpers.
// Purpose: Exercise the CLI's file handling against real temp files.
// Dependencies: manifest-render-core, tempfile
// ============================================================================

//! ## Overview
//! Unit tests for the binary's internals: properties loading with the
//! size cap, render mode mapping, and artifact writing to disk.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;

use manifest_render_core::RenderMode;
use tempfile::TempDir;

use super::MAX_PROPERTIES_FILE_SIZE;
use super::load_properties;
use super::render_mode;
use super::write_artifact;

/// Test result alias carrying a readable failure message.
type TestResult = Result<(), String>;

/// Fails with the given message when the condition does not hold.
fn ensure(condition: bool, message: &str) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(message.to_owned())
    }
}

#[test]
fn load_properties_parses_yaml_mapping() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("properties.yml");
    fs::write(&path, "smbdriver:\n  listen_port: 1111\n  require_ssl: true\n")
        .map_err(|err| err.to_string())?;

    let tree = load_properties(&path).map_err(|err| err.to_string())?;
    ensure(tree.len() == 1, "one top-level key expected")
}

#[test]
fn load_properties_rejects_missing_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.yml");

    let result = load_properties(&path);
    ensure(result.is_err(), "missing file must be an error")
}

#[test]
fn load_properties_rejects_oversized_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("huge.yml");
    let oversized = usize::try_from(MAX_PROPERTIES_FILE_SIZE)
        .map_err(|err| err.to_string())?
        + 1;
    fs::write(&path, "#".repeat(oversized)).map_err(|err| err.to_string())?;

    let result = load_properties(&path);
    ensure(result.is_err(), "oversized file must be rejected before parsing")
}

#[test]
fn load_properties_rejects_scalar_document() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("scalar.yml");
    fs::write(&path, "just-a-string\n").map_err(|err| err.to_string())?;

    let result = load_properties(&path);
    ensure(result.is_err(), "non-mapping document must be rejected")
}

#[test]
fn render_mode_maps_redact_toggle() -> TestResult {
    ensure(render_mode(true) == RenderMode::Redact, "redact toggle on")?;
    ensure(render_mode(false) == RenderMode::Expose, "redact toggle off")
}

#[test]
fn write_artifact_creates_output_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("start.sh");

    write_artifact(Some(&path), "exec bin/smbbroker\n").map_err(|err| err.to_string())?;
    let written = fs::read_to_string(&path).map_err(|err| err.to_string())?;
    ensure(written == "exec bin/smbbroker\n", "written text must match")
}
