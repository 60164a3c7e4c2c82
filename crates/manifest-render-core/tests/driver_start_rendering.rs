// crates/manifest-render-core/tests/driver_start_rendering.rs
// ============================================================================
// Module: Driver Start Rendering Tests
// Description: End-to-end rendering of the driver start invocation.
// Purpose: Validate the full driver flag table against manifest properties.
// Dependencies: manifest-render-core, serde_json
// ============================================================================

//! ## Overview
//! Renders the driver start template against the property shapes real
//! deployments use: fully configured, configured without TLS, and
//! configured with TLS but SSL verification left on.

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

mod common;

use common::TestResult;
use common::ensure;
use common::tree;
use manifest_render_core::RenderMode;
use manifest_render_core::jobs::driver_start_template;
use manifest_render_core::render_invocation;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// The fully configured property set.
fn full_properties() -> serde_json::Value {
    json!({
        "listen_port": "1111",
        "debug_addr": "2222",
        "driver_path": "/some/driver/path",
        "cell_mount_path": "/some/cell/mount/path",
        "log_level": "some-log-level",
        "log_time_format": "some-log-time-format",
        "allowed_in_mount": "some,options",
        "default_in_mount": "some,default,options",
        "enable_unique_volume_ids": true,
        "tls": { "ca_cert": "some-ca-cert" },
        "ssl": { "insecure_skip_verify": true },
    })
}

// ============================================================================
// SECTION: Fully Configured
// ============================================================================

/// Tests the fully configured invocation line.
#[test]
fn test_fully_configured_invocation() -> TestResult {
    let template = driver_start_template().map_err(|err| err.to_string())?;
    let rendered = render_invocation(&template, &tree(full_properties()), RenderMode::Expose)
        .map_err(|err| err.to_string())?;

    ensure(rendered.contains("--listenPort=1111"), "Expected unquoted listen port")?;
    ensure(rendered.contains("--debugAddr=\"2222\""), "Expected quoted debug address")?;
    ensure(
        rendered.contains("--driversPath=\"/some/driver/path\""),
        "Expected quoted drivers path",
    )?;
    ensure(
        rendered.contains("--mountDir=\"/some/cell/mount/path\""),
        "Expected quoted mount dir",
    )?;
    ensure(rendered.contains("--logLevel=\"some-log-level\""), "Expected quoted log level")?;
    ensure(
        rendered.contains("--timeFormat=\"some-log-time-format\""),
        "Expected quoted time format",
    )?;
    ensure(
        rendered.contains("--allowedInMount=\"some,options\""),
        "Expected quoted allowed mount options",
    )?;
    ensure(
        rendered.contains("--defaultInMount=\"some,default,options\""),
        "Expected quoted default mount options",
    )?;
    ensure(rendered.contains("--enableUniqueVolumeIDs"), "Expected unique volume IDs toggle")?;
    ensure(rendered.contains("--requireSSL"), "Expected requireSSL with a TLS subtree")?;
    ensure(rendered.contains("/ca.crt"), "Expected CA cert path flag")?;
    ensure(rendered.contains("/server.crt"), "Expected server cert path flag")?;
    ensure(rendered.contains("/server.key"), "Expected server key path flag")?;
    ensure(rendered.contains("/client.crt"), "Expected client cert path flag")?;
    ensure(rendered.contains("/client.key"), "Expected client key path flag")?;
    ensure(rendered.contains("--insecureSkipVerify"), "Expected skip-verify toggle")?;
    ensure(
        rendered.as_str().starts_with("exec /var/vcap/packages/smbdriver/bin/smbdriver "),
        "Expected the fixed invocation prefix to anchor the line",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: TLS Group Gating
// ============================================================================

/// Tests that dropping the TLS subtree drops the whole flag group.
#[test]
fn test_no_tls_subtree_drops_cert_group() -> TestResult {
    let mut properties = full_properties();
    if let Some(map) = properties.as_object_mut() {
        map.remove("tls");
    }
    let template = driver_start_template().map_err(|err| err.to_string())?;
    let rendered = render_invocation(&template, &tree(properties), RenderMode::Expose)
        .map_err(|err| err.to_string())?;

    ensure(!rendered.contains("--requireSSL"), "requireSSL must follow the TLS subtree")?;
    for needle in ["/ca.crt", "/server.crt", "/server.key", "/client.crt", "/client.key"] {
        ensure(!rendered.contains(needle), "Cert path flags must follow the TLS subtree")?;
    }
    ensure(
        rendered.contains("--insecureSkipVerify"),
        "Skip-verify toggle is independent of TLS presence",
    )?;
    Ok(())
}

/// Tests the TLS group with SSL verification left on.
#[test]
fn test_tls_present_with_verification_on() -> TestResult {
    let properties = json!({
        "tls": { "ca_cert": "some-ca-cert" },
        "ssl": { "insecure_skip_verify": false },
    });
    let template = driver_start_template().map_err(|err| err.to_string())?;
    let rendered = render_invocation(&template, &tree(properties), RenderMode::Expose)
        .map_err(|err| err.to_string())?;

    ensure(rendered.contains("--requireSSL"), "Expected requireSSL with a TLS subtree")?;
    for needle in ["/ca.crt", "/server.crt", "/server.key", "/client.crt", "/client.key"] {
        ensure(rendered.contains(needle), "Expected the full cert flag group")?;
    }
    ensure(
        !rendered.contains("--insecureSkipVerify"),
        "present-false must suppress the skip-verify toggle",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Optional Keys
// ============================================================================

/// Tests that missing optional keys suppress their flags without defaults.
#[test]
fn test_missing_optional_keys_render_nothing() -> TestResult {
    let template = driver_start_template().map_err(|err| err.to_string())?;
    let rendered = render_invocation(&template, &tree(json!({})), RenderMode::Expose)
        .map_err(|err| err.to_string())?;

    ensure(
        rendered.as_str() == "exec /var/vcap/packages/smbdriver/bin/smbdriver",
        "An empty tree must render only the fixed prefix",
    )?;
    Ok(())
}
