// crates/manifest-render-core/src/jobs.rs
// ============================================================================
// Module: Built-In Job Templates
// Description: Canonical template tables for the volume-services jobs.
// Purpose: Define each job's flags, env entries, and lifecycle bodies once,
//          in one fixed order, instead of scattered conditionals.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! One canonical table per job. The driver start template covers the full
//! smbdriver invocation including the TLS flag group and the independent
//! SSL-verification toggle; the broker templates cover the pushed broker's
//! start script and its app-manifest env block, where the UAA client
//! credentials are the sensitive entries subject to redaction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::template::EnvSpec;
use crate::core::template::EnvTemplate;
use crate::core::template::FlagSpec;
use crate::core::template::JobTemplate;
use crate::core::template::LifecycleTemplate;
use crate::core::template::TemplateError;
use crate::core::template::ValueFormat;
use crate::core::tree::KeyPath;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Driver binary invoked by the start script.
const DRIVER_BINARY: &str = "/var/vcap/packages/smbdriver/bin/smbdriver";
/// Directory where the driver job's rendered certificate files land.
const DRIVER_CERT_DIR: &str = "/var/vcap/jobs/smbdriver/config/certs";
/// Broker binary invoked by the pushed app's start script.
const BROKER_BINARY: &str = "bin/smbbroker";

// ============================================================================
// SECTION: Driver Start Template
// ============================================================================

/// Canonical flag table for the driver start invocation.
///
/// The five certificate-path flags and `--requireSSL` form one group gated
/// on the presence of the `tls` subtree; `--insecureSkipVerify` is gated on
/// its own boolean and is independent of that group.
///
/// # Errors
/// Returns a [`TemplateError`] only if the built-in table is malformed,
/// which is a programmer error.
pub fn driver_start_template() -> Result<JobTemplate, TemplateError> {
    let tls = KeyPath::new("tls")?;
    let cert = |file: &str| format!("{DRIVER_CERT_DIR}/{file}");
    JobTemplate::new(
        "smbdriver",
        vec!["exec".to_string(), DRIVER_BINARY.to_string()],
        vec![
            FlagSpec::value("--listenPort", KeyPath::new("listen_port")?, ValueFormat::Unquoted),
            FlagSpec::value("--debugAddr", KeyPath::new("debug_addr")?, ValueFormat::Quoted),
            FlagSpec::value("--driversPath", KeyPath::new("driver_path")?, ValueFormat::Quoted),
            FlagSpec::value("--mountDir", KeyPath::new("cell_mount_path")?, ValueFormat::Quoted),
            FlagSpec::value("--logLevel", KeyPath::new("log_level")?, ValueFormat::Quoted),
            FlagSpec::value("--timeFormat", KeyPath::new("log_time_format")?, ValueFormat::Quoted),
            FlagSpec::value(
                "--allowedInMount",
                KeyPath::new("allowed_in_mount")?,
                ValueFormat::Quoted,
            ),
            FlagSpec::value(
                "--defaultInMount",
                KeyPath::new("default_in_mount")?,
                ValueFormat::Quoted,
            ),
            FlagSpec::bare("--enableUniqueVolumeIDs", KeyPath::new("enable_unique_volume_ids")?),
            FlagSpec::grouped_bare("--requireSSL", tls.clone()),
            FlagSpec::grouped_literal("--caFile", &cert("ca.crt"), tls.clone()),
            FlagSpec::grouped_literal("--certFile", &cert("server.crt"), tls.clone()),
            FlagSpec::grouped_literal("--keyFile", &cert("server.key"), tls.clone()),
            FlagSpec::grouped_literal("--clientCertFile", &cert("client.crt"), tls.clone()),
            FlagSpec::grouped_literal("--clientKeyFile", &cert("client.key"), tls),
            FlagSpec::bare("--insecureSkipVerify", KeyPath::new("ssl.insecure_skip_verify")?),
        ],
    )
}

// ============================================================================
// SECTION: Broker Templates
// ============================================================================

/// Canonical flag table for the pushed broker's start invocation.
///
/// The listen address and services-config tokens are static anchors; the
/// UAA client id and secret are the sensitive flags subject to redaction.
///
/// # Errors
/// Returns a [`TemplateError`] only if the built-in table is malformed,
/// which is a programmer error.
pub fn broker_start_template() -> Result<JobTemplate, TemplateError> {
    JobTemplate::new(
        "smbbrokerpush",
        vec!["exec".to_string(), BROKER_BINARY.to_string()],
        vec![
            FlagSpec::literal("--listenAddr", "0.0.0.0:$PORT", ValueFormat::Quoted),
            FlagSpec::literal("--servicesConfig", "./services.json", ValueFormat::Quoted),
            FlagSpec::value("--credhubURL", KeyPath::new("credhub.url")?, ValueFormat::Quoted),
            FlagSpec::value(
                "--uaaClientID",
                KeyPath::new("credhub.uaa_client_id")?,
                ValueFormat::Quoted,
            )
            .sensitive(),
            FlagSpec::value(
                "--uaaClientSecret",
                KeyPath::new("credhub.uaa_client_secret")?,
                ValueFormat::Quoted,
            )
            .sensitive(),
            FlagSpec::value("--storeID", KeyPath::new("credhub.store_id")?, ValueFormat::Quoted),
            FlagSpec::value("--logLevel", KeyPath::new("log_level")?, ValueFormat::Quoted),
            FlagSpec::value("--timeFormat", KeyPath::new("log_time_format")?, ValueFormat::Quoted),
        ],
    )
}

/// Canonical env-entry table for the pushed broker's app manifest.
///
/// # Errors
/// Returns a [`TemplateError`] only if the built-in table is malformed,
/// which is a programmer error.
pub fn broker_env_template() -> Result<EnvTemplate, TemplateError> {
    EnvTemplate::new("smbbrokerpush", vec![
        EnvSpec::value("LOG_LEVEL", KeyPath::new("log_level")?),
        EnvSpec::value("LOG_TIME_FORMAT", KeyPath::new("log_time_format")?),
        EnvSpec::value("UAA_CLIENT_ID", KeyPath::new("credhub.uaa_client_id")?).sensitive(),
        EnvSpec::value("UAA_CLIENT_SECRET", KeyPath::new("credhub.uaa_client_secret")?).sensitive(),
    ])
}

// ============================================================================
// SECTION: Driver Lifecycle Templates
// ============================================================================

/// Pre-start script bodies switched by the `disable` gate.
///
/// # Errors
/// Returns a [`TemplateError`] only if the gate path is malformed, which is
/// a programmer error.
pub fn driver_prestart_template() -> Result<LifecycleTemplate, TemplateError> {
    Ok(LifecycleTemplate::new(
        "pre-start",
        KeyPath::new("disable")?,
        "#!/bin/bash\n\
         set -e\n\
         \n\
         mkdir -p /var/vcap/data/volumes\n\
         exit 0\n",
        "#!/bin/bash\n\
         # smbdriver is disabled for this deployment; pre-start is a no-op.\n",
    ))
}

/// Drain script bodies switched by the `disable` gate.
///
/// BOSH drain hooks report a wait duration on stdout; both bodies report
/// zero, but only the enabled body carries the success-exit marker.
///
/// # Errors
/// Returns a [`TemplateError`] only if the gate path is malformed, which is
/// a programmer error.
pub fn driver_drain_template() -> Result<LifecycleTemplate, TemplateError> {
    Ok(LifecycleTemplate::new(
        "drain",
        KeyPath::new("disable")?,
        "#!/bin/bash\n\
         \n\
         echo 0\n\
         exit 0\n",
        "#!/bin/bash\n\
         # smbdriver is disabled for this deployment; drain is a no-op.\n\
         echo 0\n",
    ))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
