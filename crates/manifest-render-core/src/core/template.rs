// crates/manifest-render-core/src/core/template.rs
// ============================================================================
// Module: Flag and File Templates
// Description: Per-job template tables for flags, env blocks, lifecycle
//              scripts, and certificate slots.
// Purpose: Define each potential output once, in canonical order, with its
//          source path, emission condition, format, and sensitivity.
// Dependencies: crate::core::tree, serde, thiserror
// ============================================================================

//! ## Overview
//! A template is the full description of one artifact: which flags can
//! appear, in what canonical order, under which condition, and with what
//! formatting and redaction class. Templates are built in code and validated
//! at construction; a malformed template is a programmer error surfaced
//! immediately, never tolerated at render time.
//!
//! Conditions are deliberately few: always-present static tokens, emission
//! on source presence, emission on a boolean gate compared by identity, and
//! group emission on whole-subtree presence. Every built-in job template
//! fits these four.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::tree::KeyPath;
use crate::core::tree::PathError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building a template table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A flag or env entry name was empty.
    #[error("template {template:?} has an entry with an empty name")]
    EmptyName {
        /// Owning template name.
        template: String,
    },
    /// A flag name did not start with the `--` prefix.
    #[error("flag {name:?} in template {template:?} must start with --")]
    BadFlagName {
        /// Owning template name.
        template: String,
        /// The offending flag name.
        name: String,
    },
    /// Two entries share one name; canonical order would be ambiguous.
    #[error("template {template:?} defines {name:?} twice")]
    DuplicateName {
        /// Owning template name.
        template: String,
        /// The duplicated name.
        name: String,
    },
    /// A source key path failed validation.
    #[error(transparent)]
    Path(#[from] PathError),
}

// ============================================================================
// SECTION: Flag Model
// ============================================================================

/// How a flag's value is formatted when emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// `--name="value"`.
    Quoted,
    /// `--name=value`, for numeric/port style values.
    Unquoted,
    /// `--name` with no value argument.
    Bare,
}

/// Redaction class of a flag or env entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    /// Rendered in every mode.
    Public,
    /// Suppressed entirely when the render mode redacts.
    Sensitive,
}

/// Where a flag's value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSource {
    /// No value; only valid for bare flags.
    None,
    /// A leaf in the configuration tree.
    Path(KeyPath),
    /// A fixed literal baked into the template.
    Literal(String),
}

/// When a flag is emitted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagCondition {
    /// Static token, emitted unconditionally.
    Always,
    /// Emitted iff the flag's source path resolves to a value.
    SourcePresent,
    /// Emitted iff the gate leaf is present and identically `true`.
    BoolTrue(KeyPath),
    /// Emitted iff a whole subtree is present, independent of its contents.
    SubtreePresent(KeyPath),
}

/// One potential command-line flag.
///
/// # Invariants
/// - `Bare` format carries no source; `Quoted`/`Unquoted` carry exactly one.
/// - Constructors are the only way to build a spec, so the shape invariants
///   hold by construction; table-level checks happen in [`JobTemplate::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Flag name including the leading dashes.
    pub(crate) name: String,
    /// Value source.
    pub(crate) source: FlagSource,
    /// Emission format.
    pub(crate) format: ValueFormat,
    /// Emission condition.
    pub(crate) condition: FlagCondition,
    /// Redaction class.
    pub(crate) sensitivity: Sensitivity,
}

impl FlagSpec {
    /// Value flag sourced from the tree; suppressed when the key is absent.
    #[must_use]
    pub fn value(name: &str, source: KeyPath, format: ValueFormat) -> Self {
        Self {
            name: name.to_string(),
            source: FlagSource::Path(source),
            format,
            condition: FlagCondition::SourcePresent,
            sensitivity: Sensitivity::Public,
        }
    }

    /// Bare boolean flag emitted iff its gate leaf is identically `true`.
    #[must_use]
    pub fn bare(name: &str, gate: KeyPath) -> Self {
        Self {
            name: name.to_string(),
            source: FlagSource::None,
            format: ValueFormat::Bare,
            condition: FlagCondition::BoolTrue(gate),
            sensitivity: Sensitivity::Public,
        }
    }

    /// Static token with a fixed literal value, always emitted.
    #[must_use]
    pub fn literal(name: &str, value: &str, format: ValueFormat) -> Self {
        Self {
            name: name.to_string(),
            source: FlagSource::Literal(value.to_string()),
            format,
            condition: FlagCondition::Always,
            sensitivity: Sensitivity::Public,
        }
    }

    /// Bare flag emitted iff a whole subtree is present.
    #[must_use]
    pub fn grouped_bare(name: &str, subtree: KeyPath) -> Self {
        Self {
            name: name.to_string(),
            source: FlagSource::None,
            format: ValueFormat::Bare,
            condition: FlagCondition::SubtreePresent(subtree),
            sensitivity: Sensitivity::Public,
        }
    }

    /// Fixed-literal value flag emitted iff a whole subtree is present.
    #[must_use]
    pub fn grouped_literal(name: &str, value: &str, subtree: KeyPath) -> Self {
        Self {
            name: name.to_string(),
            source: FlagSource::Literal(value.to_string()),
            format: ValueFormat::Quoted,
            condition: FlagCondition::SubtreePresent(subtree),
            sensitivity: Sensitivity::Public,
        }
    }

    /// Marks the flag as sensitive for redacting render modes.
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitivity = Sensitivity::Sensitive;
        self
    }

    /// The flag name including leading dashes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// SECTION: Job Template
// ============================================================================

/// Ordered flag table for one job's invocation line.
///
/// # Invariants
/// - `flags` is the canonical emission order; render output never depends
///   on configuration input order.
/// - Flag names are unique and start with `--`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTemplate {
    /// Job name, for diagnostics.
    pub(crate) job: String,
    /// Fixed invocation tokens preceding every flag.
    pub(crate) prefix: Vec<String>,
    /// Flags in canonical order.
    pub(crate) flags: Vec<FlagSpec>,
}

impl JobTemplate {
    /// Builds and validates a job template.
    ///
    /// # Errors
    /// Returns a [`TemplateError`] for empty or malformed flag names and
    /// for duplicate names.
    pub fn new(job: &str, prefix: Vec<String>, flags: Vec<FlagSpec>) -> Result<Self, TemplateError> {
        for (index, flag) in flags.iter().enumerate() {
            if flag.name.is_empty() {
                return Err(TemplateError::EmptyName {
                    template: job.to_string(),
                });
            }
            if !flag.name.starts_with("--") {
                return Err(TemplateError::BadFlagName {
                    template: job.to_string(),
                    name: flag.name.clone(),
                });
            }
            if flags[..index].iter().any(|earlier| earlier.name == flag.name) {
                return Err(TemplateError::DuplicateName {
                    template: job.to_string(),
                    name: flag.name.clone(),
                });
            }
        }
        Ok(Self {
            job: job.to_string(),
            prefix,
            flags,
        })
    }

    /// Job name.
    #[must_use]
    pub fn job(&self) -> &str {
        &self.job
    }

    /// Flags in canonical order.
    #[must_use]
    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }
}

// ============================================================================
// SECTION: Environment Template
// ============================================================================

/// One environment entry in an app-manifest env block.
///
/// # Invariants
/// - Absent source suppresses the line entirely; no empty default is
///   emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSpec {
    /// Environment variable name.
    pub(crate) name: String,
    /// Source leaf in the configuration tree.
    pub(crate) source: KeyPath,
    /// Redaction class.
    pub(crate) sensitivity: Sensitivity,
}

impl EnvSpec {
    /// Public env entry sourced from the tree.
    #[must_use]
    pub fn value(name: &str, source: KeyPath) -> Self {
        Self {
            name: name.to_string(),
            source,
            sensitivity: Sensitivity::Public,
        }
    }

    /// Marks the entry as sensitive for redacting render modes.
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitivity = Sensitivity::Sensitive;
        self
    }
}

/// Ordered env-entry table for one job's app manifest.
///
/// # Invariants
/// - Entry order is canonical; names are unique and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvTemplate {
    /// Job name, for diagnostics.
    pub(crate) job: String,
    /// Entries in canonical order.
    pub(crate) entries: Vec<EnvSpec>,
}

impl EnvTemplate {
    /// Builds and validates an env template.
    ///
    /// # Errors
    /// Returns a [`TemplateError`] for empty or duplicate entry names.
    pub fn new(job: &str, entries: Vec<EnvSpec>) -> Result<Self, TemplateError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(TemplateError::EmptyName {
                    template: job.to_string(),
                });
            }
            if entries[..index].iter().any(|earlier| earlier.name == entry.name) {
                return Err(TemplateError::DuplicateName {
                    template: job.to_string(),
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self {
            job: job.to_string(),
            entries,
        })
    }

    /// Job name.
    #[must_use]
    pub fn job(&self) -> &str {
        &self.job
    }
}

// ============================================================================
// SECTION: Lifecycle Template
// ============================================================================

/// Two-state lifecycle script switched by a boolean gate.
///
/// # Invariants
/// - The two bodies are disjoint; rendering selects exactly one and never
///   blends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleTemplate {
    /// Script name, for diagnostics.
    pub(crate) script: String,
    /// Gate path; present-true selects the disabled body.
    pub(crate) gate: KeyPath,
    /// Body rendered when the component is enabled.
    pub(crate) enabled_body: String,
    /// Body rendered when the component is disabled.
    pub(crate) disabled_body: String,
}

impl LifecycleTemplate {
    /// Builds a lifecycle template.
    #[must_use]
    pub fn new(script: &str, gate: KeyPath, enabled_body: &str, disabled_body: &str) -> Self {
        Self {
            script: script.to_string(),
            gate,
            enabled_body: enabled_body.to_string(),
            disabled_body: disabled_body.to_string(),
        }
    }

    /// Script name.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }
}

// ============================================================================
// SECTION: Certificate Slots
// ============================================================================

/// Named output file position for one PEM artifact.
///
/// # Invariants
/// - Each slot maps 1:1 to a file name and a leaf under the TLS subtree;
///   no flag logic applies to slot content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateSlot {
    /// Certificate authority bundle.
    CaCert,
    /// Client certificate.
    ClientCert,
    /// Client private key.
    ClientKey,
    /// Server certificate.
    ServerCert,
    /// Server private key.
    ServerKey,
}

impl CertificateSlot {
    /// All slots in canonical emission order.
    pub const ALL: [Self; 5] = [
        Self::CaCert,
        Self::ClientCert,
        Self::ClientKey,
        Self::ServerCert,
        Self::ServerKey,
    ];

    /// Output file name for the slot.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::CaCert => "ca.crt",
            Self::ClientCert => "client.crt",
            Self::ClientKey => "client.key",
            Self::ServerCert => "server.crt",
            Self::ServerKey => "server.key",
        }
    }

    /// Dotted source path of the slot's leaf in the configuration tree.
    #[must_use]
    pub const fn source_key(self) -> &'static str {
        match self {
            Self::CaCert => "tls.ca_cert",
            Self::ClientCert => "tls.client_cert",
            Self::ClientKey => "tls.client_key",
            Self::ServerCert => "tls.server_cert",
            Self::ServerKey => "tls.server_key",
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
