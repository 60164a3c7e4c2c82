// crates/manifest-render-core/src/lib.rs
// ============================================================================
// Module: Manifest Render Core
// Description: Conditional rendering of deployment properties into artifacts.
// Purpose: Derive start invocations, cert files, and lifecycle bodies from
//          a configuration tree and a per-job template table.
// Dependencies: serde, serde_json, thiserror, tri-presence
// ============================================================================

//! ## Overview
//! This crate turns a nested configuration tree of deployment properties
//! into the concrete text artifacts consumed by service-start tooling: a
//! flag-bearing invocation line, standalone certificate and key files, an
//! environment block, and a two-state lifecycle script body.
//!
//! Rendering is a pure function of the tree, the template, and the render
//! mode. Identical inputs always produce byte-identical output; flag order
//! is the canonical order of the template table, never input order. Missing
//! optional keys suppress output and are never errors; template/value
//! mismatches fail fast.
//!
//! Security posture: property trees are untrusted input; conversion enforces
//! hard size and depth limits and rejects value kinds the model does not
//! carry.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod jobs;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::artifact::RenderedArtifact;
pub use crate::core::template::CertificateSlot;
pub use crate::core::template::EnvSpec;
pub use crate::core::template::EnvTemplate;
pub use crate::core::template::FlagCondition;
pub use crate::core::template::FlagSource;
pub use crate::core::template::FlagSpec;
pub use crate::core::template::JobTemplate;
pub use crate::core::template::LifecycleTemplate;
pub use crate::core::template::Sensitivity;
pub use crate::core::template::TemplateError;
pub use crate::core::template::ValueFormat;
pub use crate::core::tree::ConfigTree;
pub use crate::core::tree::ConfigValue;
pub use crate::core::tree::KeyPath;
pub use crate::core::tree::PathError;
pub use crate::core::tree::TreeError;
pub use crate::runtime::RenderError;
pub use crate::runtime::RenderMode;
pub use crate::runtime::certs::render_certificate;
pub use crate::runtime::environment::render_env_block;
pub use crate::runtime::flags::render_invocation;
pub use crate::runtime::lifecycle::render_lifecycle;
