// crates/manifest-render-core/src/runtime/mod.rs
// ============================================================================
// Module: Render Runtime
// Description: Pure render paths from tree + template to artifact text.
// Purpose: Evaluate templates deterministically with fail-fast mismatches.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The runtime walks a template table against a configuration tree and
//! produces artifact text. Every path is synchronous, stateless, and free of
//! I/O; identical inputs produce byte-identical output. Missing optional
//! keys suppress output; a value whose kind does not fit the declared
//! transform is a fail-fast [`RenderError`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod certs;
pub mod environment;
pub mod flags;
pub mod lifecycle;

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::tree::PathError;

// ============================================================================
// SECTION: Render Mode
// ============================================================================

/// Redaction policy for one render call.
///
/// Some deployments render credentials into the start line while others
/// strip them, so neither behavior is baked in; the mode is an explicit
/// parameter on every flag and env render path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Sensitive entries render like any other entry.
    #[default]
    Expose,
    /// Sensitive entries are suppressed entirely, values and names alike.
    Redact,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while rendering a template.
///
/// Missing optional keys are never errors; these cover template/value
/// mismatches, which are programmer or configuration errors surfaced
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A resolved value's kind does not fit the declared transform.
    #[error("{name}: expected {expected}, found {found}")]
    TransformMismatch {
        /// Flag, entry, or slot name being rendered.
        name: String,
        /// What the template declared.
        expected: &'static str,
        /// What the tree supplied.
        found: &'static str,
    },
    /// A built-in source path failed validation.
    #[error(transparent)]
    Path(#[from] PathError),
}
