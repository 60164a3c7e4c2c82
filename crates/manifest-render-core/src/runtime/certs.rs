// crates/manifest-render-core/src/runtime/certs.rs
// ============================================================================
// Module: Certificate Emitter
// Description: Pass-through emission of certificate and key file content.
// Purpose: Map each certificate slot to the exact bytes of its source leaf.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Certificate slots carry pass-through secrets: the output file content is
//! exactly the source leaf's string value with no quoting, transformation,
//! or trailing processing. An absent leaf produces an empty artifact, which
//! downstream supervision treats as "feature disabled", never as an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::artifact::RenderedArtifact;
use crate::core::template::CertificateSlot;
use crate::core::tree::ConfigTree;
use crate::core::tree::ConfigValue;
use crate::core::tree::KeyPath;
use crate::runtime::RenderError;

// ============================================================================
// SECTION: Certificate Rendering
// ============================================================================

/// Renders the file content for one certificate slot.
///
/// # Errors
/// Returns a [`RenderError`] when the slot's leaf is present but not a
/// string. Absence is not an error; it yields an empty artifact.
pub fn render_certificate(
    slot: CertificateSlot,
    tree: &ConfigTree,
) -> Result<RenderedArtifact, RenderError> {
    let path = KeyPath::new(slot.source_key())?;
    match tree.get(&path) {
        None => Ok(RenderedArtifact::empty()),
        Some(ConfigValue::String(text)) => Ok(RenderedArtifact::new(text.clone())),
        Some(other) => Err(RenderError::TransformMismatch {
            name: slot.file_name().to_string(),
            expected: "string leaf",
            found: other.kind(),
        }),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
