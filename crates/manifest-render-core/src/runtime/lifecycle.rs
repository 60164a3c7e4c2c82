// crates/manifest-render-core/src/runtime/lifecycle.rs
// ============================================================================
// Module: Lifecycle Gate
// Description: Two-state lifecycle script body selection.
// Purpose: Switch a script between its enabled and disabled bodies on a
//          single boolean gate, evaluated once per render.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! The lifecycle gate is a binary branch, not a flag list: present-true on
//! the gate path selects the disabled body, present-false or absent selects
//! the enabled body. The two bodies never blend, and the gate is independent
//! of all flag logic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::artifact::RenderedArtifact;
use crate::core::template::LifecycleTemplate;
use crate::core::tree::ConfigTree;
use crate::core::tree::ConfigValue;
use crate::runtime::RenderError;

// ============================================================================
// SECTION: Lifecycle Rendering
// ============================================================================

/// Renders the lifecycle script body selected by the gate.
///
/// # Errors
/// Returns a [`RenderError`] when the gate leaf is present but not a
/// boolean; gates are compared by identity, never coerced.
pub fn render_lifecycle(
    template: &LifecycleTemplate,
    tree: &ConfigTree,
) -> Result<RenderedArtifact, RenderError> {
    let disabled = match tree.get(&template.gate) {
        None => false,
        Some(ConfigValue::Bool(value)) => *value,
        Some(other) => {
            return Err(RenderError::TransformMismatch {
                name: template.script.clone(),
                expected: "boolean gate",
                found: other.kind(),
            });
        }
    };
    let body = if disabled {
        &template.disabled_body
    } else {
        &template.enabled_body
    };
    Ok(RenderedArtifact::new(body.clone()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
