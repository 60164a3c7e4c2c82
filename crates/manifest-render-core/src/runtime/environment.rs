// crates/manifest-render-core/src/runtime/environment.rs
// ============================================================================
// Module: Environment Block Renderer
// Description: App-manifest env block rendering with redaction.
// Purpose: Render `NAME: "value"` lines from an env template table.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! The broker's app manifest carries its configuration as an environment
//! block of `NAME: "value"` lines. The same suppression rules as the flag
//! builder apply: absent sources drop the line, a redacting mode drops
//! sensitive lines before anything else, and entry order is the template's
//! canonical order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::artifact::RenderedArtifact;
use crate::core::template::EnvTemplate;
use crate::core::template::Sensitivity;
use crate::core::tree::ConfigTree;
use crate::core::tree::ConfigValue;
use crate::runtime::RenderError;
use crate::runtime::RenderMode;

// ============================================================================
// SECTION: Env Block Rendering
// ============================================================================

/// Renders an env block, one `NAME: "value"` line per present entry.
///
/// # Errors
/// Returns a [`RenderError`] when a resolved value is not a scalar.
pub fn render_env_block(
    template: &EnvTemplate,
    tree: &ConfigTree,
    mode: RenderMode,
) -> Result<RenderedArtifact, RenderError> {
    let mut block = String::new();
    for entry in &template.entries {
        if mode == RenderMode::Redact && entry.sensitivity == Sensitivity::Sensitive {
            continue;
        }
        let value = match tree.get(&entry.source) {
            None => continue,
            Some(ConfigValue::String(text)) => text.clone(),
            Some(ConfigValue::Int(number)) => number.to_string(),
            Some(other) => {
                return Err(RenderError::TransformMismatch {
                    name: entry.name.clone(),
                    expected: "scalar value",
                    found: other.kind(),
                });
            }
        };
        block.push_str(&format!("{}: \"{}\"\n", entry.name, value));
    }
    Ok(RenderedArtifact::new(block))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
