// crates/manifest-render-core/tests/common/mod.rs
// ============================================================================
// Module: Render Test Support
// Description: Shared helpers for render integration tests.
// Purpose: Keep property-tree construction and assertions in one place.
// Dependencies: manifest-render-core, serde_json
// ============================================================================

//! ## Overview
//! Shared helpers: message-bearing assertions and manifest-property trees
//! built from inline JSON.

use manifest_render_core::ConfigTree;

/// Result alias used by every test function.
pub type TestResult = Result<(), String>;

/// Fails the test with the given message when the condition does not hold.
pub fn ensure(condition: bool, message: &str) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Builds a configuration tree from inline JSON properties.
pub fn tree(value: serde_json::Value) -> ConfigTree {
    ConfigTree::from_json(&value).expect("valid properties tree")
}
