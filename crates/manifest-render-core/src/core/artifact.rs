// crates/manifest-render-core/src/core/artifact.rs
// ============================================================================
// Module: Rendered Artifact
// Description: Output text newtype for every render path.
// Purpose: Carry rendered text with a stable, comparison-friendly surface.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every render path produces a [`RenderedArtifact`]: an invocation line, a
//! certificate file body, an environment block, or a lifecycle script body.
//! The artifact is plain text; writing it anywhere is the caller's concern.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Artifact
// ============================================================================

/// Rendered output text.
///
/// # Invariants
/// - Content is a pure function of the tree, template, and mode that
///   produced it; byte-identical inputs yield byte-identical artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedArtifact {
    /// The rendered text.
    text: String,
}

impl RenderedArtifact {
    /// Wraps rendered text.
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self {
            text,
        }
    }

    /// Creates an empty artifact, used for absent certificate slots.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Returns the rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the artifact, returning the rendered text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether the artifact carries no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Substring check used by callers asserting on rendered output.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

impl fmt::Display for RenderedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
