// crates/manifest-render-core/src/core/mod.rs
// ============================================================================
// Module: Core Data Model
// Description: Configuration tree, template, and artifact types.
// Purpose: Hold the pure data model shared by every render path.
// Dependencies: crate::core::{artifact, template, tree}
// ============================================================================

//! ## Overview
//! The data model is split into the configuration tree (caller-supplied,
//! untrusted), the template tables (crate-supplied, validated at
//! construction), and the rendered artifact newtype.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod artifact;
pub mod template;
pub mod tree;
