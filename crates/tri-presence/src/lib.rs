// crates/tri-presence/src/lib.rs
// ============================================================================
// Module: Tri-Presence Logic
// Description: Three-state presence values for configuration lookups.
// Purpose: Replace implicit truthiness with an explicit tagged value.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A configuration lookup can land in one of three states: the key is
//! missing, the key is present with a false gate value, or the key is
//! present with a true gate value. Collapsing the first two states into one
//! is how accidental flag emission happens, so the distinction is carried as
//! a tagged [`Presence`] value that callers must branch on explicitly.
//!
//! Combinators follow strong Kleene three-valued logic with `Absent` as the
//! unknown: `False` dominates `and`, `True` dominates `or`, and `Absent`
//! propagates otherwise. Truth tables are fixed and total.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod presence;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use presence::Presence;
pub use presence::all;
pub use presence::any;
