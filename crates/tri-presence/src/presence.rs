// crates/tri-presence/src/presence.rs
// ============================================================================
// Module: Presence Value
// Description: Tagged three-state presence value and Kleene combinators.
// Purpose: Make absent, present-false, and present-true distinct states.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`Presence`] is the result of asking "is this configuration gate open".
//! `Absent` means the key did not exist at all; `False` and `True` mean the
//! key existed and carried that boolean identity. Callers branch on all
//! three states; no coercion from strings or other scalars happens here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Presence
// ============================================================================

/// Three-state presence of a configuration gate.
///
/// # Invariants
/// - `Absent` is never conflated with `False`; equality is by variant.
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// The key was missing at some level of the lookup.
    Absent,
    /// The key was present and identically `false`.
    False,
    /// The key was present and identically `true`.
    True,
}

impl Presence {
    /// Converts a boolean into a present value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }

    /// Maps an optional lookup result into a presence value.
    ///
    /// `None` is `Absent`; any `Some` is `True` regardless of the carried
    /// value. Boolean leaves must go through [`Presence::from_bool`] instead
    /// so that `false` is not reported as present-true.
    #[must_use]
    pub const fn from_option<T>(value: Option<&T>) -> Self {
        match value {
            Some(_) => Self::True,
            None => Self::Absent,
        }
    }

    /// Returns true when the key was missing.
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true when the key existed, whatever its gate value.
    #[must_use]
    pub const fn is_present(self) -> bool {
        !self.is_absent()
    }

    /// Returns true only for present-true.
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns true only for present-false.
    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Kleene conjunction: `False` dominates, then `Absent`, then `True`.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::False, _) | (_, Self::False) => Self::False,
            (Self::Absent, _) | (_, Self::Absent) => Self::Absent,
            (Self::True, Self::True) => Self::True,
        }
    }

    /// Kleene disjunction: `True` dominates, then `Absent`, then `False`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, _) | (_, Self::True) => Self::True,
            (Self::Absent, _) | (_, Self::Absent) => Self::Absent,
            (Self::False, Self::False) => Self::False,
        }
    }

    /// Kleene negation: `Absent` stays `Absent`.
    #[must_use]
    pub const fn not(self) -> Self {
        match self {
            Self::Absent => Self::Absent,
            Self::False => Self::True,
            Self::True => Self::False,
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Absent => "absent",
            Self::False => "false",
            Self::True => "true",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Folds
// ============================================================================

/// Conjunction over a slice; empty input is `True`.
#[must_use]
pub fn all(values: &[Presence]) -> Presence {
    values.iter().copied().fold(Presence::True, Presence::and)
}

/// Disjunction over a slice; empty input is `False`.
#[must_use]
pub fn any(values: &[Presence]) -> Presence {
    values.iter().copied().fold(Presence::False, Presence::or)
}
