// crates/tri-presence/tests/presence.rs
// ============================================================================
// Module: Presence Tests
// Description: Tests for three-state presence values and combinators.
// Purpose: Validate presence truth tables and lookup conversions.
// Dependencies: tri_presence
// ============================================================================
//! ## Overview
//! Validates the fixed truth tables and the option/boolean conversions.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use support::TestResult;
use support::ensure;
use tri_presence::Presence;
use tri_presence::all;
use tri_presence::any;

// ============================================================================
// SECTION: Conversions
// ============================================================================

/// Tests boolean conversion keeps identity.
#[test]
fn test_from_bool_identity() -> TestResult {
    ensure(Presence::from_bool(true) == Presence::True, "Expected true to map to True")?;
    ensure(Presence::from_bool(false) == Presence::False, "Expected false to map to False")?;
    ensure(Presence::from_bool(false) != Presence::Absent, "False must never collapse to Absent")?;
    Ok(())
}

/// Tests option conversion treats any value as present.
#[test]
fn test_from_option() -> TestResult {
    ensure(
        Presence::from_option::<&str>(None) == Presence::Absent,
        "Expected None to map to Absent",
    )?;
    ensure(
        Presence::from_option(Some(&"")) == Presence::True,
        "Expected present empty string to map to True, not False",
    )?;
    Ok(())
}

/// Tests the state predicates.
#[test]
fn test_predicates() -> TestResult {
    ensure(Presence::Absent.is_absent(), "Absent must report is_absent")?;
    ensure(!Presence::False.is_absent(), "False must not report is_absent")?;
    ensure(Presence::False.is_present(), "False must report is_present")?;
    ensure(Presence::True.is_true(), "True must report is_true")?;
    ensure(!Presence::Absent.is_true(), "Absent must not report is_true")?;
    ensure(Presence::False.is_false(), "False must report is_false")?;
    Ok(())
}

// ============================================================================
// SECTION: Truth Tables
// ============================================================================

/// Tests the conjunction table.
#[test]
fn test_and_table() -> TestResult {
    let rows = [
        (Presence::True, Presence::True, Presence::True),
        (Presence::True, Presence::Absent, Presence::Absent),
        (Presence::True, Presence::False, Presence::False),
        (Presence::Absent, Presence::Absent, Presence::Absent),
        (Presence::Absent, Presence::False, Presence::False),
        (Presence::False, Presence::False, Presence::False),
    ];
    for (left, right, expected) in rows {
        ensure(left.and(right) == expected, "Unexpected and() result")?;
        ensure(right.and(left) == expected, "and() must be commutative")?;
    }
    Ok(())
}

/// Tests the disjunction table.
#[test]
fn test_or_table() -> TestResult {
    let rows = [
        (Presence::True, Presence::True, Presence::True),
        (Presence::True, Presence::Absent, Presence::True),
        (Presence::True, Presence::False, Presence::True),
        (Presence::Absent, Presence::Absent, Presence::Absent),
        (Presence::Absent, Presence::False, Presence::Absent),
        (Presence::False, Presence::False, Presence::False),
    ];
    for (left, right, expected) in rows {
        ensure(left.or(right) == expected, "Unexpected or() result")?;
        ensure(right.or(left) == expected, "or() must be commutative")?;
    }
    Ok(())
}

/// Tests negation keeps Absent fixed.
#[test]
fn test_not_table() -> TestResult {
    ensure(Presence::Absent.not() == Presence::Absent, "not(Absent) must stay Absent")?;
    ensure(Presence::False.not() == Presence::True, "not(False) must be True")?;
    ensure(Presence::True.not() == Presence::False, "not(True) must be False")?;
    Ok(())
}

/// Tests slice folds and their identities.
#[test]
fn test_folds() -> TestResult {
    ensure(all(&[]) == Presence::True, "Empty all() must be True")?;
    ensure(any(&[]) == Presence::False, "Empty any() must be False")?;
    ensure(
        all(&[Presence::True, Presence::Absent]) == Presence::Absent,
        "Absent must weaken all()",
    )?;
    ensure(
        all(&[Presence::Absent, Presence::False]) == Presence::False,
        "False must dominate all()",
    )?;
    ensure(
        any(&[Presence::False, Presence::Absent, Presence::True]) == Presence::True,
        "True must dominate any()",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Serialization
// ============================================================================

/// Tests snake_case serialization round-trips.
#[test]
fn test_serde_tags() -> TestResult {
    let json = serde_json::to_string(&Presence::Absent).map_err(|err| err.to_string())?;
    ensure(json == "\"absent\"", "Expected snake_case tag for Absent")?;
    let parsed: Presence = serde_json::from_str("\"false\"").map_err(|err| err.to_string())?;
    ensure(parsed == Presence::False, "Expected tag to parse back to False")?;
    Ok(())
}
