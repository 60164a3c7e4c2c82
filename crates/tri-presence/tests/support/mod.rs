// crates/tri-presence/tests/support/mod.rs
// ============================================================================
// Module: Test Support Helpers
// Description: Shared assertion helpers for integration tests.
// Purpose: Keep test assertions message-bearing without panicking macros.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Message-bearing assertion helpers shared by the integration test files.

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
