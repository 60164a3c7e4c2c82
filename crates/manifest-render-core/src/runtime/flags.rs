// crates/manifest-render-core/src/runtime/flags.rs
// ============================================================================
// Module: Flag Builder
// Description: Conditional flag emission for invocation lines.
// Purpose: Turn a job template and a configuration tree into the ordered,
//          space-joined flag sequence behind a fixed invocation prefix.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Per flag, evaluation order is fixed: redaction first (a redacting mode
//! suppresses sensitive flags before any other rule), then the emission
//! condition, then value resolution and formatting. A flag whose source key
//! is absent is fully omitted; no default or empty flag is ever emitted. A
//! suppressed boolean is never rendered as `--flag=false`.
//!
//! Output order is the template's canonical order; input order plays no
//! part. Identical inputs produce byte-identical output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::artifact::RenderedArtifact;
use crate::core::template::FlagCondition;
use crate::core::template::FlagSource;
use crate::core::template::FlagSpec;
use crate::core::template::JobTemplate;
use crate::core::template::Sensitivity;
use crate::core::template::ValueFormat;
use crate::core::tree::ConfigTree;
use crate::core::tree::ConfigValue;
use crate::runtime::RenderError;
use crate::runtime::RenderMode;

// ============================================================================
// SECTION: Invocation Rendering
// ============================================================================

/// Renders the invocation line for one job.
///
/// # Errors
/// Returns a [`RenderError`] when a resolved value's kind does not fit the
/// flag's declared condition or format. Missing optional keys are not
/// errors; they suppress the flag.
pub fn render_invocation(
    template: &JobTemplate,
    tree: &ConfigTree,
    mode: RenderMode,
) -> Result<RenderedArtifact, RenderError> {
    let mut tokens = template.prefix.clone();
    for flag in &template.flags {
        if mode == RenderMode::Redact && flag.sensitivity == Sensitivity::Sensitive {
            continue;
        }
        if !condition_open(flag, tree)? {
            continue;
        }
        if let Some(token) = emit_token(flag, tree)? {
            tokens.push(token);
        }
    }
    Ok(RenderedArtifact::new(tokens.join(" ")))
}

// ============================================================================
// SECTION: Condition Evaluation
// ============================================================================

/// Evaluates a flag's emission condition against the tree.
fn condition_open(flag: &FlagSpec, tree: &ConfigTree) -> Result<bool, RenderError> {
    match &flag.condition {
        FlagCondition::Always => Ok(true),
        FlagCondition::SourcePresent => match &flag.source {
            FlagSource::Path(path) => Ok(tree.get(path).is_some()),
            FlagSource::Literal(_) => Ok(true),
            FlagSource::None => Err(RenderError::TransformMismatch {
                name: flag.name.clone(),
                expected: "a value source",
                found: "no source",
            }),
        },
        FlagCondition::BoolTrue(gate) => match tree.get(gate) {
            None => Ok(false),
            Some(ConfigValue::Bool(value)) => Ok(*value),
            Some(other) => Err(RenderError::TransformMismatch {
                name: flag.name.clone(),
                expected: "boolean gate",
                found: other.kind(),
            }),
        },
        FlagCondition::SubtreePresent(path) => match tree.get(path) {
            None => Ok(false),
            Some(ConfigValue::Tree(_)) => Ok(true),
            Some(other) => Err(RenderError::TransformMismatch {
                name: flag.name.clone(),
                expected: "subtree",
                found: other.kind(),
            }),
        },
    }
}

// ============================================================================
// SECTION: Token Formatting
// ============================================================================

/// Renders one flag token; `None` means the flag is suppressed.
fn emit_token(flag: &FlagSpec, tree: &ConfigTree) -> Result<Option<String>, RenderError> {
    if flag.format == ValueFormat::Bare {
        return Ok(Some(flag.name.clone()));
    }
    let value = match &flag.source {
        FlagSource::Literal(literal) => literal.clone(),
        FlagSource::Path(path) => match tree.get(path) {
            None => return Ok(None),
            Some(ConfigValue::String(text)) => text.clone(),
            Some(ConfigValue::Int(number)) => number.to_string(),
            Some(other) => {
                return Err(RenderError::TransformMismatch {
                    name: flag.name.clone(),
                    expected: "scalar value",
                    found: other.kind(),
                });
            }
        },
        FlagSource::None => {
            return Err(RenderError::TransformMismatch {
                name: flag.name.clone(),
                expected: "a value source",
                found: "no source",
            });
        }
    };
    let token = match flag.format {
        ValueFormat::Quoted => format!("{}=\"{}\"", flag.name, value),
        ValueFormat::Unquoted => format!("{}={}", flag.name, value),
        ValueFormat::Bare => flag.name.clone(),
    };
    Ok(Some(token))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
