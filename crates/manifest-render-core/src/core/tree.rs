// crates/manifest-render-core/src/core/tree.rs
// ============================================================================
// Module: Configuration Tree
// Description: Nested property tree with three-state path lookups.
// Purpose: Give render paths an accessor that distinguishes absent,
//          present-false, and present-true without exceptions.
// Dependencies: serde, serde_json, thiserror, tri-presence
// ============================================================================

//! ## Overview
//! A [`ConfigTree`] is a read-only mapping from string keys to scalar values
//! or nested trees, built once per render call from caller-supplied
//! deployment properties. Lookups take a validated dotted [`KeyPath`] and
//! return an explicit absent marker instead of raising; callers branch on
//! the three-state [`Presence`] where a gate decision is needed.
//!
//! Security posture: property input is untrusted; conversion from JSON
//! enforces depth and key-count limits and rejects nulls, floats, and
//! arrays outright.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;
use thiserror::Error;
use tri_presence::Presence;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum nesting depth accepted when building a tree.
pub const MAX_TREE_DEPTH: usize = 16;
/// Maximum total number of keys accepted when building a tree.
pub const MAX_TREE_KEYS: usize = 4_096;
/// Maximum byte length of a dotted key path.
pub const MAX_PATH_BYTES: usize = 512;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while validating a dotted key path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path was empty or all whitespace.
    #[error("key path is empty")]
    Empty,
    /// A dotted segment between separators was empty.
    #[error("key path {raw:?} contains an empty segment")]
    EmptySegment {
        /// The offending raw path.
        raw: String,
    },
    /// The path exceeded the byte-length limit.
    #[error("key path exceeds {max} bytes (got {actual})")]
    TooLong {
        /// Maximum allowed bytes.
        max: usize,
        /// Actual byte length.
        actual: usize,
    },
}

/// Errors raised while building a tree from JSON properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The top-level properties value was not an object.
    #[error("properties root must be a mapping, got {kind}")]
    RootNotMapping {
        /// JSON kind of the rejected root.
        kind: &'static str,
    },
    /// A leaf value kind is not part of the model.
    #[error("unsupported value at {path:?}: {kind}")]
    UnsupportedValue {
        /// Dotted path of the rejected value.
        path: String,
        /// JSON kind of the rejected value.
        kind: &'static str,
    },
    /// Nesting exceeded the depth limit.
    #[error("properties nest deeper than {max} levels")]
    TooDeep {
        /// Maximum allowed depth.
        max: usize,
    },
    /// Total key count exceeded the limit.
    #[error("properties carry more than {max} keys")]
    TooManyKeys {
        /// Maximum allowed keys.
        max: usize,
    },
}

// ============================================================================
// SECTION: Key Paths
// ============================================================================

/// Validated dotted key path, e.g. `tls.ca_cert`.
///
/// # Invariants
/// - At least one non-empty segment; no segment is empty.
/// - Total length is bounded by [`MAX_PATH_BYTES`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath {
    /// The raw dotted form.
    raw: String,
    /// Pre-split segments in traversal order.
    segments: Vec<String>,
}

impl KeyPath {
    /// Parses and validates a dotted path.
    ///
    /// # Errors
    /// Returns a [`PathError`] for empty input, empty segments, or paths
    /// over the byte limit.
    pub fn new(raw: &str) -> Result<Self, PathError> {
        if raw.trim().is_empty() {
            return Err(PathError::Empty);
        }
        if raw.len() > MAX_PATH_BYTES {
            return Err(PathError::TooLong {
                max: MAX_PATH_BYTES,
                actual: raw.len(),
            });
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment {
                raw: raw.to_string(),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Returns the raw dotted form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Values
// ============================================================================

/// One value in the configuration tree.
///
/// # Invariants
/// - The model carries only strings, booleans, integers, and subtrees;
///   conversion rejects every other kind up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// A string leaf, possibly empty.
    String(String),
    /// A boolean leaf compared by identity, never coerced.
    Bool(bool),
    /// A signed integer leaf.
    Int(i64),
    /// A nested subtree.
    Tree(ConfigTree),
}

impl ConfigValue {
    /// Human-readable kind label for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Tree(_) => "subtree",
        }
    }

    /// Returns the string slice for string leaves.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean for boolean leaves.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Tree
// ============================================================================

/// Read-only nested configuration mapping.
///
/// # Invariants
/// - Keys are unique per level; iteration order is the key order.
/// - Lookups never panic and never error; absence is an explicit `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigTree {
    /// Entries at this level.
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a tree from caller-supplied JSON properties.
    ///
    /// # Errors
    /// Returns a [`TreeError`] when the root is not a mapping, when a value
    /// kind is outside the model, or when depth/key limits are exceeded.
    pub fn from_json(value: &Value) -> Result<Self, TreeError> {
        let Value::Object(map) = value else {
            return Err(TreeError::RootNotMapping {
                kind: json_kind(value),
            });
        };
        let mut keys = 0_usize;
        convert_mapping(map, &mut String::new(), 1, &mut keys)
    }

    /// Looks up a value by dotted path.
    ///
    /// Returns `None` when any level is missing or when traversal passes
    /// through a scalar. Never panics.
    #[must_use]
    pub fn get(&self, path: &KeyPath) -> Option<&ConfigValue> {
        let mut current = self;
        let (last, inner) = path.segments().split_last()?;
        for segment in inner {
            match current.entries.get(segment) {
                Some(ConfigValue::Tree(tree)) => current = tree,
                _ => return None,
            }
        }
        current.entries.get(last)
    }

    /// Reports the three-state presence of a gate path.
    ///
    /// Boolean leaves keep their identity; any other present value reports
    /// `True`. Absence at any level reports `Absent`.
    #[must_use]
    pub fn presence(&self, path: &KeyPath) -> Presence {
        match self.get(path) {
            None => Presence::Absent,
            Some(ConfigValue::Bool(value)) => Presence::from_bool(*value),
            Some(_) => Presence::True,
        }
    }

    /// Number of entries at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this level has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SECTION: Conversion Helpers
// ============================================================================

/// Converts one JSON mapping level, tracking depth and total key count.
fn convert_mapping(
    map: &serde_json::Map<String, Value>,
    path: &mut String,
    depth: usize,
    keys: &mut usize,
) -> Result<ConfigTree, TreeError> {
    if depth > MAX_TREE_DEPTH {
        return Err(TreeError::TooDeep {
            max: MAX_TREE_DEPTH,
        });
    }
    let mut entries = BTreeMap::new();
    for (key, value) in map {
        *keys += 1;
        if *keys > MAX_TREE_KEYS {
            return Err(TreeError::TooManyKeys {
                max: MAX_TREE_KEYS,
            });
        }
        let rollback = path.len();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        let converted = convert_value(value, path, depth, keys)?;
        path.truncate(rollback);
        entries.insert(key.clone(), converted);
    }
    Ok(ConfigTree {
        entries,
    })
}

/// Converts one JSON value, rejecting kinds outside the model.
fn convert_value(
    value: &Value,
    path: &mut String,
    depth: usize,
    keys: &mut usize,
) -> Result<ConfigValue, TreeError> {
    match value {
        Value::String(text) => Ok(ConfigValue::String(text.clone())),
        Value::Bool(flag) => Ok(ConfigValue::Bool(*flag)),
        Value::Number(number) => number.as_i64().map(ConfigValue::Int).ok_or_else(|| {
            TreeError::UnsupportedValue {
                path: path.clone(),
                kind: "non-integer number",
            }
        }),
        Value::Object(map) => convert_mapping(map, path, depth + 1, keys).map(ConfigValue::Tree),
        Value::Null | Value::Array(_) => Err(TreeError::UnsupportedValue {
            path: path.clone(),
            kind: json_kind(value),
        }),
    }
}

/// Human-readable kind label for a JSON value.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
