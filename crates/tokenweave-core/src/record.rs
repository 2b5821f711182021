//! Flattened token records.

use serde_json::Value;

/// A single design token lifted out of the nested tree.
///
/// Records are pure values: the flattener produces one per leaf, the
/// emitter consumes them, and nothing holds onto them between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatToken {
    /// Group names from the section root down to the leaf key.
    pub path: Vec<String>,
    /// The raw `$value` payload, exactly as declared.
    pub value: Value,
    /// The declared `$type` tag. Never inferred, never defaulted.
    pub kind: String,
}

impl FlatToken {
    pub fn new(path: Vec<String>, value: Value, kind: impl Into<String>) -> Self {
        Self {
            path,
            value,
            kind: kind.into(),
        }
    }

    /// The stringified form of the raw value, as stored in the lookup table.
    pub fn value_text(&self) -> String {
        scalar_text(&self.value)
    }
}

/// Stringifies a token value for lookup and passthrough purposes.
///
/// Strings pass through untouched; numbers and booleans use their JSON
/// rendering; composite values render as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
