//! The fetched token document and its well-known sections.

use serde_json::Value;

use crate::flatten::flatten;
use crate::record::FlatToken;

/// Base layer of primitive values.
pub const SECTION_CORE: &str = "core/value";

/// Semantic tokens for the standard (light) theme.
pub const SECTION_STANDARD: &str = "semantic/standard";

/// Semantic tokens for the eco (dark) theme.
pub const SECTION_ECO: &str = "semantic/eco";

/// The three sections a token document is expected to carry, in emission
/// order.
pub const SECTIONS: &[&str] = &[SECTION_CORE, SECTION_STANDARD, SECTION_ECO];

/// A parsed token document.
///
/// Thin wrapper over the raw tree; all pipeline stages read through it.
#[derive(Debug, Clone)]
pub struct TokenDocument {
    root: Value,
}

impl TokenDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The whole document tree, annotation keys included.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Looks up a top-level section by name.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// Flattens one section into leaf records.
    ///
    /// A missing section yields no records; the run continues with an
    /// empty block rather than inventing tokens.
    pub fn flatten_section(&self, name: &str) -> Vec<FlatToken> {
        match self.section(name) {
            Some(section) => flatten(section).collect(),
            None => {
                tracing::warn!(section = name, "token document has no such section");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_section_scopes_paths_to_the_section() {
        let document = TokenDocument::new(json!({
            "core/value": {
                "color": { "primary": { "500": { "$type": "color", "$value": "#123" } } }
            },
            "semantic/standard": {}
        }));
        let records = document.flatten_section(SECTION_CORE);
        assert_eq!(records.len(), 1);
        // Section names never appear in token paths.
        assert_eq!(records[0].path, vec!["color", "primary", "500"]);
    }

    #[test]
    fn test_missing_section_is_empty() {
        let document = TokenDocument::new(json!({}));
        assert!(document.flatten_section(SECTION_ECO).is_empty());
    }

    #[test]
    fn test_section_lookup() {
        let document = TokenDocument::new(json!({ "semantic/eco": { "a": 1 } }));
        assert!(document.section(SECTION_ECO).is_some());
        assert!(document.section(SECTION_STANDARD).is_none());
    }
}
