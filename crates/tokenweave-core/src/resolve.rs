//! Reference resolution against the flattened token universe.
//!
//! Token values may embed `{dotted.path}` references to other tokens. The
//! resolver rewrites each occurrence into a CSS `var()` indirection on the
//! referenced variable name, leaving chain resolution to the consuming CSS
//! environment: each generated line binds exactly one name to one
//! expression, and the cascade chases any further indirection at
//! consumption time.
//!
//! # Two-phase design
//!
//! 1. **Collection**: [`LookupTable::build`] derives a name for every record
//!    of the whole universe (base plus every theme), so any theme's values
//!    can reference any other theme's or the base's tokens.
//! 2. **Resolution**: [`LookupTable::resolve`] rewrites reference syntax.
//!    Deliberately, no existence validation happens here: a reference to an
//!    undeclared token still emits a syntactically valid `var()` pointing at
//!    a name defined nowhere in the output. Consumers may define such names
//!    externally; the strict pass reports them as `UnresolvedReference`
//!    diagnostics instead.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::name::{derive_name, reference_name};
use crate::record::{scalar_text, FlatToken};

static REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("valid pattern"));

/// Yields every reference expression embedded in a value string.
pub fn references(text: &str) -> impl Iterator<Item = &str> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|group| group.as_str())
}

/// Write-once map from derived variable name to stringified raw value.
///
/// Built after flattening the entire token universe; read-many for the rest
/// of the run.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    /// Builds the table from flattened records. Later records win when two
    /// paths collapse to the same name; the strict pass reports such
    /// collisions as `NameCollision`.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FlatToken>,
    {
        let mut entries = HashMap::new();
        for record in records {
            entries.insert(derive_name(&record.path), record.value_text());
        }
        Self { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a raw token value to its emitted string form.
    ///
    /// Non-string values pass through as their string representation.
    /// String values have every `{reference}` rewritten to
    /// `var(<derived name>)` in a single, non-recursive pass; nested
    /// reference syntax surviving inside a rewritten value is left for the
    /// consuming environment.
    ///
    /// ```
    /// use serde_json::json;
    /// use tokenweave_core::{FlatToken, LookupTable};
    ///
    /// let records = vec![FlatToken::new(
    ///     vec!["color".into(), "primary".into(), "500".into()],
    ///     json!("#1a2b3c"),
    ///     "color",
    /// )];
    /// let lookup = LookupTable::build(&records);
    ///
    /// assert_eq!(
    ///     lookup.resolve(&json!("{color.primary.500}")),
    ///     "var(--color-primary-500)"
    /// );
    /// // Undeclared targets still resolve to a well-formed indirection.
    /// assert_eq!(lookup.resolve(&json!("{color.missing}")), "var(--color-missing)");
    /// ```
    pub fn resolve(&self, raw: &Value) -> String {
        match raw {
            Value::String(text) => REFERENCE
                .replace_all(text, |caps: &Captures| {
                    format!("var({})", reference_name(&caps[1]))
                })
                .into_owned(),
            other => scalar_text(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(records: &[FlatToken]) -> LookupTable {
        LookupTable::build(records)
    }

    #[test]
    fn test_build_indexes_by_derived_name() {
        let records = vec![FlatToken::new(
            vec!["Spacing".into(), "100".into()],
            json!(8),
            "dimension",
        )];
        let lookup = table(&records);
        assert!(lookup.contains("--spacing-100"));
        assert_eq!(lookup.get("--spacing-100"), Some("8"));
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_resolve_number_passes_through() {
        let lookup = LookupTable::default();
        assert_eq!(lookup.resolve(&json!(16)), "16");
    }

    #[test]
    fn test_resolve_plain_string_unchanged() {
        let lookup = LookupTable::default();
        assert_eq!(lookup.resolve(&json!("#1a2b3c")), "#1a2b3c");
    }

    #[test]
    fn test_resolve_rewrites_reference() {
        let lookup = LookupTable::default();
        assert_eq!(
            lookup.resolve(&json!("{color.primary.500}")),
            "var(--color-primary-500)"
        );
    }

    #[test]
    fn test_resolve_undeclared_reference_still_emits() {
        // No existence validation: the indirection is emitted even though
        // the table has never seen the name.
        let lookup = LookupTable::default();
        assert_eq!(lookup.resolve(&json!("{ghost.token}")), "var(--ghost-token)");
    }

    #[test]
    fn test_resolve_multiple_references_in_one_value() {
        let lookup = LookupTable::default();
        assert_eq!(
            lookup.resolve(&json!("{spacing.100} {spacing.200}")),
            "var(--spacing-100) var(--spacing-200)"
        );
    }

    #[test]
    fn test_resolve_is_single_pass() {
        // The rewritten output is not re-scanned; surviving brace syntax is
        // the consuming environment's problem.
        let lookup = LookupTable::default();
        let out = lookup.resolve(&json!("{a.b}"));
        assert_eq!(out, "var(--a-b)");
        assert_eq!(lookup.resolve(&json!(out)), "var(--a-b)");
    }

    #[test]
    fn test_references_iterator() {
        let found: Vec<_> = references("{a.b} solid {c.d}").collect();
        assert_eq!(found, vec!["a.b", "c.d"]);
    }

    #[test]
    fn test_build_last_record_wins_on_collision() {
        let records = vec![
            FlatToken::new(vec!["a b".into()], json!(1), "number"),
            FlatToken::new(vec!["a".into(), "b".into()], json!(2), "number"),
        ];
        let lookup = table(&records);
        assert_eq!(lookup.get("--a-b"), Some("2"));
    }
}
