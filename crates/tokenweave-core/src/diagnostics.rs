//! Strict-mode diagnostics over the permissive pipeline.
//!
//! The core pipeline absorbs document shape anomalies by design: malformed
//! leaves are demoted to groups, unresolved references still emit a
//! well-formed `var()`, and colliding names silently share a lookup slot.
//! The strict pass re-walks the same tree and flattened records and turns
//! those anomalies into structured, non-fatal diagnostics. Running it never
//! changes what the permissive pipeline emits; callers report the collected
//! diagnostics after generation completes.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde_json::Value;

use crate::flatten::{as_leaf, is_reserved, TYPE_MARKER, VALUE_MARKER};
use crate::name::{derive_name, reference_name};
use crate::record::FlatToken;
use crate::resolve::{references, LookupTable};

/// How serious a diagnostic is for the run's exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A document shape anomaly detected by the strict pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A value references a variable name defined nowhere in the universe.
    UnresolvedReference { from: String, to: String },
    /// Distinct token paths collapse to the same derived name.
    NameCollision { name: String, count: usize },
    /// A node carries only one of the two leaf markers and was demoted to
    /// a group.
    MalformedLeaf { path: Vec<String>, detail: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnresolvedReference { .. } => Severity::Error,
            Diagnostic::NameCollision { .. } => Severity::Error,
            Diagnostic::MalformedLeaf { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedReference { from, to } => {
                write!(f, "'{}' references undefined token '{}'", from, to)
            }
            Diagnostic::NameCollision { name, count } => {
                write!(f, "{} token paths collapse to the name '{}'", count, name)
            }
            Diagnostic::MalformedLeaf { path, detail } => {
                write!(f, "malformed token at '{}': {}", path.join("."), detail)
            }
        }
    }
}

/// Walks the raw tree and reports malformed leaves.
///
/// Mirrors the permissive traversal exactly: reserved keys are skipped,
/// malformed nodes are reported and then walked as groups, valid leaves are
/// not descended into.
pub fn audit_tree(root: &Value) -> Vec<Diagnostic> {
    let mut found = Vec::new();
    walk(root, &mut Vec::new(), &mut found);
    found
}

fn walk(node: &Value, path: &mut Vec<String>, found: &mut Vec<Diagnostic>) {
    let entries: Vec<(String, &Value)> = match node {
        Value::Object(map) => map
            .iter()
            .filter(|(key, _)| !is_reserved(key))
            .map(|(key, child)| (key.clone(), child))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, child)| (index.to_string(), child))
            .collect(),
        _ => return,
    };
    for (key, child) in entries {
        path.push(key);
        if as_leaf(child).is_none() {
            if let Some(detail) = malformed_detail(child) {
                found.push(Diagnostic::MalformedLeaf {
                    path: path.clone(),
                    detail,
                });
            }
            walk(child, path, found);
        }
        path.pop();
    }
}

fn malformed_detail(node: &Value) -> Option<String> {
    let map = node.as_object()?;
    let has_value = map.contains_key(VALUE_MARKER);
    match (has_value, map.get(TYPE_MARKER)) {
        (true, None) => Some("value marker without a type marker".to_string()),
        (false, Some(_)) => Some("type marker without a value marker".to_string()),
        (true, Some(kind)) if !kind.is_string() => {
            Some("type marker is not a string".to_string())
        }
        _ => None,
    }
}

/// Audits flattened records for name collisions and unresolved references.
///
/// Diagnostics come out in record order, so reports are deterministic for a
/// given document.
pub fn audit_records<'a, I>(records: I, lookup: &LookupTable) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = &'a FlatToken>,
{
    let records: Vec<&FlatToken> = records.into_iter().collect();
    let names: Vec<String> = records
        .iter()
        .map(|record| derive_name(&record.path))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in &names {
        *counts.entry(name.as_str()).or_default() += 1;
    }

    let mut found = Vec::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for name in &names {
        let count = counts[name.as_str()];
        if count > 1 && reported.insert(name.as_str()) {
            found.push(Diagnostic::NameCollision {
                name: name.clone(),
                count,
            });
        }
    }

    for (record, name) in records.iter().zip(&names) {
        if let Value::String(text) = &record.value {
            for reference in references(text) {
                let target = reference_name(reference);
                if !lookup.contains(&target) {
                    found.push(Diagnostic::UnresolvedReference {
                        from: name.clone(),
                        to: target,
                    });
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::flatten::flatten;

    #[test]
    fn test_unresolved_reference_display() {
        let diagnostic = Diagnostic::UnresolvedReference {
            from: "--button-bg".to_string(),
            to: "--color-primary-950".to_string(),
        };
        let message = diagnostic.to_string();
        assert!(message.contains("--button-bg"));
        assert!(message.contains("undefined token"));
        assert!(message.contains("--color-primary-950"));
    }

    #[test]
    fn test_name_collision_display() {
        let diagnostic = Diagnostic::NameCollision {
            name: "--a-b".to_string(),
            count: 2,
        };
        assert!(diagnostic.to_string().contains("2 token paths"));
        assert!(diagnostic.to_string().contains("--a-b"));
    }

    #[test]
    fn test_malformed_leaf_display() {
        let diagnostic = Diagnostic::MalformedLeaf {
            path: vec!["color".to_string(), "odd".to_string()],
            detail: "value marker without a type marker".to_string(),
        };
        assert!(diagnostic.to_string().contains("color.odd"));
    }

    #[test]
    fn test_severities() {
        let unresolved = Diagnostic::UnresolvedReference {
            from: String::new(),
            to: String::new(),
        };
        let malformed = Diagnostic::MalformedLeaf {
            path: Vec::new(),
            detail: String::new(),
        };
        assert_eq!(unresolved.severity(), Severity::Error);
        assert_eq!(malformed.severity(), Severity::Warning);
    }

    #[test]
    fn test_audit_tree_reports_malformed_leaves() {
        let tree = json!({
            "a": { "$value": "#123" },
            "b": { "$type": "color" },
            "c": { "$type": 9, "$value": "x" },
            "ok": { "$type": "color", "$value": "#fff" }
        });
        let found = audit_tree(&tree);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|d| d.severity() == Severity::Warning));
        assert!(found[0]
            .to_string()
            .contains("value marker without a type marker"));
        assert!(found[1]
            .to_string()
            .contains("type marker without a value marker"));
        assert!(found[2].to_string().contains("type marker is not a string"));
    }

    #[test]
    fn test_audit_tree_descends_into_malformed_nodes() {
        let tree = json!({
            "broken": {
                "$value": "#123",
                "inner": { "$value": 4 }
            }
        });
        let found = audit_tree(&tree);
        assert_eq!(found.len(), 2);
        assert!(found[1].to_string().contains("broken.inner"));
    }

    #[test]
    fn test_audit_tree_skips_reserved_subtrees() {
        let tree = json!({
            "$metadata": { "odd": { "$value": 1 } }
        });
        assert!(audit_tree(&tree).is_empty());
    }

    #[test]
    fn test_audit_records_finds_unresolved_reference() {
        let tree = json!({
            "button": { "bg": { "$type": "color", "$value": "{color.primary.500}" } }
        });
        let records: Vec<_> = flatten(&tree).collect();
        let lookup = LookupTable::build(&records);
        let found = audit_records(&records, &lookup);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0],
            Diagnostic::UnresolvedReference {
                from: "--button-bg".to_string(),
                to: "--color-primary-500".to_string(),
            }
        );
    }

    #[test]
    fn test_audit_records_resolved_reference_is_clean() {
        let tree = json!({
            "color": { "primary": { "500": { "$type": "color", "$value": "#123" } } },
            "button": { "bg": { "$type": "color", "$value": "{color.primary.500}" } }
        });
        let records: Vec<_> = flatten(&tree).collect();
        let lookup = LookupTable::build(&records);
        assert!(audit_records(&records, &lookup).is_empty());
    }

    #[test]
    fn test_audit_records_reports_collision_once() {
        let records = vec![
            FlatToken::new(vec!["a b".into()], json!(1), "number"),
            FlatToken::new(vec!["a".into(), "b".into()], json!(2), "number"),
        ];
        let lookup = LookupTable::build(&records);
        let found = audit_records(&records, &lookup);
        assert_eq!(
            found,
            vec![Diagnostic::NameCollision {
                name: "--a-b".to_string(),
                count: 2,
            }]
        );
    }
}
