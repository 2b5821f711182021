//! Depth-first flattening of the token tree.
//!
//! The token document is an ordered nesting of named groups. [`flatten`]
//! walks it and yields one [`FlatToken`] per leaf, in key insertion order
//! within each group. Traversal order determines only the layout of the
//! emitted text, never the final variable values.
//!
//! # Leaf test
//!
//! A node is a leaf iff it is an object carrying both a `$value` marker and
//! a string `$type` marker. A node with only one of the two markers is not
//! an error: it silently fails the leaf test and is walked as a nested
//! group. The strict pass reports such nodes as `MalformedLeaf`; the
//! flattener itself stays permissive.
//!
//! # Reserved keys
//!
//! Keys starting with `$` (annotation keys such as `$themes` and
//! `$metadata`) are structural, never leaves. They are skipped at every
//! nesting level and their subtrees are never visited.

use serde_json::Value;

use crate::record::FlatToken;

/// Marker prefix for reserved annotation keys.
pub const RESERVED_MARKER: char = '$';

/// Reserved annotation keys named by the document format.
pub const RESERVED_KEYS: &[&str] = &["$themes", "$metadata"];

/// Key holding a leaf token's value.
pub const VALUE_MARKER: &str = "$value";

/// Key holding a leaf token's semantic type tag.
pub const TYPE_MARKER: &str = "$type";

/// Whether a group key is a reserved annotation key.
pub fn is_reserved(key: &str) -> bool {
    key.starts_with(RESERVED_MARKER) || RESERVED_KEYS.contains(&key)
}

/// Returns the `(value, type)` pair when `node` passes the leaf test.
pub fn as_leaf(node: &Value) -> Option<(&Value, &str)> {
    let map = node.as_object()?;
    let value = map.get(VALUE_MARKER)?;
    let kind = map.get(TYPE_MARKER)?.as_str()?;
    Some((value, kind))
}

/// Flattens a token (sub)tree into leaf records.
///
/// The returned iterator is lazy, finite, and restartable: calling
/// [`flatten`] again on the same tree starts a fresh traversal.
///
/// ```
/// use serde_json::json;
/// use tokenweave_core::flatten;
///
/// let tree = json!({
///     "color": {
///         "primary": {
///             "500": { "$type": "color", "$value": "#1a2b3c" }
///         }
///     }
/// });
/// let records: Vec<_> = flatten(&tree).collect();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].path, vec!["color", "primary", "500"]);
/// ```
pub fn flatten(root: &Value) -> Flatten<'_> {
    flatten_at(root, Vec::new())
}

/// Flattens a subtree with an already-accumulated path prefix.
pub fn flatten_at(root: &Value, prefix: Vec<String>) -> Flatten<'_> {
    let mut stack = Vec::new();
    if let Some(entries) = GroupIter::new(root) {
        stack.push(Frame {
            path: prefix,
            entries,
        });
    }
    Flatten { stack }
}

/// Iterator over the leaves of a token tree. Created by [`flatten`].
pub struct Flatten<'a> {
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    path: Vec<String>,
    entries: GroupIter<'a>,
}

/// Ordered member iteration for composite nodes. Arrays count as groups
/// keyed by element index.
enum GroupIter<'a> {
    Object(serde_json::map::Iter<'a>),
    Array(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
}

impl<'a> GroupIter<'a> {
    fn new(node: &'a Value) -> Option<Self> {
        match node {
            Value::Object(map) => Some(GroupIter::Object(map.iter())),
            Value::Array(items) => Some(GroupIter::Array(items.iter().enumerate())),
            _ => None,
        }
    }
}

impl<'a> Iterator for GroupIter<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            GroupIter::Object(entries) => entries.next().map(|(key, node)| (key.clone(), node)),
            GroupIter::Array(items) => items.next().map(|(index, node)| (index.to_string(), node)),
        }
    }
}

impl Iterator for Flatten<'_> {
    type Item = FlatToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some((key, node)) = frame.entries.next() else {
                self.stack.pop();
                continue;
            };
            if is_reserved(&key) {
                continue;
            }
            let mut path = frame.path.clone();
            path.push(key);
            if let Some((value, kind)) = as_leaf(node) {
                return Some(FlatToken::new(path, value.clone(), kind));
            }
            if let Some(entries) = GroupIter::new(node) {
                self.stack.push(Frame { path, entries });
            }
            // Bare scalars without markers are neither leaves nor groups.
        }
    }
}
