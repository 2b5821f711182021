//! Variable name derivation.
//!
//! Hierarchical token paths become flat CSS custom property names through a
//! single normalization routine, [`derive_name`]. The same routine backs
//! reference rewriting ([`reference_name`]): a reference and the token it
//! points at must normalize to byte-identical names, otherwise the emitted
//! `var()` indirections would dangle. Keeping both call sites on one function
//! is the correctness-critical invariant of the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix marking a CSS custom property.
pub const VARIABLE_PREFIX: &str = "--";

/// Separator used between and inside normalized path segments.
const SEPARATOR: &str = "-";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Derives the canonical variable name for a token path.
///
/// Pure and total: slashes inside segments become the separator, segments are
/// joined with the separator, whitespace runs collapse to the separator, and
/// the result is lower-cased behind the custom property prefix.
///
/// ```
/// use tokenweave_core::derive_name;
///
/// assert_eq!(derive_name(&["color", "primary", "500"]), "--color-primary-500");
/// assert_eq!(derive_name(&["Typography", "Font Size", "200"]), "--typography-font-size-200");
/// ```
pub fn derive_name<S: AsRef<str>>(path: &[S]) -> String {
    let joined = path
        .iter()
        .map(|segment| segment.as_ref().replace('/', SEPARATOR))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let collapsed = WHITESPACE_RUN.replace_all(&joined, SEPARATOR);
    format!("{VARIABLE_PREFIX}{}", collapsed.to_lowercase())
}

/// Derives the variable name a reference expression points at.
///
/// References use dotted notation (`color.primary.500`); the dotted path is
/// split into segments and handed to [`derive_name`], so references and
/// emitted names can never drift apart.
pub fn reference_name(reference: &str) -> String {
    let segments: Vec<&str> = reference.split('.').collect();
    derive_name(&segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_name_simple_path() {
        assert_eq!(derive_name(&["color", "primary", "500"]), "--color-primary-500");
    }

    #[test]
    fn test_derive_name_lowercases() {
        assert_eq!(derive_name(&["Color", "Primary"]), "--color-primary");
    }

    #[test]
    fn test_derive_name_replaces_segment_slashes() {
        assert_eq!(derive_name(&["radius/outer", "md"]), "--radius-outer-md");
    }

    #[test]
    fn test_derive_name_collapses_whitespace() {
        assert_eq!(derive_name(&["Font  Size", "200"]), "--font-size-200");
    }

    #[test]
    fn test_reference_name_matches_derive_name() {
        let path = ["color", "primary", "500"];
        assert_eq!(reference_name("color.primary.500"), derive_name(&path));
    }

    #[test]
    fn test_reference_name_with_slashes() {
        assert_eq!(reference_name("radius/outer.md"), "--radius-outer-md");
    }
}
