//! Unit coercion for bare numeric token values.
//!
//! Unit inference from the semantic type alone is ambiguous: a `number`
//! token may be a unitless multiplier or a pixel dimension. The policy is
//! therefore an ordered rule list with a name-substring escape hatch for
//! known unitless families, checked before the type-based default. First
//! match wins:
//!
//! 1. value already contains a `var(` indirection: unchanged
//! 2. derived name contains a unitless marker: unchanged
//! 3. semantic type is not numeric/unit-bearing: unchanged
//! 4. value does not parse as a number, or parses to exactly zero: unchanged
//! 5. value already ends with a recognized unit suffix: unchanged
//! 6. otherwise: append the default unit

/// Name substrings marking families that must stay unitless. Matched
/// against the derived name, which is already lower-case.
pub const UNITLESS_NAME_MARKERS: &[&str] = &["fontweight", "letterspacing", "column"];

/// Semantic types whose bare numeric values carry an implicit unit.
pub const NUMERIC_KINDS: &[&str] = &["fontSizes", "lineHeights", "number", "dimension"];

/// Unit suffixes that disable stamping when already present.
pub const UNIT_SUFFIXES: &[&str] = &["px", "rem", "%"];

/// Unit appended to bare numeric values.
pub const DEFAULT_UNIT: &str = "px";

/// Applies the unit coercion policy to a resolved value.
///
/// Pure and total; re-applying it to its own output is a no-op.
///
/// ```
/// use tokenweave_core::coerce_unit;
///
/// assert_eq!(coerce_unit("dimension", "--spacing-200", "16"), "16px");
/// assert_eq!(coerce_unit("number", "--line-height", "0"), "0");
/// assert_eq!(coerce_unit("color", "--color-primary-500", "#1a2b3c"), "#1a2b3c");
/// ```
pub fn coerce_unit(kind: &str, name: &str, value: &str) -> String {
    if value.contains("var(") {
        return value.to_string();
    }
    if UNITLESS_NAME_MARKERS.iter().any(|marker| name.contains(marker)) {
        return value.to_string();
    }
    if !NUMERIC_KINDS.contains(&kind) {
        return value.to_string();
    }
    let Ok(number) = value.trim().parse::<f64>() else {
        return value.to_string();
    };
    if number == 0.0 {
        return value.to_string();
    }
    if UNIT_SUFFIXES.iter().any(|suffix| value.ends_with(suffix)) {
        return value.to_string();
    }
    format!("{value}{DEFAULT_UNIT}")
}
