//! # tokenweave-core - Design Token Pipeline
//!
//! Core transformation stages for the tokenweave sync tool: a nested,
//! typed design-token tree goes in; a flat, theme-scoped CSS custom
//! property document comes out.
//!
//! The pipeline is single-pass and strictly forward:
//!
//! 1. [`flatten`]: depth-first traversal into [`FlatToken`] records
//! 2. [`derive_name`] / [`LookupTable`]: canonical variable names and
//!    reference rewriting
//! 3. [`coerce_unit`]: unit stamping for bare numeric values
//! 4. [`emit::render_document`]: scoped blocks plus the static
//!    [`Passthrough`] alias layer
//!
//! Every stage is permissive: shape anomalies are absorbed, never fatal.
//! The optional strict pass ([`audit_tree`] / [`audit_records`]) reports
//! them as [`Diagnostic`]s without changing what gets emitted.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tokenweave_core::{flatten, LookupTable, derive_name};
//!
//! let tree = json!({
//!     "spacing": { "200": { "$type": "dimension", "$value": "16" } }
//! });
//! let records: Vec<_> = flatten(&tree).collect();
//! let lookup = LookupTable::build(&records);
//!
//! assert_eq!(derive_name(&records[0].path), "--spacing-200");
//! assert_eq!(lookup.resolve(&records[0].value), "16");
//! ```

pub mod diagnostics;
pub mod document;
pub mod emit;
pub mod error;
pub mod flatten;
pub mod name;
pub mod passthrough;
pub mod record;
pub mod resolve;
pub mod units;

pub use diagnostics::{audit_records, audit_tree, Diagnostic, Severity};
pub use document::{TokenDocument, SECTIONS, SECTION_CORE, SECTION_ECO, SECTION_STANDARD};
pub use emit::{render_document, render_lines, GENERATED_HEADER};
pub use error::EmitError;
pub use flatten::{flatten, flatten_at, Flatten};
pub use name::{derive_name, reference_name, VARIABLE_PREFIX};
pub use passthrough::{Passthrough, PassthroughEntry, PassthroughGroup};
pub use record::FlatToken;
pub use resolve::{references, LookupTable};
pub use units::{coerce_unit, DEFAULT_UNIT};
