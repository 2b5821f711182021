//! Stylesheet emission.
//!
//! The emitter turns flattened records into the generated stylesheet: an
//! unscoped base block, one scoped block per theme, and the static
//! passthrough block. Per-line rendering is plain formatting; the document
//! skeleton is a fixed named-slot template rendered with minijinja.
//!
//! Theme switching relies on name sharing: where both themes define the
//! same semantic token, both scoped blocks redefine the same variable name
//! and the last matching scope wins under standard cascade rules.

use minijinja::{Environment, Value as TemplateValue};
use serde::Serialize;

use crate::error::EmitError;
use crate::name::derive_name;
use crate::passthrough::Passthrough;
use crate::record::FlatToken;
use crate::resolve::LookupTable;
use crate::units::coerce_unit;

/// Header comment marking the stylesheet as generated.
pub const GENERATED_HEADER: &str = "/* Auto-generated by tokenweave sync. Do not edit manually. */\n/* Regenerate with: tokenweave sync */";

/// Document skeleton. Block bodies are pre-rendered and substituted whole.
const DOCUMENT_TEMPLATE: &str = r#"{{ header }}

/* ========== Core value tokens ========== */
:root {
{{ core_body }}
}

/* ========== Semantic tokens (standard / light theme) ========== */
:root,
[data-theme="standard"] {
{{ standard_body }}
}

/* ========== Semantic tokens (eco / dark theme) ========== */
[data-theme="eco"] {
{{ eco_body }}
}

/* ========== Tailwind v4 @theme integration ========== */
@theme {
{{ passthrough_body }}
}
"#;

#[derive(Serialize)]
struct DocumentContext {
    header: &'static str,
    core_body: String,
    standard_body: String,
    eco_body: String,
    passthrough_body: String,
}

/// Renders one block body: a `  name: value;` line per record, in
/// traversal order, with references resolved and units coerced.
pub fn render_lines(records: &[FlatToken], lookup: &LookupTable) -> String {
    records
        .iter()
        .map(|record| {
            let name = derive_name(&record.path);
            let resolved = lookup.resolve(&record.value);
            let value = coerce_unit(&record.kind, &name, &resolved);
            format!("  {name}: {value};")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the complete stylesheet document.
pub fn render_document(
    core: &[FlatToken],
    standard: &[FlatToken],
    eco: &[FlatToken],
    lookup: &LookupTable,
    passthrough: &Passthrough,
) -> Result<String, EmitError> {
    tracing::debug!(
        core = core.len(),
        standard = standard.len(),
        eco = eco.len(),
        aliases = passthrough.len(),
        "rendering stylesheet"
    );
    let context = DocumentContext {
        header: GENERATED_HEADER,
        core_body: render_lines(core, lookup),
        standard_body: render_lines(standard, lookup),
        eco_body: render_lines(eco, lookup),
        passthrough_body: passthrough.render_body(),
    };
    let env = Environment::new();
    let mut document = env.render_str(DOCUMENT_TEMPLATE, TemplateValue::from_serialize(&context))?;
    if !document.ends_with('\n') {
        document.push('\n');
    }
    Ok(document)
}
