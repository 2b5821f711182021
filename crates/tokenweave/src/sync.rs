//! The sync run: source to artifacts.
//!
//! Orchestrates the whole pipeline in order: fetch once, persist the raw
//! document, flatten the three sections, build the lookup table over the
//! full token universe, render the stylesheet, write it, and optionally
//! run the strict pass. Stateless between invocations; re-running
//! overwrites prior output wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use tokenweave_core::{
    audit_records, audit_tree, render_document, Diagnostic, EmitError, LookupTable, Passthrough,
    TokenDocument, SECTION_CORE, SECTION_ECO, SECTION_STANDARD,
};
use tokenweave_source::{DocumentSource, SourceError};

use crate::config::SyncConfig;

/// Why a sync run failed. Document shape anomalies are never in here;
/// those surface as [`Diagnostic`]s on the outcome instead.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read passthrough catalogue {path}: {source}")]
    Catalogue {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a successful sync run produced.
#[derive(Debug)]
pub struct SyncOutcome {
    pub core_count: usize,
    pub standard_count: usize,
    pub eco_count: usize,
    pub css_path: PathBuf,
    pub json_path: PathBuf,
    /// Strict-pass findings; empty when strict mode is off.
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs a full sync against the given source.
pub fn run(config: &SyncConfig, source: &dyn DocumentSource) -> Result<SyncOutcome, SyncError> {
    let fetched = source.fetch()?;
    write_artifact(&config.json_out, &fetched.raw)?;

    let document = TokenDocument::new(fetched.root);
    let core = document.flatten_section(SECTION_CORE);
    let standard = document.flatten_section(SECTION_STANDARD);
    let eco = document.flatten_section(SECTION_ECO);
    let lookup = LookupTable::build(core.iter().chain(&standard).chain(&eco));

    let passthrough = load_passthrough(config)?;
    let css = render_document(&core, &standard, &eco, &lookup, &passthrough)?;
    write_artifact(&config.css_out, &css)?;

    let diagnostics = if config.strict {
        collect_diagnostics(&document, &core, &standard, &eco, &lookup)
    } else {
        Vec::new()
    };

    Ok(SyncOutcome {
        core_count: core.len(),
        standard_count: standard.len(),
        eco_count: eco.len(),
        css_path: config.css_out.clone(),
        json_path: config.json_out.clone(),
        diagnostics,
    })
}

/// Runs the pipeline stages and the strict pass without writing anything.
pub fn check(source: &dyn DocumentSource) -> Result<Vec<Diagnostic>, SyncError> {
    let fetched = source.fetch()?;
    let document = TokenDocument::new(fetched.root);
    let core = document.flatten_section(SECTION_CORE);
    let standard = document.flatten_section(SECTION_STANDARD);
    let eco = document.flatten_section(SECTION_ECO);
    let lookup = LookupTable::build(core.iter().chain(&standard).chain(&eco));
    Ok(collect_diagnostics(&document, &core, &standard, &eco, &lookup))
}

fn collect_diagnostics(
    document: &TokenDocument,
    core: &[tokenweave_core::FlatToken],
    standard: &[tokenweave_core::FlatToken],
    eco: &[tokenweave_core::FlatToken],
    lookup: &LookupTable,
) -> Vec<Diagnostic> {
    let mut diagnostics = audit_tree(document.root());
    diagnostics.extend(audit_records(
        core.iter().chain(standard).chain(eco),
        lookup,
    ));
    diagnostics
}

fn load_passthrough(config: &SyncConfig) -> Result<Passthrough, SyncError> {
    match &config.passthrough {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SyncError::Catalogue {
                path: path.clone(),
                source,
            })?;
            Ok(Passthrough::from_yaml(&text)?)
        }
        None => Ok(Passthrough::embedded()?),
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SyncError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, contents).map_err(|source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
