//! # tokenweave - Design Token Sync
//!
//! tokenweave turns a hierarchical, typed design-token document into a
//! flat, theme-scoped set of CSS custom properties, plus a static alias
//! layer for Tailwind's `@theme` integration. Components consume only the
//! generated variable names; they never see the raw token document.
//!
//! The run is a single forward pass: fetch, flatten, resolve, emit. The
//! heavy lifting lives in [`tokenweave_core`]; document acquisition lives
//! in [`tokenweave_source`]; this crate wires them together and exposes
//! the `tokenweave` binary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tokenweave::{sync, SyncConfig};
//! use tokenweave_source::FileSource;
//!
//! fn main() -> anyhow::Result<()> {
//!     let source = FileSource::new("tokens.json");
//!     let outcome = sync::run(&SyncConfig::new().strict(true), &source)?;
//!     println!("wrote {}", outcome.css_path.display());
//!     for diagnostic in &outcome.diagnostics {
//!         eprintln!("{diagnostic}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! One generated stylesheet with four block groups:
//!
//! - `:root` with every core value token
//! - `:root, [data-theme="standard"]` with the standard theme's semantic
//!   tokens
//! - `[data-theme="eco"]` with the eco theme's semantic tokens
//! - `@theme` with the static passthrough catalogue
//!
//! plus a verbatim copy of the fetched document for auditing.

pub mod cli;
pub mod config;
pub mod sync;

pub use config::{SyncConfig, DEFAULT_CSS_OUT, DEFAULT_JSON_OUT};
pub use sync::{SyncError, SyncOutcome};

pub use tokenweave_core::{Diagnostic, Severity};
pub use tokenweave_source::{DocumentSource, FileSource, RemoteSource};
