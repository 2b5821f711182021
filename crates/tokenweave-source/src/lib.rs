//! Token document sources.
//!
//! The pipeline treats where the token document comes from as an opaque
//! collaborator: a [`DocumentSource`] either returns the parsed tree (plus
//! the raw text, which is persisted verbatim as an audit artifact) or
//! fails. One-shot, no retries, no caching; a failed fetch aborts the run
//! before anything is written.

pub mod error;
pub mod file;
pub mod remote;
pub mod source;

pub use error::SourceError;
pub use file::FileSource;
pub use remote::{RemoteSource, DEFAULT_TOKENS_URL};
pub use source::{DocumentSource, SourceDocument};
