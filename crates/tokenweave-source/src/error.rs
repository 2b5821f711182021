//! Source failure taxonomy.

use std::path::PathBuf;

/// Why a token document could not be obtained.
///
/// Every variant is fatal to the run: there is no partial output when the
/// source fails.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The endpoint could not be reached or the body could not be read.
    #[error("failed to fetch token document from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("token document fetch returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// A local document file could not be read.
    #[error("failed to read token document from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document body is not valid JSON.
    #[error("token document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
