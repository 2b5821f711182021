//! Local-file document source, for offline runs and tests.

use std::path::PathBuf;

use crate::error::SourceError;
use crate::source::{DocumentSource, SourceDocument};

/// Reads the token document from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<SourceDocument, SourceError> {
        tracing::debug!(path = %self.path.display(), "reading token document");
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        SourceDocument::parse(raw)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}
