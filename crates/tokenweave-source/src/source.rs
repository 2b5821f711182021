//! The document source contract.

use serde_json::Value;

use crate::error::SourceError;

/// A fetched token document.
///
/// Carries both the parsed tree and the raw response text; the raw text is
/// persisted byte-for-byte as an audit artifact, so it is never
/// re-serialized.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// The document body exactly as fetched.
    pub raw: String,
    /// The parsed token tree.
    pub root: Value,
}

impl SourceDocument {
    /// Parses a raw document body.
    pub fn parse(raw: String) -> Result<Self, SourceError> {
        let root = serde_json::from_str(&raw)?;
        Ok(Self { raw, root })
    }
}

/// Something that can produce the token document, once per run.
pub trait DocumentSource {
    /// Obtains the document, or fails fatally.
    fn fetch(&self) -> Result<SourceDocument, SourceError>;

    /// Human-readable description of where the document comes from, for
    /// progress messages.
    fn origin(&self) -> String;
}
