//! Remote document fetching.

use crate::error::SourceError;
use crate::source::{DocumentSource, SourceDocument};

/// The published token document this tool syncs from by default.
pub const DEFAULT_TOKENS_URL: &str =
    "https://raw.githubusercontent.com/FernandoGalende/camino-tokens/main/tokens.json";

/// Fetches the token document over HTTP with a single blocking GET.
///
/// The fetch is the only blocking point of the whole run and happens
/// exactly once, before any pipeline stage. Non-success statuses are
/// treated the same as transport failures: fatal.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_TOKENS_URL)
    }
}

impl DocumentSource for RemoteSource {
    fn fetch(&self) -> Result<SourceDocument, SourceError> {
        tracing::debug!(url = %self.url, "fetching token document");
        let response = reqwest::blocking::get(&self.url).map_err(|source| SourceError::Transport {
            url: self.url.clone(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let raw = response.text().map_err(|source| SourceError::Transport {
            url: self.url.clone(),
            source,
        })?;
        SourceDocument::parse(raw)
    }

    fn origin(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_points_at_published_document() {
        let source = RemoteSource::default();
        assert_eq!(source.url(), DEFAULT_TOKENS_URL);
        assert_eq!(source.origin(), DEFAULT_TOKENS_URL);
    }
}
