//! Sync run configuration.

use std::path::PathBuf;

/// Default location of the generated stylesheet.
pub const DEFAULT_CSS_OUT: &str = "src/tokens.css";

/// Default location of the persisted raw document.
pub const DEFAULT_JSON_OUT: &str = "tokens/tokens.json";

/// Configuration for one sync run.
///
/// ```
/// use tokenweave::SyncConfig;
///
/// let config = SyncConfig::new()
///     .css_out("build/tokens.css")
///     .strict(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Where the generated stylesheet is written.
    pub css_out: PathBuf,
    /// Where the raw fetched document is persisted verbatim.
    pub json_out: PathBuf,
    /// Passthrough catalogue file; `None` uses the embedded catalogue.
    pub passthrough: Option<PathBuf>,
    /// Whether to run the strict pass after generation.
    pub strict: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            css_out: PathBuf::from(DEFAULT_CSS_OUT),
            json_out: PathBuf::from(DEFAULT_JSON_OUT),
            passthrough: None,
            strict: false,
        }
    }
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn css_out(mut self, path: impl Into<PathBuf>) -> Self {
        self.css_out = path.into();
        self
    }

    pub fn json_out(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_out = path.into();
        self
    }

    pub fn passthrough(mut self, path: impl Into<PathBuf>) -> Self {
        self.passthrough = Some(path.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
