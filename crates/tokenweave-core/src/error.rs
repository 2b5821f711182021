//! Error type for stylesheet emission.

/// Error raised while producing the generated stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The document skeleton template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The passthrough catalogue is not valid YAML for the expected shape.
    #[error("invalid passthrough catalogue: {0}")]
    Catalogue(#[from] serde_yaml::Error),
}
