use thiserror::Error;

/// Error produced while serialising or converting a graph.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Writing to the destination failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Writing a delimited record failed.
    #[error("delimited output error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML encoding failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Pickle encoding failed.
    #[error("pickle error: {0}")]
    Pickle(#[from] serde_pickle::Error),
}
