//! Error types for conda-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from conda-discovery
    #[error(transparent)]
    Discovery(#[from] conda_discovery::Error),

    /// JSON output could not be produced
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialised
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
