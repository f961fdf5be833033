//! CLI error types.

use peach_config::ConfigError;
use peach_toc::TocError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Toc(#[from] TocError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),
}
