//! CLI error types.

use ccc_config::ConfigError;
use ccc_store::StoreError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Store check failed with {0} error(s)")]
    CheckFailed(usize),
}
