//! CLI error types.

use hangar_config::ConfigError;
use hangar_site::RouteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Route(#[from] RouteError),

    #[error("{0}")]
    Server(String),
}
