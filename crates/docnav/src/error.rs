//! CLI error types.

use docnav_config::ConfigError;
use docnav_site::DescriptorError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Descriptor(#[from] DescriptorError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{count} broken link(s) found (strict mode)")]
    BrokenLinks { count: usize },
}
