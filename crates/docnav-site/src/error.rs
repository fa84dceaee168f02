//! Descriptor error types.

use std::path::PathBuf;

/// Location used for errors that cannot be pinned to a single node.
pub(crate) const DOCUMENT_LOCATION: &str = "<document>";

/// Error loading a navigation descriptor.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// Descriptor file does not exist.
    #[error("Descriptor file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error while reading the descriptor.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// File extension does not map to a known format.
    #[error("Unsupported descriptor format: {} (expected .toml, .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Structural violation of the descriptor schema.
    #[error("Malformed config at {location}: {message}")]
    Malformed {
        /// Path to the offending node (e.g., `themeConfig.sidebar[1].items[0]`).
        location: String,
        /// What is wrong with the node.
        message: String,
    },
}

impl DescriptorError {
    pub(crate) fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Wrap a deserializer error that carries its own position information.
    pub(crate) fn parse(err: &impl std::fmt::Display) -> Self {
        Self::malformed(DOCUMENT_LOCATION, err.to_string())
    }
}
