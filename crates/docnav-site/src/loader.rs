//! Descriptor loading.

use std::path::Path;

use crate::descriptor::SiteMeta;
use crate::error::DescriptorError;
use crate::raw::RawDescriptor;

/// Descriptor file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// TOML (`.toml`).
    Toml,
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
}

impl Format {
    /// Detect format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Load a descriptor file, choosing the format by extension.
///
/// # Errors
///
/// Returns `NotFound`/`Io` if the file can't be read, `UnsupportedFormat`
/// for an unknown extension, and `Malformed` if the content does not
/// conform to the descriptor schema.
pub fn load(path: &Path) -> Result<SiteMeta, DescriptorError> {
    let format =
        Format::from_path(path).ok_or_else(|| DescriptorError::UnsupportedFormat(path.to_path_buf()))?;
    if !path.exists() {
        return Err(DescriptorError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let meta = load_str(&content, format)?;
    tracing::info!(
        path = %path.display(),
        nav = meta.nav.len(),
        sidebar = meta.sidebar.len(),
        "Loaded descriptor"
    );
    Ok(meta)
}

/// Parse and validate a descriptor from a string.
///
/// # Errors
///
/// Returns `Malformed` if the content does not conform to the descriptor schema.
pub fn load_str(content: &str, format: Format) -> Result<SiteMeta, DescriptorError> {
    let raw: RawDescriptor = match format {
        Format::Toml => toml::from_str(content).map_err(|e| DescriptorError::parse(&e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| DescriptorError::parse(&e))?,
        Format::Yaml => {
            if content.trim().is_empty() {
                RawDescriptor::default()
            } else {
                serde_yaml::from_str(content).map_err(|e| DescriptorError::parse(&e))?
            }
        }
    };
    SiteMeta::from_raw(raw)
}
