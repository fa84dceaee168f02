//! Project configuration for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//! - leading `~` - expands to the home directory
//!
//! Expanded fields:
//! - `site.descriptor`
//! - `site.content_dir`

mod expand;

use glob::Pattern;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override descriptor file path.
    pub descriptor: Option<PathBuf>,
    /// Override content directory.
    pub content_dir: Option<PathBuf>,
    /// Override strict link checking.
    pub strict: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

const DEFAULT_DESCRIPTOR: &str = "site.toml";
const DEFAULT_CONTENT_DIR: &str = "docs";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site paths (relative strings from TOML).
    site: SiteConfigRaw,
    /// Link checking policy.
    pub links: LinksConfig,

    /// Resolved site paths (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct SiteConfigRaw {
    descriptor: Option<String>,
    content_dir: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Navigation descriptor file.
    pub descriptor: PathBuf,
    /// Root of the document content tree.
    pub content_dir: PathBuf,
}

/// Link checking configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Treat broken internal links as fatal.
    pub strict: bool,
    /// Glob patterns for internal links that are never reported
    /// (e.g., `/drafts/**`, `/**/changelog.md`).
    pub ignore: Vec<String>,

    /// Compiled `ignore` patterns (set after loading).
    #[serde(skip)]
    ignore_patterns: Vec<Pattern>,
}

impl LinksConfig {
    /// Create a links configuration, compiling its ignore patterns.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a pattern is not a valid glob.
    pub fn new(strict: bool, ignore: Vec<String>) -> Result<Self, ConfigError> {
        let mut links = Self {
            strict,
            ignore,
            ignore_patterns: Vec::new(),
        };
        links.compile_patterns()?;
        Ok(links)
    }

    /// Compile `ignore` into glob patterns.
    fn compile_patterns(&mut self) -> Result<(), ConfigError> {
        self.ignore_patterns = self
            .ignore
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    ConfigError::Validation(format!("links.ignore: invalid pattern \"{p}\": {e}"))
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Check whether a link is excluded from broken-link reports.
    #[must_use]
    pub fn is_ignored(&self, link: &str) -> bool {
        self.ignore_patterns.iter().any(|p| p.matches(link))
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.descriptor`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(descriptor) = &settings.descriptor {
            self.site_resolved.descriptor.clone_from(descriptor);
        }
        if let Some(content_dir) = &settings.content_dir {
            self.site_resolved.content_dir.clone_from(content_dir);
        }
        if let Some(strict) = settings.strict {
            self.links.strict = strict;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            links: LinksConfig::default(),
            site_resolved: SiteConfig {
                descriptor: base.join(DEFAULT_DESCRIPTOR),
                content_dir: base.join(DEFAULT_CONTENT_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.validate()?;
        config.links.compile_patterns()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(descriptor) = &self.site.descriptor {
            require_non_empty(descriptor, "site.descriptor")?;
        }
        if let Some(content_dir) = &self.site.content_dir {
            require_non_empty(content_dir, "site.content_dir")?;
        }
        for pattern in &self.links.ignore {
            require_non_empty(pattern, "links.ignore")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_path(&mut self.site.descriptor, "site.descriptor")?;
        expand::expand_path(&mut self.site.content_dir, "site.content_dir")
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            descriptor: resolve(self.site.descriptor.as_deref(), DEFAULT_DESCRIPTOR),
            content_dir: resolve(self.site.content_dir.as_deref(), DEFAULT_CONTENT_DIR),
        };
    }
}
