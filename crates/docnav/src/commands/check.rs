//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::{BrokenLink, DocumentSet, validate_links};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Descriptor file (overrides config).
    #[arg(short, long, env = "DOCNAV_DESCRIPTOR")]
    descriptor: Option<PathBuf>,

    /// Documentation content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Treat broken links as fatal.
    #[arg(long)]
    strict: bool,

    /// Report broken links as warnings only.
    #[arg(long, conflicts_with = "strict")]
    no_strict: bool,
}

/// Outcome of checking a descriptor against its content tree.
#[derive(Debug)]
pub(crate) struct CheckReport {
    /// Broken links not covered by `links.ignore`.
    pub broken: Vec<BrokenLink>,
    /// Broken links suppressed by `links.ignore`.
    pub ignored: usize,
    /// Number of `link` fields checked.
    pub links: usize,
    /// Number of documents found in the content tree.
    pub documents: usize,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or descriptor loading fails, or if
    /// broken links are found in strict mode.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let strict = self.resolve_strict();
        let cli_settings = CliSettings {
            descriptor: self.descriptor,
            content_dir: self.content_dir,
            strict,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::info!(
            config = ?config.config_path,
            strict = config.links.strict,
            ignore = config.links.ignore.len(),
            "Loaded configuration"
        );

        output.source("Descriptor", &config.site_resolved.descriptor);
        output.source("Content directory", &config.site_resolved.content_dir);

        let report = run_check(&config)?;

        for broken in &report.broken {
            output.broken_link(broken);
        }
        output.ignored(report.ignored);

        if report.broken.is_empty() {
            output.success(&format!(
                "All {} links resolve ({} documents)",
                report.links, report.documents
            ));
            return Ok(());
        }

        if config.links.strict {
            return Err(CliError::BrokenLinks {
                count: report.broken.len(),
            });
        }
        output.warning(&format!(
            "{} of {} links are broken",
            report.broken.len(),
            report.links
        ));
        Ok(())
    }

    /// Resolve strict mode from --strict/--no-strict flags.
    fn resolve_strict(&self) -> Option<bool> {
        if self.no_strict {
            Some(false)
        } else if self.strict {
            Some(true)
        } else {
            None
        }
    }
}

/// Load the configured descriptor and validate it against the content tree.
pub(crate) fn run_check(config: &Config) -> Result<CheckReport, CliError> {
    let descriptor = docnav_site::load(&config.site_resolved.descriptor)?;
    let documents = DocumentSet::scan(&config.site_resolved.content_dir);

    let (ignored, broken): (Vec<_>, Vec<_>) = validate_links(&descriptor, &documents)
        .into_iter()
        .partition(|broken| config.links.is_ignored(&broken.link));

    Ok(CheckReport {
        broken,
        ignored: ignored.len(),
        links: descriptor.links().len(),
        documents: documents.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use pretty_assertions::assert_eq;

    fn write_project(root: &Path, config: &str) -> PathBuf {
        let docs = root.join("docs");
        fs::create_dir_all(docs.join("guide")).unwrap();
        fs::write(docs.join("index.md"), "# Home").unwrap();
        fs::write(docs.join("guide").join("intro.md"), "# Intro").unwrap();

        fs::write(
            root.join("site.toml"),
            r#"
title = "Test"

[themeConfig]
nav = [{ text = "Home", link = "/" }]

[[themeConfig.sidebar]]
text = "Guide"
items = [
    { text = "Intro", link = "/guide/intro" },
    { text = "Draft", link = "/drafts/wip.md" },
    { text = "Gone", link = "/guide/gone.md" },
    { text = "Site", link = "https://example.com" },
]
"#,
        )
        .unwrap();

        let config_path = root.join("docnav.toml");
        fs::write(&config_path, config).unwrap();
        config_path
    }

    #[test]
    fn test_run_check_reports_broken_links() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path(), "");
        let config = Config::load(Some(&config_path), None).unwrap();

        let report = run_check(&config).unwrap();

        let links: Vec<_> = report.broken.iter().map(|b| b.link.as_str()).collect();
        assert_eq!(links, vec!["/drafts/wip.md", "/guide/gone.md"]);
        assert_eq!(report.ignored, 0);
        assert_eq!(report.links, 5);
        assert_eq!(report.documents, 2);
    }

    #[test]
    fn test_run_check_applies_ignore_patterns() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path(), "[links]\nignore = [\"/drafts/*\"]\n");
        let config = Config::load(Some(&config_path), None).unwrap();

        let report = run_check(&config).unwrap();

        assert_eq!(report.broken.len(), 1);
        assert_eq!(report.broken[0].text, "Gone");
        assert_eq!(report.ignored, 1);
    }

    #[test]
    fn test_run_check_missing_descriptor() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path(), "[site]\ndescriptor = \"nav.json\"\n");
        let config = Config::load(Some(&config_path), None).unwrap();

        let err = run_check(&config).unwrap_err();
        assert!(err.to_string().contains("nav.json"));
    }

    #[test]
    fn test_resolve_strict() {
        let args = CheckArgs {
            config: None,
            descriptor: None,
            content_dir: None,
            strict: false,
            no_strict: true,
        };
        assert_eq!(args.resolve_strict(), Some(false));

        let args = CheckArgs {
            strict: true,
            no_strict: false,
            ..args
        };
        assert_eq!(args.resolve_strict(), Some(true));

        let args = CheckArgs {
            strict: false,
            ..args
        };
        assert_eq!(args.resolve_strict(), None);
    }
}
