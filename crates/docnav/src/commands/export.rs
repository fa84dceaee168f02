//! `docnav export` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::SiteMeta;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Descriptor file (overrides config).
    #[arg(short, long, env = "DOCNAV_DESCRIPTOR")]
    descriptor: Option<PathBuf>,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is malformed or output can't be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            descriptor: self.descriptor,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let descriptor = docnav_site::load(&config.site_resolved.descriptor)?;

        match self.output {
            Some(path) => {
                let mut file = std::fs::File::create(&path)?;
                write_descriptor(&mut file, &descriptor, self.compact)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => write_descriptor(&mut std::io::stdout().lock(), &descriptor, self.compact)?,
        }
        Ok(())
    }
}

/// Serialize a descriptor as JSON followed by a newline.
fn write_descriptor(
    writer: &mut impl Write,
    descriptor: &SiteMeta,
    compact: bool,
) -> Result<(), CliError> {
    if compact {
        serde_json::to_writer(&mut *writer, descriptor)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, descriptor)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}
