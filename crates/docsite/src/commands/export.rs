//! `docsite export` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use docsite_config::ExternalConfig;

use crate::error::CliError;
use crate::output::Output;

/// Output format for the generator configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// CommonJS module (`module.exports = {...};`).
    Module,
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Descriptor files, highest priority first (default: auto-discover docsite.toml).
    configs: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the output cannot be written.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = docsite_config::load(&self.configs)?;
        let rendered = render(&site.to_external_config(), self.format)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.emit(&rendered)?,
        }

        Ok(())
    }
}

/// Render the generator configuration in `format`.
fn render(config: &ExternalConfig, format: Format) -> Result<String, CliError> {
    let rendered = match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&config.to_json()?)?;
            json.push('\n');
            json
        }
        Format::Module => config.to_module()?,
    };
    Ok(rendered)
}
