use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::models::version::Version;
use crate::services::version_source::VersionSource;
use crate::utils::config::{ConfigParser, OutputFormat};
use crate::utils::error::Result;

/// Report the running build version
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Version string to report instead of reading a file (ignored when empty)
    #[arg(long, env = "BUILDVER_VERSION")]
    pub literal: Option<String>,

    /// Version file to read
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Configuration file (default: ./buildver.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for show command
#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub version: Version,
    pub source: String,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigParser::load(self.config.as_deref())?;
        let source = VersionSource::select(
            self.literal.clone().filter(|raw| !raw.is_empty()),
            self.file.clone(),
            config.version_file.clone(),
        );

        let version = source.resolve()?;
        log::info!("{}: {version}", config.log_prefix);

        if self.json || config.output == OutputFormat::Json {
            let response = ShowResponse {
                version,
                source: source.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}: {version}", config.log_prefix);
        }

        Ok(())
    }
}
