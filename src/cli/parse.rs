use clap::Args;
use serde::Serialize;

use crate::models::version::{FieldRole, Version};
use crate::utils::error::Result;

/// Parse a version and print its components
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Version string, e.g. v1.2.3
    pub version: String,

    /// Print only this field (major, minor or patch)
    #[arg(long)]
    pub field: Option<FieldRole>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for parse command
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub version: Version,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl From<Version> for ParseResponse {
    fn from(version: Version) -> Self {
        Self {
            version,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
        }
    }
}

impl ParseCommand {
    pub fn run(&self) -> Result<()> {
        let version = Version::parse(&self.version)?;
        log::debug!("parsed {:?} as {version}", self.version);

        match (self.field, self.json) {
            (Some(role), true) => {
                let value = serde_json::json!({ role.name(): version.get(role) });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            (Some(role), false) => println!("{}", version.get_string(role)),
            (None, true) => {
                let response = ParseResponse::from(version);
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            (None, false) => {
                println!("{version}");
                println!("  major: {}", version.major_string());
                println!("  minor: {}", version.minor_string());
                println!("  patch: {}", version.patch_string());
            }
        }

        Ok(())
    }
}
