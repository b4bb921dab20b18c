use clap::Args;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::models::version::{Version, VersionError};
use crate::utils::error::{BuildverError, Result};

/// Validate one or more versions
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Version strings to validate
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// Outcome for a single input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    pub outcome: std::result::Result<Version, VersionError>,
}

/// JSON response format for check command
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub status: String,
    pub results: Vec<CheckResult>,
}

impl CheckResult {
    pub fn evaluate(input: &str) -> Self {
        Self {
            input: input.to_string(),
            outcome: Version::parse(input),
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

// {"input", "valid", "version"} or {"input", "valid", "error"}
impl Serialize for CheckResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CheckResult", 3)?;
        state.serialize_field("input", &self.input)?;
        state.serialize_field("valid", &self.is_valid())?;
        match &self.outcome {
            Ok(version) => state.serialize_field("version", version)?,
            Err(err) => state.serialize_field("error", &err.to_string())?,
        }
        state.end()
    }
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let results: Vec<CheckResult> = self
            .versions
            .iter()
            .map(|input| CheckResult::evaluate(input))
            .collect();
        let invalid = results.iter().filter(|result| !result.is_valid()).count();

        if self.json {
            let response = CheckResponse {
                status: if invalid == 0 { "success" } else { "failure" }.to_string(),
                results,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            for result in &results {
                match &result.outcome {
                    Ok(version) => println!("✓ {} ({version})", result.input),
                    Err(err) => println!("✗ {:?}: {err}", result.input),
                }
            }
        }

        if invalid > 0 {
            return Err(BuildverError::ValidationError(format!(
                "{invalid} of {} versions failed validation",
                self.versions.len()
            )));
        }

        Ok(())
    }
}
