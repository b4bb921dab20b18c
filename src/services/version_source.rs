use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::models::version::Version;

/// Where a raw version string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Supplied directly (argument or environment)
    Literal(String),
    /// Read from a file, typically written by a build script
    File(PathBuf),
}

impl VersionSource {
    /// Pick the first available source: literal, then file
    pub fn select(literal: Option<String>, file: Option<PathBuf>, fallback: PathBuf) -> Self {
        match (literal, file) {
            (Some(raw), _) => Self::Literal(raw),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::File(fallback),
        }
    }

    /// Read the raw version text.
    ///
    /// File contents lose trailing whitespace since version files usually
    /// end with a newline. Literals are returned untouched.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Literal(raw) => Ok(raw.clone()),
            Self::File(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read version file {}", path.display()))?;
                log::debug!("read version from {}", path.display());
                Ok(content.trim_end().to_string())
            }
        }
    }

    /// Read and parse the version
    pub fn resolve(&self) -> Result<Version> {
        let raw = self.read()?;
        Version::parse(&raw).with_context(|| format!("Failed to parse version from {self}"))
    }
}

impl std::fmt::Display for VersionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(_) => write!(f, "literal input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
