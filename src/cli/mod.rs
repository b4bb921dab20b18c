// CLI module for command-line interface

pub mod check;
pub mod parse;
pub mod show;

use clap::{Parser, Subcommand};
use crate::utils::error::Result;

use self::check::CheckCommand;
use self::parse::ParseCommand;
use self::show::ShowCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "buildver")]
#[command(about = "Parse, validate and report v<major>.<minor>.<patch> build versions")]
#[command(long_about = r#"buildver reads build versions of the form v<major>.<minor>.<patch>,
validates them and reports their components.

Every version must start with a lowercase 'v' followed by exactly three
dot-separated non-negative integers. Pre-release and build metadata
suffixes are not accepted.

Examples:
  buildver parse v1.2.3                 Print the version and its fields
  buildver parse v1.2.3 --field minor   Print a single field
  buildver check v1.0.0 v2.0            Validate several versions
  buildver show                         Report the version from version.txt

Set RUST_LOG=debug for diagnostic output."#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a version and print its components
    #[command(long_about = r#"Parse a single version string and print its components.

Examples:
  buildver parse v1.2.3                 Canonical form plus major/minor/patch
  buildver parse v1.2.3 --field patch   Only the patch number
  buildver parse v1.2.3 --json          Machine-readable output"#)]
    Parse(ParseCommand),

    /// Validate one or more versions
    #[command(long_about = r#"Validate one or more version strings.

Each version is reported as valid or invalid with the reason. The command
fails when any version is invalid.

Examples:
  buildver check v1.0.0 v1.2.3
  buildver check v1.0 1.0.0 --json"#)]
    Check(CheckCommand),

    /// Report the running build version
    #[command(long_about = r#"Resolve the build version and report it.

The version is taken from, in order: --literal, the BUILDVER_VERSION
environment variable, --file, and finally version_file from buildver.toml
(default: version.txt). An empty BUILDVER_VERSION counts as unset. A
relative version_file is resolved next to the buildver.toml that names it.
Trailing newlines in version files are ignored.

Examples:
  buildver show
  buildver show --file build/VERSION
  BUILDVER_VERSION=v2.0.1 buildver show --json"#)]
    Show(ShowCommand),
}

pub struct CliDispatcher;

impl CliDispatcher {
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Parse(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
        }
    }
}
