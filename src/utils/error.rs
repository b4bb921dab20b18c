// Common error types for buildver

use std::error::Error;
use std::fmt;

use crate::models::version::VersionError;

#[derive(Debug)]
pub enum BuildverError {
    IoError(std::io::Error),
    ConfigError(String),
    VersionError {
        error: VersionError,
        /// Where the version came from, e.g. "Failed to parse version from version.txt"
        context: Option<String>,
    },
    ValidationError(String),
}

impl fmt::Display for BuildverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(err) => write!(f, "IO error: {err}"),
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            Self::VersionError {
                error,
                context: Some(context),
            } => write!(f, "Invalid version: {context}: {error}"),
            Self::VersionError {
                error,
                context: None,
            } => write!(f, "Invalid version: {error}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl Error for BuildverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::VersionError { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BuildverError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<VersionError> for BuildverError {
    fn from(err: VersionError) -> Self {
        Self::VersionError {
            error: err,
            context: None,
        }
    }
}

impl From<serde_json::Error> for BuildverError {
    fn from(err: serde_json::Error) -> Self {
        Self::ValidationError(format!("Failed to serialize JSON response: {err}"))
    }
}

impl From<anyhow::Error> for BuildverError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(version_err) = err.downcast_ref::<VersionError>() {
            let layers: Vec<String> = err
                .chain()
                .take_while(|layer| !layer.is::<VersionError>())
                .map(ToString::to_string)
                .collect();
            return Self::VersionError {
                error: version_err.clone(),
                context: (!layers.is_empty()).then(|| layers.join(": ")),
            };
        }
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            return Self::IoError(std::io::Error::new(io_err.kind(), format!("{err:#}")));
        }
        Self::ConfigError(format!("{err:#}"))
    }
}

pub type Result<T> = std::result::Result<T, BuildverError>;

/// Error presentation for the terminal: message, optional hint and exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub suggestion: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub const EXIT_VALIDATION: i32 = 2;
    pub const EXIT_CONFIG: i32 = 3;
    pub const EXIT_IO: i32 = 4;

    pub fn from_buildver_error(err: &BuildverError) -> Self {
        let (suggestion, exit_code) = match err {
            BuildverError::VersionError {
                error: version_err, ..
            } => {
                (Some(version_hint(version_err)), Self::EXIT_VALIDATION)
            }
            BuildverError::ValidationError(_) => (None, Self::EXIT_VALIDATION),
            BuildverError::ConfigError(_) => (
                Some("Check buildver.toml, or pass --config <path> explicitly.".to_string()),
                Self::EXIT_CONFIG,
            ),
            BuildverError::IoError(_) => (None, Self::EXIT_IO),
        };

        Self {
            message: err.to_string(),
            suggestion,
            exit_code,
        }
    }

    /// Print to stderr
    pub fn print(&self) {
        eprintln!("error: {}", self.message);
        if let Some(suggestion) = &self.suggestion {
            eprintln!();
            eprintln!("{suggestion}");
        }
    }
}

fn version_hint(err: &VersionError) -> String {
    let expected = "Versions look like v<major>.<minor>.<patch>, for example v1.2.3.";
    match err {
        VersionError::Empty => format!("Provide a version string. {expected}"),
        VersionError::InvalidPrefix { .. } => {
            format!("Versions must start with a lowercase 'v'. {expected}")
        }
        VersionError::Malformed { .. } => {
            format!("Exactly three dot-separated fields are required. {expected}")
        }
        VersionError::EmptyField(role) => format!("The {role} field needs a number. {expected}"),
        VersionError::InvalidInteger { role, .. } => {
            format!("The {role} field must be a non-negative integer. {expected}")
        }
    }
}
