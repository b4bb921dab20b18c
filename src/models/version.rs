use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Leading character every version string must carry
pub const PREFIX: char = 'v';

/// Separator between the numeric fields
pub const SEPARATOR: char = '.';

/// Number of dot-separated fields in a version
pub const FIELD_COUNT: usize = 3;

/// A build version of the form `v<major>.<minor>.<patch>`
///
/// Values are only produced whole, either by [`Version::new`] or by a
/// successful [`Version::parse`]. There are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Version {
    /// Create a version from its three components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Parse a `v<major>.<minor>.<patch>` string
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// prefix, field count, then each field from major to patch.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let mut chars = input.chars();
        let first = chars.next().ok_or(VersionError::Empty)?;
        if first != PREFIX {
            return Err(VersionError::InvalidPrefix { found: first });
        }

        let segments: Vec<&str> = chars.as_str().split(SEPARATOR).collect();
        if segments.len() != FIELD_COUNT {
            return Err(VersionError::Malformed {
                input: input.to_string(),
                fields: segments.len(),
            });
        }

        let mut values = [0u64; FIELD_COUNT];
        for (role, segment) in FieldRole::ALL.into_iter().zip(segments) {
            values[role.index()] = parse_field(role, segment)?;
        }

        let [major, minor, patch] = values;
        Ok(Self::new(major, minor, patch))
    }

    pub const fn major(&self) -> u64 {
        self.major
    }

    pub const fn minor(&self) -> u64 {
        self.minor
    }

    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Decimal text of the major component
    pub fn major_string(&self) -> String {
        self.major.to_string()
    }

    /// Decimal text of the minor component
    pub fn minor_string(&self) -> String {
        self.minor.to_string()
    }

    /// Decimal text of the patch component
    pub fn patch_string(&self) -> String {
        self.patch.to_string()
    }

    /// Select a component by its role
    pub const fn get(&self, role: FieldRole) -> u64 {
        match role {
            FieldRole::Major => self.major,
            FieldRole::Minor => self.minor,
            FieldRole::Patch => self.patch,
        }
    }

    /// Decimal text of the component selected by `role`
    pub fn get_string(&self, role: FieldRole) -> String {
        self.get(role).to_string()
    }
}

fn parse_field(role: FieldRole, segment: &str) -> Result<u64, VersionError> {
    if segment.is_empty() {
        return Err(VersionError::EmptyField(role));
    }

    segment
        .parse::<u64>()
        .map_err(|source| VersionError::InvalidInteger {
            role,
            token: segment.to_string(),
            source,
        })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            PREFIX, self.major, SEPARATOR, self.minor, SEPARATOR, self.patch
        )
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Position of a field within a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    Major,
    Minor,
    Patch,
}

impl FieldRole {
    /// All roles in positional order
    pub const ALL: [Self; FIELD_COUNT] = [Self::Major, Self::Minor, Self::Patch];

    /// Zero-based position of this field in the version string
    pub const fn index(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Patch => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(format!(
                "unknown version field '{s}' (expected major, minor or patch)"
            )),
        }
    }
}

/// Version parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Input was the empty string
    #[error("version string is empty")]
    Empty,

    /// First character was not the `v` prefix
    #[error("missing version prefix: expected 'v', found '{found}'")]
    InvalidPrefix { found: char },

    /// Wrong number of dot-separated fields
    #[error(
        "version '{input}' does not conform to semantic version format: expected 3 fields, found {fields}"
    )]
    Malformed { input: String, fields: usize },

    /// A field between separators was empty
    #[error("{0} version is empty")]
    EmptyField(FieldRole),

    /// A field was not a valid unsigned integer
    #[error("invalid {role} version '{token}': {source}")]
    InvalidInteger {
        role: FieldRole,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl VersionError {
    /// The field this error refers to, if any
    pub const fn role(&self) -> Option<FieldRole> {
        match self {
            Self::EmptyField(role) | Self::InvalidInteger { role, .. } => Some(*role),
            Self::Empty | Self::InvalidPrefix { .. } | Self::Malformed { .. } => None,
        }
    }
}
