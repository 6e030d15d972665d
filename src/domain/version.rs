use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a plain "X.Y.Z" version string.
    ///
    /// Exactly three unsigned integer components are accepted; pre-release
    /// and build-metadata suffixes are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                input
            )));
        }

        let component = |name: &str, raw: &str| {
            let invalid = || ReleaseError::version(format!("Invalid {} version: '{}'", name, raw));
            // Plain digits only: no sign, no leading zero
            let canonical = !raw.is_empty()
                && raw.bytes().all(|b| b.is_ascii_digit())
                && (raw == "0" || !raw.starts_with('0'));
            if !canonical {
                return Err(invalid());
            }
            raw.parse::<u32>().map_err(|_| invalid())
        };

        Ok(SemanticVersion {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }

    /// Bump version according to bump type.
    ///
    /// Fails when the bumped component would not fit in a `u32`.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let next = |value: u32| {
            value.checked_add(1).ok_or_else(|| {
                ReleaseError::version(format!(
                    "Cannot apply a {} bump to {}: component overflows",
                    bump_type, self
                ))
            })
        };

        Ok(match bump_type {
            VersionBump::Major => SemanticVersion {
                major: next(self.major)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => SemanticVersion {
                major: self.major,
                minor: next(self.minor)?,
                patch: 0,
            },
            VersionBump::Patch => SemanticVersion {
                major: self.major,
                minor: self.minor,
                patch: next(self.patch)?,
            },
        })
    }

    /// The three versions offered in the bump menu.
    pub fn candidates(&self) -> Result<BumpCandidates> {
        Ok(BumpCandidates {
            patch: self.bump(VersionBump::Patch)?,
            minor: self.bump(VersionBump::Minor)?,
            major: self.bump(VersionBump::Major)?,
        })
    }
}

impl FromStr for SemanticVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Next-version candidates computed from the current version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpCandidates {
    pub patch: SemanticVersion,
    pub minor: SemanticVersion,
    pub major: SemanticVersion,
}

impl BumpCandidates {
    pub fn get(&self, bump: VersionBump) -> SemanticVersion {
        match bump {
            VersionBump::Patch => self.patch,
            VersionBump::Minor => self.minor,
            VersionBump::Major => self.major,
        }
    }
}

/// Version bump level understood by the packaging tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Argument passed to `poetry version <level>`
    pub fn as_arg(&self) -> &'static str {
        match self {
            VersionBump::Patch => "patch",
            VersionBump::Minor => "minor",
            VersionBump::Major => "major",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}
