//! Fixed-format extraction of package metadata from the manifest.
//!
//! The manifest is not parsed as TOML: the first line shaped like
//! `version = "..."` wins, wherever it appears. The packaging tool owns the
//! file and rewrites that line on a bump.

use crate::domain::SemanticVersion;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Package metadata read from the manifest
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: SemanticVersion,
}

fn version_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^\s*version\s*=\s*"([^"]*)""#).expect("version regex is valid")
    })
}

fn name_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^\s*name\s*=\s*"([^"]*)""#).expect("name regex is valid")
    })
}

/// Raw value of the first `version = "..."` line
pub fn extract_version(content: &str) -> Option<&str> {
    version_line()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Raw value of the first `name = "..."` line
pub fn extract_name(content: &str) -> Option<&str> {
    name_line()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

impl Manifest {
    /// Parse manifest content
    pub fn parse(content: &str) -> Result<Self> {
        let raw_version = extract_version(content)
            .ok_or_else(|| ReleaseError::manifest("no line matching version = \"...\""))?;

        Ok(Manifest {
            name: extract_name(content).map(str::to_string),
            version: SemanticVersion::parse(raw_version)?,
        })
    }

    /// Read and parse the manifest at `path`
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ReleaseError::ManifestNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Package name, falling back to a placeholder when the manifest has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
