use crate::domain::TagPattern;
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "poetry-release.toml";

/// Represents the complete configuration for poetry-release.
///
/// Every key is optional; an empty file yields the same result as no file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub tag: TagConfig,
}

fn default_manifest() -> String {
    "pyproject.toml".to_string()
}

/// External programs driven by the release workflow.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    /// Packaging tool providing `version`, `build` and `publish` subcommands
    #[serde(default = "default_packager")]
    pub packager: String,

    /// Installer queried (best effort) for the locally installed version
    #[serde(default = "default_installer")]
    pub installer: String,
}

fn default_packager() -> String {
    "poetry".to_string()
}

fn default_installer() -> String {
    "pip".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            packager: default_packager(),
            installer: default_installer(),
        }
    }
}

/// Build output locations.
///
/// `clean_dirs` and `clean_suffixes` bound the directories removed before a
/// build; nothing outside them is ever deleted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildConfig {
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    #[serde(default = "default_clean_dirs")]
    pub clean_dirs: Vec<String>,

    #[serde(default = "default_clean_suffixes")]
    pub clean_suffixes: Vec<String>,
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_clean_dirs() -> Vec<String> {
    vec!["build".to_string(), "dist".to_string()]
}

fn default_clean_suffixes() -> Vec<String> {
    vec![".egg-info".to_string()]
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            dist_dir: default_dist_dir(),
            clean_dirs: default_clean_dirs(),
            clean_suffixes: default_clean_suffixes(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    /// Base of the project page URL shown in the release summary
    #[serde(default = "default_index_url")]
    pub index_url: String,
}

fn default_index_url() -> String {
    "https://pypi.org/project".to_string()
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            index_url: default_index_url(),
        }
    }
}

impl PublishConfig {
    /// Project page for a released version, e.g. `https://pypi.org/project/demo/1.1.0/`
    pub fn project_url(&self, package: &str, version: &str) -> String {
        format!(
            "{}/{}/{}/",
            self.index_url.trim_end_matches('/'),
            package,
            version
        )
    }
}

/// Tag naming and message templates.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,

    #[serde(default = "default_tag_message")]
    pub message: String,

    /// Remote named in the manual push reminder
    #[serde(default = "default_remote")]
    pub remote: String,
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_tag_message() -> String {
    "Release version {version}".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            pattern: default_tag_pattern(),
            message: default_tag_message(),
            remote: default_remote(),
        }
    }
}

impl TagConfig {
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.pattern.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            tools: ToolsConfig::default(),
            build: BuildConfig::default(),
            publish: PublishConfig::default(),
            tag: TagConfig::default(),
        }
    }
}

impl Config {
    /// Manifest path resolved against the working directory
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    /// Validate settings that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.tag.tag_pattern()?;
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `poetry-release.toml` in `root`
/// 3. `.poetry-release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let local = root.join(CONFIG_FILE_NAME);

    let source = if let Some(path) = config_path {
        Some(path.to_path_buf())
    } else if local.exists() {
        Some(local)
    } else {
        dirs::config_dir()
            .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
            .filter(|path| path.exists())
    };

    let config = match source {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            let config_str = fs::read_to_string(&path)?;
            toml::from_str::<Config>(&config_str)?
        }
        None => {
            debug!("no configuration file found, using defaults");
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}
