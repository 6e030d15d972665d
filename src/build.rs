//! Build artifact housekeeping around the packaging tool's build step.

use crate::config::BuildConfig;
use crate::error::{ReleaseError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Remove previous build output from `root`.
///
/// Only direct children of `root` are considered: directories named in
/// `clean_dirs`, and directories whose name ends with one of
/// `clean_suffixes`. Files are never removed, even if their name matches.
///
/// # Returns
/// The directories that were removed, sorted
pub fn clean_artifacts(root: &Path, config: &BuildConfig) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        let matches = config.clean_dirs.iter().any(|dir| *dir == name)
            || config
                .clean_suffixes
                .iter()
                .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix.as_str()));

        if matches {
            let path = entry.path();
            debug!("removing {}", path.display());
            fs::remove_dir_all(&path)?;
            removed.push(path);
        }
    }

    removed.sort();
    Ok(removed)
}

/// Check that the build produced something and list it.
///
/// # Returns
/// * `Ok(Vec<String>)` - Sorted file names found in the dist directory
/// * `Err(BuildFailed)` - If the directory is missing or empty
pub fn collect_artifacts(dist_dir: &Path) -> Result<Vec<String>> {
    if !dist_dir.is_dir() {
        return Err(ReleaseError::build(format!(
            "{} was not created",
            dist_dir.display()
        )));
    }

    let mut artifacts = fs::read_dir(dist_dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()?;

    if artifacts.is_empty() {
        return Err(ReleaseError::build(format!(
            "{} is empty",
            dist_dir.display()
        )));
    }

    artifacts.sort();
    Ok(artifacts)
}
