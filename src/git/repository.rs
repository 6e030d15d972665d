use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use git2::{ObjectType, StatusOptions};
use log::debug;
use std::path::Path;

/// Repository backed by libgit2
pub struct Git2Repository {
    repo: git2::Repository,
}

impl Git2Repository {
    /// Discover the repository containing `path`.
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Repository found in `path` or a parent
    /// * `Err` - If `path` is not inside a git repository
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path).map_err(|e| {
            ReleaseError::vcs(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;
        Ok(Git2Repository { repo })
    }
}

impl Repository for Git2Repository {
    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        let changes: Vec<String> = statuses
            .iter()
            .filter(|entry| !entry.status().is_ignored())
            .filter_map(|entry| entry.path().map(str::to_string))
            .collect();

        debug!("{} uncommitted change(s)", changes.len());
        Ok(changes)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel(ObjectType::Commit)?;
        let tagger = self.repo.signature()?;

        let oid = self.repo.tag(name, &head, &tagger, message, false)?;
        debug!("created annotated tag {} ({}) on {}", name, oid, head.id());
        Ok(())
    }
}
