use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    changes: Vec<String>,
    existing_tags: Vec<String>,
    created_tags: Mutex<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a clean mock repository with no tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `path` as an uncommitted change
    pub fn with_change(mut self, path: impl Into<String>) -> Self {
        self.changes.push(path.into());
        self
    }

    /// Pretend `name` is already tagged
    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.existing_tags.push(name.into());
        self
    }

    /// Tags created through the trait, as `(name, message)` pairs
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.created_tags
            .lock()
            .map(|tags| tags.clone())
            .unwrap_or_default()
    }
}

impl Repository for MockRepository {
    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        Ok(self.changes.clone())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let mut created = self
            .created_tags
            .lock()
            .map_err(|_| ReleaseError::vcs("mock repository lock poisoned"))?;

        let exists = self.existing_tags.iter().any(|tag| tag == name)
            || created.iter().any(|(tag, _)| tag == name);
        if exists {
            return Err(ReleaseError::vcs(format!("tag '{}' already exists", name)));
        }

        created.push((name.to_string(), message.to_string()));
        Ok(())
    }
}
