//! Git operations abstraction layer
//!
//! The release workflow needs two things from version control: whether the
//! working tree has uncommitted changes, and an annotated tag on HEAD. It
//! never pushes.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common git operation trait for abstraction
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::ReleaseError] variants.
pub trait Repository {
    /// Paths with uncommitted changes in the working tree
    ///
    /// Includes modified, staged, deleted and untracked files. Ignored files
    /// are not reported.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Changed paths, empty for a clean tree
    /// * `Err` - If the status cannot be read
    fn uncommitted_changes(&self) -> Result<Vec<String>>;

    /// Create an annotated tag pointing at HEAD
    ///
    /// # Arguments
    /// * `name` - Name for the new tag (e.g., "v1.1.0")
    /// * `message` - Tag message (e.g., "Release version 1.1.0")
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, HEAD is unborn, or no signature
    ///   is configured
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;
}
