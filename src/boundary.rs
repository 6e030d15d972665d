use std::fmt;

/// Non-fatal conditions met while preparing a release.
/// These are reported to the user; some of them ask for confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The working tree has uncommitted changes
    UncommittedChanges { count: usize, sample: Vec<String> },
    /// The working directory is not inside a git repository
    NotAGitRepository { reason: String },
}

/// How many changed paths to name in the warning
const SAMPLE_SIZE: usize = 5;

impl BoundaryWarning {
    pub fn uncommitted_changes(changes: &[String]) -> Self {
        BoundaryWarning::UncommittedChanges {
            count: changes.len(),
            sample: changes.iter().take(SAMPLE_SIZE).cloned().collect(),
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UncommittedChanges { count, sample } => {
                write!(f, "Working tree has {} uncommitted change(s)", count)?;
                if !sample.is_empty() {
                    write!(f, ": {}", sample.join(", "))?;
                    if *count > sample.len() {
                        write!(f, ", ... and {} more", count - sample.len())?;
                    }
                }
                Ok(())
            }
            BoundaryWarning::NotAGitRepository { reason } => {
                write!(
                    f,
                    "Not a git repository, skipping working tree check ({})",
                    reason
                )
            }
        }
    }
}
