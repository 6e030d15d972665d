//! External tool invocation
//!
//! The packaging tool and the installer are opaque collaborators. Everything
//! the release workflow asks of them goes through the [ToolRunner] trait so
//! the workflow can be driven against [MockRunner] in tests.
//!
//! - [SystemRunner]: spawns real processes with `std::process::Command`
//! - [MockRunner]: records invocations and replays scripted effects

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::{find_executable, SystemRunner};

use crate::error::Result;
use std::path::Path;

/// Render a command line for display and error messages
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs external programs on behalf of the release workflow.
///
/// ## Error Handling
///
/// A program that exits non-zero must surface as
/// [crate::error::ReleaseError::ToolFailed] carrying its exit code, so the
/// workflow stops at the first failing step and the process can hand the
/// code through.
pub trait ToolRunner {
    /// Whether `program` can be found (on `PATH`, or at the given path)
    fn is_available(&self, program: &str) -> bool;

    /// Run a program inheriting the terminal, failing on non-zero exit
    ///
    /// # Arguments
    /// * `program` - Program name or path (e.g., "poetry")
    /// * `args` - Arguments (e.g., `["version", "minor"]`)
    /// * `cwd` - Working directory for the child process
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;

    /// Run a program and capture its standard output, failing on non-zero exit
    fn capture(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String>;
}
