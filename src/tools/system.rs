use crate::error::{ReleaseError, Result};
use crate::tools::{command_line, ToolRunner};
use log::debug;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs tools as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

/// Whether `path` is a regular file the current user may execute.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Locate `program` the way a shell would.
///
/// A program containing a path separator is checked as-is; a bare name is
/// searched in every directory of `path_var` (the value of `PATH`). Entries
/// without execute permission are skipped.
pub fn find_executable(program: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 {
        return is_executable(as_path).then(|| as_path.to_path_buf());
    }

    let path_var = path_var?;
    std::env::split_paths(path_var).find_map(|dir| {
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        let suffix = std::env::consts::EXE_SUFFIX;
        if !suffix.is_empty() {
            let with_suffix = dir.join(format!("{}{}", program, suffix));
            if is_executable(&with_suffix) {
                return Some(with_suffix);
            }
        }
        None
    })
}

fn spawn_error(program: &str, err: std::io::Error) -> ReleaseError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ReleaseError::ToolNotFound(program.to_string())
    } else {
        ReleaseError::Io(err)
    }
}

impl ToolRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        let path_var = std::env::var_os("PATH");
        let found = find_executable(program, path_var.as_deref());
        debug!("lookup {}: {:?}", program, found);
        found.is_some()
    }

    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let display = command_line(program, args);
        debug!("running `{}` in {}", display, cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| spawn_error(program, e))?;

        if !status.success() {
            return Err(ReleaseError::ToolFailed {
                command: display,
                code: status.code(),
            });
        }

        Ok(())
    }

    fn capture(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let display = command_line(program, args);
        debug!("capturing `{}` in {}", display, cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| spawn_error(program, e))?;

        if !output.status.success() {
            return Err(ReleaseError::ToolFailed {
                command: display,
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
