use crate::error::{ReleaseError, Result};
use crate::tools::{command_line, ToolRunner};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

type Effect = Box<dyn Fn(&Path) + Send + Sync>;

/// Mock runner for testing without spawning processes.
///
/// Commands are matched by their full command line (e.g. `"poetry build"`).
/// Every command is available and succeeds with empty output unless
/// configured otherwise.
#[derive(Default)]
pub struct MockRunner {
    missing: HashSet<String>,
    failures: HashMap<String, Option<i32>>,
    outputs: HashMap<String, String>,
    effects: HashMap<String, Effect>,
    invocations: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a mock where every program is available and every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` unavailable
    pub fn without_program(mut self, program: impl Into<String>) -> Self {
        self.missing.insert(program.into());
        self
    }

    /// Make `command` exit with `code` (`None` simulates a signal)
    pub fn failing(mut self, command: impl Into<String>, code: Option<i32>) -> Self {
        self.failures.insert(command.into(), code);
        self
    }

    /// Make `command` print `stdout` when captured
    pub fn with_output(mut self, command: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.outputs.insert(command.into(), stdout.into());
        self
    }

    /// Run `effect` against the working directory whenever `command` runs
    pub fn with_effect(
        mut self,
        command: impl Into<String>,
        effect: impl Fn(&Path) + Send + Sync + 'static,
    ) -> Self {
        self.effects.insert(command.into(), Box::new(effect));
        self
    }

    /// Command lines run so far, in order
    pub fn invocations(&self) -> Vec<String> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// How many times `command` has run
    pub fn count(&self, command: &str) -> usize {
        self.invocations()
            .iter()
            .filter(|call| call.as_str() == command)
            .count()
    }

    fn dispatch(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let line = command_line(program, args);
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(line.clone());
        }

        if self.missing.contains(program) {
            return Err(ReleaseError::ToolNotFound(program.to_string()));
        }
        if let Some(code) = self.failures.get(&line) {
            return Err(ReleaseError::ToolFailed {
                command: line,
                code: *code,
            });
        }
        if let Some(effect) = self.effects.get(&line) {
            effect(cwd);
        }

        Ok(self.outputs.get(&line).cloned().unwrap_or_default())
    }
}

impl ToolRunner for MockRunner {
    fn is_available(&self, program: &str) -> bool {
        !self.missing.contains(program)
    }

    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        self.dispatch(program, args, cwd).map(|_| ())
    }

    fn capture(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        self.dispatch(program, args, cwd)
    }
}
