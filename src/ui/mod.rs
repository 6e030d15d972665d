//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - `scripted` - Prompter fed from a fixed list of answers, for tests
//! - This module - The [Prompter] seam and the terminal implementation

use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;

use crate::error::Result;

pub mod formatter;
pub mod scripted;

pub use formatter::{
    display_artifacts, display_boundary_warning, display_bump_menu, display_error,
    display_manual_push_instruction, display_release_summary, display_status, display_success,
    display_version_change, display_versions,
};
pub use scripted::ScriptedPrompter;

/// Whether an answer confirms a prompt.
///
/// Only a case-insensitive `y` confirms; everything else, including empty
/// input and "yes", declines.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Source of interactive answers for the release workflow
pub trait Prompter {
    /// Ask a yes/no question; the default is "no"
    ///
    /// # Returns
    /// * `Ok(true)` - If the user answered "y" or "Y"
    /// * `Ok(false)` - Otherwise (including Enter)
    /// * `Err` - If input cannot be read
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Read a single menu key
    ///
    /// Returns the raw answer; interpretation is up to the caller.
    fn select(&self, prompt: &str) -> Result<String>;
}

/// Prompter reading from the controlling terminal.
///
/// On a terminal a single keystroke is read without waiting for Enter; when
/// stdin is redirected a whole line is read instead.
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            term: Term::stdout(),
        }
    }

    fn read_answer(&self, prompt: &str) -> Result<String> {
        print!("\n{} ", prompt);
        io::stdout().flush()?;

        if self.term.is_term() && io::stdin().is_terminal() {
            let key = self.term.read_char()?;
            println!("{}", key);
            return Ok(key.to_string());
        }

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = self.read_answer(&format!("{} (y/N):", prompt))?;
        Ok(is_affirmative(&answer))
    }

    fn select(&self, prompt: &str) -> Result<String> {
        self.read_answer(prompt)
    }
}
