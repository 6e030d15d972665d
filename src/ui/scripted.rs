use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::Result;
use crate::ui::{is_affirmative, Prompter};

/// Prompter answering from a fixed script, in order.
///
/// Once the script runs out every further answer is empty, which declines
/// confirmations and is an invalid menu choice.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .map(|asked| asked.clone())
            .unwrap_or_default()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or_default()
    }

    fn next_answer(&self, prompt: &str) -> String {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.to_string());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(is_affirmative(&self.next_answer(prompt)))
    }

    fn select(&self, prompt: &str) -> Result<String> {
        Ok(self.next_answer(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_in_order() {
        let prompter = ScriptedPrompter::new(["2", "y", "n"]);

        assert_eq!(prompter.select("bump?").unwrap(), "2");
        assert!(prompter.confirm("publish?").unwrap());
        assert!(!prompter.confirm("tag?").unwrap());
        assert_eq!(prompter.asked(), vec!["bump?", "publish?", "tag?"]);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_declines() {
        let prompter = ScriptedPrompter::new(Vec::<String>::new());
        assert!(!prompter.confirm("continue?").unwrap());
        assert_eq!(prompter.select("bump?").unwrap(), "");
    }
}
