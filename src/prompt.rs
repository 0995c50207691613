//! Interactive confirmation prompts.
//!
//! Destructive operations ask before acting. The prompt is a capability
//! the command layer depends on, so tests and `--yes` runs can inject a
//! preset answer instead of reading standard input.

use std::io::{self, BufRead, Write};

/// A yes/no question put to the operator.
pub trait ConfirmationPrompt {
    /// Asks `question`, returning true only on an affirmative answer.
    fn ask(&self, question: &str) -> io::Result<bool>;
}

/// Returns true for the affirmative answers, exactly `y` or `Y`.
fn affirmative(line: &str) -> bool {
    matches!(line.trim(), "y" | "Y")
}

/// Prompt backed by standard input.
///
/// Anything other than `y` or `Y`, including end of input, declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    /// Creates a stdin-backed prompt.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationPrompt for StdinPrompt {
    fn ask(&self, question: &str) -> io::Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{question} ")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(false);
        }
        Ok(affirmative(&line))
    }
}

/// Prompt with a preset answer, never touching standard input.
///
/// Backs the `--yes` flag and test runs.
#[derive(Debug, Clone, Copy)]
pub struct StaticPrompt {
    answer: bool,
}

impl StaticPrompt {
    /// Creates a prompt that always answers `answer`.
    #[must_use]
    pub const fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl ConfirmationPrompt for StaticPrompt {
    fn ask(&self, _question: &str) -> io::Result<bool> {
        Ok(self.answer)
    }
}
