//! User confirmation and notification capabilities.
//!
//! Mutations that need sign-off (cascade deletes, import merges) take a
//! `Prompter` instead of talking to a terminal, so the flows run headless
//! under test.

use colored::Colorize;
use dialoguer::Confirm;

/// Blocking yes/no prompt plus a fire-and-forget message surface.
pub trait Prompter {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

/// Interactive terminal prompter.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm(&self, message: &str) -> bool {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        println!("{}", message.yellow());
    }
}

/// Fixed-answer prompter for headless flows and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoPrompter {
    pub answer: bool,
}

impl Prompter for AutoPrompter {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }

    fn notify(&self, _message: &str) {}
}
