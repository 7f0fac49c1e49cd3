//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirmation answers are queued up
//! front; an exhausted queue declines.
//!
//! # Example
//!
//! ```
//! use outfitter::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! ui.message("Starting");
//! assert!(ui.confirm("Continue? (y/N)").unwrap());
//! assert!(ui.messages().contains(&"Starting".to_string()));
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    confirms_shown: Vec<String>,
    confirm_answers: VecDeque<bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next confirmation prompt.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// All plain messages shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All warnings shown.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All error messages shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All hints shown.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// All spinner start messages.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Questions shown through `confirm`.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }
}

/// Spinner handle that records nothing.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        Ok(self.confirm_answers.pop_front().unwrap_or(false))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
