//! Presentation boundary
//!
//! The core never reads or writes the terminal itself. It asks a
//! `Prompter` to show options, read one line, render rows under headers,
//! or show the generic incorrect-input notice.

use crate::model::Row;
use thiserror::Error;

/// Result type for presentation calls
pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Failures of the presentation boundary itself
///
/// None of these is an operator mistake: invalid menu input is re-prompted
/// and never surfaces as an error.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream reached end-of-file
    #[error("input stream closed")]
    Closed,

    /// A menu was asked to choose from nothing
    #[error("no options to choose from")]
    NoOptions,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Interactive front end used by the Command Registry and Orchestrator
pub trait Prompter {
    /// Render a titled, 1-based numbered list of options
    ///
    /// `depth` is the menu nesting level (0 for the top-level menu).
    fn show_options(&mut self, title: &str, depth: usize, options: &[&str]) -> PromptResult<()>;

    /// Show `label` and read one line of input, without its line terminator
    fn read_line(&mut self, label: &str) -> PromptResult<String>;

    /// Render a result set under named column headers
    fn show_table(&mut self, title: &str, headers: &[&str], rows: &[Row]) -> PromptResult<()>;

    /// Informational message (success, no-op, timing, retry hint)
    fn show_notice(&mut self, message: &str) -> PromptResult<()>;

    /// Generic incorrect-input notice
    fn show_error(&mut self) -> PromptResult<()>;
}
