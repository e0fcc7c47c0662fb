use bomdesk_core::model::Row;
use bomdesk_core::{PromptError, PromptResult, Prompter};
use std::collections::VecDeque;

/// Something the session put on screen
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Shown {
    Options { title: String, options: Vec<String> },
    Table {
        title: String,
        headers: Vec<String>,
        rows: Vec<Row>,
    },
    Notice(String),
    Error,
}

/// Prompter fed from a fixed list of input lines
///
/// Reading past the end reports closed input, like end-of-file on a
/// terminal.
#[derive(Default)]
pub struct ScriptedPrompter {
    input: VecDeque<String>,
    pub shown: Vec<Shown>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|s| s.to_string()).collect(),
            shown: Vec::new(),
        }
    }

    /// Unconsumed input lines
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    pub fn notices(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Notice(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.shown.iter().filter(|s| **s == Shown::Error).count()
    }

    pub fn tables(&self) -> Vec<(&str, &[Row])> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Table { title, rows, .. } => Some((title.as_str(), rows.as_slice())),
                _ => None,
            })
            .collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn show_options(&mut self, title: &str, _depth: usize, options: &[&str]) -> PromptResult<()> {
        self.shown.push(Shown::Options {
            title: title.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        });
        Ok(())
    }

    fn read_line(&mut self, _label: &str) -> PromptResult<String> {
        self.input.pop_front().ok_or(PromptError::Closed)
    }

    fn show_table(&mut self, title: &str, headers: &[&str], rows: &[Row]) -> PromptResult<()> {
        self.shown.push(Shown::Table {
            title: title.to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows.to_vec(),
        });
        Ok(())
    }

    fn show_notice(&mut self, message: &str) -> PromptResult<()> {
        self.shown.push(Shown::Notice(message.to_string()));
        Ok(())
    }

    fn show_error(&mut self) -> PromptResult<()> {
        self.shown.push(Shown::Error);
        Ok(())
    }
}

// Menu scripts. Top level: 1 create, 2 read, 3 update, 4 delete,
// 5 generate, 6 search, 7 quit. Targets: 1 product, 2 material, 3 consumption.

#[allow(dead_code)]
pub const QUIT: &[&str] = &["7"];

#[allow(dead_code)]
#[rustfmt::skip]
pub const SEED_WIDGET_CATALOG: &[&str] = &[
    "1", "1", "Widget", "small part",
    "1", "1", "Gadget", "large part",
    "1", "2", "Steel", "12.5", "kg",
    "1", "3", "1", "1", "5",
];

/// Concatenate menu scripts
#[allow(dead_code)]
pub fn script<'a>(parts: &[&[&'a str]]) -> Vec<&'a str> {
    parts.concat()
}
