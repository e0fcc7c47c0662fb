//! Line-oriented terminal front end
//!
//! Menus are numbered from 1 and indented one tab per nesting level.
//! Result sets are printed as left-aligned columns under their headers.

use bomdesk_core::model::Row;
use bomdesk_core::{PromptError, PromptResult, Prompter};
use std::io::{BufRead, Write};

/// Generic notice for any failed operation
pub const INCORRECT_INPUT: &str = "!Incorrect input!";

const COLUMN_GAP: &str = " | ";

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn show_options(&mut self, title: &str, depth: usize, options: &[&str]) -> PromptResult<()> {
        let indent = "\t".repeat(depth);
        writeln!(self.output, "{}{}:", indent, title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}{}. {}", indent, i + 1, option)?;
        }
        Ok(())
    }

    fn read_line(&mut self, label: &str) -> PromptResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn show_table(&mut self, title: &str, headers: &[&str], rows: &[Row]) -> PromptResult<()> {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.cells().iter().map(ToString::to_string).collect())
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }

        writeln!(self.output, "{}", title)?;
        let header_line = format_line(headers.iter().copied(), &widths);
        writeln!(self.output, "{}", header_line)?;
        writeln!(self.output, "{}", "-".repeat(header_line.chars().count()))?;
        for row in &cells {
            writeln!(
                self.output,
                "{}",
                format_line(row.iter().map(String::as_str), &widths)
            )?;
        }
        Ok(())
    }

    fn show_notice(&mut self, message: &str) -> PromptResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn show_error(&mut self) -> PromptResult<()> {
        writeln!(self.output, "{}", INCORRECT_INPUT)?;
        Ok(())
    }
}

fn format_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomdesk_core::model::Cell;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_options_are_numbered_and_indented() {
        let mut p = prompter("");
        p.show_options("Choose what to read", 1, &["product", "material"])
            .unwrap();

        assert_eq!(
            output(p),
            "\tChoose what to read:\n\t1. product\n\t2. material\n"
        );
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut p = prompter("Widget\r\nsecond\n");
        assert_eq!(p.read_line("Name: ").unwrap(), "Widget");
        assert_eq!(p.read_line("Name: ").unwrap(), "second");
        assert!(output(p).starts_with("Name: Name: "));
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut p = prompter("  small part  \n");
        assert_eq!(p.read_line("").unwrap(), "  small part  ");
    }

    #[test]
    fn test_end_of_input_is_closed() {
        let mut p = prompter("last");
        assert_eq!(p.read_line("").unwrap(), "last");
        assert!(matches!(p.read_line(""), Err(PromptError::Closed)));
    }

    #[test]
    fn test_table_columns_align() {
        let mut p = prompter("");
        let rows = vec![
            Row::new(vec![
                Cell::Integer(1),
                Cell::Text("Widget".into()),
                Cell::Text("Steel".into()),
                Cell::Real(5.0),
            ]),
            Row::new(vec![
                Cell::Integer(12),
                Cell::Text("Gadget".into()),
                Cell::Text("Copper wire".into()),
                Cell::Real(0.25),
            ]),
        ];
        p.show_table("Consumption", &["id", "product", "material", "quantity"], &rows)
            .unwrap();

        let text = output(p);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Consumption");
        assert_eq!(lines[1], "id | product | material    | quantity");
        assert!(lines[2].chars().all(|c| c == '-'));
        assert_eq!(lines[3], "1  | Widget  | Steel       | 5");
        assert_eq!(lines[4], "12 | Gadget  | Copper wire | 0.25");
    }

    #[test]
    fn test_empty_table_prints_headers() {
        let mut p = prompter("");
        p.show_table("Product", &["id", "name", "description"], &[])
            .unwrap();
        assert_eq!(output(p).lines().count(), 3);
    }

    #[test]
    fn test_error_notice() {
        let mut p = prompter("");
        p.show_error().unwrap();
        assert_eq!(output(p), "!Incorrect input!\n");
    }
}
