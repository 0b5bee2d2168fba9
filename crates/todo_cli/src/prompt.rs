//! Confirmation for list deletion.
//!
//! Interactive terminals get a `dialoguer` prompt; piped stdin is read one
//! line per question, so `echo y | todo -d Home` works.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};
use todo_core::{is_affirmative, ConfirmDelete};

fn question(list: &str) -> String {
    format!("Do you really want to delete list {list}? (y/N)")
}

/// Asks on stdin and blocks until an answer arrives.
pub struct TerminalConfirm;

impl ConfirmDelete for TerminalConfirm {
    fn confirm_delete(&mut self, list: &str) -> io::Result<bool> {
        if !io::stdin().is_terminal() {
            let stdin = io::stdin();
            return LineConfirm::new(stdin.lock(), io::stderr()).confirm_delete(list);
        }

        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(question(list))
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)?;

        Ok(is_affirmative(&answer))
    }
}

/// Line-oriented confirmation over any reader/writer pair.
///
/// End of input counts as a decline.
pub struct LineConfirm<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> ConfirmDelete for LineConfirm<R, W> {
    fn confirm_delete(&mut self, list: &str) -> io::Result<bool> {
        write!(self.writer, "{} ", question(list))?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::LineConfirm;
    use std::io::Cursor;
    use todo_core::ConfirmDelete;

    #[test]
    fn piped_answers_are_read_one_line_per_question() {
        let mut output = Vec::new();
        let mut confirm = LineConfirm::new(Cursor::new("yes\nn\n"), &mut output);

        assert!(confirm.confirm_delete("Home").unwrap());
        assert!(!confirm.confirm_delete("Work").unwrap());
        drop(confirm);

        let written = String::from_utf8(output).unwrap();
        assert!(written.contains("delete list Home? (y/N)"));
        assert!(written.contains("delete list Work? (y/N)"));
    }

    #[test]
    fn end_of_input_declines() {
        let mut confirm = LineConfirm::new(Cursor::new(""), Vec::new());
        assert!(!confirm.confirm_delete("Home").unwrap());
    }
}
