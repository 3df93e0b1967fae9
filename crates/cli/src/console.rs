//! Line-oriented terminal collaborator.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::error::{ShopError, ShopResult};

/// Prompt/read interface over any buffered reader and writer.
///
/// Token reads split lines on whitespace and keep the rest of the line
/// buffered; line reads throw that remainder away and take a fresh line.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write `text` without a trailing newline and flush.
    pub fn prompt(&mut self, text: &str) -> ShopResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write `text` as a full line.
    pub fn say(&mut self, text: &str) -> ShopResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write pre-formatted, already newline-terminated text.
    pub fn print(&mut self, text: &str) -> ShopResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Next whitespace-delimited token, reading more lines as needed.
    pub fn next_token(&mut self) -> ShopResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.read_raw_line()?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next full input line, with anything left of the current line dropped.
    pub fn next_line(&mut self) -> ShopResult<String> {
        self.pending.clear();
        self.read_raw_line()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Bytes that are not UTF-8 become U+FFFD and go through validation like
    /// any other input.
    fn read_raw_line(&mut self) -> ShopResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ShopError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn tokens_span_lines_and_skip_blank_ones() {
        let mut c = console("1  Rare\n\n   \n42\n");
        assert_eq!(c.next_token().unwrap(), "1");
        assert_eq!(c.next_token().unwrap(), "Rare");
        assert_eq!(c.next_token().unwrap(), "42");
        assert!(matches!(c.next_token(), Err(ShopError::InputClosed)));
    }

    #[test]
    fn next_line_drops_rest_of_current_line() {
        let mut c = console("1 leftover\nIron Sword\n");
        assert_eq!(c.next_token().unwrap(), "1");
        assert_eq!(c.next_line().unwrap(), "Iron Sword");
    }

    #[test]
    fn next_line_strips_crlf_and_keeps_inner_spaces() {
        let mut c = console("  Steel  Plate \r\n");
        assert_eq!(c.next_line().unwrap(), "  Steel  Plate ");
    }

    #[test]
    fn empty_line_is_returned_as_empty() {
        let mut c = console("\nabc\n");
        assert_eq!(c.next_line().unwrap(), "");
        assert_eq!(c.next_line().unwrap(), "abc");
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut c = console("Epic");
        assert_eq!(c.next_token().unwrap(), "Epic");
        assert!(matches!(c.next_line(), Err(ShopError::InputClosed)));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut c = Console::new(Cursor::new(b"\xff 4\nEp\xe9e\r\n".to_vec()), Vec::new());
        assert_eq!(c.next_token().unwrap(), "\u{FFFD}");
        assert_eq!(c.next_token().unwrap(), "4");
        assert_eq!(c.next_line().unwrap(), "Ep\u{FFFD}e");
    }

    #[test]
    fn prompt_and_say_write_through() {
        let mut c = console("");
        c.prompt("Enter: ").unwrap();
        c.say("done").unwrap();
        c.print("block\n").unwrap();
        assert_eq!(
            String::from_utf8(c.into_output()).unwrap(),
            "Enter: done\nblock\n"
        );
    }
}
