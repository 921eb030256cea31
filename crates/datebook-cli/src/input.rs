//! Whitespace-token reader over line-based input.
//!
//! Numbers may be typed on one line or spread across several; free text is
//! taken from whatever remains of the current line, or from the next line when
//! nothing is left.

use std::io::BufRead;

use anyhow::{Context, Result};

pub struct TokenReader<R> {
    reader: R,
    /// Unconsumed remainder of the current line.
    pending: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: String::new(),
        }
    }

    /// Next whitespace-separated token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            let trimmed = self.pending.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = trimmed[..end].to_string();
                self.pending = trimmed[end..].to_string();
                return Ok(Some(token));
            }
            if !self.fill()? {
                return Ok(None);
            }
        }
    }

    /// The rest of the current line, or the whole next line if the current one
    /// is used up. `None` at end of input.
    pub fn rest_of_line(&mut self) -> Result<Option<String>> {
        let rest = self.pending.trim().to_string();
        self.pending.clear();
        if !rest.is_empty() {
            return Ok(Some(rest));
        }
        if !self.fill()? {
            return Ok(None);
        }
        let line = self.pending.trim_end_matches(['\r', '\n']).to_string();
        self.pending.clear();
        Ok(Some(line))
    }

    /// Replace `pending` with the next input line. Returns false at end of input.
    fn fill(&mut self) -> Result<bool> {
        self.pending.clear();
        let read = self
            .reader
            .read_line(&mut self.pending)
            .context("Failed to read from stdin")?;
        Ok(read > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut reader = TokenReader::new("15 3\n  2024\n".as_bytes());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("15"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("2024"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn rest_of_line_prefers_same_line_text() {
        let mut reader = TokenReader::new("15 3 2024 Team meeting\nnext\n".as_bytes());
        for _ in 0..3 {
            reader.next_token().unwrap();
        }
        assert_eq!(reader.rest_of_line().unwrap().as_deref(), Some("Team meeting"));
        assert_eq!(reader.rest_of_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn rest_of_line_falls_through_to_next_line() {
        let mut reader = TokenReader::new("1\n  Dentist at 9 \n".as_bytes());
        reader.next_token().unwrap();
        assert_eq!(reader.rest_of_line().unwrap().as_deref(), Some("  Dentist at 9 "));
        assert_eq!(reader.rest_of_line().unwrap(), None);
    }
}
