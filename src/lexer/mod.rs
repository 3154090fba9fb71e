// Author: Dustin Pilgrim
// License: MIT

use crate::format::LineBreak;
use crate::IniError;

mod scanner;
mod tokenizer;

/// A classified line, borrowing from the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum RawLine<'a> {
    /// Blank line or a `#`, `;`, `//` comment. Holds the untrimmed text.
    Comment(&'a str),
    Section(&'a str),
    Assignment {
        key: &'a str,
        value: &'a str,
        /// `key = value` spacing: left side ends with a space and right side starts with one.
        pretty: bool,
    },
}

/// Lazy line iterator over INI text.
///
/// Splits on `\n`, `\r` and `\r\n` without yielding the terminator. The first
/// terminator seen is remembered and can be taken once with
/// [`LineReader::take_line_break`].
pub struct LineReader<'a> {
    rest: Option<&'a str>,
    line_break: Option<LineBreak>,
    reported: bool,
}

impl<'a> LineReader<'a> {
    pub fn new(input: &'a str) -> Self {
        LineReader {
            rest: if input.is_empty() { None } else { Some(input) },
            line_break: None,
            reported: false,
        }
    }

    /// Terminator style of the first line break, returned only the first time
    /// it is asked for after being seen.
    pub fn take_line_break(&mut self) -> Option<LineBreak> {
        if self.reported {
            return None;
        }
        let found = self.line_break?;
        self.reported = true;
        Some(found)
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.take()?;
        match scanner::find_terminator(rest) {
            Some((at, kind)) => {
                if self.line_break.is_none() {
                    self.line_break = Some(kind);
                }
                self.rest = Some(&rest[at + kind.as_str().len()..]);
                Some(&rest[..at])
            }
            None => Some(rest),
        }
    }
}

/// Classify one raw line. `line` is the 1-based line number used in errors.
pub fn classify(raw: &str, line: usize) -> Result<RawLine<'_>, IniError> {
    tokenizer::classify_line(raw, line)
}

/// Whether `text` reads back as a comment (or blank) line.
pub fn is_comment(text: &str) -> bool {
    scanner::is_comment(text.trim())
}
