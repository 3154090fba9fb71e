use log::{debug, trace};

use crate::ast::{LineId, Value};
use crate::document::Document;
use crate::lexer::{self, LineReader, RawLine};
use crate::IniError;

mod value;

pub use value::revive;

/// Caller-supplied value conversion: `(key, raw value, section)`.
///
/// When given, it replaces the default coercion for every value of a parse.
pub type Reviver = dyn Fn(&str, &str, Option<&str>) -> Value;

pub struct Parser<'a> {
    reader: LineReader<'a>,
    reviver: Option<&'a Reviver>,
    line: usize,
    section: Option<LineId>,
    pretty_seen: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            reader: LineReader::new(input),
            reviver: None,
            line: 0,
            section: None,
            pretty_seen: false,
        }
    }

    pub fn with_reviver(mut self, reviver: Option<&'a Reviver>) -> Self {
        self.reviver = reviver;
        self
    }

    /// Append every line of the input to `doc`, stopping at the first malformed line.
    pub fn parse_into(&mut self, doc: &mut Document) -> Result<(), IniError> {
        while let Some(raw) = self.reader.next() {
            self.line += 1;
            if let Some(line_break) = self.reader.take_line_break() {
                doc.format_mut().set_line_break_once(line_break);
            }

            let classified = lexer::classify(raw, self.line)?;
            trace!("line {}: {:?}", self.line, classified);

            match classified {
                RawLine::Comment(text) => {
                    doc.push_comment(text);
                }
                RawLine::Section(name) => {
                    self.section = Some(doc.push_section(name));
                }
                RawLine::Assignment { key, value, pretty } => {
                    if !self.pretty_seen {
                        doc.format_mut().set_pretty_once(pretty);
                        self.pretty_seen = true;
                    }
                    let value = self.revive(doc, key, value);
                    doc.push_entry(self.section, key, value);
                }
            }
        }

        debug!(
            "parsed {} lines ({} globals, {} sections)",
            self.line,
            doc.global_keys().count(),
            doc.section_names().count()
        );
        Ok(())
    }

    fn revive(&self, doc: &Document, key: &str, raw: &str) -> Value {
        match self.reviver {
            Some(reviver) => {
                let section = self.section.and_then(|id| doc.line(id)).and_then(|l| l.as_section());
                reviver(key, raw, section.map(|s| s.name.as_str()))
            }
            None => revive(raw),
        }
    }
}

#[cfg(test)]
mod tests;
