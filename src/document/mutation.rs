use log::debug;

use super::*;
use crate::lexer::{self, LineReader};

impl Document {
    /// Set a global key.
    ///
    /// An existing key keeps its line and only has its value replaced. A new
    /// key is inserted right before the first section header.
    ///
    /// # Errors
    /// Returns a type error if the key or a string value cannot be written
    /// back as one `key=value` line: empty or padded keys, keys containing
    /// `=` or a line break or starting like a comment or header, and strings
    /// containing a line break.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<LineId, IniError> {
        let value = value.into();
        check_key(key)?;
        check_value(key, &value)?;

        if let Some(&id) = self.globals.get(key) {
            self.replace_value(id, value);
            return Ok(id);
        }

        let at = self.first_section_index().unwrap_or(self.len());
        let id = self.insert_line(
            at,
            Line::Entry(Entry {
                num: 0,
                section: None,
                key: key.to_string(),
                value,
            }),
        );
        self.globals.insert(key.to_string(), id);
        Ok(id)
    }

    /// Set a key inside `section`, creating the section at the end of the
    /// document if it does not exist yet.
    ///
    /// # Errors
    /// Same rules as [`Document::set`], plus those of [`Document::add_section`].
    pub fn set_in(&mut self, section: &str, key: &str, value: impl Into<Value>) -> Result<LineId, IniError> {
        let value = value.into();
        check_section_name(section)?;
        check_key(key)?;
        check_value(key, &value)?;

        if let Some(id) = self.find_in_section(section, key) {
            self.replace_value(id, value);
            return Ok(id);
        }

        let header = self.add_section(section)?;
        let id = self.insert_into_section(
            header,
            Line::Entry(Entry {
                num: 0,
                section: Some(section.to_string()),
                key: key.to_string(),
                value,
            }),
        );
        if let Some(s) = self.section_mut(header) {
            s.keys.insert(key.to_string(), id);
        }
        Ok(id)
    }

    /// Return the last header block of `name`, appending a new empty section
    /// at the end of the document if there is none.
    ///
    /// # Errors
    /// Returns a type error for an empty name, a name with surrounding
    /// whitespace, or one containing a line break.
    pub fn add_section(&mut self, name: &str) -> Result<LineId, IniError> {
        check_section_name(name)?;
        if let Some(&id) = self.sections.get(name).and_then(|blocks| blocks.last()) {
            return Ok(id);
        }

        let at = self.len();
        let id = self.insert_line(
            at,
            Line::Section(Section {
                num: 0,
                name: name.to_string(),
                keys: IndexMap::new(),
                end: 0,
            }),
        );
        if let Some(s) = self.section_mut(id) {
            s.end = s.num;
        }
        self.sections.entry(name.to_string()).or_default().push(id);
        Ok(id)
    }

    /// Add comment lines at the end of the global block (`section` of `None`)
    /// or at the end of a section, creating the section if needed.
    ///
    /// Each line of `text` becomes one comment line; a line that would not
    /// read back as a comment is prefixed with `"; "`.
    pub fn add_comment(&mut self, section: Option<&str>, text: &str) -> Result<Vec<LineId>, IniError> {
        let texts: Vec<String> = LineReader::new(text)
            .map(|line| {
                if lexer::is_comment(line) {
                    line.to_string()
                } else {
                    format!("; {}", line)
                }
            })
            .collect();
        let texts = if texts.is_empty() { vec![String::new()] } else { texts };

        let header = section.map(|name| self.add_section(name)).transpose()?;
        let mut ids = Vec::with_capacity(texts.len());
        for text in texts {
            let line = Line::Comment(Comment { num: 0, text });
            let id = match header {
                Some(header) => self.insert_into_section(header, line),
                None => {
                    let at = self.first_section_index().unwrap_or(self.len());
                    self.insert_line(at, line)
                }
            };
            ids.push(id);
        }
        Ok(ids)
    }

    fn replace_value(&mut self, id: LineId, value: Value) {
        if let Some(Line::Entry(entry)) = self.arena.get_mut(id.0) {
            entry.value = value;
        }
    }

    fn first_section_index(&self) -> Option<usize> {
        self.order
            .iter()
            .position(|id| matches!(self.arena[id.0], Line::Section(_)))
    }

    /// Insert `line` right after the last line of the header block and grow the block.
    fn insert_into_section(&mut self, header: LineId, line: Line) -> LineId {
        let end = self
            .line(header)
            .and_then(Line::as_section)
            .map_or(self.len(), |s| s.end);
        let id = self.insert_line(end, line);
        let num = self.arena[id.0].num();
        if let Some(s) = self.section_mut(header) {
            s.end = num;
        }
        id
    }

    /// Insert `line` at position `at` of the line list (it becomes line `at + 1`)
    /// and renumber everything after it.
    ///
    /// Any section whose block reached the insertion point gets its `end`
    /// pushed down by one. The block that should own the new line is grown by
    /// the caller.
    fn insert_line(&mut self, at: usize, line: Line) -> LineId {
        let id = self.alloc(line);
        self.order.insert(at, id);
        let num = at + 1;

        for (i, other) in self.order.iter().enumerate() {
            let record = &mut self.arena[other.0];
            if i >= at {
                record.set_num(i + 1);
            }
            if let Line::Section(s) = record {
                if *other != id && s.end >= num {
                    s.end += 1;
                }
            }
        }

        debug!("inserted line {} ({} lines total)", num, self.order.len());
        id
    }
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

fn check_key(key: &str) -> Result<(), IniError> {
    let reason = if key.trim().is_empty() {
        "is empty"
    } else if key.trim() != key {
        "has surrounding whitespace"
    } else if key.contains('=') {
        "contains '='"
    } else if has_line_break(key) {
        "contains a line break"
    } else if lexer::is_comment(key) || key.starts_with('[') {
        "would read back as a comment or section header"
    } else {
        return Ok(());
    };

    Err(IniError::type_error(
        format!("Key '{}' {}", key.escape_debug(), reason),
        Some("Keys must fit on the left of a single key=value line"),
        210,
    ))
}

fn check_section_name(name: &str) -> Result<(), IniError> {
    let reason = if name.trim().is_empty() {
        "is empty"
    } else if name.trim() != name {
        "has surrounding whitespace"
    } else if has_line_break(name) {
        "contains a line break"
    } else {
        return Ok(());
    };

    Err(IniError::type_error(
        format!("Section name '{}' {}", name.escape_debug(), reason),
        Some("Section names must fit in a single [name] line"),
        211,
    ))
}

fn check_value(key: &str, value: &Value) -> Result<(), IniError> {
    match value {
        Value::String(s) if has_line_break(s) => Err(IniError::type_error(
            format!("Value of '{}' contains a line break", key),
            Some("INI values cannot span lines"),
            212,
        )),
        _ => Ok(()),
    }
}
