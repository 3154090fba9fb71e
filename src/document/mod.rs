// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::ast::{Comment, Entry, Line, LineId, Section, Value};
use crate::format::{Format, FormatOptions};
use crate::parser::{Parser, Reviver};
use crate::IniError;

mod mutation;
mod object;
mod render;

pub use object::{Object, Property};

/// Options for building a document from text.
#[derive(Default)]
pub struct ParseOptions {
    pub format: FormatOptions,
    pub reviver: Option<Box<Reviver>>,
}

impl ParseOptions {
    pub fn with_reviver<F>(mut self, reviver: F) -> Self
    where
        F: Fn(&str, &str, Option<&str>) -> Value + 'static,
    {
        self.reviver = Some(Box::new(reviver));
        self
    }
}

impl From<FormatOptions> for ParseOptions {
    fn from(format: FormatOptions) -> Self {
        Self { format, reviver: None }
    }
}

/// An INI document: an ordered list of lines plus key and section indices over them.
///
/// Every record lives once in `arena` and is referred to by [`LineId`]
/// everywhere else, so a value reached through the global index, a section,
/// or the line list is always the same record.
#[derive(Debug, Clone, Default)]
pub struct Document {
    arena: Vec<Line>,
    /// Physical order; `order[i]` is line number `i + 1`.
    order: Vec<LineId>,
    globals: IndexMap<String, LineId>,
    /// Header blocks per name, in document order. A name has more than one
    /// block only when the parsed text re-opens a section.
    sections: IndexMap<String, Vec<LineId>>,
    format: Format,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(options: FormatOptions) -> Self {
        Self {
            format: options.into(),
            ..Self::default()
        }
    }

    /// Parse INI text into a new document.
    ///
    /// # Example
    /// ```
    /// use ini_doc::{Document, ParseOptions, Value};
    ///
    /// let doc = Document::parse_str("[server]\nport = 8080", ParseOptions::default()).unwrap();
    /// assert_eq!(doc.get_in("server", "port"), Some(&Value::Number(8080.0)));
    /// assert!(doc.format().pretty());
    /// ```
    pub fn parse_str(text: &str, options: ParseOptions) -> Result<Self, IniError> {
        let mut doc = Self::with_format(options.format);
        doc.parse(text, options.reviver.as_deref())?;
        Ok(doc)
    }

    /// Replace the content of this document with the parsed `text`.
    ///
    /// Formatting already configured on the document is kept; anything unset
    /// is inferred from the text. On error the document is left untouched.
    pub fn parse(&mut self, text: &str, reviver: Option<&Reviver>) -> Result<&mut Self, IniError> {
        let mut parsed = Document {
            format: self.format,
            ..Document::default()
        };
        Parser::new(text).with_reviver(reviver).parse_into(&mut parsed)?;
        *self = parsed;
        Ok(self)
    }

    /// Like [`Document::parse`] for raw bytes, which must be UTF-8.
    pub fn parse_bytes(&mut self, bytes: &[u8], reviver: Option<&Reviver>) -> Result<&mut Self, IniError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            IniError::type_error(
                format!("Input is not valid UTF-8 text: {}", e),
                Some("INI documents must be text"),
                201,
            )
        })?;
        self.parse(text, reviver)
    }

    /// Load and parse an INI file.
    pub fn from_file<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self, IniError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| IniError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        let mut doc = Self::with_format(options.format);
        doc.parse_bytes(&bytes, options.reviver.as_deref())
            .map_err(|e| e.with_hint(format!("while reading {}", path.display())))?;
        Ok(doc)
    }

    /// Write the rendered text of this document to `path`.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        fs::write(path, self.to_ini_string()).map_err(|e| IniError::FileError {
            message: format!("Failed to write file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: None,
            code: Some(302),
        })
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub(crate) fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.order.iter().map(|id| &self.arena[id.0])
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.arena.get(id.0)
    }

    /// Line by 1-based line number.
    pub fn line_at(&self, num: usize) -> Option<&Line> {
        let id = self.order.get(num.checked_sub(1)?)?;
        self.line(*id)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        let id = self.globals.get(key)?;
        self.entry(*id).map(|e| &e.value)
    }

    pub fn get_in(&self, section: &str, key: &str) -> Option<&Value> {
        let id = self.find_in_section(section, key)?;
        self.entry(id).map(|e| &e.value)
    }

    /// Typed lookup; `section` of `None` means the global scope.
    ///
    /// # Errors
    /// Returns a type error if the key is missing or the value can't be converted to `T`.
    pub fn get_as<T>(&self, section: Option<&str>, key: &str) -> Result<T, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
    {
        let id = match section {
            Some(name) => self.find_in_section(name, key),
            None => self.globals.get(key).copied(),
        };
        let path = section.map_or_else(|| key.to_string(), |s| format!("{}.{}", s, key));

        let entry = id.and_then(|id| self.entry(id)).ok_or_else(|| {
            IniError::type_error(format!("Key '{}' not found", path), None, 405)
        })?;

        T::try_from(entry.value.clone()).map_err(|e| match e {
            IniError::TypeError { message, hint, code, .. } => IniError::TypeError {
                message: format!("{} (at '{}')", message, path),
                line: entry.num,
                column: 0,
                hint,
                code,
            },
            other => other,
        })
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.globals.contains_key(key)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// The most recent header block of a section.
    pub fn section(&self, name: &str) -> Option<&Section> {
        let id = self.sections.get(name)?.last()?;
        self.line(*id).and_then(Line::as_section)
    }

    /// Every header block of a section, in document order.
    pub fn section_blocks<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|id| self.line(*id).and_then(Line::as_section))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.keys().map(String::as_str)
    }

    pub fn global_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.globals.keys().map(String::as_str)
    }

    fn entry(&self, id: LineId) -> Option<&Entry> {
        self.line(id).and_then(Line::as_entry)
    }

    /// Latest definition of `key` across all blocks of `section`.
    fn find_in_section(&self, section: &str, key: &str) -> Option<LineId> {
        self.sections
            .get(section)?
            .iter()
            .rev()
            .filter_map(|id| self.line(*id).and_then(Line::as_section))
            .find_map(|s| s.keys.get(key).copied())
    }

    fn alloc(&mut self, line: Line) -> LineId {
        let id = LineId(self.arena.len());
        self.arena.push(line);
        id
    }

    fn section_mut(&mut self, id: LineId) -> Option<&mut Section> {
        match self.arena.get_mut(id.0) {
            Some(Line::Section(section)) => Some(section),
            _ => None,
        }
    }

    // Append-only builders used while parsing; no line shifting is needed.

    pub(crate) fn push_comment(&mut self, text: &str) -> LineId {
        let num = self.len() + 1;
        let id = self.alloc(Line::Comment(Comment { num, text: text.to_string() }));
        self.order.push(id);
        id
    }

    pub(crate) fn push_section(&mut self, name: &str) -> LineId {
        let num = self.len() + 1;
        let id = self.alloc(Line::Section(Section {
            num,
            name: name.to_string(),
            keys: IndexMap::new(),
            end: num,
        }));
        self.order.push(id);
        self.sections.entry(name.to_string()).or_default().push(id);
        id
    }

    pub(crate) fn push_entry(&mut self, section: Option<LineId>, key: &str, value: Value) -> LineId {
        let num = self.len() + 1;
        let owner = section.and_then(|sid| self.section_mut(sid)).map(|s| s.name.clone());
        let id = self.alloc(Line::Entry(Entry {
            num,
            section: owner,
            key: key.to_string(),
            value,
        }));
        self.order.push(id);

        match section.and_then(|sid| self.section_mut(sid)) {
            Some(s) => {
                s.keys.insert(key.to_string(), id);
                s.end = num;
            }
            None => {
                self.globals.insert(key.to_string(), id);
            }
        }
        id
    }
}

impl FromStr for Document {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse_str(s, ParseOptions::default())
    }
}
