use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
}

/// Stable handle of a line record inside a [`Document`](crate::Document).
///
/// Ids never change once assigned, even when the line itself moves down
/// because something was inserted above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub num: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub num: usize,
    pub name: String,
    pub keys: IndexMap<String, LineId>,
    /// Line number of the last line owned by this header block.
    pub end: usize,
}

/// A `key=value` line.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub num: usize,
    pub section: Option<String>,
    pub key: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Comment(Comment),
    Section(Section),
    Entry(Entry),
}

impl Line {
    pub fn num(&self) -> usize {
        match self {
            Line::Comment(c) => c.num,
            Line::Section(s) => s.num,
            Line::Entry(e) => e.num,
        }
    }

    pub(crate) fn set_num(&mut self, num: usize) {
        match self {
            Line::Comment(c) => c.num = num,
            Line::Section(s) => s.num = num,
            Line::Entry(e) => e.num = num,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        if let Line::Section(section) = self {
            Some(section)
        } else {
            None
        }
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        if let Line::Entry(entry) = self {
            Some(entry)
        } else {
            None
        }
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}
