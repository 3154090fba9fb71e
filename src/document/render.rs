use std::fmt;

use super::*;
use crate::parser::revive;

impl Document {
    /// Render the document back to INI text, one line per record, joined by
    /// the document's line break. No trailing line break is added.
    pub fn to_ini_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_break = self.format.line_break().as_str();
        let separator = self.format.separator();

        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str(line_break)?;
            }
            match line {
                Line::Comment(comment) => f.write_str(&comment.text)?,
                Line::Section(section) => write!(f, "[{}]", section.name)?,
                Line::Entry(entry) => {
                    write!(f, "{}{}{}", entry.key, separator, encode_value(&entry.value))?
                }
            }
        }
        Ok(())
    }
}

/// Text form of a value that reads back to the same value with the default reviver.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.trim() != s || revive(s) != Value::String(s.clone()) {
                format!("\"{}\"", s)
            } else {
                s.clone()
            }
        }
        Value::Number(n) => format_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".into(),
        Value::Undefined => String::new(),
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity".into() } else { "-Infinity".into() }
    } else if n == 0.0 {
        "0".into()
    } else {
        n.to_string()
    }
}
