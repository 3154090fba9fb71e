pub mod ast;
pub mod conversion;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod lexer;
pub mod parser;

pub use ast::{Comment, Entry, Line, LineId, Section, Value};
pub use document::{Document, Object, ParseOptions, Property};
pub use error::IniError;
pub use format::{Format, FormatOptions, LineBreak};
pub use parser::Reviver;
