use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineBreak {
    #[default]
    #[serde(rename = "\n")]
    Lf,
    #[serde(rename = "\r\n")]
    CrLf,
    #[serde(rename = "\r")]
    Cr,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
            LineBreak::Cr => "\r",
        }
    }
}

/// User-facing formatting options.
///
/// A field left as `None` is inferred from the text when parsing and falls
/// back to the default (`"\n"`, not pretty) when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    pub line_break: Option<LineBreak>,
    pub pretty: Option<bool>,
}

impl FormatOptions {
    pub fn new(line_break: LineBreak, pretty: bool) -> Self {
        Self {
            line_break: Some(line_break),
            pretty: Some(pretty),
        }
    }
}

/// Formatting state owned by a document. Each field can be set exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Format {
    line_break: Option<LineBreak>,
    pretty: Option<bool>,
}

impl Format {
    pub fn line_break(&self) -> LineBreak {
        self.line_break.unwrap_or_default()
    }

    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }

    pub fn is_line_break_set(&self) -> bool {
        self.line_break.is_some()
    }

    pub fn is_pretty_set(&self) -> bool {
        self.pretty.is_some()
    }

    /// Returns `true` if the value was stored, `false` if one was already set.
    pub(crate) fn set_line_break_once(&mut self, line_break: LineBreak) -> bool {
        if self.line_break.is_some() {
            return false;
        }
        self.line_break = Some(line_break);
        true
    }

    pub(crate) fn set_pretty_once(&mut self, pretty: bool) -> bool {
        if self.pretty.is_some() {
            return false;
        }
        self.pretty = Some(pretty);
        true
    }

    pub(crate) fn separator(&self) -> &'static str {
        if self.pretty() { " = " } else { "=" }
    }
}

impl From<FormatOptions> for Format {
    fn from(options: FormatOptions) -> Self {
        Self {
            line_break: options.line_break,
            pretty: options.pretty,
        }
    }
}

impl From<Format> for FormatOptions {
    fn from(format: Format) -> Self {
        Self {
            line_break: format.line_break,
            pretty: format.pretty,
        }
    }
}
