use std::fmt;

/// The main error type for INI parsing, editing and conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum IniError {
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for input of the wrong shape: non-text bytes, JSON that has no
    /// INI representation, or a value that cannot be cast to the requested type.
    TypeError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl IniError {
    /// 1-based line the error points at, when it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::SyntaxError { line, .. } | IniError::TypeError { line, .. } if *line > 0 => {
                Some(*line)
            }
            _ => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            IniError::SyntaxError { code, .. }
            | IniError::TypeError { code, .. }
            | IniError::FileError { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            IniError::SyntaxError { message, .. }
            | IniError::TypeError { message, .. }
            | IniError::FileError { message, .. } => message,
        }
    }

    pub(crate) fn type_error(message: impl Into<String>, hint: Option<&str>, code: u32) -> Self {
        IniError::TypeError {
            message: message.into(),
            line: 0,
            column: 0,
            hint: hint.map(Into::into),
            code: Some(code),
        }
    }

    /// Add context to the hint, keeping any hint already present.
    pub(crate) fn with_hint(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        match &mut self {
            IniError::SyntaxError { hint, .. }
            | IniError::TypeError { hint, .. }
            | IniError::FileError { hint, .. } => {
                *hint = Some(match hint.take() {
                    Some(existing) => format!("{} ({})", existing, text),
                    None => text,
                });
            }
        }
        self
    }
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "[INI] Syntax Error at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            IniError::TypeError { message, line, column, hint, code } =>
                write!(f, "[INI] Type Error at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            IniError::FileError { message, path, hint, code } =>
                write!(f, "[INI] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for IniError {}
