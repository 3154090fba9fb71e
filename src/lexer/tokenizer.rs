use super::*;
use super::scanner::{indent_column, is_comment};

pub(super) fn classify_line(raw: &str, line: usize) -> Result<RawLine<'_>, IniError> {
    let trimmed = raw.trim();

    if is_comment(trimmed) {
        return Ok(RawLine::Comment(raw));
    }

    if trimmed.starts_with('[') {
        return classify_section(raw, trimmed, line);
    }

    classify_assignment(raw, trimmed, line)
}

fn classify_section<'a>(raw: &'a str, trimmed: &'a str, line: usize) -> Result<RawLine<'a>, IniError> {
    if trimmed.len() < 2 || !trimmed.ends_with(']') {
        return Err(IniError::SyntaxError {
            message: format!("Unterminated section header '{}' on line {}", trimmed, line),
            line,
            column: indent_column(raw) + trimmed.chars().count(),
            hint: Some("Close the section name with ']'".into()),
            code: Some(101),
        });
    }

    let name = trimmed[1..trimmed.len() - 1].trim();
    if name.is_empty() {
        return Err(IniError::SyntaxError {
            message: format!("Empty section name on line {}", line),
            line,
            column: indent_column(raw) + 1,
            hint: Some("Section headers need a name, e.g. [server]".into()),
            code: Some(102),
        });
    }

    Ok(RawLine::Section(name))
}

fn classify_assignment<'a>(raw: &'a str, trimmed: &'a str, line: usize) -> Result<RawLine<'a>, IniError> {
    let Some(eq) = trimmed.find('=') else {
        let first = trimmed.chars().next().unwrap_or_default();
        return Err(IniError::SyntaxError {
            message: format!(
                "Unexpected character '{}' on line {}: expected a key=value assignment",
                first, line
            ),
            line,
            column: indent_column(raw),
            hint: Some("Separate key and value with '='".into()),
            code: Some(103),
        });
    };

    let (left, right) = (&trimmed[..eq], &trimmed[eq + 1..]);
    let key = left.trim();
    if key.is_empty() {
        return Err(IniError::SyntaxError {
            message: format!("Missing key before '=' on line {}", line),
            line,
            column: indent_column(raw) + left.chars().count(),
            hint: None,
            code: Some(104),
        });
    }

    Ok(RawLine::Assignment {
        key,
        value: right.trim(),
        pretty: left.ends_with(' ') && right.starts_with(' '),
    })
}
