use super::*;

/// Byte offset and kind of the first line terminator in `text`.
pub(super) fn find_terminator(text: &str) -> Option<(usize, LineBreak)> {
    let bytes = text.as_bytes();
    let at = bytes.iter().position(|&b| b == b'\n' || b == b'\r')?;
    let kind = match (bytes[at], bytes.get(at + 1)) {
        (b'\r', Some(b'\n')) => LineBreak::CrLf,
        (b'\r', _) => LineBreak::Cr,
        _ => LineBreak::Lf,
    };
    Some((at, kind))
}

/// Whether a trimmed line is blank or starts a comment.
pub(super) fn is_comment(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with(';')
        || trimmed.starts_with("//")
}

/// 1-based column of the first non-whitespace character.
pub(super) fn indent_column(raw: &str) -> usize {
    raw.chars().take_while(|c| c.is_whitespace()).count() + 1
}
