#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Line;
#[cfg(test)]
use crate::document::{ParseOptions, Property};
#[cfg(test)]
use crate::format::{FormatOptions, LineBreak};

#[cfg(test)]
fn parse(input: &str) -> Document {
    Document::parse_str(input, ParseOptions::default()).expect("Failed to parse document")
}

#[test]
fn test_default_coercion() {
    let doc = parse("a=1\nb=true\nc=null\nd=\"x\"\ne=plain");

    assert_eq!(doc.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(doc.get("b"), Some(&Value::Bool(true)));
    assert_eq!(doc.get("c"), Some(&Value::Null));
    assert_eq!(doc.get("d"), Some(&Value::String("x".into())));
    assert_eq!(doc.get("e"), Some(&Value::String("plain".into())));
    assert_eq!(doc.len(), 5);
}

#[test]
fn test_section_scoping() {
    let doc = parse("[s]\nk=1\n[t]\nk=2");

    assert_eq!(doc.global_keys().count(), 0);
    assert_eq!(doc.get("k"), None);
    assert_eq!(doc.get_in("s", "k"), Some(&Value::Number(1.0)));
    assert_eq!(doc.get_in("t", "k"), Some(&Value::Number(2.0)));

    let s = doc.section("s").unwrap();
    assert_eq!((s.num, s.end), (1, 2));
    let t = doc.section("t").unwrap();
    assert_eq!((t.num, t.end), (3, 4));
}

#[test]
fn test_entries_record_owner_and_line() {
    let doc = parse("g=0\n[s]\nk=1");

    let global = doc.line_at(1).and_then(|l| l.as_entry()).unwrap();
    assert_eq!(global.section, None);
    assert_eq!(global.key, "g");

    let owned = doc.line_at(3).and_then(|l| l.as_entry()).unwrap();
    assert_eq!(owned.section.as_deref(), Some("s"));
    assert_eq!(owned.num, 3);
}

#[test]
fn test_comments_do_not_extend_section() {
    let doc = parse("[s]\nk=1\n; trailing\n\n[t]");

    let s = doc.section("s").unwrap();
    assert_eq!(s.end, 2);
    assert!(matches!(doc.line_at(3), Some(Line::Comment(c)) if c.text == "; trailing"));
    assert!(matches!(doc.line_at(4), Some(Line::Comment(c)) if c.text.is_empty()));
}

#[test]
fn test_pretty_inference() {
    assert!(parse("key = value").format().pretty());
    assert!(!parse("key=value").format().pretty());
}

#[test]
fn test_pretty_inferred_from_first_assignment_only() {
    let doc = parse("; header\na=1\nb = 2");
    assert!(!doc.format().pretty());
    assert!(doc.format().is_pretty_set());
}

#[test]
fn test_explicit_format_wins_over_inference() {
    let options = ParseOptions::from(FormatOptions::new(LineBreak::Lf, true));
    let doc = Document::parse_str("a=1\r\nb=2", options).unwrap();

    assert!(doc.format().pretty());
    assert_eq!(doc.format().line_break(), LineBreak::Lf);
}

#[test]
fn test_line_break_inference() {
    assert_eq!(parse("a=1\r\nb=2").format().line_break(), LineBreak::CrLf);
    assert_eq!(parse("a=1\rb=2").format().line_break(), LineBreak::Cr);
    assert_eq!(parse("a=1\nb=2\r\n").format().line_break(), LineBreak::Lf);

    let single = parse("a=1");
    assert!(!single.format().is_line_break_set());
    assert_eq!(single.format().line_break(), LineBreak::Lf);
}

#[test]
fn test_unterminated_section_error() {
    let err = Document::parse_str("[section\nkey=1", ParseOptions::default()).unwrap_err();
    assert_eq!(err.line(), Some(1));
    assert!(matches!(err, IniError::SyntaxError { .. }));
}

#[test]
fn test_missing_assignment_error() {
    let err = Document::parse_str("keyonly", ParseOptions::default()).unwrap_err();
    assert_eq!(err.line(), Some(1));
    assert!(err.message().contains("'k'"));
}

#[test]
fn test_error_line_number_counts_all_lines() {
    let err = Document::parse_str("; c\n\n[ok]\na=1\n=oops", ParseOptions::default()).unwrap_err();
    assert_eq!(err.line(), Some(5));
    assert_eq!(err.code(), Some(104));
}

#[test]
fn test_failed_parse_leaves_document_untouched() {
    let mut doc = parse("a=1");
    assert!(doc.parse("[broken", None).is_err());
    assert_eq!(doc.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_parse_replaces_content_and_chains() {
    let mut doc = parse("a=1");
    let len = doc.parse("[s]\nb=2", None).unwrap().len();
    assert_eq!(len, 2);
    assert_eq!(doc.get("a"), None);
}

#[test]
fn test_custom_reviver_receives_section() {
    let options = ParseOptions::default().with_reviver(|key, raw, section| {
        Value::String(format!("{}:{}:{}", section.unwrap_or("-"), key, raw))
    });
    let doc = Document::parse_str("a=1\n[s]\nb=true", options).unwrap();

    assert_eq!(doc.get("a"), Some(&Value::String("-:a:1".into())));
    assert_eq!(doc.get_in("s", "b"), Some(&Value::String("s:b:true".into())));
}

#[test]
fn test_parser_with_borrowed_reviver() {
    let upper = |_: &str, raw: &str, _: Option<&str>| Value::String(raw.to_uppercase());
    let mut doc = Document::new();
    doc.parse("x=abc", Some(&upper)).unwrap();
    assert_eq!(doc.get("x"), Some(&Value::String("ABC".into())));
}

#[test]
fn test_parse_bytes_rejects_non_utf8() {
    let mut doc = Document::new();
    let err = doc.parse_bytes(&[b'a', b'=', 0xff, 0xfe], None).unwrap_err();
    assert!(matches!(err, IniError::TypeError { code: Some(201), .. }));
    assert!(doc.is_empty());
}

#[test]
fn test_reopened_section_is_merged_by_name() {
    let doc = parse("[s]\na=1\n[t]\nx=0\n[s]\nb=2\na=3");

    let blocks: Vec<_> = doc.section_blocks("s").map(|s| (s.num, s.end)).collect();
    assert_eq!(blocks, vec![(1, 2), (5, 7)]);

    // latest definition wins, earlier keys stay reachable
    assert_eq!(doc.get_in("s", "a"), Some(&Value::Number(3.0)));
    assert_eq!(doc.get_in("s", "b"), Some(&Value::Number(2.0)));

    let object = doc.to_object();
    let s = object.get("s").and_then(Property::as_section).unwrap();
    let keys: Vec<_> = s.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(s["a"], Value::Number(3.0));
}

#[test]
fn test_duplicate_global_key_latest_wins() {
    let doc = parse("a=1\na=2");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("a"), Some(&Value::Number(2.0)));
}

#[test]
fn test_value_may_contain_equals_and_brackets() {
    let doc = parse("[links]\nhome = https://example.com/?q=[1]");
    assert_eq!(
        doc.get_in("links", "home"),
        Some(&Value::String("https://example.com/?q=[1]".into()))
    );
}
