use once_cell::sync::Lazy;
use regex::Regex;

use super::*;

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap()
});

static RADIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap()
});

/// Default coercion of a raw (already trimmed) value string.
///
/// Numbers, `null`, `true` and `false` are recognised; anything else stays a
/// string with one pair of surrounding double quotes removed.
pub fn revive(raw: &str) -> Value {
    if !raw.contains('"') {
        if let Some(n) = parse_number(raw) {
            return Value::Number(n);
        }
    }

    match raw {
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(unquote(raw).to_string()),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    match raw {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if DECIMAL.is_match(raw) {
        return raw.parse::<f64>().ok();
    }

    if RADIX.is_match(raw) {
        let radix = match raw.as_bytes()[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            _ => 2,
        };
        let n = raw[2..]
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64);
        return Some(n);
    }

    None
}

fn unquote(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}
