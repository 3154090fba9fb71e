// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use serde_json::{json, Map};

use crate::document::{Document, Object, Property};
use crate::format::FormatOptions;
use crate::{IniError, Value};

/// Export an INI document to a JSON value.
///
/// Globals become top-level fields and each section a nested object, in
/// document order:
/// - strings, booleans and null map directly
/// - finite numbers map to JSON numbers, `NaN`/`Infinity` to null
/// - undefined values are left out
///
/// # Examples
/// ```
/// use ini_doc::{export, Document};
///
/// let doc: Document = "name=app\n[server]\nport=80".parse().unwrap();
/// let json = export::to_json(&doc);
/// assert_eq!(json["server"]["port"], 80.0);
/// ```
pub fn to_json(doc: &Document) -> serde_json::Value {
    let mut top = Map::new();

    for (key, property) in doc.to_object() {
        match property {
            Property::Value(value) => {
                if let Some(v) = value_to_json(&value) {
                    top.insert(key, v);
                }
            }
            Property::Section(keys) => {
                let section = keys
                    .iter()
                    .filter_map(|(k, v)| Some((k.clone(), value_to_json(v)?)))
                    .collect::<Map<_, _>>();
                top.insert(key, serde_json::Value::Object(section));
            }
        }
    }

    serde_json::Value::Object(top)
}

/// Export to pretty-printed JSON text.
pub fn to_json_string(doc: &Document) -> Result<String, IniError> {
    serde_json::to_string_pretty(&to_json(doc))
        .map_err(|e| IniError::type_error(format!("Failed to serialize JSON: {}", e), None, 500))
}

/// Build a document from a JSON object: scalar fields become globals and
/// objects of scalars become sections.
///
/// # Errors
/// Returns a type error for non-object input, arrays, objects nested
/// deeper than one level, and keys or strings that cannot be written as INI.
pub fn from_json(json: &serde_json::Value, options: FormatOptions) -> Result<Document, IniError> {
    let serde_json::Value::Object(fields) = json else {
        return Err(IniError::type_error(
            format!("Expected a JSON object, got {}", kind(json)),
            Some("Only objects map onto INI documents"),
            202,
        ));
    };

    let mut object = Object::new();
    for (key, field) in fields {
        let property = match field {
            serde_json::Value::Object(inner) => {
                let mut keys = IndexMap::new();
                for (k, v) in inner {
                    keys.insert(k.clone(), json_to_value(v, &format!("{}.{}", key, k))?);
                }
                Property::Section(keys)
            }
            other => Property::Value(json_to_value(other, key)?),
        };
        object.insert(key.clone(), property);
    }

    Document::from_object(&object, options)
}

fn value_to_json(value: &Value) -> Option<serde_json::Value> {
    let json = match value {
        Value::String(s) => json!(s),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bool(b) => json!(b),
        Value::Null => serde_json::Value::Null,
        Value::Undefined => return None,
    };
    Some(json)
}

fn json_to_value(json: &serde_json::Value, path: &str) -> Result<Value, IniError> {
    match json {
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Number(n) => Ok(Value::Number(n.as_f64().unwrap_or(f64::NAN))),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Null => Ok(Value::Null),
        other => Err(IniError::type_error(
            format!("Unsupported {} at '{}'", kind(other), path),
            Some("INI values must be strings, numbers, booleans or null, nested at most one level"),
            203,
        )),
    }
}

fn kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_keeps_order_and_drops_undefined() {
        let mut doc = Document::new();
        doc.set("zeta", 1).unwrap();
        doc.set("alpha", Value::Undefined).unwrap();
        doc.set_in("server", "port", 8080).unwrap();
        doc.set_in("server", "host", "localhost").unwrap();

        let json = to_json(&doc);
        assert_eq!(json, json!({"zeta": 1.0, "server": {"port": 8080.0, "host": "localhost"}}));

        let text = to_json_string(&doc).unwrap();
        let zeta = text.find("zeta").unwrap();
        let server = text.find("server").unwrap();
        assert!(zeta < server);
    }

    #[test]
    fn test_export_non_finite_is_null() {
        let mut doc = Document::new();
        doc.set("inf", f64::INFINITY).unwrap();
        assert_eq!(to_json(&doc)["inf"], serde_json::Value::Null);
    }

    #[test]
    fn test_from_json_sections_after_globals() {
        let json = json!({
            "db": {"user": "root", "port": 5432},
            "debug": true,
            "name": null
        });
        let doc = from_json(&json, FormatOptions::default()).unwrap();

        assert_eq!(doc.to_ini_string(), "debug=true\nname=null\n[db]\nuser=root\nport=5432");
    }

    #[test]
    fn test_from_json_rejects_unsupported_shapes() {
        let err = from_json(&json!([1, 2]), FormatOptions::default()).unwrap_err();
        assert_eq!(err.code(), Some(202));

        let err = from_json(&json!({"list": [1]}), FormatOptions::default()).unwrap_err();
        assert_eq!(err.code(), Some(203));

        let err = from_json(&json!({"a": {"b": {"c": 1}}}), FormatOptions::default()).unwrap_err();
        assert!(err.message().contains("a.b"), "{}", err);

        let err = from_json(&json!({"a=b": 1}), FormatOptions::default()).unwrap_err();
        assert_eq!(err.code(), Some(210));
    }
}
