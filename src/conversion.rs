// Author: Dustin Pilgrim
// License: MIT

use crate::{IniError, Value};

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

fn expected(kind: &str, value: &Value, hint: &str, code: u32) -> IniError {
    IniError::type_error(format!("Expected {}, got {:?}", kind, value), Some(hint), code)
}

impl TryFrom<Value> for String {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(expected("string", &value, "Use a string value in your config", 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(expected("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 => {
                Ok(n as i64)
            }
            Value::Number(n) => Err(IniError::type_error(
                format!("Number {} is not a valid integer", n),
                None,
                403,
            )),
            _ => Err(expected("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n.fract() == 0.0 && n >= 0.0 && n <= u16::MAX as f64 {
                    Ok(n as u16)
                } else {
                    Err(IniError::type_error(
                        format!("Number {} out of range for u16", n),
                        Some("Use a number between 0 and 65535"),
                        403,
                    ))
                }
            }
            _ => Err(expected("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64 {
                    Ok(n as u32)
                } else {
                    Err(IniError::type_error(
                        format!("Number {} out of range for u32", n),
                        Some("Use a non-negative whole number"),
                        403,
                    ))
                }
            }
            _ => Err(expected("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(ref s) if s.to_lowercase().starts_with("tru") || s.to_lowercase().starts_with("fal") => {
                Err(IniError::type_error(
                    format!("Invalid boolean value '{}'. Did you mean 'true' or 'false'?", s),
                    None,
                    404,
                ))
            }
            _ => Err(expected("boolean", &value, "Use true or false", 404)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_value() {
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(Value::from(8080u16), Value::Number(8080.0));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    }

    #[test]
    fn test_string_conversion_error() {
        let result: Result<String, IniError> = Value::Number(42.0).try_into();
        assert_eq!(result.unwrap_err().code(), Some(401));
    }

    #[test]
    fn test_integer_conversions() {
        let port: u16 = Value::Number(8080.0).try_into().unwrap();
        assert_eq!(port, 8080);

        let too_big: Result<u16, IniError> = Value::Number(70000.0).try_into();
        assert!(too_big.is_err());

        let fractional: Result<i64, IniError> = Value::Number(1.5).try_into();
        assert_eq!(fractional.unwrap_err().code(), Some(403));
    }

    #[test]
    fn test_bool_typo_hint() {
        let err: IniError = bool::try_from(Value::String("True".into())).unwrap_err();
        assert!(err.message().contains("Did you mean"));
    }
}
