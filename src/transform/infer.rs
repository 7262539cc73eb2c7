//! Literal type inference for extracted attribute values.

use std::fmt;

use serde_json::Value;

/// Type tag of a value as seen by the generated props declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Number,
    Boolean,
    String,
    /// JSON `null`, arrays and objects.
    Object,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers the most specific literal type of `value`.
///
/// The value is parsed as a JSON document. Anything that fails to parse is
/// a plain string. Containers and `null` all report [`TypeTag::Object`].
/// Numeric literals too large for `f64` (e.g. `1e400`) are still numbers.
pub fn infer_type(value: &str) -> TypeTag {
    match serde_json::from_str::<Value>(value) {
        Ok(Value::Number(_)) => TypeTag::Number,
        Ok(Value::Bool(_)) => TypeTag::Boolean,
        Ok(Value::String(_)) => TypeTag::String,
        Ok(Value::Null | Value::Array(_) | Value::Object(_)) => TypeTag::Object,
        Err(_) if is_json_number(value) => TypeTag::Number,
        Err(_) => TypeTag::String,
    }
}

/// Checks `value` against the JSON number grammar, ignoring surrounding JSON
/// whitespace and the magnitude of the number.
fn is_json_number(value: &str) -> bool {
    let trimmed = value.trim_matches([' ', '\t', '\n', '\r']);
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    let digits = |i: &mut usize| {
        let start = *i;
        while bytes.get(*i).is_some_and(u8::is_ascii_digit) {
            *i += 1;
        }
        *i - start
    };

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            digits(&mut i);
        }
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if digits(&mut i) == 0 {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }
    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_literals() {
        assert_eq!(infer_type("2"), TypeTag::Number);
        assert_eq!(infer_type("1.5"), TypeTag::Number);
        assert_eq!(infer_type("true"), TypeTag::Boolean);
        assert_eq!(infer_type("\"quoted\""), TypeTag::String);
        assert_eq!(infer_type("1e400"), TypeTag::Number);
        assert_eq!(infer_type("-1E+400"), TypeTag::Number);
    }

    #[test]
    fn number_lookalikes_are_strings() {
        assert_eq!(infer_type("01"), TypeTag::String);
        assert_eq!(infer_type("1."), TypeTag::String);
        assert_eq!(infer_type("+1"), TypeTag::String);
        assert_eq!(infer_type("1e"), TypeTag::String);
        assert_eq!(infer_type("Infinity"), TypeTag::String);
    }

    #[test]
    fn unparsable_values_are_strings() {
        assert_eq!(infer_type("bold"), TypeTag::String);
        assert_eq!(infer_type("currentColor"), TypeTag::String);
        assert_eq!(infer_type(""), TypeTag::String);
        assert_eq!(infer_type("1.5px"), TypeTag::String);
    }

    #[test]
    fn containers_report_object() {
        assert_eq!(infer_type("null"), TypeTag::Object);
        assert_eq!(infer_type("[1, 2]"), TypeTag::Object);
        assert_eq!(infer_type("{}"), TypeTag::Object);
    }

    #[test]
    fn display_matches_declaration_keyword() {
        assert_eq!(TypeTag::Boolean.to_string(), "boolean");
    }
}
