//! Structural violations reported when an upstream payload does not match
//! the expected record shape.

use serde_json::Value;
use std::fmt;

/// The JSON type of a value, as seen by the validator.
///
/// Numbers are split into `Integer` and `Number` so that integer-only fields
/// can report a fractional value precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => JsonKind::Integer,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    WrongType { expected: JsonKind, found: JsonKind },
    OutOfRange,
    InvalidUrl(String),
}

/// One offending field, addressed by its dotted path (`$` is the document root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{}: missing", self.path),
            ViolationKind::WrongType { expected, found } => {
                write!(f, "{}: expected {}, found {}", self.path, expected, found)
            }
            ViolationKind::OutOfRange => write!(f, "{}: integer out of range", self.path),
            ViolationKind::InvalidUrl(reason) => {
                write!(f, "{}: invalid url ({})", self.path, reason)
            }
        }
    }
}

/// All violations collected during one validation pass, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaError {
    violations: Vec<FieldViolation>,
}

impl SchemaError {
    pub fn push(&mut self, path: impl Into<String>, kind: ViolationKind) {
        self.violations.push(FieldViolation { path: path.into(), kind });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return f.write_str("no violations");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kind_of() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(15169)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(-25200)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(37.386)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_display_lists_every_violation() {
        let mut err = SchemaError::default();
        err.push("ip", ViolationKind::Missing);
        err.push(
            "connection.asn",
            ViolationKind::WrongType { expected: JsonKind::Integer, found: JsonKind::String },
        );
        err.push("flag.img", ViolationKind::InvalidUrl("relative URL without a base".into()));

        assert_eq!(
            err.to_string(),
            "ip: missing; connection.asn: expected integer, found string; \
             flag.img: invalid url (relative URL without a base)"
        );
        assert_eq!(err.paths(), vec!["ip", "connection.asn", "flag.img"]);
        assert!(err.contains("connection.asn"));
        assert!(!err.contains("connection"));
    }
}
