use crate::schema::SchemaError;

#[derive(Debug, thiserror::Error)]
pub enum IpGeoError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema validation failed: {0}")]
    SchemaValidation(#[from] SchemaError),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl IpGeoError {
    /// True when the lookup never produced a JSON document: the call did not
    /// complete, or the body was not JSON.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, IpGeoError::Transport(_) | IpGeoError::Parse(_))
    }

    /// The schema violations, when this is a validation failure.
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            IpGeoError::SchemaValidation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IpGeoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ViolationKind;

    #[test]
    fn test_error_display() {
        let err = IpGeoError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_lookup_failure_classification() {
        assert!(IpGeoError::Transport("dns".into()).is_lookup_failure());
        assert!(IpGeoError::Parse("eof".into()).is_lookup_failure());
        assert!(!IpGeoError::SchemaValidation(SchemaError::default()).is_lookup_failure());
        assert!(!IpGeoError::Config("bad".into()).is_lookup_failure());
    }

    #[test]
    fn test_schema_error_converts() {
        let mut schema = SchemaError::default();
        schema.push("timezone.offset", ViolationKind::Missing);
        let err: IpGeoError = schema.into();

        assert!(err.schema_error().is_some());
        assert_eq!(err.to_string(), "Schema validation failed: timezone.offset: missing");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: IpGeoError = serde_err.into();
        assert!(matches!(err, IpGeoError::Serde(_)));
    }
}
