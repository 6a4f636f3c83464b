//! Invocation request and result types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DiceError, Result};

/// A named tool call with untyped arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Tool name to resolve against the catalog
    pub name: String,
    /// Raw arguments; absent arguments deserialize as an empty map
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl InvocationRequest {
    /// Create a request with the given arguments
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Create a request with no arguments
    pub fn no_args(name: impl Into<String>) -> Self {
        Self::new(name, Map::new())
    }

    /// Create a request from a JSON value; non-objects count as no arguments
    pub fn from_value(name: impl Into<String>, arguments: Value) -> Self {
        match arguments {
            Value::Object(map) => Self::new(name, map),
            _ => Self::no_args(name),
        }
    }

    /// Parse arguments from JSON text, which must hold an object
    pub fn parse(name: impl Into<String>, arguments: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(arguments)? {
            Value::Object(map) => Ok(Self::new(name, map)),
            _ => Err(DiceError::InvalidParams(
                "Arguments must be a JSON object".to_string(),
            )),
        }
    }
}

/// One content item of an invocation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl Content {
    /// Create a text content item
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Text payload, if this is a text item
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
        }
    }
}

/// Successful outcome of an invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub content: Vec<Content>,
}

impl InvocationResult {
    /// Result holding a single text item
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(text)],
        }
    }

    /// All text items joined with newlines
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(Content::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_request_no_args() {
        let req = InvocationRequest::no_args("roll_dice");
        assert_eq!(req.name, "roll_dice");
        assert!(req.arguments.is_empty());
    }

    #[test]
    fn test_request_from_value() {
        let req = InvocationRequest::from_value("roll_dice", json!({"sides": 20}));
        assert_eq!(req.arguments["sides"], 20);

        let req = InvocationRequest::from_value("roll_dice", json!([1, 2]));
        assert!(req.arguments.is_empty());
    }

    #[test]
    fn test_request_parse() {
        let req = InvocationRequest::parse("roll_multiple_dice", r#"{"count": 2}"#).unwrap();
        assert_eq!(req.arguments["count"], 2);
    }

    #[test]
    fn test_request_parse_errors() {
        let err = InvocationRequest::parse("roll_dice", "{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let err = InvocationRequest::parse("roll_dice", "[6]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParams);
        assert_eq!(err.to_string(), "Arguments must be a JSON object");
    }

    #[test]
    fn test_request_deserialize_missing_arguments() {
        let req: InvocationRequest = serde_json::from_str(r#"{"name": "roll_dice"}"#).unwrap();
        assert_eq!(req.name, "roll_dice");
        assert!(req.arguments.is_empty());
    }

    #[test]
    fn test_result_serialize_shape() {
        let result = InvocationResult::text("🎲 Rolled a d6: 4");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"content": [{"type": "text", "text": "🎲 Rolled a d6: 4"}]})
        );
    }

    #[test]
    fn test_result_joined_text() {
        let result = InvocationResult {
            content: vec![Content::text("a"), Content::text("b")],
        };
        assert_eq!(result.joined_text(), "a\nb");
    }
}
