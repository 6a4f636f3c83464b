//! Error types for dice-server
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Message returned when `sides` is below the minimum.
pub const SIDES_TOO_SMALL: &str = "Number of sides must be at least 2";

/// Message returned when `count` is missing or out of range.
pub const COUNT_OUT_OF_RANGE: &str = "Count must be between 1 and 100";

/// All error types that can occur while serving tool invocations
#[derive(Debug, Error)]
pub enum DiceError {
    /// Malformed or out-of-range tool arguments
    #[error("{0}")]
    InvalidParams(String),

    /// Tool name not present in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiceError {
    /// `sides` was below 2 after coercion.
    pub fn sides_too_small() -> Self {
        Self::InvalidParams(SIDES_TOO_SMALL.to_string())
    }

    /// `count` was absent, non-numeric or outside 1..=100.
    pub fn count_out_of_range() -> Self {
        Self::InvalidParams(COUNT_OUT_OF_RANGE.to_string())
    }

    /// Classify this error for the protocol layer.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParams(_) => ErrorKind::InvalidParams,
            Self::UnknownTool(_) => ErrorKind::MethodNotFound,
            Self::Json(_) => ErrorKind::Internal,
        }
    }

    /// JSON-RPC error code for this error.
    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

/// User-facing error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    MethodNotFound,
    Internal,
}

impl ErrorKind {
    /// JSON-RPC code the kind is reported with.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidParams => ErrorCode::INVALID_PARAMS,
            Self::MethodNotFound => ErrorCode::METHOD_NOT_FOUND,
            Self::Internal => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidParams => "InvalidParams",
            Self::MethodNotFound => "MethodNotFound",
            Self::Internal => "InternalError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard JSON-RPC error codes.
pub struct ErrorCode;

impl ErrorCode {
    /// Unknown method.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid parameters.
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal server error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Result type alias for dice-server operations
pub type Result<T> = std::result::Result<T, DiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_too_small_error() {
        let err = DiceError::sides_too_small();
        assert_eq!(err.to_string(), "Number of sides must be at least 2");
        assert_eq!(err.kind(), ErrorKind::InvalidParams);
    }

    #[test]
    fn test_count_out_of_range_error() {
        let err = DiceError::count_out_of_range();
        assert_eq!(err.to_string(), "Count must be between 1 and 100");
        assert_eq!(err.kind(), ErrorKind::InvalidParams);
    }

    #[test]
    fn test_unknown_tool_error() {
        let err = DiceError::UnknownTool("roll_coin".to_string());
        assert_eq!(err.to_string(), "Unknown tool: roll_coin");
        assert_eq!(err.kind(), ErrorKind::MethodNotFound);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: DiceError = json_err.into();
        assert!(matches!(err, DiceError::Json(_)));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DiceError::sides_too_small().code(), ErrorCode::INVALID_PARAMS);
        assert_eq!(DiceError::UnknownTool("x".into()).code(), ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(ErrorKind::Internal.code(), ErrorCode::INTERNAL_ERROR);
        assert_eq!(ErrorCode::INVALID_PARAMS, -32602);
        assert_eq!(ErrorCode::METHOD_NOT_FOUND, -32601);
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::InvalidParams.to_string(), "InvalidParams");
        assert_eq!(ErrorKind::MethodNotFound.to_string(), "MethodNotFound");
    }
}
