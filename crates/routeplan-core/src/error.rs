//! Error types and exit codes for routeplan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unrecognized criterion)
//! - 3: Data error (unknown node, invalid weight, malformed network file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the routeplan binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid weight, bad network file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a route network.
///
/// "No path exists" is not an error: queries return an empty path instead.
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown criterion: {0} (expected: distance, time, cost)")]
    InvalidCriterion(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown node: {id}")]
    UnknownNode { id: NodeId },

    #[error("node already exists: {id}")]
    DuplicateNode { id: NodeId },

    #[error("invalid {field} weight: {value} (weights must be non-negative)")]
    InvalidWeight { field: &'static str, value: i64 },

    #[error("invalid network file {path:?}: {reason}")]
    InvalidNetwork { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a reference to an absent node
    pub fn unknown_node(id: impl Into<NodeId>) -> Self {
        RouteError::UnknownNode { id: id.into() }
    }

    /// Create an error for a malformed network description
    pub fn invalid_network(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidNetwork {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::InvalidCriterion(_) | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::UnknownNode { .. }
            | RouteError::DuplicateNode { .. }
            | RouteError::InvalidWeight { .. }
            | RouteError::InvalidNetwork { .. }
            | RouteError::Toml(_) => ExitCode::Data,

            RouteError::Io(_) | RouteError::Json(_) | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::InvalidCriterion(_) => "invalid_criterion",
            RouteError::UsageError(_) => "usage_error",
            RouteError::UnknownNode { .. } => "unknown_node",
            RouteError::DuplicateNode { .. } => "duplicate_node",
            RouteError::InvalidWeight { .. } => "invalid_weight",
            RouteError::InvalidNetwork { .. } => "invalid_network",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routeplan operations
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            RouteError::InvalidCriterion("speed".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(RouteError::unknown_node(7).exit_code(), ExitCode::Data);
        assert_eq!(
            RouteError::InvalidWeight {
                field: "cost",
                value: -1
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            RouteError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RouteError::unknown_node(4).to_string(), "unknown node: 4");
        assert_eq!(
            RouteError::DuplicateNode { id: NodeId::new(2) }.to_string(),
            "node already exists: 2"
        );
        assert_eq!(
            RouteError::InvalidWeight {
                field: "distance",
                value: -5
            }
            .to_string(),
            "invalid distance weight: -5 (weights must be non-negative)"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = RouteError::unknown_node(9).to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_node");
        assert_eq!(json["error"]["message"], "unknown node: 9");
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Usage.into();
        assert_eq!(code, 2);
    }
}
