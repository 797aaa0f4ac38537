//! Structured error reports
//!
//! Conversion failures are values, never panics. A report carries a
//! machine-readable code next to the human message so callers (the CLI's
//! JSON mode, scripts) can branch on the kind of failure.

use std::fmt;
use serde::{Deserialize, Serialize};

/// Stable error codes shared by every unitconv crate
pub mod codes {
    pub const MALFORMED_QUERY: &str = "MALFORMED_QUERY";
    pub const UNIT_NOT_RECOGNIZED: &str = "UNIT_NOT_RECOGNIZED";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
}

/// Structured, serializable error report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// One of [`codes`]
    pub code: String,
    pub message: String,
    /// Hint for fixing the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorReport { code: code.into(), message: message.into(), suggestion: None }
    }

    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        ErrorReport { suggestion: Some(suggestion.into()), ..self }
    }

    // ========== Common Report Constructors ==========

    pub fn malformed_query(details: impl Into<String>) -> Self {
        Self::new(codes::MALFORMED_QUERY, format!("Malformed query: {}", details.into()))
            .with_suggestion("Write a number followed by a unit, e.g. \"3 meters in cm\"")
    }

    pub fn unit_not_recognized(token: &str) -> Self {
        Self::new(codes::UNIT_NOT_RECOGNIZED, format!("Unit not recognized: {}", token))
            .with_suggestion("Use --list to see the known units")
    }

    pub fn incompatible_units(from: &str, to: &str) -> Self {
        Self::new(codes::INCOMPATIBLE_UNITS, format!("Cannot convert {} to {}", from, to))
            .with_suggestion(format!("Pick a target unit that measures {}", from))
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suggestion {
            Some(hint) => write!(f, "[{}] {} ({})", self.code, self.message, hint),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ErrorReport {}
