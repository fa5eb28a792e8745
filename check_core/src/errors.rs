//! # Error Types
//!
//! Structured error types for check_core. A failed compliance *check* is not
//! an error: clauses that evaluate to "fail" are reported in the
//! [`ComplianceReport`](crate::report::ComplianceReport). Errors are reserved
//! for inputs that cannot be checked at all (bad geometry, missing loads) and
//! for code-table configuration problems.
//!
//! ## Example
//!
//! ```rust
//! use check_core::errors::{CheckError, CheckResult};
//!
//! fn validate_span(span_m: f64) -> CheckResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CheckError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for check_core operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Structured error type for compliance-check operations.
///
/// Each variant carries enough context to point the caller at the offending
/// field, enabling programmatic handling by an API or UI layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CheckError {
    /// An input value is invalid (non-positive dimension, negative gravity
    /// load, out-of-range parameter). Raised before any clause is evaluated.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A load component required by the selected combination rule is absent
    /// from the load case (e.g. a wind combination without a wind load).
    #[error("Missing {load_type} load required by combination rule '{rule}'")]
    MissingLoad { load_type: String, rule: String },

    /// Material grade not present in the injected code table
    #[error("Material grade not found in code table: {grade}")]
    GradeNotFound { grade: String },

    /// The code table lacks an entry the checker expected at lookup time.
    /// Configuration problem, never silently defaulted.
    #[error("Code table is missing clause data: {clause}")]
    MissingClause { clause: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CheckError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingLoad error
    pub fn missing_load(load_type: impl Into<String>, rule: impl Into<String>) -> Self {
        CheckError::MissingLoad {
            load_type: load_type.into(),
            rule: rule.into(),
        }
    }

    /// Create a GradeNotFound error
    pub fn grade_not_found(grade: impl Into<String>) -> Self {
        CheckError::GradeNotFound {
            grade: grade.into(),
        }
    }

    /// Create a MissingClause error
    pub fn missing_clause(clause: impl Into<String>) -> Self {
        CheckError::MissingClause {
            clause: clause.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CheckError::InvalidInput { .. } => "INVALID_INPUT",
            CheckError::MissingLoad { .. } => "MISSING_LOAD",
            CheckError::GradeNotFound { .. } => "GRADE_NOT_FOUND",
            CheckError::MissingClause { .. } => "MISSING_CLAUSE",
            CheckError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Whether this error indicates a code-table configuration problem
    /// rather than bad user input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CheckError::GradeNotFound { .. } | CheckError::MissingClause { .. }
        )
    }
}
