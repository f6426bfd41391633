//! Error types for Compa
//!
//! Uses `thiserror` for library errors. The taxonomy mirrors how failures
//! are recovered: validation and not-found errors are rejected at the
//! field by the caller, conflict errors surface unchanged because a
//! swallowed conflict could mask a broken lifecycle invariant.

use thiserror::Error;

/// Result type alias for Compa operations
pub type CompaResult<T> = Result<T, CompaError>;

/// Main error type for Compa operations
#[derive(Error, Debug)]
pub enum CompaError {
    /// Input value outside its allowed range, or an operation attempted
    /// on unresolved data (e.g. saving a scenario without computed bands)
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// Grade name not present in the configured grade order
    #[error("unknown grade '{grade}'")]
    GradeNotFound { grade: String },

    /// Scenario id not present in the store
    #[error("no scenario with id '{id}'")]
    ScenarioNotFound { id: String },

    /// Illegal lifecycle transition
    #[error("conflict: {reason}")]
    Conflict { reason: String },

    /// Recalculation exceeded its deadline
    #[error("recalculation timed out after {millis}ms")]
    ComputationTimeout { millis: u64 },

    /// IO error from the persistence boundary
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error from the persistence boundary
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl CompaError {
    /// Build a `Validation` error from any displayable reason
    pub fn validation(reason: impl Into<String>) -> Self {
        CompaError::Validation {
            reason: reason.into(),
        }
    }

    /// Build a `Conflict` error from any displayable reason
    pub fn conflict(reason: impl Into<String>) -> Self {
        CompaError::Conflict {
            reason: reason.into(),
        }
    }
}
