//! Custom error types for daybudget
//!
//! The engine itself only ever fails in two ways: caller-supplied expense data
//! is malformed (`Validation`), or the session was configured in a way that
//! makes a derived value meaningless (`Config`). The remaining variants belong
//! to the config loader, exporters and CLI around the engine.

use thiserror::Error;

/// The main error type for daybudget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Structural misconfiguration; the session must be rebuilt
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected expense input; no state was changed
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for daybudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
