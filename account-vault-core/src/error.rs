//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(u64),

    /// Email already used by another account
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Single-record import rejected before submission (missing email or password)
    #[error("Import blocked: email and password are required")]
    ImportBlocked,

    /// History source could not be reached
    #[error("History unavailable: {0}")]
    HistoryUnavailable(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration file error
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AccountNotFound(_)
            | Self::DuplicateEmail(_)
            | Self::ValidationError(_)
            | Self::ImportBlocked => true,
            Self::HistoryUnavailable(_)
            | Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::ConfigError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_errors_are_expected() {
        assert!(CoreError::ImportBlocked.is_expected());
        assert!(CoreError::DuplicateEmail("a@x.com".to_string()).is_expected());
        assert!(!CoreError::StorageError("disk full".to_string()).is_expected());
        assert!(!CoreError::HistoryUnavailable("timeout".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::AccountNotFound(7)).unwrap();
        assert_eq!(json["code"], "AccountNotFound");
        assert_eq!(json["details"], 7);
    }
}
