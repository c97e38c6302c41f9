//! Error types for the charter CLI.
//!
//! Composition itself cannot fail. These errors cover the caller surface:
//! reading configuration, validating it, and writing the document out.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for charter operations.
#[derive(Error, Debug)]
pub enum CharterError {
    /// User provided invalid arguments or an invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// A composed document failed a placeholder check.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Writing output failed.
    #[error("I/O failed: {0}")]
    Io(String),
}

impl CharterError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CharterError::UserError(_) => exit_codes::USER_ERROR,
            CharterError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            CharterError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for charter operations.
pub type Result<T> = std::result::Result<T, CharterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = CharterError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = CharterError::ValidationError("unresolved slot".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = CharterError::Io("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CharterError::ValidationError("%{working_directory} left in output".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: %{working_directory} left in output"
        );

        let err = CharterError::UserError("config file missing".to_string());
        assert_eq!(err.to_string(), "config file missing");
    }
}
