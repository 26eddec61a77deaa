use thiserror::Error;

use crate::form::Field;

/// Library errors for the onboarding wizard.
///
/// Validation and submission failures are reported to the user verbatim
/// through their `Display` output, so the messages below are user-facing.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", Field::join_names(.0))]
    MissingFields(Vec<Field>),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhoneNumber,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Registration can only be submitted from the final step")]
    NotOnFinalStep,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never completed (DNS, refused connection, I/O).
    #[error("Network error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("An unknown error occurred")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SubmitError {
    /// True when the failure was detected before any network activity.
    pub fn is_client_side(&self) -> bool {
        matches!(self, SubmitError::NotOnFinalStep | SubmitError::Validation(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {field} expects {expected} input")]
    InputKindMismatch { field: Field, expected: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingFields(vec![Field::Name, Field::Email]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: restaurant_name, restaurant_email"
        );

        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_rejected_shows_server_message_only() {
        let err = SubmitError::Rejected {
            status: 400,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert!(!err.is_client_side());
    }

    #[test]
    fn test_validation_converts_into_submit_error() {
        let err: SubmitError = ValidationError::InvalidEmail.into();
        assert!(err.is_client_side());
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}
