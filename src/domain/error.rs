use thiserror::Error;

use super::configuration::ConfigurationId;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Mismatched identity: update for '{actual}' applied to configuration '{expected}'")]
    MismatchedIdentity {
        expected: ConfigurationId,
        actual: ConfigurationId,
    },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },
}

impl DomainError {
    pub fn mismatched_identity(expected: ConfigurationId, actual: ConfigurationId) -> Self {
        Self::MismatchedIdentity { expected, actual }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_identity_error() {
        let error = DomainError::mismatched_identity(
            ConfigurationId::new("config_a"),
            ConfigurationId::new("config_b"),
        );
        assert_eq!(
            error.to_string(),
            "Mismatched identity: update for 'config_b' applied to configuration 'config_a'"
        );
    }

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Configuration 'test-id' not found");
        assert_eq!(
            error.to_string(),
            "Not found: Configuration 'test-id' not found"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("name is required");
        assert_eq!(error.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Collection is full");
        assert_eq!(error.to_string(), "Conflict: Collection is full");
    }
}
