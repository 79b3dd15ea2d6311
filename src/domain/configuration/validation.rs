//! Configuration validation
//!
//! Validation never fails: it reports every violated rule so an editor can
//! show all problems at once, and an empty report means the configuration is
//! ready to use.

use thiserror::Error;

use super::entity::ModelConfiguration;
use super::limits::{
    MAX_MAX_TOKENS, MAX_NAME_LENGTH, MAX_TEMPERATURE, MIN_MAX_TOKENS, MIN_TEMPERATURE,
};
use super::model::SupportedModel;

/// A single problem found on a configuration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("name too long")]
    NameTooLong,

    #[error("invalid model")]
    InvalidModel,

    #[error("temperature out of range")]
    TemperatureOutOfRange,

    #[error("maxTokens out of range")]
    MaxTokensOutOfRange,
}

impl ConfigurationValidationError {
    /// Field the error belongs to, using the serialized field name
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired | Self::NameTooLong => "name",
            Self::InvalidModel => "model",
            Self::TemperatureOutOfRange => "temperature",
            Self::MaxTokensOutOfRange => "maxTokens",
        }
    }

    /// Stable machine-readable code, for hosts that localize messages
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "name_required",
            Self::NameTooLong => "name_too_long",
            Self::InvalidModel => "invalid_model",
            Self::TemperatureOutOfRange => "temperature_out_of_range",
            Self::MaxTokensOutOfRange => "max_tokens_out_of_range",
        }
    }
}

/// Validate a configuration, returning every violated rule
pub fn validate_configuration(config: &ModelConfiguration) -> Vec<ConfigurationValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_name_present(&config.name) {
        errors.push(e);
    }

    if let Err(e) = validate_name_length(&config.name) {
        errors.push(e);
    }

    if let Err(e) = validate_model(&config.model) {
        errors.push(e);
    }

    if let Err(e) = validate_temperature(config.temperature) {
        errors.push(e);
    }

    if let Err(e) = validate_max_tokens(config.max_tokens) {
        errors.push(e);
    }

    errors
}

/// Validate a configuration and render each problem as a message
pub fn validation_messages(config: &ModelConfiguration) -> Vec<String> {
    validate_configuration(config)
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub fn validate_name_present(name: &str) -> Result<(), ConfigurationValidationError> {
    if name.trim().is_empty() {
        return Err(ConfigurationValidationError::NameRequired);
    }

    Ok(())
}

pub fn validate_name_length(name: &str) -> Result<(), ConfigurationValidationError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ConfigurationValidationError::NameTooLong);
    }

    Ok(())
}

pub fn validate_model(model: &str) -> Result<(), ConfigurationValidationError> {
    model.parse::<SupportedModel>().map(|_| ())
}

/// NaN is never in range
pub fn validate_temperature(temperature: f64) -> Result<(), ConfigurationValidationError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(ConfigurationValidationError::TemperatureOutOfRange);
    }

    Ok(())
}

pub fn validate_max_tokens(max_tokens: i64) -> Result<(), ConfigurationValidationError> {
    if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
        return Err(ConfigurationValidationError::MaxTokensOutOfRange);
    }

    Ok(())
}
