//! Domain layer - configuration entities and rules

pub mod configuration;
mod error;

pub use configuration::{
    apply_update, create_new_configuration, validate_collection, validate_configuration,
    CollectionReport, ConfigurationCollection, ConfigurationId, ConfigurationUpdate,
    ConfigurationValidationError, ModelConfiguration, NewConfiguration, SupportedModel,
};
pub use error::DomainError;
