//! Configuration domain - model configurations, their validation and the
//! bounded collection a host keeps them in

mod collection;
mod entity;
mod id;
pub mod limits;
mod model;
mod validation;

pub use collection::{
    validate_collection, CollectionReport, ConfigurationCollection, EntryReport,
};
pub use entity::{
    apply_update, create_new_configuration, ConfigurationDefaults, ConfigurationUpdate,
    ModelConfiguration, NewConfiguration, DEFAULT_CONFIGURATION,
};
pub use id::{generate_configuration_id, ConfigurationId};
pub use model::SupportedModel;
pub use validation::{
    validate_configuration, validate_max_tokens, validate_model, validate_name_length,
    validate_name_present, validate_temperature, validation_messages,
    ConfigurationValidationError,
};
