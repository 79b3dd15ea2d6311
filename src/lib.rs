//! Model Lab
//!
//! Define and manage the model configurations used for prompt comparison
//! experiments:
//! - Configuration entities with generated ids and documented defaults
//! - Partial updates keyed by identity
//! - Validation that reports every problem at once
//! - A bounded, ordered collection of up to eight configurations

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    apply_update, create_new_configuration, validate_configuration, ConfigurationCollection,
    ConfigurationUpdate, DomainError, ModelConfiguration, NewConfiguration,
};
