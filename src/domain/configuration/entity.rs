//! Model configuration entity, defaults, and partial updates

use serde::{Deserialize, Deserializer, Serialize};

use super::id::ConfigurationId;
use super::model::SupportedModel;
use super::validation::{validate_configuration, ConfigurationValidationError};
use crate::domain::DomainError;

/// Values a new configuration starts from before overrides are applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigurationDefaults {
    pub name: &'static str,
    pub model: SupportedModel,
    pub reasoning: bool,
    pub search: bool,
    pub temperature: f64,
    pub max_tokens: i64,
}

pub const DEFAULT_CONFIGURATION: ConfigurationDefaults = ConfigurationDefaults {
    name: "",
    model: SupportedModel::Gpt4,
    reasoning: false,
    search: false,
    temperature: 0.7,
    max_tokens: 2000,
};

/// One way of invoking a model.
///
/// Fields are not range-checked on assignment so an editor can hold a
/// half-finished draft; use [`validate_configuration`] before running it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfiguration {
    id: ConfigurationId,

    /// Display name, e.g. "Creative GPT"
    pub name: String,

    /// Model identifier, expected to be one of [`SupportedModel`]
    pub model: String,

    /// Chain-of-thought support
    pub reasoning: bool,

    /// Web or tool access
    pub search: bool,

    pub temperature: f64,

    pub max_tokens: i64,

    /// Overrides the caller's default key when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Custom endpoint URL for self-hosted deployments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ModelConfiguration {
    pub fn id(&self) -> &ConfigurationId {
        &self.id
    }

    /// Supported model this configuration targets, if the identifier is known
    pub fn supported_model(&self) -> Option<SupportedModel> {
        self.model.parse().ok()
    }

    pub fn validate(&self) -> Vec<ConfigurationValidationError> {
        validate_configuration(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Gate for actions that need a usable configuration
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }

        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(DomainError::validation(format!(
            "Configuration '{}': {}",
            self.id,
            messages.join(", ")
        )))
    }
}

/// Field overrides for a new configuration. The id is always generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NewConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl NewConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_reasoning(mut self, reasoning: bool) -> Self {
        self.reasoning = Some(reasoning);
        self
    }

    pub fn with_search(mut self, search: bool) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Partial update keyed by identity.
///
/// `api_key` and `endpoint` are doubly optional: `None` leaves the field
/// alone, `Some(None)` clears it, `Some(Some(v))` sets it. In JSON a missing
/// key leaves the field alone and `null` clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigurationUpdate {
    pub id: ConfigurationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint: Option<Option<String>>,
}

impl ConfigurationUpdate {
    /// An update that changes nothing yet
    pub fn new(id: impl Into<ConfigurationId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            model: None,
            reasoning: None,
            search: None,
            temperature: None,
            max_tokens: None,
            api_key: None,
            endpoint: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_reasoning(mut self, reasoning: bool) -> Self {
        self.reasoning = Some(reasoning);
        self
    }

    pub fn with_search(mut self, search: bool) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// True when no field besides the id is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.model.is_none()
            && self.reasoning.is_none()
            && self.search.is_none()
            && self.temperature.is_none()
            && self.max_tokens.is_none()
            && self.api_key.is_none()
            && self.endpoint.is_none()
    }
}

/// Present JSON values, including `null`, become `Some`
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Build a configuration from the defaults plus overrides, with a fresh id.
///
/// The result is not validated.
pub fn create_new_configuration(overrides: NewConfiguration) -> ModelConfiguration {
    let defaults = DEFAULT_CONFIGURATION;

    ModelConfiguration {
        id: ConfigurationId::generate(),
        name: overrides.name.unwrap_or_else(|| defaults.name.to_string()),
        model: overrides
            .model
            .unwrap_or_else(|| defaults.model.as_str().to_string()),
        reasoning: overrides.reasoning.unwrap_or(defaults.reasoning),
        search: overrides.search.unwrap_or(defaults.search),
        temperature: overrides.temperature.unwrap_or(defaults.temperature),
        max_tokens: overrides.max_tokens.unwrap_or(defaults.max_tokens),
        api_key: overrides.api_key,
        endpoint: overrides.endpoint,
    }
}

/// Apply a partial update, returning a new configuration with the same id
pub fn apply_update(
    existing: &ModelConfiguration,
    update: &ConfigurationUpdate,
) -> Result<ModelConfiguration, DomainError> {
    if update.id != existing.id {
        return Err(DomainError::mismatched_identity(
            existing.id.clone(),
            update.id.clone(),
        ));
    }

    let mut updated = existing.clone();

    if let Some(ref name) = update.name {
        updated.name = name.clone();
    }

    if let Some(ref model) = update.model {
        updated.model = model.clone();
    }

    if let Some(reasoning) = update.reasoning {
        updated.reasoning = reasoning;
    }

    if let Some(search) = update.search {
        updated.search = search;
    }

    if let Some(temperature) = update.temperature {
        updated.temperature = temperature;
    }

    if let Some(max_tokens) = update.max_tokens {
        updated.max_tokens = max_tokens;
    }

    if let Some(ref api_key) = update.api_key {
        updated.api_key = api_key.clone();
    }

    if let Some(ref endpoint) = update.endpoint {
        updated.endpoint = endpoint.clone();
    }

    Ok(updated)
}
