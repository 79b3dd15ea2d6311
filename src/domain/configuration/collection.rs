//! Bounded, ordered set of configurations a host compares side by side

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info, warn};

use super::entity::{
    apply_update, create_new_configuration, ConfigurationUpdate, ModelConfiguration,
    NewConfiguration,
};
use super::id::ConfigurationId;
use super::limits::{MAX_CONFIGURATIONS, MIN_CONFIGURATIONS};
use super::validation::{validate_configuration, ConfigurationValidationError};
use crate::domain::DomainError;

/// Ordered collection of at most [`MAX_CONFIGURATIONS`] configurations.
///
/// Insertion order is kept and decides column order when results are
/// compared. Ids seen by the collection are never accepted twice, even after
/// the original entry has been removed.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationCollection {
    configurations: Vec<ModelConfiguration>,
    issued_ids: HashSet<ConfigurationId>,
    active_id: Option<ConfigurationId>,
}

impl ConfigurationCollection {
    /// An empty collection, still being set up
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from existing configurations, keeping their order
    pub fn from_configurations(
        configurations: Vec<ModelConfiguration>,
    ) -> Result<Self, DomainError> {
        if configurations.len() > MAX_CONFIGURATIONS {
            return Err(DomainError::conflict(format!(
                "Collection holds at most {} configurations, got {}",
                MAX_CONFIGURATIONS,
                configurations.len()
            )));
        }

        let mut collection = Self::new();
        for config in configurations {
            collection.add(config)?;
        }

        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.configurations.len() >= MAX_CONFIGURATIONS
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_CONFIGURATIONS.saturating_sub(self.configurations.len())
    }

    pub fn configurations(&self) -> &[ModelConfiguration] {
        &self.configurations
    }

    pub fn into_configurations(self) -> Vec<ModelConfiguration> {
        self.configurations
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelConfiguration> {
        self.configurations.iter()
    }

    pub fn get(&self, id: &ConfigurationId) -> Option<&ModelConfiguration> {
        self.configurations.iter().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: &ConfigurationId) -> bool {
        self.get(id).is_some()
    }

    /// Append a configuration at the end
    pub fn add(&mut self, config: ModelConfiguration) -> Result<&ModelConfiguration, DomainError> {
        if self.is_full() {
            warn!(configuration_id = %config.id(), "Rejected configuration: collection is full");
            return Err(DomainError::conflict(format!(
                "Collection already holds the maximum of {} configurations",
                MAX_CONFIGURATIONS
            )));
        }

        if config.id().is_empty() {
            warn!(name = %config.name, "Rejected configuration: empty id");
            return Err(DomainError::conflict("Configuration id cannot be empty"));
        }

        if self.issued_ids.contains(config.id()) {
            warn!(configuration_id = %config.id(), "Rejected configuration: id already used");
            return Err(DomainError::conflict(format!(
                "Configuration id '{}' has already been used in this collection",
                config.id()
            )));
        }

        info!(configuration_id = %config.id(), name = %config.name, "Added configuration");

        self.issued_ids.insert(config.id().clone());
        self.configurations.push(config);

        let index = self.configurations.len() - 1;
        Ok(&self.configurations[index])
    }

    /// Create a configuration from overrides and append it
    pub fn create(
        &mut self,
        overrides: NewConfiguration,
    ) -> Result<&ModelConfiguration, DomainError> {
        self.add(create_new_configuration(overrides))
    }

    /// Apply a partial update to the entry with the update's id, in place
    pub fn update(
        &mut self,
        update: &ConfigurationUpdate,
    ) -> Result<&ModelConfiguration, DomainError> {
        let index = self.position(&update.id)?;
        let updated = apply_update(&self.configurations[index], update)?;

        debug!(configuration_id = %update.id, "Updated configuration");

        self.configurations[index] = updated;
        Ok(&self.configurations[index])
    }

    /// Remove an entry. The last remaining entry cannot be removed.
    pub fn remove(&mut self, id: &ConfigurationId) -> Result<ModelConfiguration, DomainError> {
        let index = self.position(id)?;

        if self.configurations.len() <= MIN_CONFIGURATIONS {
            warn!(configuration_id = %id, "Rejected removal of last configuration");
            return Err(DomainError::conflict(format!(
                "Collection must keep at least {} configuration",
                MIN_CONFIGURATIONS
            )));
        }

        let removed = self.configurations.remove(index);

        if self.active_id.as_ref() == Some(id) {
            self.active_id = None;
        }

        info!(configuration_id = %id, "Removed configuration");

        Ok(removed)
    }

    /// Mark an entry as the one being edited
    pub fn select(&mut self, id: &ConfigurationId) -> Result<&ModelConfiguration, DomainError> {
        let index = self.position(id)?;

        debug!(configuration_id = %id, "Selected configuration");

        self.active_id = Some(id.clone());
        Ok(&self.configurations[index])
    }

    pub fn clear_selection(&mut self) {
        self.active_id = None;
    }

    pub fn active(&self) -> Option<&ModelConfiguration> {
        self.active_id.as_ref().and_then(|id| self.get(id))
    }

    /// Validate every entry plus the collection size
    pub fn validate(&self) -> CollectionReport {
        validate_collection(&self.configurations)
    }

    fn position(&self, id: &ConfigurationId) -> Result<usize, DomainError> {
        self.configurations
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("Configuration '{}' not found", id)))
    }
}

impl Serialize for ConfigurationCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.configurations.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfigurationCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let configurations = Vec::<ModelConfiguration>::deserialize(deserializer)?;
        Self::from_configurations(configurations).map_err(serde::de::Error::custom)
    }
}

/// Validate a sequence of configurations as a collection.
///
/// Works on any slice, including one a [`ConfigurationCollection`] would
/// refuse to hold (too many entries, empty or repeated ids), so those
/// problems can be reported instead of failing the load.
pub fn validate_collection(configurations: &[ModelConfiguration]) -> CollectionReport {
    let entries = configurations
        .iter()
        .filter_map(|config| {
            let errors = validate_configuration(config);
            (!errors.is_empty()).then(|| EntryReport {
                id: config.id().clone(),
                name: config.name.clone(),
                errors,
            })
        })
        .collect();

    let mut seen = HashSet::new();
    let identity_conflicts = configurations
        .iter()
        .map(ModelConfiguration::id)
        .filter(|id| id.is_empty() || !seen.insert(*id))
        .cloned()
        .collect();

    CollectionReport {
        size: configurations.len(),
        size_in_range: (MIN_CONFIGURATIONS..=MAX_CONFIGURATIONS).contains(&configurations.len()),
        identity_conflicts,
        entries,
    }
}

/// Problems found on one entry of a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub id: ConfigurationId,
    pub name: String,
    pub errors: Vec<ConfigurationValidationError>,
}

/// Outcome of validating a whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub size: usize,
    pub size_in_range: bool,
    /// Ids that are empty or appear more than once
    pub identity_conflicts: Vec<ConfigurationId>,
    /// Entries with at least one error, in collection order
    pub entries: Vec<EntryReport>,
}

impl CollectionReport {
    /// Whether the collection can be used to run an experiment
    pub fn is_ready(&self) -> bool {
        self.size_in_range && self.identity_conflicts.is_empty() && self.entries.is_empty()
    }

    /// Gate for actions that need the whole collection to be usable
    pub fn ensure_ready(&self) -> Result<(), DomainError> {
        if self.is_ready() {
            return Ok(());
        }

        let mut problems = Vec::new();

        if !self.size_in_range {
            problems.push(format!(
                "size {} outside {}..={}",
                self.size, MIN_CONFIGURATIONS, MAX_CONFIGURATIONS
            ));
        }

        if !self.identity_conflicts.is_empty() {
            problems.push(format!(
                "{} empty or repeated id(s)",
                self.identity_conflicts.len()
            ));
        }

        if !self.entries.is_empty() {
            problems.push(format!("{} invalid configuration(s)", self.entries.len()));
        }

        Err(DomainError::validation(format!(
            "Collection is not ready: {}",
            problems.join(", ")
        )))
    }
}
