//! Configuration identity

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the random base-36 suffix of generated ids
const RANDOM_SUFFIX_LENGTH: usize = 9;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Last millisecond stamp handed out, so ids never go back in time
static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Opaque configuration identifier.
///
/// Generated ids look like `config_1718000000000_k3j9x0q2m`, but callers must
/// not rely on the shape: any string is accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationId(String);

impl ConfigurationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, process-unique id
    pub fn generate() -> Self {
        Self(generate_configuration_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ConfigurationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ConfigurationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ConfigurationId> for String {
    fn from(id: ConfigurationId) -> Self {
        id.0
    }
}

impl fmt::Display for ConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate a configuration id of the form `config_<millis>_<base36>`.
///
/// No registry is consulted; uniqueness rests on the millisecond stamp plus
/// 9 random base-36 characters.
pub fn generate_configuration_id() -> String {
    let millis = next_millis();

    let mut rng = rand::thread_rng();
    let suffix: String = (0..RANDOM_SUFFIX_LENGTH)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect();

    format!("config_{}_{}", millis, suffix)
}

/// Current Unix time in milliseconds, clamped to never decrease
fn next_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_ISSUED_MILLIS.fetch_max(now, Ordering::Relaxed);
    previous.max(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_configuration_id()).collect();
        assert_eq!(ids.len(), 10_000);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_configuration_id();
        let parts: Vec<&str> = id.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "config");
        assert!(parts[1].parse::<i64>().unwrap() > 0);
        assert_eq!(parts[2].len(), RANDOM_SUFFIX_LENGTH);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_millis_never_decrease() {
        let stamps: Vec<i64> = (0..1_000).map(|_| next_millis()).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_id_is_opaque_in_serde() {
        let id = ConfigurationId::new("anything at all");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"anything at all\"");

        let parsed: ConfigurationId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
