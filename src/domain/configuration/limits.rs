//! Bounds for configurations and the collection that holds them

/// Smallest collection a host may run with
pub const MIN_CONFIGURATIONS: usize = 1;

/// Largest collection a host may hold
pub const MAX_CONFIGURATIONS: usize = 8;

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;

pub const MIN_MAX_TOKENS: i64 = 1;
pub const MAX_MAX_TOKENS: i64 = 8000;

/// Maximum configuration name length, in characters
pub const MAX_NAME_LENGTH: usize = 50;
