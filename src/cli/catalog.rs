//! `models` and `limits` commands

use serde_json::json;

use super::{print_json, Context};
use crate::domain::configuration::limits;
use crate::domain::SupportedModel;

pub fn models(context: &Context) -> anyhow::Result<()> {
    let models: Vec<&str> = SupportedModel::ALL.iter().map(|m| m.as_str()).collect();
    print_json(context, &models)
}

pub fn limits(context: &Context) -> anyhow::Result<()> {
    let table = json!({
        "configurations": { "min": limits::MIN_CONFIGURATIONS, "max": limits::MAX_CONFIGURATIONS },
        "temperature": { "min": limits::MIN_TEMPERATURE, "max": limits::MAX_TEMPERATURE },
        "maxTokens": { "min": limits::MIN_MAX_TOKENS, "max": limits::MAX_MAX_TOKENS },
        "nameLength": { "max": limits::MAX_NAME_LENGTH },
    });

    print_json(context, &table)
}
