//! `update` command - apply a partial update to one entry of a collection

use anyhow::bail;
use clap::Args;

use super::{print_json, read_collection, Context, FieldArgs, InputArgs};
use crate::domain::{ConfigurationId, ConfigurationUpdate};

#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Id of the configuration to update
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Remove the API key override
    #[arg(long, conflicts_with = "api_key")]
    pub clear_api_key: bool,

    /// Remove the custom endpoint
    #[arg(long, conflicts_with = "endpoint")]
    pub clear_endpoint: bool,
}

pub fn run(context: &Context, args: UpdateArgs) -> anyhow::Result<()> {
    let mut collection = read_collection(&args.input.input)?;
    let update = update_from(&args);

    if update.is_empty() {
        bail!("Nothing to update: pass at least one field flag");
    }

    collection.update(&update)?;
    print_json(context, &collection)
}

fn update_from(args: &UpdateArgs) -> ConfigurationUpdate {
    let fields = args.fields.clone();
    let mut update = ConfigurationUpdate::new(ConfigurationId::new(args.id.clone()));

    update.name = fields.name;
    update.model = fields.model;
    update.reasoning = fields.reasoning;
    update.search = fields.search;
    update.temperature = fields.temperature;
    update.max_tokens = fields.max_tokens;

    update.api_key = match (fields.api_key, args.clear_api_key) {
        (Some(key), _) => Some(Some(key)),
        (None, true) => Some(None),
        (None, false) => None,
    };

    update.endpoint = match (fields.endpoint, args.clear_endpoint) {
        (Some(endpoint), _) => Some(Some(endpoint)),
        (None, true) => Some(None),
        (None, false) => None,
    };

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(fields: FieldArgs) -> UpdateArgs {
        UpdateArgs {
            input: InputArgs {
                input: PathBuf::from("-"),
            },
            id: "config_1_aaaaaaaaa".to_string(),
            fields,
            clear_api_key: false,
            clear_endpoint: false,
        }
    }

    #[test]
    fn test_only_given_fields_are_set() {
        let update = update_from(&args(FieldArgs {
            temperature: Some(1.2),
            ..FieldArgs::default()
        }));

        assert_eq!(update.id.as_str(), "config_1_aaaaaaaaa");
        assert_eq!(update.temperature, Some(1.2));
        assert_eq!(update.name, None);
        assert_eq!(update.api_key, None);
        assert_eq!(update.endpoint, None);
    }

    #[test]
    fn test_clear_flags() {
        let mut args = args(FieldArgs::default());
        args.clear_api_key = true;
        args.clear_endpoint = true;

        let update = update_from(&args);
        assert_eq!(update.api_key, Some(None));
        assert_eq!(update.endpoint, Some(None));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_no_flags_is_empty() {
        assert!(update_from(&args(FieldArgs::default())).is_empty());
    }
}
