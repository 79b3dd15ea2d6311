//! `new` command - create a configuration from defaults plus flags

use clap::Args;
use tracing::info;

use super::{print_json, Context, FieldArgs};
use crate::domain::{create_new_configuration, DomainError, ModelConfiguration, NewConfiguration};

#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Fail instead of printing a configuration that does not validate
    #[arg(long)]
    pub strict: bool,
}

pub fn run(context: &Context, args: NewArgs) -> anyhow::Result<()> {
    let config = create(args)?;

    info!(configuration_id = %config.id(), "Created configuration");
    print_json(context, &config)
}

fn create(args: NewArgs) -> Result<ModelConfiguration, DomainError> {
    let config = create_new_configuration(overrides_from(args.fields));

    if args.strict {
        config.ensure_valid()?;
    }

    Ok(config)
}

/// Only flags that were given become overrides
fn overrides_from(fields: FieldArgs) -> NewConfiguration {
    NewConfiguration {
        name: fields.name,
        model: fields.model,
        reasoning: fields.reasoning,
        search: fields.search,
        temperature: fields.temperature,
        max_tokens: fields.max_tokens,
        api_key: fields.api_key,
        endpoint: fields.endpoint,
    }
}
