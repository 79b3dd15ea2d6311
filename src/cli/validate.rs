//! `validate` command - report every problem in a collection

use clap::Args;
use serde_json::{json, Value};
use tracing::warn;

use super::{parse_configurations, print_json, read_input, Context, InputArgs};
use crate::domain::configuration::limits::{MAX_CONFIGURATIONS, MIN_CONFIGURATIONS};
use crate::domain::{validate_collection, CollectionReport};

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(context: &Context, args: ValidateArgs) -> anyhow::Result<()> {
    // Oversized documents and id clashes are reported, not refused
    let configurations = parse_configurations(&read_input(&args.input.input)?)?;
    let report = validate_collection(&configurations);

    print_json(context, &report_json(&report))?;

    if let Err(error) = report.ensure_ready() {
        warn!(
            size = report.size,
            invalid = report.entries.len(),
            "Collection is not ready"
        );
        return Err(error.into());
    }

    Ok(())
}

fn report_json(report: &CollectionReport) -> Value {
    let entries: Vec<Value> = report
        .entries
        .iter()
        .map(|entry| {
            let errors: Vec<Value> = entry
                .errors
                .iter()
                .map(|error| {
                    json!({
                        "field": error.field(),
                        "code": error.code(),
                        "message": error.to_string(),
                    })
                })
                .collect();

            json!({
                "id": entry.id,
                "name": entry.name,
                "errors": errors,
            })
        })
        .collect();

    json!({
        "ready": report.is_ready(),
        "size": report.size,
        "sizeInRange": report.size_in_range,
        "sizeLimits": { "min": MIN_CONFIGURATIONS, "max": MAX_CONFIGURATIONS },
        "identityConflicts": report.identity_conflicts,
        "invalid": entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{create_new_configuration, ConfigurationCollection, NewConfiguration};

    #[test]
    fn test_report_for_ready_collection() {
        let mut collection = ConfigurationCollection::new();
        collection
            .create(NewConfiguration::new().with_name("Ready"))
            .unwrap();

        let value = report_json(&collection.validate());
        assert_eq!(value["ready"], true);
        assert_eq!(value["size"], 1);
        assert_eq!(value["invalid"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_report_for_oversized_document() {
        let configurations: Vec<_> = (0..9)
            .map(|i| create_new_configuration(NewConfiguration::new().with_name(format!("C{}", i))))
            .collect();
        let json = serde_json::to_string(&configurations).unwrap();

        let report = validate_collection(&parse_configurations(&json).unwrap());
        let value = report_json(&report);

        assert_eq!(value["ready"], false);
        assert_eq!(value["size"], 9);
        assert_eq!(value["sizeInRange"], false);
        assert!(report.ensure_ready().is_err());
    }

    #[test]
    fn test_report_lists_errors() {
        let mut collection = ConfigurationCollection::new();
        collection
            .create(NewConfiguration::new().with_max_tokens(9000))
            .unwrap();

        let value = report_json(&collection.validate());
        assert_eq!(value["ready"], false);

        let errors = &value["invalid"][0]["errors"];
        assert_eq!(errors[0]["code"], "name_required");
        assert_eq!(errors[1]["field"], "maxTokens");
        assert_eq!(errors[1]["message"], "maxTokens out of range");
    }
}
