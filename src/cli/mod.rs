//! CLI module for Model Lab
//!
//! A thin host over the configuration domain. Commands read JSON documents
//! from a file or stdin and write JSON results to stdout:
//! - `new`: create a configuration from defaults and flags
//! - `validate`: check a collection and report every problem
//! - `update`: apply a partial update to one entry of a collection
//! - `models` / `limits`: print the supported models and bounds

pub mod catalog;
pub mod new;
pub mod update;
pub mod validate;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::{ConfigurationCollection, ModelConfiguration};
use crate::infrastructure::logging;

/// Model Lab - manage model configurations for prompt comparison
#[derive(Parser)]
#[command(name = "model-lab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a configuration from defaults plus the given fields
    New(new::NewArgs),

    /// Validate a configuration collection
    Validate(validate::ValidateArgs),

    /// Apply a partial update to one configuration of a collection
    Update(update::UpdateArgs),

    /// List supported model identifiers
    Models,

    /// Print configuration and collection limits
    Limits,
}

/// Field flags shared by `new` and `update`
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Model identifier, see `models`
    #[arg(long)]
    pub model: Option<String>,

    /// Chain-of-thought support
    #[arg(long)]
    pub reasoning: Option<bool>,

    /// Web or tool access
    #[arg(long)]
    pub search: Option<bool>,

    /// Sampling temperature
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Maximum tokens in the response
    #[arg(long, allow_negative_numbers = true)]
    pub max_tokens: Option<i64>,

    /// API key overriding the default one
    #[arg(long)]
    pub api_key: Option<String>,

    /// Custom endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// State every command runs with
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
}

/// Load `.env` and configuration, then install logging
pub fn bootstrap() -> Context {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    Context { config }
}

/// Parse the configurations of a document: an array of configurations or a
/// single one. Collection rules are not applied.
pub fn parse_configurations(json: &str) -> anyhow::Result<Vec<ModelConfiguration>> {
    let is_array = json.trim_start().starts_with('[');
    let mut deserializer = serde_json::Deserializer::from_str(json);

    let configurations: Vec<ModelConfiguration> = if is_array {
        serde_path_to_error::deserialize(&mut deserializer).map_err(document_error)?
    } else {
        let configuration: ModelConfiguration =
            serde_path_to_error::deserialize(&mut deserializer).map_err(document_error)?;
        vec![configuration]
    };

    deserializer
        .end()
        .context("Invalid configuration document: trailing characters")?;

    Ok(configurations)
}

/// Parse a document into a collection, enforcing collection rules
pub fn parse_collection(json: &str) -> anyhow::Result<ConfigurationCollection> {
    Ok(ConfigurationCollection::from_configurations(
        parse_configurations(json)?,
    )?)
}

fn document_error(error: serde_path_to_error::Error<serde_json::Error>) -> anyhow::Error {
    anyhow!(
        "Invalid configuration document at {}: {}",
        error.path(),
        error.inner()
    )
}

/// Read a document from a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read a collection from a file, or stdin when the path is `-`
pub fn read_collection(path: &Path) -> anyhow::Result<ConfigurationCollection> {
    let collection = parse_collection(&read_input(path)?)?;
    debug!(count = collection.len(), "Loaded configuration collection");

    Ok(collection)
}

/// Render a value as JSON according to the output settings
pub fn render<T: Serialize>(context: &Context, value: &T) -> anyhow::Result<String> {
    let json = if context.config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(json)
}

pub fn print_json<T: Serialize>(context: &Context, value: &T) -> anyhow::Result<()> {
    println!("{}", render(context, value)?);
    Ok(())
}

/// Input path argument accepting `-` for stdin
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Collection file (JSON array of configurations), or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{create_new_configuration, NewConfiguration};

    #[test]
    fn test_parse_array_document() {
        let a = create_new_configuration(NewConfiguration::new().with_name("A"));
        let b = create_new_configuration(NewConfiguration::new().with_name("B"));
        let json = serde_json::to_string(&vec![a.clone(), b.clone()]).unwrap();

        let collection = parse_collection(&json).unwrap();
        assert_eq!(collection.configurations(), &[a, b]);
    }

    #[test]
    fn test_parse_single_document() {
        let json = r#"{
            "id": "config_1_abcdefghi",
            "name": "Solo",
            "model": "gemini-pro",
            "reasoning": true,
            "search": false,
            "temperature": 0.2,
            "maxTokens": 100
        }"#;

        let collection = parse_collection(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.configurations()[0].name, "Solo");
        assert_eq!(collection.configurations()[0].api_key, None);
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let a = create_new_configuration(NewConfiguration::new().with_name("A"));
        let json = serde_json::to_string(&vec![a.clone(), a]).unwrap();

        assert!(parse_collection(&json).is_err());
    }

    #[test]
    fn test_parse_error_names_offending_field() {
        let json = r#"[{
            "id": "config_1_abcdefghi",
            "name": "Greedy",
            "model": "gpt-4",
            "reasoning": false,
            "search": false,
            "temperature": 0.7,
            "maxTokens": "lots"
        }]"#;

        let message = parse_collection(json).unwrap_err().to_string();
        assert!(message.contains("maxTokens"), "{}", message);
        assert!(message.contains("[0]"), "{}", message);
    }

    #[test]
    fn test_parse_configurations_keeps_oversized_documents() {
        let configurations: Vec<_> = (0..9)
            .map(|i| create_new_configuration(NewConfiguration::new().with_name(format!("C{}", i))))
            .collect();
        let json = serde_json::to_string(&configurations).unwrap();

        assert_eq!(parse_configurations(&json).unwrap().len(), 9);
        assert!(parse_collection(&json).is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_data() {
        let config = create_new_configuration(NewConfiguration::new().with_name("A"));
        let json = format!("{} []", serde_json::to_string(&config).unwrap());

        assert!(parse_configurations(&json).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_collection("not json").is_err());
        assert!(parse_collection(r#"{"name": "missing fields"}"#).is_err());
    }

    #[test]
    fn test_render_compact() {
        let mut config = AppConfig::default();
        config.output.pretty = false;
        let context = Context { config };

        assert_eq!(render(&context, &vec![1, 2]).unwrap(), "[1,2]");
    }
}
