//! CLI command definitions.

pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dynamore_core::entity::DEFAULT_IDENTITY_ATTRIBUTE;
use dynamore_core::{Attributes, EntityDescriptor, Verb};

use crate::config::{Backend, Config};
use crate::error::{CliError, Result};

/// Store and fetch schema-validated entities in one DynamoDB table.
#[derive(Debug, Parser)]
#[command(name = "dynamore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Entity schema: a JSON-schema document whose `title` names the entity kind.
    #[arg(long, env = "DYNAMORE_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Attribute that identifies an item of the entity kind.
    #[arg(long, default_value = DEFAULT_IDENTITY_ATTRIBUTE)]
    pub identity: String,

    /// Store backend.
    #[arg(long, value_enum, default_value_t = Backend::Memory, env = "DYNAMORE_BACKEND")]
    pub backend: Backend,

    /// Table name; overrides `DYNAMODB_TABLE_NAME`.
    #[arg(long)]
    pub table: Option<String>,

    /// Endpoint URL, for a local DynamoDB; overrides `AWS_ENDPOINT_URL`.
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// AWS region; overrides `AWS_REGION`.
    #[arg(long)]
    pub region: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new item; fails if it already exists.
    Create {
        /// Item attributes as a JSON object.
        #[arg(long)]
        data: String,
    },
    /// Replace an existing item as a whole.
    Replace {
        /// Item attributes as a JSON object.
        #[arg(long)]
        data: String,
    },
    /// Overwrite some attributes of an existing item.
    Update {
        /// Identity plus the attributes to change, as a JSON object.
        #[arg(long)]
        data: String,
    },
    /// Delete an existing item.
    Delete {
        /// JSON object carrying the identity attribute.
        #[arg(long)]
        data: String,
    },
    /// Fetch one item, or every item of the kind when no identity is given.
    Get {
        /// JSON object, optionally carrying the identity attribute.
        #[arg(long, default_value = "{}")]
        data: String,
    },
    /// Table management.
    Table(table::TableCommand),
}

impl Commands {
    /// The verb and raw `--data` of an entity command.
    pub fn verb(&self) -> Option<(Verb, &str)> {
        match self {
            Commands::Create { data } => Some((Verb::Create, data)),
            Commands::Replace { data } => Some((Verb::Replace, data)),
            Commands::Update { data } => Some((Verb::PartialUpdate, data)),
            Commands::Delete { data } => Some((Verb::Delete, data)),
            Commands::Get { data } => Some((Verb::Read, data)),
            Commands::Table(_) => None,
        }
    }
}

impl Cli {
    /// Environment configuration with the command-line overrides applied.
    pub fn config(&self) -> Config {
        self.apply_overrides(Config::from_env())
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(table) = &self.table {
            config.table_name = table.clone();
        }
        if let Some(endpoint) = &self.endpoint_url {
            config.endpoint_url = Some(endpoint.clone());
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        config
    }

    /// Loads the entity descriptor named by `--schema` and `--identity`.
    pub fn descriptor(&self) -> Result<EntityDescriptor> {
        let path = self
            .schema
            .as_ref()
            .ok_or_else(|| CliError::InvalidInput("--schema is required".to_string()))?;
        load_descriptor(path, &self.identity)
    }
}

/// Rejects verbs the backend can never satisfy.
///
/// Each run of the binary starts a fresh in-memory store, so a verb that
/// requires an existing item would always fail with `NotFound` there.
pub fn check_backend(backend: Backend, verb: Verb) -> Result<()> {
    if backend == Backend::Memory && verb.requires_existing_item() {
        return Err(CliError::EphemeralBackend(verb));
    }
    Ok(())
}

/// Reads a schema document from disk and builds the descriptor.
pub fn load_descriptor(path: &std::path::Path, identity: &str) -> Result<EntityDescriptor> {
    let document = std::fs::read_to_string(path).map_err(|source| CliError::SchemaFile {
        path: path.display().to_string(),
        source,
    })?;
    EntityDescriptor::from_json_schema(&document, identity).map_err(CliError::Schema)
}

/// Parses a `--data` argument into an attribute map.
pub fn parse_data(text: &str) -> Result<Attributes> {
    match serde_json::from_str(text)? {
        serde_json::Value::Object(attributes) => Ok(attributes),
        other => Err(CliError::InvalidInput(format!(
            "--data must be a JSON object, got {other}"
        ))),
    }
}
