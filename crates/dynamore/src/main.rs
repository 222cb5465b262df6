//! dynamore CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use dynamore::cli::table::TableAction;
use dynamore::cli::{check_backend, parse_data, Cli, Commands};
use dynamore::output::format_output;
use dynamore::{Backend, CliError, Config, InMemoryStore};
use dynamore_core::{EntityDescriptor, ItemStore, StoreProxy, Verb};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config();
    tracing::debug!(backend = ?cli.backend, store = %config.target_display(), "Starting");

    match &cli.command {
        Commands::Table(table_cmd) => run_table(cli.backend, &config, &table_cmd.action).await,
        command => {
            let (verb, data) = command
                .verb()
                .context("entity command without a verb")?;
            check_backend(cli.backend, verb)?;
            tracing::debug!(%verb, method = verb.http_method(), "Running entity command");
            let descriptor = cli.descriptor()?;
            let data = parse_data(data)?;

            match cli.backend {
                Backend::Memory => {
                    tracing::info!("In-memory backend: items are discarded on exit");
                    let proxy = StoreProxy::new(InMemoryStore::new());
                    run_verb(&proxy, &cli, &descriptor, verb, data).await
                }
                Backend::Dynamodb => run_dynamodb_verb(&config, &cli, &descriptor, verb, data).await,
            }
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout carries only command output. `LOG_FORMAT=json`
/// switches to one JSON object per event.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dynamore=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_verb<S: ItemStore>(
    proxy: &StoreProxy<S>,
    cli: &Cli,
    descriptor: &EntityDescriptor,
    verb: Verb,
    data: dynamore_core::Attributes,
) -> Result<()> {
    let outcome = proxy
        .execute(verb, descriptor, data)
        .await
        .map_err(CliError::from)
        .with_context(|| format!("{verb} {} failed", descriptor.title()))?;

    println!("{}", format_output(verb, &outcome, cli.format));
    Ok(())
}

#[cfg(feature = "dynamodb")]
async fn run_dynamodb_verb(
    config: &Config,
    cli: &Cli,
    descriptor: &EntityDescriptor,
    verb: Verb,
    data: dynamore_core::Attributes,
) -> Result<()> {
    let store = dynamore::DynamoDbStore::from_config(config).await;
    let proxy = StoreProxy::new(store);
    run_verb(&proxy, cli, descriptor, verb, data).await
}

#[cfg(not(feature = "dynamodb"))]
async fn run_dynamodb_verb(
    _config: &Config,
    _cli: &Cli,
    _descriptor: &EntityDescriptor,
    _verb: Verb,
    _data: dynamore_core::Attributes,
) -> Result<()> {
    Err(CliError::BackendUnavailable("dynamodb".to_string()).into())
}

#[cfg(feature = "dynamodb")]
async fn run_table(backend: Backend, config: &Config, action: &TableAction) -> Result<()> {
    use dynamore::storage::dynamodb::{create_table, delete_table};
    use dynamore_core::KeyNames;

    if backend != Backend::Dynamodb {
        return Err(CliError::InvalidInput(
            "table commands need --backend dynamodb".to_string(),
        )
        .into());
    }

    let store = dynamore::DynamoDbStore::from_config(config).await;
    match action {
        TableAction::Create => {
            create_table(store.client(), store.table_name(), &KeyNames::default())
                .await
                .map_err(CliError::from)?;
            println!("Created table {}", store.table_name());
        }
        TableAction::Delete => {
            delete_table(store.client(), store.table_name())
                .await
                .map_err(CliError::from)?;
            println!("Deleted table {}", store.table_name());
        }
    }
    Ok(())
}

#[cfg(not(feature = "dynamodb"))]
async fn run_table(_backend: Backend, _config: &Config, _action: &TableAction) -> Result<()> {
    Err(CliError::BackendUnavailable("dynamodb".to_string()).into())
}
