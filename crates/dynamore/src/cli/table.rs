//! Table CLI commands.

use clap::{Parser, Subcommand};

/// Table management commands (DynamoDB backend).
#[derive(Debug, Parser)]
pub struct TableCommand {
    #[command(subcommand)]
    pub action: TableAction,
}

/// Available table actions.
#[derive(Debug, Subcommand)]
pub enum TableAction {
    /// Create the table with string `PK`/`SK` keys, billed per request.
    Create,
    /// Delete the table and every item in it.
    Delete,
}
