//! Table provisioning for the single-table layout.

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use dynamore_core::storage::Result;
use dynamore_core::{KeyNames, StoreError};

use super::error::map_build_error;

const MAX_WAIT_ATTEMPTS: usize = 60;
const WAIT_DELAY: Duration = Duration::from_secs(2);

/// Creates a pay-per-request table keyed on two string attributes and waits
/// until it is active.
pub async fn create_table(client: &Client, table_name: &str, key_names: &KeyNames) -> Result<()> {
    let key_schema = vec![
        KeySchemaElement::builder()
            .attribute_name(&key_names.partition)
            .key_type(KeyType::Hash)
            .build()
            .map_err(map_build_error)?,
        KeySchemaElement::builder()
            .attribute_name(&key_names.sort)
            .key_type(KeyType::Range)
            .build()
            .map_err(map_build_error)?,
    ];

    let attribute_definitions = vec![
        AttributeDefinition::builder()
            .attribute_name(&key_names.partition)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(map_build_error)?,
        AttributeDefinition::builder()
            .attribute_name(&key_names.sort)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(map_build_error)?,
    ];

    tracing::info!(table = %table_name, "Creating table");
    client
        .create_table()
        .table_name(table_name)
        .set_key_schema(Some(key_schema))
        .set_attribute_definitions(Some(attribute_definitions))
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(|e| StoreError::QueryFailed(format!("CreateTable failed: {:?}", e)))?;

    wait_for_table_active(client, table_name).await
}

/// Deletes the table and everything in it.
pub async fn delete_table(client: &Client, table_name: &str) -> Result<()> {
    tracing::info!(table = %table_name, "Deleting table");
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(|e| StoreError::QueryFailed(format!("DeleteTable failed: {:?}", e)))?;
    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..MAX_WAIT_ATTEMPTS {
        let response = client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| StoreError::QueryFailed(format!("DescribeTable failed: {:?}", e)))?;

        let status = response.table().and_then(|table| table.table_status());
        if status == Some(&TableStatus::Active) {
            tracing::info!(table = %table_name, "Table is active");
            return Ok(());
        }

        tracing::debug!(table = %table_name, ?status, "Waiting for table");
        tokio::time::sleep(WAIT_DELAY).await;
    }

    Err(StoreError::QueryFailed(format!(
        "Timeout waiting for table {table_name} to become active"
    )))
}
