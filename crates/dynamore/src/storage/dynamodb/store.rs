//! DynamoDB item store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use dynamore_core::storage::Result;
use dynamore_core::{Item, ItemStore, PrimaryKey};

use super::conversions::{attributes_to_item, item_to_attributes, key_attributes};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error};
use crate::config::Config;

/// DynamoDB-based item store.
///
/// Point reads and partition queries are strongly consistent, so a write is
/// visible to the lookup of the next verb.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config).await;
        Self::new(client, &config.table_name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn get_item(&self, key: &PrimaryKey) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_attributes(key)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        result.item.as_ref().map(attributes_to_item).transpose()
    }

    async fn put_item(&self, key: &PrimaryKey, item: Item) -> Result<()> {
        tracing::debug!(table = %self.table_name, key = %key, "PutItem");
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(&item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_item(&self, key: &PrimaryKey) -> Result<()> {
        tracing::debug!(table = %self.table_name, key = %key, "DeleteItem");
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_attributes(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn query_partition(
        &self,
        partition_name: &str,
        partition_value: &str,
    ) -> Result<Vec<Item>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", partition_name)
            .expression_attribute_values(":pk", AttributeValue::S(partition_value.to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_query_error)?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = %self.table_name,
                partition = %partition_value,
                "Query result truncated to the first page"
            );
        }

        let items = result.items.unwrap_or_default();
        items.iter().map(attributes_to_item).collect()
    }
}
