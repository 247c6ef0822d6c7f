//! DynamoDB-backed item store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoDbClient};
use strum::Display;

use super::{ItemStore, StoreError, StoreResult};
use crate::models::Item;

/// Attribute names in the items table
#[derive(Debug, Clone, Copy, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ItemAttribute {
    /// Item id (Partition Key)
    Id,
    /// Opaque item payload
    Content,
}

/// Item store client for DynamoDB operations
pub struct DynamoItemStore {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl DynamoItemStore {
    /// Creates a new item store client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured DynamoDB client
    /// * `table_name` - DynamoDB table name for items
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    fn key(id: &str) -> (String, AttributeValue) {
        (
            ItemAttribute::Id.to_string(),
            AttributeValue::S(id.to_string()),
        )
    }
}

#[async_trait]
impl ItemStore for DynamoItemStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Item>> {
        let (key_name, key_value) = Self::key(id);
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await?;

        let item = response
            .item()
            .map(|item| {
                serde_dynamo::from_item(item.clone())
                    .map_err(|e| StoreError::SerializationError(e.to_string()))
            })
            .transpose()?;

        tracing::debug!("Read item with id: {} (found: {})", id, item.is_some());
        Ok(item)
    }

    async fn put(&self, item: &Item) -> StoreResult<()> {
        let attributes: HashMap<String, AttributeValue> = serde_dynamo::to_item(item)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await?;

        tracing::debug!("Put item with id: {}", item.id);
        Ok(())
    }

    async fn update_content(&self, id: &str, content: &str) -> StoreResult<()> {
        let (key_name, key_value) = Self::key(id);
        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .update_expression("SET #content = :content")
            .expression_attribute_names("#content", ItemAttribute::Content.to_string())
            .expression_attribute_values(":content", AttributeValue::S(content.to_string()))
            .send()
            .await?;

        tracing::debug!("Updated content for item with id: {}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let (key_name, key_value) = Self::key(id);
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await?;

        tracing::debug!("Deleted item with id: {}", id);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.dynamodb_client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await?;

        Ok(())
    }
}
