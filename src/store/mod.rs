//! Item storage
//!
//! Handlers only see the [`ItemStore`] trait. The concrete backend is picked
//! once at startup from [`Config::store_backend`] and shared for the lifetime
//! of the process.

mod dynamo;
mod error;
mod memory;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use aws_sdk_dynamodb::Client as DynamoDbClient;

use crate::config::{Config, StoreBackend};
use crate::models::Item;

pub use dynamo::DynamoItemStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryItemStore;

/// Single-item operations against the backing key-value store
///
/// Every write is unconditional: concurrent writers to the same id race and
/// the last one wins.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch an item by exact key match
    async fn get(&self, id: &str) -> StoreResult<Option<Item>>;

    /// Write the whole item, replacing any existing item with the same id
    async fn put(&self, item: &Item) -> StoreResult<()>;

    /// Overwrite `content` for the id, creating the item if it does not exist
    async fn update_content(&self, id: &str, content: &str) -> StoreResult<()>;

    /// Remove the item; succeeds when the id does not exist
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Verify the store is reachable
    async fn health_check(&self) -> StoreResult<()>;
}

/// Build the item store selected by the configuration
pub async fn from_config(config: &Config) -> Result<Arc<dyn ItemStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory item store, data will not survive a restart");
            Ok(Arc::new(MemoryItemStore::new()))
        }
        StoreBackend::DynamoDb => {
            let client = Arc::new(DynamoDbClient::new(&load_aws_config(config).await));
            tracing::info!("Using DynamoDB table: {}", config.table_name);
            Ok(Arc::new(DynamoItemStore::new(client, config.table_name.clone())))
        }
    }
}

/// AWS configuration with retry and timeout settings
async fn load_aws_config(config: &Config) -> aws_config::SdkConfig {
    let retry_config = RetryConfig::standard()
        .with_max_attempts(3)
        .with_initial_backoff(Duration::from_millis(50));

    let timeout_config = TimeoutConfig::builder()
        .operation_timeout(Duration::from_secs(10))
        .build();

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .retry_config(retry_config)
        .timeout_config(timeout_config);

    if let Some(endpoint_url) = &config.aws_endpoint_url {
        tracing::info!("Overriding AWS endpoint: {}", endpoint_url);
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}
