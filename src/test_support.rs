//! Shared fixtures for handler and router tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;

use crate::config::{Config, StoreBackend};
use crate::models::Item;
use crate::state::AppState;
use crate::store::{ItemStore, MemoryItemStore, StoreError, StoreResult};

pub fn test_config() -> Config {
    Config {
        table_name: "test-items".to_string(),
        store_backend: StoreBackend::Memory,
        aws_endpoint_url: None,
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
        lambda_runtime_api: None,
    }
}

fn state_with(store: Arc<dyn ItemStore>) -> AppState {
    AppState {
        store,
        config: Arc::new(test_config()),
    }
}

pub fn memory_state() -> AppState {
    state_with(Arc::new(MemoryItemStore::new()))
}

pub fn failing_state() -> AppState {
    state_with(Arc::new(FailingStore))
}

pub fn counting_state() -> (AppState, Arc<CountingStore>) {
    let store = Arc::new(CountingStore::default());
    (state_with(store.clone()), store)
}

/// Store whose every call fails as if DynamoDB were unreachable
pub struct FailingStore;

const UNREACHABLE: &str = "connection refused";

#[async_trait]
impl ItemStore for FailingStore {
    async fn get(&self, _id: &str) -> StoreResult<Option<Item>> {
        Err(StoreError::DynamoDbGetError(SdkError::construction_failure(UNREACHABLE)))
    }

    async fn put(&self, _item: &Item) -> StoreResult<()> {
        Err(StoreError::DynamoDbPutError(SdkError::construction_failure(UNREACHABLE)))
    }

    async fn update_content(&self, _id: &str, _content: &str) -> StoreResult<()> {
        Err(StoreError::DynamoDbUpdateError(SdkError::construction_failure(UNREACHABLE)))
    }

    async fn delete(&self, _id: &str) -> StoreResult<()> {
        Err(StoreError::DynamoDbDeleteError(SdkError::construction_failure(UNREACHABLE)))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(StoreError::DynamoDbDescribeTableError(SdkError::construction_failure(UNREACHABLE)))
    }
}

/// In-memory store that counts how many calls reached it
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryItemStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemStore for CountingStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Item>> {
        self.record();
        self.inner.get(id).await
    }

    async fn put(&self, item: &Item) -> StoreResult<()> {
        self.record();
        self.inner.put(item).await
    }

    async fn update_content(&self, id: &str, content: &str) -> StoreResult<()> {
        self.record();
        self.inner.update_content(id, content).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.record();
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.inner.health_check().await
    }
}
