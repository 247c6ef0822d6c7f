//! In-process item store for local development and tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ItemStore, StoreResult};
use crate::models::Item;

/// Item store held in a `HashMap`, with the same overwrite semantics as DynamoDB
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<String, Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Item>> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn put(&self, item: &Item) -> StoreResult<()> {
        self.items.write().await.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn update_content(&self, id: &str, content: &str) -> StoreResult<()> {
        let mut items = self.items.write().await;
        let item = items.entry(id.to_string()).or_insert_with(|| Item {
            id: id.to_string(),
            content: String::new(),
        });
        item.content = content.to_string();
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.items.write().await.remove(id);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
