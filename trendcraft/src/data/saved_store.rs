//! Session store for saved items
//!
//! Owned by `AppState` and shared between clones of `SavedService`.
//! Identifiers come from an atomic sequence that starts one past the
//! largest seeded identifier and never goes backwards, so a deleted
//! identifier is not handed out again.

use super::models::{NewSavedItem, SavedItem};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

pub struct SavedStore {
    items: RwLock<Vec<SavedItem>>,
    next_id: AtomicI64,
}

impl SavedStore {
    pub fn new(seed: Vec<SavedItem>) -> Self {
        let next_id = seed.iter().map(|item| item.id).max().unwrap_or(0) + 1;

        Self {
            items: RwLock::new(seed),
            next_id: AtomicI64::new(next_id),
        }
    }

    /// Snapshot of every item in insertion order
    pub async fn snapshot(&self) -> Vec<SavedItem> {
        self.items.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Option<SavedItem> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Append a new item stamped with `created_at`
    pub async fn insert(&self, item: NewSavedItem, created_at: DateTime<Utc>) -> SavedItem {
        let saved = SavedItem {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            item_type: item.item_type,
            title: item.title,
            description: item.description,
            created_at,
        };

        self.items.write().await.push(saved.clone());
        saved
    }

    /// Remove an item, returning it when it existed
    pub async fn remove(&self, id: i64) -> Option<SavedItem> {
        let mut items = self.items.write().await;
        let index = items.iter().position(|item| item.id == id)?;
        Some(items.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::SavedItemType;

    fn seed_item(id: i64) -> SavedItem {
        SavedItem {
            id,
            item_type: SavedItemType::Content,
            title: format!("Item {}", id),
            description: None,
            created_at: Utc::now(),
        }
    }

    fn new_item(title: &str) -> NewSavedItem {
        NewSavedItem {
            item_type: SavedItemType::Ideas,
            title: title.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_ids_continue_after_seed_max() {
        let store = SavedStore::new(vec![seed_item(3), seed_item(9), seed_item(4)]);

        let saved = store.insert(new_item("New"), Utc::now()).await;
        assert_eq!(saved.id, 10);
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn test_empty_seed_starts_at_one() {
        let store = SavedStore::new(Vec::new());
        let saved = store.insert(new_item("First"), Utc::now()).await;
        assert_eq!(saved.id, 1);
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let store = SavedStore::new(vec![seed_item(1)]);

        let first = store.insert(new_item("A"), Utc::now()).await;
        assert!(store.remove(first.id).await.is_some());

        let second = store.insert(new_item("B"), Utc::now()).await;
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let store = std::sync::Arc::new(SavedStore::new(vec![seed_item(1)]));

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(new_item(&format!("N{}", i)), Utc::now()).await.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 20);
        assert_eq!(store.len().await, 21);
    }

    #[tokio::test]
    async fn test_remove_missing_returns_none() {
        let store = SavedStore::new(vec![seed_item(1)]);
        assert!(store.remove(42).await.is_none());
        assert_eq!(store.len().await, 1);
    }
}
