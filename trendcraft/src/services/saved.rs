//! Saved items service
//!
//! Session-scoped bookmarks of content, ideas, drafts and searches.

use crate::data::{NewSavedItem, SavedItem, SavedItemType, SavedStore, Selection};
use crate::error::{AppError, Result};
use crate::services::simulation::{OperationKind, Simulator};
use chrono::Utc;
use std::sync::Arc;

const LOAD_FAILED: &str = "Failed to load saved items. Please try again.";
const SAVE_FAILED: &str = "Failed to save item. Please try again.";
const DELETE_FAILED: &str = "Failed to delete item. Please try again.";

/// Newest first; items with equal timestamps keep insertion order
fn newest_first(mut items: Vec<SavedItem>) -> Vec<SavedItem> {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

/// Service for managing saved items
#[derive(Clone)]
pub struct SavedService {
    store: Arc<SavedStore>,
    simulator: Arc<Simulator>,
}

impl SavedService {
    pub fn new(store: Arc<SavedStore>, simulator: Arc<Simulator>) -> Self {
        Self { store, simulator }
    }

    /// List all saved items, newest first
    pub async fn get_saved_items(&self) -> Result<Vec<SavedItem>> {
        self.simulator.gate(OperationKind::Feed, LOAD_FAILED).await?;
        Ok(newest_first(self.store.snapshot().await))
    }

    /// Saved items narrowed to a tab and a free-text query on title or
    /// description; a blank query matches everything
    pub async fn filter_saved_items(
        &self,
        tab: Selection<SavedItemType>,
        query: &str,
    ) -> Result<Vec<SavedItem>> {
        let items = self.get_saved_items().await?;
        let needle = query.trim().to_lowercase();

        Ok(items
            .into_iter()
            .filter(|item| tab.matches(&item.item_type))
            .filter(|item| {
                needle.is_empty()
                    || item.title.to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Save a new item, assigning its identifier and creation time
    pub async fn save_item(&self, item: NewSavedItem) -> Result<SavedItem> {
        self.simulator.gate(OperationKind::Write, SAVE_FAILED).await?;

        let saved = self.store.insert(item, Utc::now()).await;
        tracing::info!("Saved item created: {} ({})", saved.id, saved.item_type);
        tracing::debug!("{} saved items in session", self.store.len().await);

        Ok(saved)
    }

    pub async fn delete_item(&self, id: Option<i64>) -> Result<bool> {
        self.simulator.gate(OperationKind::Write, DELETE_FAILED).await?;

        let removed = match id {
            Some(id) => self.store.remove(id).await,
            None => None,
        };
        let removed = removed.ok_or_else(|| AppError::not_found_id("Saved item", id))?;

        tracing::info!("Saved item deleted: {}", removed.id);
        Ok(true)
    }

    pub async fn get_saved_item_by_id(&self, id: Option<i64>) -> Result<SavedItem> {
        self.simulator.gate(OperationKind::Lookup, LOAD_FAILED).await?;

        let item = match id {
            Some(id) => self.store.get(id).await,
            None => None,
        };
        item.ok_or_else(|| AppError::not_found_id("Saved item", id))
    }
}
