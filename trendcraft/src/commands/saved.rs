//! Saved item commands

use super::IdArg;
use crate::app::AppState;
use crate::data::{NewSavedItem, SavedItem, SavedItemType, Selection};
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveItemArgs {
    pub item: NewSavedItem,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSavedItemsArgs {
    #[serde(default)]
    pub tab: Selection<SavedItemType>,
    #[serde(default)]
    pub query: Option<String>,
}

/// List saved items, newest first
pub async fn get_saved_items(state: &AppState) -> Result<Vec<SavedItem>> {
    state.saved_service.get_saved_items().await
}

/// Saved items for one tab of the saved view, optionally searched
pub async fn filter_saved_items(
    state: &AppState,
    tab: Selection<SavedItemType>,
    query: Option<String>,
) -> Result<Vec<SavedItem>> {
    state
        .saved_service
        .filter_saved_items(tab, query.as_deref().unwrap_or_default())
        .await
}

pub async fn save_item(state: &AppState, item: NewSavedItem) -> Result<SavedItem> {
    state.saved_service.save_item(item).await
}

pub async fn delete_item(state: &AppState, id: IdArg) -> Result<bool> {
    state.saved_service.delete_item(id.coerce()).await
}

pub async fn get_saved_item_by_id(state: &AppState, id: IdArg) -> Result<SavedItem> {
    state.saved_service.get_saved_item_by_id(id.coerce()).await
}
