//! Content-related commands
//!
//! Search, lookup and drafting over the content catalog.

use super::IdArg;
use crate::app::AppState;
use crate::data::{ContentItem, DeleteDraftResponse, Draft, DraftRequest, DraftUpdate, SearchFilters};
use crate::error::{AppError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContentArgs {
    pub query: String,
    #[serde(default)]
    pub filters: Option<SearchFilters>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftContentArgs {
    pub idea_id: IdArg,
    #[serde(default)]
    pub draft: DraftRequest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDraftArgs {
    pub draft_id: IdArg,
    #[serde(default)]
    pub updates: DraftUpdate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftIdArgs {
    pub draft_id: IdArg,
}

/// Search content by title or author
pub async fn search_content(
    state: &AppState,
    query: String,
    filters: Option<SearchFilters>,
) -> Result<Vec<ContentItem>> {
    state
        .content_service
        .search_content(&query, &filters.unwrap_or_default())
        .await
}

/// Get a content item by ID
pub async fn get_content_by_id(state: &AppState, id: IdArg) -> Result<ContentItem> {
    state.content_service.get_content_by_id(id.coerce()).await
}

/// List the whole catalog
pub async fn get_all_content(state: &AppState) -> Result<Vec<ContentItem>> {
    state.content_service.get_all_content().await
}

/// Create a draft for an idea
pub async fn draft_content(state: &AppState, idea_id: IdArg, draft: DraftRequest) -> Result<Draft> {
    let idea_id = idea_id
        .coerce()
        .ok_or_else(|| AppError::InvalidInput(format!("Idea id must be numeric, got {}", idea_id)))?;

    state.content_service.draft_content(idea_id, draft).await
}

pub async fn update_draft(state: &AppState, draft_id: IdArg, updates: DraftUpdate) -> Result<Draft> {
    state
        .content_service
        .update_draft(draft_id.coerce(), updates)
        .await
}

pub async fn delete_draft(state: &AppState, draft_id: IdArg) -> Result<DeleteDraftResponse> {
    state.content_service.delete_draft(draft_id.coerce()).await
}
