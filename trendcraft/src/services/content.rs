//! Content service
//!
//! Search and lookup over the researched content dataset, plus the draft
//! lifecycle that turns a content idea into structured writing.

use crate::data::{
    ContentItem, Dataset, DeleteDraftResponse, Draft, DraftRequest, DraftStatus, DraftStore,
    DraftUpdate, SearchFilters,
};
use crate::error::{AppError, Result};
use crate::services::simulation::{OperationKind, Simulator};
use chrono::Utc;
use std::sync::Arc;

const SEARCH_FAILED: &str = "Search failed. Please check your connection and try again.";
const LOAD_FAILED: &str = "Failed to load content. Please try again.";
const DRAFT_FAILED: &str = "Drafting failed. Please try again.";
const UPDATE_DRAFT_FAILED: &str = "Failed to update draft. Please try again.";
const DELETE_DRAFT_FAILED: &str = "Failed to delete draft. Please try again.";
const UNTITLED_DRAFT: &str = "Untitled draft";

/// Items whose title or author contains `query` ignoring case, narrowed by
/// `filters` and ordered by engagement, highest first
pub fn search_items(
    items: &[ContentItem],
    query: &str,
    filters: &SearchFilters,
) -> Vec<ContentItem> {
    let needle = query.to_lowercase();

    let mut results: Vec<ContentItem> = items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.author.to_lowercase().contains(&needle)
        })
        .filter(|item| filters.accepts(item))
        .cloned()
        .collect();

    results.sort_by(|a, b| b.engagement.cmp(&a.engagement));
    results
}

/// Service for content research and drafting
#[derive(Clone)]
pub struct ContentService {
    dataset: Arc<Dataset>,
    drafts: Arc<DraftStore>,
    simulator: Arc<Simulator>,
}

impl ContentService {
    pub fn new(dataset: Arc<Dataset>, drafts: Arc<DraftStore>, simulator: Arc<Simulator>) -> Self {
        Self {
            dataset,
            drafts,
            simulator,
        }
    }

    /// Search content by title or author
    pub async fn search_content(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<ContentItem>> {
        self.simulator.gate(OperationKind::Search, SEARCH_FAILED).await?;

        let results = search_items(&self.dataset.content, query, filters);
        tracing::debug!("Search '{}' matched {} items", query, results.len());

        Ok(results)
    }

    /// Get a content item by ID; `None` never matches
    pub async fn get_content_by_id(&self, id: Option<i64>) -> Result<ContentItem> {
        self.simulator.gate(OperationKind::Lookup, LOAD_FAILED).await?;

        self.dataset
            .content
            .iter()
            .find(|item| Some(item.id) == id)
            .cloned()
            .ok_or_else(|| AppError::not_found_id("Content", id))
    }

    /// List the whole content catalog
    pub async fn get_all_content(&self) -> Result<Vec<ContentItem>> {
        self.simulator.gate(OperationKind::Catalog, LOAD_FAILED).await?;
        Ok(self.dataset.content.clone())
    }

    /// Create a draft from an idea.
    ///
    /// `idea_id` is recorded as given; an unknown idea only means there is
    /// no title or description to fall back on.
    pub async fn draft_content(&self, idea_id: i64, req: DraftRequest) -> Result<Draft> {
        self.simulator.gate(OperationKind::Draft, DRAFT_FAILED).await?;

        let idea = self.dataset.ideas.iter().find(|idea| idea.id == idea_id);

        let title = match req.title.trim() {
            "" => idea
                .map(|idea| idea.title.clone())
                .unwrap_or_else(|| UNTITLED_DRAFT.to_string()),
            title => title.to_string(),
        };
        let description = idea.map(|idea| idea.reasoning.clone()).unwrap_or_default();

        let now = Utc::now();
        let draft = Draft {
            id: self.drafts.next_id(now),
            title,
            description,
            word_count: req.content.word_count(),
            content: req.content,
            status: DraftStatus::Draft,
            created_at: now,
            updated_at: now,
            original_idea_id: idea_id,
        };

        self.drafts.insert(draft.clone()).await;
        tracing::info!("Draft created: {} from idea {}", draft.id, idea_id);

        Ok(draft)
    }

    /// Merge a partial update into a draft
    pub async fn update_draft(&self, draft_id: Option<i64>, update: DraftUpdate) -> Result<Draft> {
        self.simulator
            .gate(OperationKind::Write, UPDATE_DRAFT_FAILED)
            .await?;

        let modified = match draft_id {
            Some(id) => {
                self.drafts
                    .modify(id, |draft| {
                        update.apply(draft);
                        draft.updated_at = Utc::now();
                    })
                    .await
            }
            None => None,
        };
        let draft = modified.ok_or_else(|| AppError::not_found_id("Draft", draft_id))?;

        tracing::debug!("Draft updated: {} ({} words)", draft.id, draft.word_count);
        Ok(draft)
    }

    pub async fn delete_draft(&self, draft_id: Option<i64>) -> Result<DeleteDraftResponse> {
        self.simulator
            .gate(OperationKind::Write, DELETE_DRAFT_FAILED)
            .await?;

        let removed = match draft_id {
            Some(id) => self.drafts.remove(id).await,
            None => None,
        };
        let draft_id = removed
            .map(|draft| draft.id)
            .ok_or_else(|| AppError::not_found_id("Draft", draft_id))?;

        tracing::info!("Draft deleted: {}", draft_id);

        Ok(DeleteDraftResponse {
            success: true,
            deleted_id: draft_id,
        })
    }
}
