//! Fixed read-only datasets
//!
//! The fixtures are compiled into the binary and parsed once at startup.
//! Nothing in this module hands out mutable access to the records.

use super::models::{ContentIdea, ContentItem, SavedItem, TrendingTopic};
use crate::error::Result;

const CONTENT_ITEMS_JSON: &str = include_str!("../../data/content_items.json");
const CONTENT_IDEAS_JSON: &str = include_str!("../../data/content_ideas.json");
const SAVED_ITEMS_JSON: &str = include_str!("../../data/saved_items.json");
const TRENDING_TOPICS_JSON: &str = include_str!("../../data/trending_topics.json");

/// All fixed collections backing the data access services
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub content: Vec<ContentItem>,
    pub ideas: Vec<ContentIdea>,
    /// Initial contents of the session saved-items store
    pub saved: Vec<SavedItem>,
    pub trending: Vec<TrendingTopic>,
}

impl Dataset {
    /// Parse the fixtures bundled with the crate
    pub fn embedded() -> Result<Self> {
        let dataset = Self {
            content: serde_json::from_str(CONTENT_ITEMS_JSON)?,
            ideas: serde_json::from_str(CONTENT_IDEAS_JSON)?,
            saved: serde_json::from_str(SAVED_ITEMS_JSON)?,
            trending: serde_json::from_str(TRENDING_TOPICS_JSON)?,
        };

        tracing::debug!(
            content = dataset.content.len(),
            ideas = dataset.ideas.len(),
            saved = dataset.saved.len(),
            trending = dataset.trending.len(),
            "Loaded embedded dataset"
        );

        Ok(dataset)
    }
}
