//! Trending topics service

use crate::data::{Category, Dataset, Selection, TrendingTopic};
use crate::error::{AppError, Result};
use crate::services::simulation::{OperationKind, Simulator};
use std::sync::Arc;

const LOAD_FAILED: &str = "Failed to load trending topics. Please try again.";

#[derive(Clone)]
pub struct TrendingService {
    dataset: Arc<Dataset>,
    simulator: Arc<Simulator>,
}

impl TrendingService {
    pub fn new(dataset: Arc<Dataset>, simulator: Arc<Simulator>) -> Self {
        Self { dataset, simulator }
    }

    pub async fn get_trending_topics(&self) -> Result<Vec<TrendingTopic>> {
        self.simulator.gate(OperationKind::Feed, LOAD_FAILED).await?;
        Ok(self.dataset.trending.clone())
    }

    pub async fn get_trending_topic_by_id(&self, id: Option<i64>) -> Result<TrendingTopic> {
        self.simulator.gate(OperationKind::Lookup, LOAD_FAILED).await?;

        self.dataset
            .trending
            .iter()
            .find(|topic| Some(topic.id) == id)
            .cloned()
            .ok_or_else(|| AppError::not_found_id("Trending topic", id))
    }

    pub async fn get_trending_topics_by_category(
        &self,
        category: Selection<Category>,
    ) -> Result<Vec<TrendingTopic>> {
        self.simulator.gate(OperationKind::Filter, LOAD_FAILED).await?;

        let topics: Vec<TrendingTopic> = self
            .dataset
            .trending
            .iter()
            .filter(|topic| category.matches(&topic.category))
            .cloned()
            .collect();

        tracing::debug!("{} trending topics in category {:?}", topics.len(), category);

        Ok(topics)
    }
}
