//! Trending topic commands

use super::IdArg;
use crate::app::AppState;
use crate::data::{Category, Selection, TrendingTopic};
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryArgs {
    #[serde(default)]
    pub category: Selection<Category>,
}

pub async fn get_trending_topics(state: &AppState) -> Result<Vec<TrendingTopic>> {
    state.trending_service.get_trending_topics().await
}

pub async fn get_trending_topic_by_id(state: &AppState, id: IdArg) -> Result<TrendingTopic> {
    state
        .trending_service
        .get_trending_topic_by_id(id.coerce())
        .await
}

/// Topics in one category, or every topic for `all`
pub async fn get_trending_topics_by_category(
    state: &AppState,
    category: Selection<Category>,
) -> Result<Vec<TrendingTopic>> {
    state
        .trending_service
        .get_trending_topics_by_category(category)
        .await
}
