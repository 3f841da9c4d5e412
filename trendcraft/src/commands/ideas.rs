//! Idea-related commands

use super::IdArg;
use crate::app::AppState;
use crate::data::{ContentIdea, IdeaParameters};
use crate::error::{AppError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasArgs {
    pub topic: String,
    #[serde(default)]
    pub parameters: Option<IdeaParameters>,
}

/// Generate ranked ideas for a topic
pub async fn generate_ideas(
    state: &AppState,
    topic: String,
    parameters: Option<IdeaParameters>,
) -> Result<Vec<ContentIdea>> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation(
            "Please enter a topic to generate ideas".to_string(),
        ));
    }

    state
        .idea_service
        .generate_ideas(topic, &parameters.unwrap_or_default())
        .await
}

/// Get a dataset idea by ID
pub async fn get_idea_by_id(state: &AppState, id: IdArg) -> Result<ContentIdea> {
    state.idea_service.get_idea_by_id(id.coerce()).await
}
