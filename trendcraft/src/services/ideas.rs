//! Idea service
//!
//! Generates ranked content ideas for a topic and looks up dataset ideas.

use crate::data::{ContentIdea, Dataset, IdeaParameters};
use crate::error::{AppError, Result};
use crate::services::scoring;
use crate::services::simulation::{OperationKind, Simulator};
use chrono::Utc;
use std::sync::Arc;

const GENERATE_FAILED: &str = "Idea generation failed. Please try again.";
const LOAD_FAILED: &str = "Failed to load idea. Please try again.";

/// Service for content idea generation
#[derive(Clone)]
pub struct IdeaService {
    dataset: Arc<Dataset>,
    simulator: Arc<Simulator>,
}

impl IdeaService {
    pub fn new(dataset: Arc<Dataset>, simulator: Arc<Simulator>) -> Self {
        Self { dataset, simulator }
    }

    /// Generate up to eight ideas for `topic`, best first.
    ///
    /// The topic is expected to be non-blank; the command layer rejects
    /// blank topics before calling in.
    pub async fn generate_ideas(
        &self,
        topic: &str,
        params: &IdeaParameters,
    ) -> Result<Vec<ContentIdea>> {
        self.simulator
            .gate(OperationKind::Generate, GENERATE_FAILED)
            .await?;

        let now_millis = Utc::now().timestamp_millis();
        let ideas = self.simulator.with_rng(|rng| {
            scoring::generate(&self.dataset.ideas, topic, params, now_millis, rng)
        });

        tracing::info!("Generated {} ideas for topic '{}'", ideas.len(), topic);

        Ok(ideas)
    }

    /// Get a dataset idea by ID
    pub async fn get_idea_by_id(&self, id: Option<i64>) -> Result<ContentIdea> {
        self.simulator.gate(OperationKind::Lookup, LOAD_FAILED).await?;

        self.dataset
            .ideas
            .iter()
            .find(|idea| Some(idea.id) == id)
            .cloned()
            .ok_or_else(|| AppError::not_found_id("Idea", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Audience, ContentType, Difficulty, Objective, Selection};
    use crate::services::simulation::SimulationSettings;

    fn create_test_service() -> IdeaService {
        let dataset = Arc::new(Dataset::embedded().unwrap());
        let simulator =
            Arc::new(Simulator::new(SimulationSettings::instant().with_seed(42)).unwrap());
        IdeaService::new(dataset, simulator)
    }

    fn ids(ideas: &[ContentIdea]) -> Vec<i64> {
        ideas.iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn test_dataset_matches_sorted_by_score() {
        let service = create_test_service();

        let ideas = service
            .generate_ideas("productivity", &IdeaParameters::default())
            .await
            .unwrap();

        assert_eq!(ids(&ideas), vec![2, 1, 3, 4]);
        assert_eq!(ideas[0].score, 92);
    }

    #[tokio::test]
    async fn test_type_filter_keeps_only_requested_type() {
        let service = create_test_service();
        let params = IdeaParameters {
            content_type: Selection::Only(ContentType::Video),
            ..IdeaParameters::default()
        };

        let ideas = service.generate_ideas("productivity", &params).await.unwrap();

        assert_eq!(ids(&ideas), vec![2]);
        assert!(ideas.iter().all(|i| i.content_type == ContentType::Video));
    }

    #[tokio::test]
    async fn test_type_that_matches_nothing_yields_empty_result() {
        let service = create_test_service();
        let params = IdeaParameters {
            content_type: Selection::Only(ContentType::Coaching),
            ..IdeaParameters::default()
        };

        let ideas = service.generate_ideas("productivity", &params).await.unwrap();
        assert!(ideas.is_empty());
    }

    #[tokio::test]
    async fn test_bonuses_reorder_and_cap() {
        let service = create_test_service();
        let params = IdeaParameters {
            difficulty: Difficulty::Advanced,
            objectives: Objective::Transformation,
            audience: Audience::Educators,
            ..IdeaParameters::default()
        };

        let ideas = service.generate_ideas("productivity", &params).await.unwrap();

        // course 88+16, video 92+11, blog 85+11, workshop 79+16
        assert_eq!(ids(&ideas), vec![1, 2, 3, 4]);
        assert_eq!(ideas[0].score, 100);
        assert_eq!(ideas[1].score, 100);
        assert_eq!(ideas[2].score, 96);
        assert_eq!(ideas[3].score, 95);
    }

    #[tokio::test]
    async fn test_unknown_topic_synthesizes_template_ideas() {
        let service = create_test_service();
        let params = IdeaParameters {
            difficulty: Difficulty::Advanced,
            objectives: Objective::Transformation,
            ..IdeaParameters::default()
        };

        let ideas = service.generate_ideas("photosynthesis", &params).await.unwrap();

        assert_eq!(ideas.len(), 5);
        assert!(ideas.iter().all(|i| i.topic == "photosynthesis"));
        // Lowest template base is 65
        assert!(ideas.iter().all(|i| (76..=100).contains(&i.score)));
        assert!(ideas.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn test_get_idea_by_id() {
        let service = create_test_service();

        assert_eq!(service.get_idea_by_id(Some(13)).await.unwrap().title, "Learn Python in 30 Days");

        let err = service.get_idea_by_id(Some(0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Idea not found");
    }

    #[tokio::test]
    async fn test_generated_ideas_do_not_touch_dataset() {
        let service = create_test_service();
        let params = IdeaParameters {
            difficulty: Difficulty::Advanced,
            ..IdeaParameters::default()
        };

        service.generate_ideas("productivity", &params).await.unwrap();

        assert_eq!(service.get_idea_by_id(Some(2)).await.unwrap().score, 92);
    }
}
