//! Idea scoring engine
//!
//! Pure functions that turn a topic and generation parameters into a ranked
//! list of content ideas. No I/O happens here; the caller supplies the idea
//! dataset, the clock reading and the random source.

use crate::config;
use crate::data::{
    Audience, ContentIdea, ContentType, Difficulty, IdeaParameters, Objective, Selection,
    Structure,
};
use rand::Rng;
use std::ops::RangeInclusive;

/// Canned idea used when the dataset has nothing for a topic
struct IdeaTemplate {
    title: &'static str,
    reasoning: &'static str,
    default_type: ContentType,
    base_score: RangeInclusive<i32>,
}

const TOPIC_PLACEHOLDER: &str = "{topic}";

const TEMPLATES: [IdeaTemplate; 5] = [
    IdeaTemplate {
        title: "Ultimate Guide to {topic}: Everything You Need to Know",
        reasoning: "Comprehensive guides on {topic} perform well and establish authority in the niche.",
        default_type: ContentType::Blog,
        base_score: 70..=99,
    },
    IdeaTemplate {
        title: "{topic} Mistakes That Are Costing You (And How to Fix Them)",
        reasoning: "Problem-solving content around {topic} attracts engaged audiences looking for solutions.",
        default_type: ContentType::Video,
        base_score: 75..=99,
    },
    IdeaTemplate {
        title: "I Tried {topic} for 30 Days - Here's What Happened",
        reasoning: "Personal experiment content creates authentic connection and drives high engagement.",
        default_type: ContentType::Video,
        base_score: 80..=99,
    },
    IdeaTemplate {
        title: "{topic} for Beginners: Simple Steps to Get Started",
        reasoning: "Beginner-friendly content has consistent search demand and helps build audience.",
        default_type: ContentType::Blog,
        base_score: 65..=89,
    },
    IdeaTemplate {
        title: "The Science Behind {topic}: What Research Shows",
        reasoning: "Research-backed content builds credibility and gets shared by authoritative sources.",
        default_type: ContentType::Infographic,
        base_score: 70..=99,
    },
];

/// Ideas whose topic or title contains `topic`, ignoring case
pub fn matching_ideas(ideas: &[ContentIdea], topic: &str) -> Vec<ContentIdea> {
    let needle = topic.to_lowercase();

    ideas
        .iter()
        .filter(|idea| {
            idea.topic.to_lowercase().contains(&needle)
                || idea.title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Fill every template with `topic`.
///
/// Identifiers are `now_millis + position + 1`, so two calls within the
/// same millisecond produce colliding identifiers.
pub fn synthesize_ideas<R: Rng>(
    topic: &str,
    requested: Selection<ContentType>,
    now_millis: i64,
    rng: &mut R,
) -> Vec<ContentIdea> {
    TEMPLATES
        .iter()
        .enumerate()
        .map(|(position, template)| ContentIdea {
            id: now_millis + position as i64 + 1,
            title: template.title.replace(TOPIC_PLACEHOLDER, topic),
            topic: topic.to_string(),
            content_type: requested.selected().unwrap_or(template.default_type),
            score: rng.gen_range(template.base_score.clone()),
            reasoning: template.reasoning.replace(TOPIC_PLACEHOLDER, topic),
        })
        .collect()
}

/// Sum of every bonus the parameters grant an idea of `content_type`
pub fn score_adjustment(params: &IdeaParameters, content_type: ContentType) -> i32 {
    let mut bonus = 0;

    bonus += match params.difficulty {
        Difficulty::Advanced => config::ADVANCED_DIFFICULTY_BONUS,
        Difficulty::Beginner => config::BEGINNER_DIFFICULTY_BONUS,
        Difficulty::Medium => 0,
    };

    bonus += match params.structure {
        Structure::Project => config::PROJECT_STRUCTURE_BONUS,
        Structure::CaseStudy => config::CASE_STUDY_STRUCTURE_BONUS,
        _ => 0,
    };

    bonus += match params.objectives {
        Objective::Transformation => config::TRANSFORMATION_OBJECTIVE_BONUS,
        Objective::Practical => config::PRACTICAL_OBJECTIVE_BONUS,
        _ => 0,
    };

    let audience_fit = match params.audience {
        Audience::Educators => matches!(content_type, ContentType::Course | ContentType::Workshop),
        Audience::Coaches => matches!(content_type, ContentType::Coaching | ContentType::Webinar),
        _ => false,
    };
    if audience_fit {
        bonus += config::AUDIENCE_FIT_BONUS;
    }

    bonus
}

/// Filter by requested type, adjust and clamp scores, then keep the best.
///
/// Sorting is stable, so ideas with equal scores keep their input order.
pub fn rank_ideas(candidates: Vec<ContentIdea>, params: &IdeaParameters) -> Vec<ContentIdea> {
    let mut ranked: Vec<ContentIdea> = candidates
        .into_iter()
        .filter(|idea| params.content_type.matches(&idea.content_type))
        .map(|mut idea| {
            idea.score = (idea.score + score_adjustment(params, idea.content_type))
                .clamp(config::MIN_IDEA_SCORE, config::MAX_IDEA_SCORE);
            idea
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(config::MAX_GENERATED_IDEAS);
    ranked
}

/// Full generation pipeline for one request
pub fn generate<R: Rng>(
    ideas: &[ContentIdea],
    topic: &str,
    params: &IdeaParameters,
    now_millis: i64,
    rng: &mut R,
) -> Vec<ContentIdea> {
    let mut candidates = matching_ideas(ideas, topic);

    if candidates.is_empty() {
        tracing::debug!("No dataset ideas for '{}', synthesizing from templates", topic);
        candidates = synthesize_ideas(topic, params.content_type, now_millis, rng);
    }

    rank_ideas(candidates, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn idea(id: i64, topic: &str, content_type: ContentType, score: i32) -> ContentIdea {
        ContentIdea {
            id,
            title: format!("Idea {}", id),
            topic: topic.to_string(),
            content_type,
            score,
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_matching_is_case_insensitive_on_topic_and_title() {
        let mut by_title = idea(2, "other", ContentType::Blog, 50);
        by_title.title = "Why COFFEE matters".to_string();

        let ideas = vec![
            idea(1, "Coffee brewing", ContentType::Video, 50),
            by_title,
            idea(3, "tea", ContentType::Blog, 50),
        ];

        let found: Vec<i64> = matching_ideas(&ideas, "coffee").iter().map(|i| i.id).collect();
        assert_eq!(found, vec![1, 2]);
    }

    #[test]
    fn test_synthesized_ideas_fill_templates() {
        let mut rng = StdRng::seed_from_u64(1);
        let ideas = synthesize_ideas("Photosynthesis", Selection::All, 1_000, &mut rng);

        assert_eq!(ideas.len(), TEMPLATES.len());
        assert_eq!(
            ideas[0].title,
            "Ultimate Guide to Photosynthesis: Everything You Need to Know"
        );
        assert!(ideas[1].reasoning.contains("Photosynthesis"));
        assert_eq!(
            ideas.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1_001, 1_002, 1_003, 1_004, 1_005]
        );

        let types: Vec<ContentType> = ideas.iter().map(|i| i.content_type).collect();
        assert_eq!(
            types,
            vec![
                ContentType::Blog,
                ContentType::Video,
                ContentType::Video,
                ContentType::Blog,
                ContentType::Infographic
            ]
        );

        for (idea, template) in ideas.iter().zip(TEMPLATES.iter()) {
            assert!(template.base_score.contains(&idea.score));
        }
    }

    #[test]
    fn test_synthesized_ideas_take_requested_type() {
        let mut rng = StdRng::seed_from_u64(1);
        let ideas = synthesize_ideas("x", Selection::Only(ContentType::Webinar), 0, &mut rng);
        assert!(ideas.iter().all(|i| i.content_type == ContentType::Webinar));
    }

    #[test]
    fn test_score_adjustment_bonuses() {
        let base = IdeaParameters::default();
        assert_eq!(score_adjustment(&base, ContentType::Blog), 0);

        let params = IdeaParameters {
            difficulty: Difficulty::Advanced,
            structure: Structure::Project,
            objectives: Objective::Transformation,
            ..base
        };
        assert_eq!(score_adjustment(&params, ContentType::Blog), 15);

        let params = IdeaParameters {
            difficulty: Difficulty::Beginner,
            structure: Structure::CaseStudy,
            objectives: Objective::Practical,
            ..base
        };
        assert_eq!(score_adjustment(&params, ContentType::Blog), 10);
    }

    #[test]
    fn test_audience_fit_bonus_depends_on_type() {
        let educators = IdeaParameters {
            audience: Audience::Educators,
            ..IdeaParameters::default()
        };
        assert_eq!(score_adjustment(&educators, ContentType::Course), 5);
        assert_eq!(score_adjustment(&educators, ContentType::Workshop), 5);
        assert_eq!(score_adjustment(&educators, ContentType::Coaching), 0);

        let coaches = IdeaParameters {
            audience: Audience::Coaches,
            ..IdeaParameters::default()
        };
        assert_eq!(score_adjustment(&coaches, ContentType::Coaching), 5);
        assert_eq!(score_adjustment(&coaches, ContentType::Webinar), 5);
        assert_eq!(score_adjustment(&coaches, ContentType::Course), 0);
    }

    #[test]
    fn test_rank_clamps_sorts_and_truncates() {
        let candidates: Vec<ContentIdea> = (1..=10)
            .map(|i| idea(i, "t", ContentType::Blog, 90 + i as i32))
            .collect();
        let params = IdeaParameters {
            difficulty: Difficulty::Advanced,
            ..IdeaParameters::default()
        };

        let ranked = rank_ideas(candidates, &params);

        assert_eq!(ranked.len(), config::MAX_GENERATED_IDEAS);
        assert!(ranked.iter().all(|i| i.score <= 100));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        // Ideas 5..=10 all clamp to 100 and keep their input order
        assert_eq!(
            ranked.iter().take(6).map(|i| i.id).collect::<Vec<_>>(),
            vec![5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn test_rank_clamps_negative_scores_to_zero() {
        let ranked = rank_ideas(
            vec![idea(1, "t", ContentType::Blog, -20)],
            &IdeaParameters::default(),
        );
        assert_eq!(ranked[0].score, 0);
    }

    #[test]
    fn test_requested_type_can_empty_the_result() {
        let ideas = vec![idea(1, "garden", ContentType::Blog, 80)];
        let params = IdeaParameters {
            content_type: Selection::Only(ContentType::Book),
            ..IdeaParameters::default()
        };

        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&ideas, "garden", &params, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_generate_synthesized_scores_include_bonuses() {
        let plain = IdeaParameters::default();
        let boosted = IdeaParameters {
            difficulty: Difficulty::Advanced,
            objectives: Objective::Transformation,
            ..plain
        };

        let base = generate(&[], "photosynthesis", &plain, 0, &mut StdRng::seed_from_u64(9));
        let adjusted = generate(&[], "photosynthesis", &boosted, 0, &mut StdRng::seed_from_u64(9));

        assert_eq!(base.len(), adjusted.len());
        for idea in &adjusted {
            let before = base.iter().find(|b| b.id == idea.id).unwrap();
            assert_eq!(idea.score, (before.score + 11).min(100));
        }
    }
}
