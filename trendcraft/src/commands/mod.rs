//! Commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `content`: Content search, lookup and drafting
//! - `ideas`: Idea generation and lookup
//! - `saved`: Saved items
//! - `trending`: Trending topics
//! - `bridge`: Newline-delimited JSON transport used by the binary
//!
//! All commands follow the pattern:
//! - Take `&AppState` as first parameter
//! - Return Result<T, AppError>
//! - Accept identifiers the way the frontend sends them (`IdArg`); an id
//!   that does not coerce still goes through the service and comes back
//!   as not found

pub mod bridge;
pub mod content;
pub mod ideas;
pub mod saved;
pub mod trending;

use crate::app::AppState;
use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use content::*;
pub use ideas::*;
pub use saved::*;
pub use trending::*;

/// Identifier argument as sent by the frontend: a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdArg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IdArg {
    /// Integer value read the way `parseInt` reads it: optional leading
    /// whitespace and sign, then as many digits as are present
    pub fn coerce(&self) -> Option<i64> {
        match self {
            IdArg::Int(n) => Some(*n),
            IdArg::Float(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Some(f.trunc() as i64),
            IdArg::Float(_) => None,
            IdArg::Text(s) => parse_leading_int(s),
        }
    }
}

impl From<i64> for IdArg {
    fn from(n: i64) -> Self {
        IdArg::Int(n)
    }
}

impl From<&str> for IdArg {
    fn from(s: &str) -> Self {
        IdArg::Text(s.to_string())
    }
}

impl std::fmt::Display for IdArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdArg::Int(n) => write!(f, "{}", n),
            IdArg::Float(x) => write!(f, "{}", x),
            IdArg::Text(s) => f.write_str(s),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Application information structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub version: String,
    pub content_items: usize,
    pub ideas: usize,
    pub trending_topics: usize,
}

/// Get application information
pub async fn get_app_info(state: &AppState) -> Result<AppInfo> {
    let dataset = state.dataset();
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        content_items: dataset.content.len(),
        ideas: dataset.ideas.len(),
        trending_topics: dataset.trending.len(),
    })
}

fn parse_args<T: DeserializeOwned>(command: &str, args: Value) -> Result<T> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };

    serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments for {}: {}", command, e)))
}

fn respond<T: Serialize>(result: Result<T>) -> Result<Value> {
    Ok(serde_json::to_value(result?)?)
}

/// Run a command by name with JSON arguments
pub async fn invoke(state: &AppState, command: &str, args: Value) -> Result<Value> {
    tracing::debug!("Invoking command: {}", command);

    match command {
        "get_app_info" => respond(get_app_info(state).await),

        // ===== Content Commands =====
        "search_content" => {
            let a: SearchContentArgs = parse_args(command, args)?;
            respond(search_content(state, a.query, a.filters).await)
        }
        "get_content_by_id" => {
            let a: IdArgs = parse_args(command, args)?;
            respond(get_content_by_id(state, a.id).await)
        }
        "get_all_content" => respond(get_all_content(state).await),
        "draft_content" => {
            let a: DraftContentArgs = parse_args(command, args)?;
            respond(draft_content(state, a.idea_id, a.draft).await)
        }
        "update_draft" => {
            let a: UpdateDraftArgs = parse_args(command, args)?;
            respond(update_draft(state, a.draft_id, a.updates).await)
        }
        "delete_draft" => {
            let a: DraftIdArgs = parse_args(command, args)?;
            respond(delete_draft(state, a.draft_id).await)
        }

        // ===== Idea Commands =====
        "generate_ideas" => {
            let a: GenerateIdeasArgs = parse_args(command, args)?;
            respond(generate_ideas(state, a.topic, a.parameters).await)
        }
        "get_idea_by_id" => {
            let a: IdArgs = parse_args(command, args)?;
            respond(get_idea_by_id(state, a.id).await)
        }

        // ===== Saved Item Commands =====
        "get_saved_items" => respond(get_saved_items(state).await),
        "filter_saved_items" => {
            let a: FilterSavedItemsArgs = parse_args(command, args)?;
            respond(filter_saved_items(state, a.tab, a.query).await)
        }
        "save_item" => {
            let a: SaveItemArgs = parse_args(command, args)?;
            respond(save_item(state, a.item).await)
        }
        "delete_item" => {
            let a: IdArgs = parse_args(command, args)?;
            respond(delete_item(state, a.id).await)
        }
        "get_saved_item_by_id" => {
            let a: IdArgs = parse_args(command, args)?;
            respond(get_saved_item_by_id(state, a.id).await)
        }

        // ===== Trending Commands =====
        "get_trending_topics" => respond(get_trending_topics(state).await),
        "get_trending_topic_by_id" => {
            let a: IdArgs = parse_args(command, args)?;
            respond(get_trending_topic_by_id(state, a.id).await)
        }
        "get_trending_topics_by_category" => {
            let a: CategoryArgs = parse_args(command, args)?;
            respond(get_trending_topics_by_category(state, a.category).await)
        }

        other => Err(AppError::InvalidInput(format!("Unknown command: {}", other))),
    }
}

/// Arguments of every command that takes a single record identifier
#[derive(Debug, Deserialize)]
pub struct IdArgs {
    pub id: IdArg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::services::SimulationSettings;
    use serde_json::json;

    fn create_test_state() -> AppState {
        AppState::new(
            Dataset::embedded().unwrap(),
            SimulationSettings::instant().with_seed(1),
        )
        .unwrap()
    }

    #[test]
    fn test_coerce_like_parse_int() {
        assert_eq!(IdArg::from(7).coerce(), Some(7));
        assert_eq!(IdArg::from("7").coerce(), Some(7));
        assert_eq!(IdArg::from("  12abc").coerce(), Some(12));
        assert_eq!(IdArg::from("-3").coerce(), Some(-3));
        assert_eq!(IdArg::from("+4").coerce(), Some(4));
        assert_eq!(IdArg::Float(3.9).coerce(), Some(3));
        assert_eq!(IdArg::from("abc").coerce(), None);
        assert_eq!(IdArg::from("").coerce(), None);
        assert_eq!(IdArg::from("-").coerce(), None);
        assert_eq!(IdArg::Float(f64::NAN).coerce(), None);
    }

    #[test]
    fn test_id_arg_deserializes_numbers_and_strings() {
        let a: IdArgs = serde_json::from_value(json!({"id": 5})).unwrap();
        assert_eq!(a.id, IdArg::Int(5));

        let a: IdArgs = serde_json::from_value(json!({"id": "5"})).unwrap();
        assert_eq!(a.id.coerce(), Some(5));
    }

    #[tokio::test]
    async fn test_invoke_lookup_with_string_id() {
        let state = create_test_state();

        let value = invoke(&state, "get_content_by_id", json!({"id": "4"}))
            .await
            .unwrap();
        assert_eq!(value["author"], "Matt Wolfe");
        assert_eq!(value["platform"], "youtube");
    }

    #[tokio::test]
    async fn test_invoke_non_numeric_id_is_not_found() {
        let state = create_test_state();

        let err = invoke(&state, "get_idea_by_id", json!({"id": "abc"}))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Idea not found");
    }

    #[tokio::test]
    async fn test_non_numeric_id_still_passes_the_gate() {
        let mut simulation = SimulationSettings::instant();
        simulation.lookup.failure_rate = 1.0;
        simulation.write.failure_rate = 1.0;
        let state = AppState::new(Dataset::embedded().unwrap(), simulation).unwrap();

        let err = invoke(&state, "get_trending_topic_by_id", json!({"id": "abc"}))
            .await
            .unwrap_err();
        assert!(err.is_simulated_failure());

        let err = invoke(&state, "delete_item", json!({"id": "abc"}))
            .await
            .unwrap_err();
        assert!(err.is_simulated_failure());
    }

    #[tokio::test]
    async fn test_invoke_without_args() {
        let state = create_test_state();

        let value = invoke(&state, "get_trending_topics", Value::Null).await.unwrap();
        assert_eq!(value.as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_invoke_unknown_command() {
        let state = create_test_state();

        let err = invoke(&state, "launch_rockets", json!({})).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_invoke_bad_arguments() {
        let state = create_test_state();

        let err = invoke(&state, "get_trending_topics_by_category", json!({"category": "sports"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("get_trending_topics_by_category"));
    }

    #[tokio::test]
    async fn test_get_app_info() {
        let state = create_test_state();

        let info = get_app_info(&state).await.unwrap();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.content_items, 13);
        assert_eq!(info.ideas, 15);
    }
}
