//! Error types for Trendcraft
//!
//! All errors use thiserror for structured error handling.
//! These errors are serialized to the frontend as plain messages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup by identifier found no record
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// Randomized transient failure raised by the simulator
    #[error("{0}")]
    SimulatedFailure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rejected user input, shown to the user as is
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Generic(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Not found for an identifier that may not have coerced to a number
    pub fn not_found_id(entity: &'static str, id: Option<i64>) -> Self {
        Self::not_found(entity, id.map_or_else(|| "NaN".to_string(), |id| id.to_string()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_simulated_failure(&self) -> bool {
        matches!(self, AppError::SimulatedFailure(_))
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("Content", 42);
        assert_eq!(err.to_string(), "Content not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_serializes_as_message() {
        let err = AppError::SimulatedFailure("Search failed".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Search failed\"");

        let err = AppError::not_found_id("Idea", None);
        assert_eq!(serde_json::to_value(&err).unwrap(), "Idea not found");
    }

    #[test]
    fn test_validation_message_has_no_prefix() {
        let err = AppError::Validation("Please enter a topic".to_string());
        assert_eq!(err.to_string(), "Please enter a topic");

        let err = AppError::InvalidInput("bad".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad");
    }
}
