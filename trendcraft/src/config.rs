//! Application configuration constants
//!
//! Central location for simulation defaults, scoring bonuses, result
//! limits and validation boundaries used throughout the application.

// ===== Simulated Latency (milliseconds) =====

/// Free-text content search
pub const SEARCH_LATENCY_MS: u64 = 400;
/// Full listings shown on page load (saved items, trending topics)
pub const FEED_LATENCY_MS: u64 = 300;
/// Unfiltered content catalog
pub const CATALOG_LATENCY_MS: u64 = 300;
/// Single record lookup by identifier
pub const LOOKUP_LATENCY_MS: u64 = 200;
/// Trending topics filtered by category
pub const FILTER_LATENCY_MS: u64 = 250;
/// Mutations of session state
pub const WRITE_LATENCY_MS: u64 = 200;
/// Idea generation mimics model latency
pub const GENERATE_LATENCY_MS: u64 = 800;
/// Drafting is the slowest operation
pub const DRAFT_LATENCY_MS: u64 = 1200;

// ===== Simulated Failure Probabilities =====

pub const SEARCH_FAILURE_RATE: f64 = 0.05;
pub const FEED_FAILURE_RATE: f64 = 0.05;
pub const GENERATE_FAILURE_RATE: f64 = 0.05;
pub const DRAFT_FAILURE_RATE: f64 = 0.03;

// ===== Simulation Settings Limits =====

/// Maximum configurable latency for any operation class (10 seconds)
pub const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;

// ===== Idea Generation =====

/// Maximum number of ideas returned by a single generation request
pub const MAX_GENERATED_IDEAS: usize = 8;

/// Upper bound of an idea score
pub const MAX_IDEA_SCORE: i32 = 100;

/// Lower bound of an idea score
pub const MIN_IDEA_SCORE: i32 = 0;

pub const ADVANCED_DIFFICULTY_BONUS: i32 = 5;
pub const BEGINNER_DIFFICULTY_BONUS: i32 = 3;
pub const PROJECT_STRUCTURE_BONUS: i32 = 4;
pub const CASE_STUDY_STRUCTURE_BONUS: i32 = 3;
pub const TRANSFORMATION_OBJECTIVE_BONUS: i32 = 6;
pub const PRACTICAL_OBJECTIVE_BONUS: i32 = 4;
/// Applied when the audience matches the formats it typically buys
pub const AUDIENCE_FIT_BONUS: i32 = 5;

// ===== Data Directory =====

/// Environment variable naming the directory that holds settings.json
pub const DATA_DIR_ENV: &str = "TRENDCRAFT_DATA_DIR";

/// Fallback data directory when the environment variable is unset
pub const DEFAULT_DATA_DIR: &str = ".trendcraft";

/// Settings file name inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";
