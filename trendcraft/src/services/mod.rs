//! Services module
//!
//! Business logic services that coordinate between commands and the data layer.

pub mod content;
pub mod ideas;
pub mod saved;
pub mod scoring;
pub mod settings;
pub mod simulation;
pub mod trending;

pub use content::ContentService;
pub use ideas::IdeaService;
pub use saved::SavedService;
pub use settings::{AppSettings, SettingsService};
pub use simulation::{OperationKind, OperationProfile, SimulationSettings, Simulator};
pub use trending::TrendingService;
