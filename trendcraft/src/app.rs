//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::data::{Dataset, DraftStore, SavedStore};
use crate::error::Result;
use crate::services::{
    ContentService, IdeaService, SavedService, SettingsService, SimulationSettings, Simulator,
    TrendingService,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub content_service: ContentService,
    pub idea_service: IdeaService,
    pub saved_service: SavedService,
    pub trending_service: TrendingService,
    dataset: Arc<Dataset>,
}

impl AppState {
    /// Build every service over `dataset`; the session stores start from
    /// the dataset's saved items and no drafts
    pub fn new(dataset: Dataset, simulation: SimulationSettings) -> Result<Self> {
        let simulator = Arc::new(Simulator::new(simulation)?);
        let saved_store = Arc::new(SavedStore::new(dataset.saved.clone()));
        let draft_store = Arc::new(DraftStore::new());
        let dataset = Arc::new(dataset);

        Ok(Self {
            content_service: ContentService::new(dataset.clone(), draft_store, simulator.clone()),
            idea_service: IdeaService::new(dataset.clone(), simulator.clone()),
            saved_service: SavedService::new(saved_store, simulator.clone()),
            trending_service: TrendingService::new(dataset.clone(), simulator),
            dataset,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

/// Application setup - called once on startup
pub async fn setup(data_dir: PathBuf) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("Data directory: {:?}", data_dir);

    tokio::fs::create_dir_all(&data_dir).await?;

    let settings = SettingsService::new(data_dir).load().await?;
    let dataset = Dataset::embedded()?;
    let state = AppState::new(dataset, settings.simulation)?;

    tracing::info!("Application initialized successfully");

    Ok(state)
}
