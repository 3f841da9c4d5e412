//! Simulated backend behaviour
//!
//! Every data access call passes through a `Simulator` gate that waits a
//! configured latency and then fails with a configured probability. The
//! simulator also owns the random source used for synthesized idea scores
//! so a fixed seed makes a whole session reproducible.

use crate::config;
use crate::error::{AppError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

/// Operation classes sharing a latency and failure policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Free-text content search
    Search,
    /// Saved items and trending topics listings
    Feed,
    /// Unfiltered content listing
    Catalog,
    /// Single record by identifier
    Lookup,
    /// Trending topics by category
    Filter,
    /// Saved item and draft mutations
    Write,
    /// Idea generation
    Generate,
    /// Draft creation
    Draft,
}

/// Latency and failure probability of one operation class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationProfile {
    pub latency_ms: u64,
    /// Probability in [0, 1] that a call fails after its delay
    pub failure_rate: f64,
}

impl OperationProfile {
    pub const fn new(latency_ms: u64, failure_rate: f64) -> Self {
        Self {
            latency_ms,
            failure_rate,
        }
    }

    pub const fn instant() -> Self {
        Self::new(0, 0.0)
    }
}

fn default_search() -> OperationProfile {
    OperationProfile::new(config::SEARCH_LATENCY_MS, config::SEARCH_FAILURE_RATE)
}

fn default_feed() -> OperationProfile {
    OperationProfile::new(config::FEED_LATENCY_MS, config::FEED_FAILURE_RATE)
}

fn default_catalog() -> OperationProfile {
    OperationProfile::new(config::CATALOG_LATENCY_MS, 0.0)
}

fn default_lookup() -> OperationProfile {
    OperationProfile::new(config::LOOKUP_LATENCY_MS, 0.0)
}

fn default_filter() -> OperationProfile {
    OperationProfile::new(config::FILTER_LATENCY_MS, 0.0)
}

fn default_write() -> OperationProfile {
    OperationProfile::new(config::WRITE_LATENCY_MS, 0.0)
}

fn default_generate() -> OperationProfile {
    OperationProfile::new(config::GENERATE_LATENCY_MS, config::GENERATE_FAILURE_RATE)
}

fn default_draft() -> OperationProfile {
    OperationProfile::new(config::DRAFT_LATENCY_MS, config::DRAFT_FAILURE_RATE)
}

/// Simulation configuration, persisted in settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSettings {
    /// Fixed seed for the random source; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_search")]
    pub search: OperationProfile,
    #[serde(default = "default_feed")]
    pub feed: OperationProfile,
    #[serde(default = "default_catalog")]
    pub catalog: OperationProfile,
    #[serde(default = "default_lookup")]
    pub lookup: OperationProfile,
    #[serde(default = "default_filter")]
    pub filter: OperationProfile,
    #[serde(default = "default_write")]
    pub write: OperationProfile,
    #[serde(default = "default_generate")]
    pub generate: OperationProfile,
    #[serde(default = "default_draft")]
    pub draft: OperationProfile,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            search: default_search(),
            feed: default_feed(),
            catalog: default_catalog(),
            lookup: default_lookup(),
            filter: default_filter(),
            write: default_write(),
            generate: default_generate(),
            draft: default_draft(),
        }
    }
}

impl SimulationSettings {
    /// No latency and no failures on any operation
    pub fn instant() -> Self {
        let p = OperationProfile::instant();
        Self {
            seed: None,
            search: p,
            feed: p,
            catalog: p,
            lookup: p,
            filter: p,
            write: p,
            generate: p,
            draft: p,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn profile(&self, kind: OperationKind) -> OperationProfile {
        match kind {
            OperationKind::Search => self.search,
            OperationKind::Feed => self.feed,
            OperationKind::Catalog => self.catalog,
            OperationKind::Lookup => self.lookup,
            OperationKind::Filter => self.filter,
            OperationKind::Write => self.write,
            OperationKind::Generate => self.generate,
            OperationKind::Draft => self.draft,
        }
    }

    pub fn profile_mut(&mut self, kind: OperationKind) -> &mut OperationProfile {
        match kind {
            OperationKind::Search => &mut self.search,
            OperationKind::Feed => &mut self.feed,
            OperationKind::Catalog => &mut self.catalog,
            OperationKind::Lookup => &mut self.lookup,
            OperationKind::Filter => &mut self.filter,
            OperationKind::Write => &mut self.write,
            OperationKind::Generate => &mut self.generate,
            OperationKind::Draft => &mut self.draft,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for kind in [
            OperationKind::Search,
            OperationKind::Feed,
            OperationKind::Catalog,
            OperationKind::Lookup,
            OperationKind::Filter,
            OperationKind::Write,
            OperationKind::Generate,
            OperationKind::Draft,
        ] {
            let profile = self.profile(kind);

            if !(0.0..=1.0).contains(&profile.failure_rate) {
                return Err(AppError::InvalidInput(format!(
                    "failure rate for {:?} must be between 0 and 1, got {}",
                    kind, profile.failure_rate
                )));
            }

            if profile.latency_ms > config::MAX_SIMULATED_LATENCY_MS {
                return Err(AppError::InvalidInput(format!(
                    "latency for {:?} must be at most {} ms, got {}",
                    kind,
                    config::MAX_SIMULATED_LATENCY_MS,
                    profile.latency_ms
                )));
            }
        }

        Ok(())
    }
}

/// Latency and failure gate shared by all services
pub struct Simulator {
    settings: SimulationSettings,
    rng: Mutex<StdRng>,
}

impl Simulator {
    pub fn new(settings: SimulationSettings) -> Result<Self> {
        settings.validate()?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            settings,
            rng: Mutex::new(rng),
        })
    }

    /// Wait out the simulated latency, then roll for a simulated failure
    pub async fn gate(&self, kind: OperationKind, failure_message: &str) -> Result<()> {
        let profile = self.settings.profile(kind);

        if profile.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(profile.latency_ms)).await;
        }

        if profile.failure_rate > 0.0 && self.with_rng(|rng| rng.gen_bool(profile.failure_rate)) {
            tracing::warn!("Simulated {:?} failure: {}", kind, failure_message);
            return Err(AppError::SimulatedFailure(failure_message.to_string()));
        }

        Ok(())
    }

    /// Run `f` with exclusive access to the random source
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}
