//! Data module
//!
//! This module provides the data layer:
//! - Model definitions
//! - Embedded read-only datasets
//! - Session stores for saved items and drafts

pub mod dataset;
pub mod draft_store;
pub mod models;
pub mod saved_store;

pub use dataset::Dataset;
pub use draft_store::DraftStore;
pub use models::*;
pub use saved_store::SavedStore;
