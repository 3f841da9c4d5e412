//! Trendcraft library
//!
//! Trend discovery, content research, idea generation and saved items,
//! served from fixed datasets behind a simulated backend. The binary
//! exposes the commands over a line-delimited JSON bridge; this library
//! exposes the same functionality for testing and embedding.

pub mod app;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod services;
