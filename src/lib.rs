//! Bookshelf
//!
//! A small REST JSON API over an in-memory, insertion-ordered catalog of
//! books keyed by caller-assigned integer ids.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build a fresh store and the services on top of it
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new(config.store.seed_samples);
        let services = services::Services::new(repository, config.store.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
