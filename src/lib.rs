//! EPI Server
//!
//! REST JSON API for tracking personal protective equipment (EPI),
//! the employees who receive it, and the companies that manage it.

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
    /// Build the state over a fresh in-memory repository
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new();
        let services = services::Services::new(repository, config.expiration.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
