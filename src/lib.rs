//! Shelfmark Personal Library Server
//!
//! A REST JSON API for tracking personal book collections: users register,
//! create their single library, and manage the books in it. All library and
//! book access is scoped to the authenticated owner.

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
