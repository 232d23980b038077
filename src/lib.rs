//! EventWise: read-only REST API over an event/session/speaker catalog.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

pub use config::ServerConfig;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
pub use store::{apply_migrations, connect, open_in_memory};
