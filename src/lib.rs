pub mod api;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod onboarding;
pub mod root;
pub mod state;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod testing;

pub use api::{Backend, HttpBackend};
pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{FileIdentifierStore, IdentifierStore};
