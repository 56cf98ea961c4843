// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use services::mood_selector::MoodRouteSelector;
use session::SessionStore;

pub struct AppState {
    pub selector: MoodRouteSelector,
    pub sessions: SessionStore,
}
