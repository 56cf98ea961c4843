pub mod categories;
pub mod debug;
pub mod mood_route;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/mood", post(mood_route::create_mood_route))
        .route(
            "/routes/mood/current",
            get(mood_route::current_mood_route).delete(mood_route::reset_mood_route),
        )
        .route("/routes/mood/status", get(mood_route::mood_route_status))
        .route("/categories/derive", get(categories::derive_category))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
