use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Report service and query session state
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let snapshot = state.sessions.snapshot().await;

    Json(json!({
        "status": "ok",
        "checks": {
            "session": {
                "latest_sequence": snapshot.latest_sequence,
                "state": snapshot.status,
                "has_result": snapshot.has_result,
            }
        }
    }))
}
