use crate::error::{AppError, Result};
use crate::models::route::{MoodRouteRequest, RenderQuery};
use crate::models::{Category, Coordinates};
use crate::services::render::RouteView;
use crate::session::{QuerySession, QueryStatus, QueryTicket, StatusSnapshot};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct MoodRouteResponse {
    pub query_id: Uuid,
    pub sequence: u64,
    pub created_at: String,
    pub category: Category,
    pub mood_route_index: usize,
    pub place_counts: Vec<usize>,
    pub fallback_applied: bool,
    pub view: RouteView,
}

impl MoodRouteResponse {
    pub fn new(session: &QuerySession, show_mood: bool) -> Self {
        MoodRouteResponse {
            query_id: session.query_id,
            sequence: session.sequence,
            created_at: session.created_at.clone(),
            category: session.result.category,
            mood_route_index: session.result.mood_route_index,
            place_counts: session.result.place_counts.clone(),
            fallback_applied: session.result.fallback_applied,
            view: RouteView::build(&session.result, show_mood),
        }
    }
}

/// POST /routes/mood
/// Fetch alternatives between two points and pick the one best suited to the mood
pub async fn create_mood_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoodRouteRequest>,
) -> Result<Json<MoodRouteResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    let ticket = state.sessions.begin().await;
    let category = Category::derive(&request.need);

    tracing::info!(
        sequence = ticket.sequence,
        start_lat = request.start_point.lat,
        start_lng = request.start_point.lng,
        end_lat = request.end_point.lat,
        end_lng = request.end_point.lng,
        category = %category,
        "Mood route request #{}: ({:.4}, {:.4}) -> ({:.4}, {:.4}), looking for {}",
        ticket.sequence,
        request.start_point.lat, request.start_point.lng,
        request.end_point.lat, request.end_point.lng,
        category
    );

    // Detached so the query settles the status even if the client goes away
    let query = tokio::spawn(run_query(
        state.clone(),
        ticket,
        request.start_point,
        request.end_point,
        category,
    ));

    let session = match query.await {
        Ok(outcome) => outcome?,
        Err(e) => {
            tracing::error!(sequence = ticket.sequence, "Mood route task aborted: {}", e);
            state.sessions.fail(ticket, "query task aborted").await;
            return Err(AppError::Internal(format!("Query task failed: {}", e)));
        }
    };

    Ok(Json(MoodRouteResponse::new(&session, request.show_mood)))
}

/// Fetch, score and publish one query. Failures other than being
/// superseded are recorded on the session before they are returned.
async fn run_query(
    state: Arc<AppState>,
    ticket: QueryTicket,
    start: Coordinates,
    end: Coordinates,
    category: Category,
) -> Result<Arc<QuerySession>> {
    let outcome = fetch_and_select(&state, ticket, &start, &end, category).await;

    if let Err(ref e) = outcome {
        if !matches!(e, AppError::Superseded(_)) {
            tracing::warn!(sequence = ticket.sequence, "Mood route query failed: {}", e);
            state.sessions.fail(ticket, e.to_string()).await;
        }
    }
    outcome
}

async fn fetch_and_select(
    state: &AppState,
    ticket: QueryTicket,
    start: &Coordinates,
    end: &Coordinates,
    category: Category,
) -> Result<Arc<QuerySession>> {
    let alternatives = state.selector.fetch_alternatives(start, end).await?;

    // No point scoring for a query nobody is waiting on
    if !state.sessions.advance(ticket, QueryStatus::Scoring).await {
        return Err(AppError::Superseded(ticket.sequence));
    }

    let result = state.selector.select_among(alternatives, category).await?;

    state
        .sessions
        .publish(ticket, result)
        .await
        .ok_or(AppError::Superseded(ticket.sequence))
}

/// GET /routes/mood/current?show_mood=true
/// Re-render the current session for the fastest/mood toggle without re-querying
pub async fn current_mood_route(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenderQuery>,
) -> Result<Json<MoodRouteResponse>> {
    let session = state
        .sessions
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No route has been selected yet".to_string()))?;

    Ok(Json(MoodRouteResponse::new(&session, params.show_mood)))
}

/// GET /routes/mood/status
pub async fn mood_route_status(State(state): State<Arc<AppState>>) -> Json<StatusSnapshot> {
    Json(state.sessions.snapshot().await)
}

/// DELETE /routes/mood/current
pub async fn reset_mood_route(State(state): State<Arc<AppState>>) -> StatusCode {
    state.sessions.reset().await;
    tracing::info!("Mood route session reset");
    StatusCode::NO_CONTENT
}
