//! The single "current query" the UI is showing.
//!
//! Every query takes a ticket with a fresh sequence number. Only the holder
//! of the latest ticket may move the status or publish a result, so a slow
//! query that finishes after a newer one started is dropped.

use crate::models::SelectionResult;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QueryStatus {
    Idle,
    Fetching,
    Scoring,
    Selected,
    Failed { message: String },
}

impl QueryStatus {
    /// Text for the status indicator
    pub fn message(&self) -> String {
        match self {
            QueryStatus::Idle => "Tap map to set Start & Destination".to_string(),
            QueryStatus::Fetching => "Fetching route alternatives...".to_string(),
            QueryStatus::Scoring => "Analyzing diverse paths...".to_string(),
            QueryStatus::Selected => "Routes ready".to_string(),
            QueryStatus::Failed { message } => format!("Could not find routes: {}", message),
        }
    }
}

/// Proof of which query a caller is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket {
    pub sequence: u64,
}

/// A published query outcome.
#[derive(Debug, Clone, Serialize)]
pub struct QuerySession {
    pub query_id: Uuid,
    pub sequence: u64,
    pub created_at: String,
    pub result: SelectionResult,
}

impl QuerySession {
    fn new(sequence: u64, result: SelectionResult) -> Self {
        let created_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string());

        QuerySession {
            query_id: Uuid::new_v4(),
            sequence,
            created_at,
            result,
        }
    }
}

#[derive(Debug)]
struct SessionState {
    latest: u64,
    status: QueryStatus,
    current: Option<Arc<QuerySession>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub latest_sequence: u64,
    pub status: QueryStatus,
    pub message: String,
    pub has_result: bool,
}

pub struct SessionStore {
    next_sequence: AtomicU64,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            next_sequence: AtomicU64::new(1),
            state: RwLock::new(SessionState {
                latest: 0,
                status: QueryStatus::Idle,
                current: None,
            }),
        }
    }

    /// Start a new query. Any query still in flight becomes stale.
    pub async fn begin(&self) -> QueryTicket {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        // Tickets may reach the lock out of order
        if sequence > state.latest {
            state.latest = sequence;
            state.status = QueryStatus::Fetching;
        }
        tracing::debug!(sequence, "Query started");
        QueryTicket { sequence }
    }

    /// Move the latest query to `status`. Returns false for stale tickets.
    pub async fn advance(&self, ticket: QueryTicket, status: QueryStatus) -> bool {
        let mut state = self.state.write().await;
        if state.latest != ticket.sequence {
            return false;
        }
        state.status = status;
        true
    }

    /// Replace the current session with `result`, unless a newer query has
    /// started since `ticket` was issued.
    pub async fn publish(
        &self,
        ticket: QueryTicket,
        result: SelectionResult,
    ) -> Option<Arc<QuerySession>> {
        let mut state = self.state.write().await;
        if state.latest != ticket.sequence {
            tracing::info!(
                sequence = ticket.sequence,
                latest = state.latest,
                "Dropping result of superseded query {}",
                ticket.sequence
            );
            return None;
        }

        let session = Arc::new(QuerySession::new(ticket.sequence, result));
        state.current = Some(session.clone());
        state.status = QueryStatus::Selected;
        Some(session)
    }

    /// Record a failure for the latest query. The previously published
    /// session, if any, stays in place.
    pub async fn fail(&self, ticket: QueryTicket, message: impl Into<String>) -> bool {
        self.advance(
            ticket,
            QueryStatus::Failed {
                message: message.into(),
            },
        )
        .await
    }

    pub async fn current(&self) -> Option<Arc<QuerySession>> {
        self.state.read().await.current.clone()
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        let state = self.state.read().await;
        StatusSnapshot {
            latest_sequence: state.latest,
            message: state.status.message(),
            status: state.status.clone(),
            has_result: state.current.is_some(),
        }
    }

    /// Forget the current session; queries still in flight become stale.
    pub async fn reset(&self) {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        state.latest = state.latest.max(sequence);
        state.status = QueryStatus::Idle;
        state.current = None;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
