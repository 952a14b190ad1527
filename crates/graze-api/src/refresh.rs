//! Handler for `POST /refresh` — the explicit session-refresh operation.
//!
//! Loads a fresh snapshot from the store and swaps it in wholesale. The old
//! snapshot stays live until the new load succeeds, so a failed refresh
//! never leaves readers without data.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use graze_core::store::DocumentStore;
use graze_query::Snapshot;
use serde::Serialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
  pub loaded_at: DateTime<Utc>,
  pub rows:      usize,
}

/// `POST /refresh`
pub async fn handler<S>(
  State(state): State<Arc<AppState<S>>>,
) -> Result<Json<RefreshResponse>, ApiError>
where
  S: DocumentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let fresh = Snapshot::load(state.store()).await?;
  let response = RefreshResponse {
    loaded_at: fresh.loaded_at(),
    rows:      fresh.rows().len(),
  };

  *state.snapshot().write().await = fresh;
  tracing::info!(rows = response.rows, "session snapshot refreshed");
  Ok(Json(response))
}
