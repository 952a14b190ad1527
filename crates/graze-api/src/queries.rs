//! Read handlers — every endpoint filters the session snapshot and runs one
//! aggregation verb over the result.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/countries` | Distinct (code, name) pairs in the snapshot |
//! | `GET`  | `/rows` | Filtered flattened rows |
//! | `GET`  | `/mean` | Grouped means; `?by=country,year,meat_type` |
//! | `GET`  | `/top` | Country ranking by mean; `?n=20` |
//! | `GET`  | `/composition` | Per-country meat-type shares |
//! | `GET`  | `/growth/:code` | Endpoint growth for one country |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use graze_core::{flat::FlatRow, store::DocumentStore};
use graze_query::engine::{
  self, GroupKey, GroupRow, RowFilter, ShareRow, Trend,
};
use serde::{Deserialize, Serialize};

use crate::{
  AppState,
  error::ApiError,
  params::{FilterParams, parse_group_keys},
};

// ─── Countries ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CountryEntry {
  pub code: String,
  pub name: String,
}

/// `GET /countries`
pub async fn countries<S>(
  State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<CountryEntry>>
where
  S: DocumentStore,
{
  let snapshot = state.snapshot().read().await;
  let entries = snapshot
    .countries()
    .into_iter()
    .map(|(code, name)| CountryEntry { code, name })
    .collect();
  Json(entries)
}

// ─── Rows ─────────────────────────────────────────────────────────────────────

/// `GET /rows[?countries=...][&from=...][&to=...][&meat=...]`
pub async fn rows<S>(
  State(state): State<Arc<AppState<S>>>,
  Query(params): Query<FilterParams>,
) -> Json<Vec<FlatRow>>
where
  S: DocumentStore,
{
  let snapshot = state.snapshot().read().await;
  Json(engine::filter(snapshot.rows(), &params.row_filter()))
}

// ─── Grouped mean ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MeanParams {
  /// Comma-separated grouping columns; defaults to `country`.
  by: Option<String>,
}

/// `GET /mean[?by=country,year][&measure=...][&...filters]`
pub async fn mean<S>(
  State(state): State<Arc<AppState<S>>>,
  Query(filter): Query<FilterParams>,
  Query(params): Query<MeanParams>,
) -> Result<Json<Vec<GroupRow>>, ApiError>
where
  S: DocumentStore,
{
  let by = match params.by.as_deref() {
    Some(s) => parse_group_keys(s)?,
    None => vec![GroupKey::Country],
  };
  let measure = filter.measure()?;

  let snapshot = state.snapshot().read().await;
  let filtered = engine::filter(snapshot.rows(), &filter.row_filter());
  Ok(Json(engine::group_mean(&filtered, &by, measure)))
}

// ─── Top N ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TopParams {
  /// Ranking length; defaults to 20, the dashboard's "Top 20" view.
  n: Option<usize>,
}

/// `GET /top[?n=20][&measure=...][&...filters]`
pub async fn top<S>(
  State(state): State<Arc<AppState<S>>>,
  Query(filter): Query<FilterParams>,
  Query(params): Query<TopParams>,
) -> Result<Json<Vec<GroupRow>>, ApiError>
where
  S: DocumentStore,
{
  let measure = filter.measure()?;
  let n = params.n.unwrap_or(20);

  let snapshot = state.snapshot().read().await;
  let filtered = engine::filter(snapshot.rows(), &filter.row_filter());
  let means = engine::group_mean(&filtered, &[GroupKey::Country], measure);
  Ok(Json(engine::top_n(&means, n)))
}

// ─── Composition ──────────────────────────────────────────────────────────────

/// `GET /composition[?countries=...][&from=...][&to=...]`
///
/// Composition is always computed over per-capita values; the meat filter is
/// ignored here since the verb spans all meat types.
pub async fn composition<S>(
  State(state): State<Arc<AppState<S>>>,
  Query(params): Query<FilterParams>,
) -> Json<Vec<ShareRow>>
where
  S: DocumentStore,
{
  let filter = RowFilter { meat_type: None, ..params.row_filter() };
  let snapshot = state.snapshot().read().await;
  let filtered = engine::filter(snapshot.rows(), &filter);
  Json(engine::composition_share(&filtered))
}

// ─── Growth ───────────────────────────────────────────────────────────────────

/// `GET /growth/:code[?measure=...][&from=...][&to=...][&meat=...]`
///
/// Returns `{"status":"insufficient"}` for a single data point or a
/// zero-valued start — an explicit not-applicable state, never 0%.
pub async fn growth<S>(
  State(state): State<Arc<AppState<S>>>,
  Path(code): Path<String>,
  Query(params): Query<FilterParams>,
) -> Result<Json<Trend>, ApiError>
where
  S: DocumentStore,
{
  let measure = params.measure()?;
  let filter = RowFilter {
    countries: Some(vec![code]),
    ..params.row_filter()
  };

  let snapshot = state.snapshot().read().await;
  let filtered = engine::filter(snapshot.rows(), &filter);
  Ok(Json(engine::growth_between_endpoints(&filtered, measure)))
}
