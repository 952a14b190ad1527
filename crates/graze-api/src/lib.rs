//! JSON REST API for graze.
//!
//! Exposes an axum [`Router`] backed by any
//! [`graze_core::store::DocumentStore`]. This is the interface a dashboard
//! front end consumes; rendering, auth, TLS, and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let state = AppState::load(store).await?;
//! .nest("/api", graze_api::api_router(state))
//! ```

pub mod error;
pub mod params;
pub mod queries;
pub mod refresh;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use graze_core::store::DocumentStore;
use graze_query::Snapshot;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub use error::ApiError;


/// Shared handler state: the store and the current session snapshot.
///
/// The snapshot is immutable between refreshes; `POST /refresh` loads a new
/// one from the store and swaps it in wholesale.
pub struct AppState<S> {
  store:    S,
  snapshot: RwLock<Snapshot>,
}

impl<S: DocumentStore> AppState<S> {
  /// Load the initial snapshot from `store`.
  pub async fn load(store: S) -> graze_query::Result<Arc<Self>> {
    let snapshot = Snapshot::load(&store).await?;
    Ok(Arc::new(Self { store, snapshot: RwLock::new(snapshot) }))
  }

  pub(crate) fn store(&self) -> &S { &self.store }

  pub(crate) fn snapshot(&self) -> &RwLock<Snapshot> { &self.snapshot }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: Arc<AppState<S>>) -> Router<()>
where
  S: DocumentStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Snapshot metadata
    .route("/countries", get(queries::countries::<S>))
    // Flattened rows and aggregations
    .route("/rows", get(queries::rows::<S>))
    .route("/mean", get(queries::mean::<S>))
    .route("/top", get(queries::top::<S>))
    .route("/composition", get(queries::composition::<S>))
    .route("/growth/{code}", get(queries::growth::<S>))
    // Session refresh
    .route("/refresh", post(refresh::handler::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
