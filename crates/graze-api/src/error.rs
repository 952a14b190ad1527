//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The document collection is empty — the load has not run yet, or a
  /// refresh is mid-replace. Distinct from a filter matching nothing, which
  /// is a successful empty result.
  #[error("no data: {0}")]
  NoData(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<graze_query::Error> for ApiError {
  fn from(e: graze_query::Error) -> Self {
    match e {
      graze_query::Error::Core(graze_core::Error::EmptySource(what)) => {
        ApiError::NoData(format!("{what} contains no rows"))
      }
      graze_query::Error::Core(core) => ApiError::Store(Box::new(core)),
      graze_query::Error::Store(source) => ApiError::Store(source),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NoData(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
