//! Error type for `graze-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] graze_core::Error),

  #[error("database error during {step}: {source}")]
  Database {
    /// Which collection operation failed: "read" or "write".
    step:   &'static str,
    source: tokio_rusqlite::Error,
  },

  #[error("json error decoding document {location_code:?}: {source}")]
  Json {
    location_code: String,
    source:        serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
