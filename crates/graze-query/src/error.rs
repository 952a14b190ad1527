//! Error type for `graze-query`.
//!
//! Only the snapshot load can fail; the query engine itself returns empty
//! tables instead of errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] graze_core::Error),

  #[error("store read failed while loading the snapshot: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
