//! Error type for `graze-pipeline`.
//!
//! Pipeline-stage errors fail the batch job loudly rather than silently
//! dropping rows — the nested document structure assumes completeness per
//! country/year group.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] graze_core::Error),

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// The document store rejected the write. Retry policy, if any, belongs to
  /// the store collaborator.
  #[error("store write failed while replacing the document collection: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
