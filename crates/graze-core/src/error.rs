//! Error types for `graze-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The raw input or the document collection yielded zero rows. Fatal for
  /// the current operation; distinct from "filters matched nothing".
  #[error("empty source: {0} contains no rows")]
  EmptySource(String),

  #[error("unknown measure token: {0:?}")]
  UnknownMeasure(String),

  #[error("malformed row {line}: {reason}")]
  MalformedRow { line: u64, reason: String },

  /// Rows for one location code carried different country names.
  #[error("inconsistent country name for {code:?}: {first:?} vs {other:?}")]
  InconsistentCountryName {
    code:  String,
    first: String,
    other: String,
  },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
