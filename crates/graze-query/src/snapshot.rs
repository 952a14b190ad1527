//! The session-scoped snapshot of the flattened table.
//!
//! Loaded once per analysis session and treated as immutable; refresh means
//! loading a new snapshot and replacing the old one wholesale. There is no
//! implicit global cache.

use chrono::{DateTime, Utc};
use graze_core::{flat::FlatRow, store::DocumentStore};

use crate::{Error, Result, flatten};

/// An immutable flattened view of the document collection, captured at one
/// point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
  rows:      Vec<FlatRow>,
  loaded_at: DateTime<Utc>,
}

impl Snapshot {
  /// Read the whole collection from `store` and flatten it.
  ///
  /// An empty collection is [`graze_core::Error::EmptySource`] — the
  /// operator either has not run the load yet or caught the window between
  /// the delete and insert steps of a refresh. This is distinct from a
  /// filter matching nothing.
  pub async fn load<S: DocumentStore>(store: &S) -> Result<Self> {
    let documents = store
      .find_all()
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    if documents.is_empty() {
      return Err(Error::Core(graze_core::Error::EmptySource(
        "document collection".into(),
      )));
    }

    let rows = flatten::flatten(&documents);
    tracing::info!(
      documents = documents.len(),
      rows = rows.len(),
      "loaded analysis snapshot"
    );

    Ok(Self { rows, loaded_at: Utc::now() })
  }

  /// Build a snapshot directly from rows; test seam and refresh helper.
  pub fn from_rows(rows: Vec<FlatRow>) -> Self {
    Self { rows, loaded_at: Utc::now() }
  }

  pub fn rows(&self) -> &[FlatRow] { &self.rows }

  pub fn loaded_at(&self) -> DateTime<Utc> { self.loaded_at }

  /// Smallest and largest year in the snapshot. `None` only for an empty
  /// snapshot, which `load` never produces.
  pub fn year_bounds(&self) -> Option<(i32, i32)> {
    let min = self.rows.iter().map(|r| r.year).min()?;
    let max = self.rows.iter().map(|r| r.year).max()?;
    Some((min, max))
  }

  /// Distinct (code, name) pairs, sorted by code.
  pub fn countries(&self) -> Vec<(String, String)> {
    let mut countries: Vec<(String, String)> = self
      .rows
      .iter()
      .map(|r| (r.country_code.clone(), r.country_name.clone()))
      .collect();
    countries.sort();
    countries.dedup();
    countries
  }
}
