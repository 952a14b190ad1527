//! The full batch load: pivot, build, and replace the document collection.

use graze_core::{observation::RawObservation, store::DocumentStore};

use crate::{Error, Result, builder, pivot};

/// Row counts per pipeline stage, for operator-facing reporting.
#[derive(Debug, Clone, Copy)]
pub struct LoadSummary {
  pub observations: usize,
  pub wide_rows:    usize,
  pub documents:    usize,
}

/// Run the write path end to end against `store`.
///
/// The collection replace is delete-all followed by insert-many, two separate
/// steps. A concurrent reader can observe an empty collection between them;
/// see [`DocumentStore::replace_all`].
pub async fn run_load<S: DocumentStore>(
  store: &S,
  observations: &[RawObservation],
) -> Result<LoadSummary> {
  if observations.is_empty() {
    return Err(Error::Core(graze_core::Error::EmptySource(
      "raw observation batch".into(),
    )));
  }

  let wide_rows = pivot::pivot(observations);
  tracing::info!(rows = wide_rows.len(), "pivoted long form to wide form");

  let documents = builder::build(&wide_rows)?;
  if documents.is_empty() {
    // Possible when every input row names an aggregate region.
    return Err(Error::Core(graze_core::Error::EmptySource(
      "pivoted row set (no non-aggregate locations)".into(),
    )));
  }
  tracing::info!(documents = documents.len(), "built country documents");

  let summary = LoadSummary {
    observations: observations.len(),
    wide_rows:    wide_rows.len(),
    documents:    documents.len(),
  };

  store
    .replace_all(documents)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  tracing::info!(documents = summary.documents, "replaced document collection");

  Ok(summary)
}
