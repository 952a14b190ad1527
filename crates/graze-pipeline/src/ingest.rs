//! CSV ingestion: one [`RawObservation`] per source row.
//!
//! The source file is the OECD long-form export with the header
//! `LOCATION,INDICATOR,SUBJECT,MEASURE,FREQUENCY,TIME,Value`. Columns not
//! named below are ignored. Empty `Value` cells become `None` and are
//! zero-filled later; an unknown `MEASURE` token fails the whole batch.

use std::path::Path;

use graze_core::observation::RawObservation;
use serde::Deserialize;

use crate::{Error, Result};

/// Shape of one source row; field names follow the CSV header.
#[derive(Debug, Deserialize)]
struct CsvRecord {
  #[serde(rename = "LOCATION")]
  location: String,
  #[serde(rename = "SUBJECT")]
  subject:  String,
  #[serde(rename = "MEASURE")]
  measure:  String,
  #[serde(rename = "TIME")]
  year:     i32,
  #[serde(rename = "Value")]
  value:    Option<f64>,
}

/// Read every observation from `path`. Returns
/// [`graze_core::Error::EmptySource`] when the file has a header but no data
/// rows.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<RawObservation>> {
  let mut reader = csv::Reader::from_path(path.as_ref())?;
  let mut observations = Vec::new();

  for (i, record) in reader.deserialize::<CsvRecord>().enumerate() {
    // Header is line 1; the first data row is line 2.
    let line = i as u64 + 2;
    let record = record.map_err(|e| {
      Error::Core(graze_core::Error::MalformedRow { line, reason: e.to_string() })
    })?;

    let measure = record.measure.parse().map_err(|e: graze_core::Error| {
      Error::Core(graze_core::Error::MalformedRow { line, reason: e.to_string() })
    })?;

    observations.push(RawObservation {
      location_code:  record.location,
      meat_type_code: record.subject,
      year:           record.year,
      measure,
      value:          record.value,
    });
  }

  if observations.is_empty() {
    return Err(Error::Core(graze_core::Error::EmptySource(format!(
      "csv file {}",
      path.as_ref().display()
    ))));
  }

  tracing::debug!(rows = observations.len(), "read raw observations");
  Ok(observations)
}
