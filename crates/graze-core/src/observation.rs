//! Raw and wide observation rows — the long-form input to the pipeline and
//! the pivoted intermediate form.
//!
//! A [`RawObservation`] is one row of the source data set: one value for one
//! (location, meat type, year, measure) combination. The pivot stage folds
//! the two measures of each (location, meat type, year) group into a single
//! [`WideRow`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, flat::FlatRow};

// ─── Measure ─────────────────────────────────────────────────────────────────

/// One of the two numeric consumption metrics carried by the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measure {
  /// Kilograms consumed per person per year (`KG_CAP`).
  #[serde(rename = "KG_CAP")]
  PerCapitaKg,
  /// Total national consumption in thousands of tonnes (`THND_TONNE`).
  #[serde(rename = "THND_TONNE")]
  TotalThousandTonnes,
}

impl Measure {
  /// The raw token used in source files and query parameters.
  pub fn token(self) -> &'static str {
    match self {
      Self::PerCapitaKg => "KG_CAP",
      Self::TotalThousandTonnes => "THND_TONNE",
    }
  }

  /// Project this measure's column out of a flattened row.
  pub fn of(self, row: &FlatRow) -> f64 {
    match self {
      Self::PerCapitaKg => row.per_capita_kg,
      Self::TotalThousandTonnes => row.total_thousand_tonnes,
    }
  }
}

impl FromStr for Measure {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "KG_CAP" => Ok(Self::PerCapitaKg),
      "THND_TONNE" => Ok(Self::TotalThousandTonnes),
      other => Err(Error::UnknownMeasure(other.to_owned())),
    }
  }
}

// ─── RawObservation ──────────────────────────────────────────────────────────

/// One long-form source row: a single value for a single measure.
///
/// `value` is `None` when the source cell is empty. Absent values are
/// zero-filled at pivot time, never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
  pub location_code:  String,
  pub meat_type_code: String,
  pub year:           i32,
  pub measure:        Measure,
  pub value:          Option<f64>,
}

// ─── WideRow ─────────────────────────────────────────────────────────────────

/// One pivoted row: both measures for one (location, meat type, year) group,
/// with the country display name already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
  pub location_code:         String,
  pub country_name:          String,
  pub meat_type_code:        String,
  pub year:                  i32,
  pub per_capita_kg:         f64,
  pub total_thousand_tonnes: f64,
}
