//! The flattened analytical row — the working representation for all
//! querying.
//!
//! A [`FlatRow`] is never persisted. It is reconstructed in full from the
//! document collection on every read-side load and discarded at the end of
//! the analysis session.

use serde::{Deserialize, Serialize};

/// One denormalized row per (country, year, meat type) triple present in the
/// source. Both measures are plain columns, zero-filled when absent, so every
/// aggregation over this table is total-preserving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRow {
  pub country_code:          String,
  pub country_name:          String,
  pub year:                  i32,
  pub meat_type_code:        String,
  /// Display form of the meat type; falls back to the raw code when no
  /// translation exists.
  pub meat_type_label:       String,
  pub per_capita_kg:         f64,
  pub total_thousand_tonnes: f64,
}
