//! The persisted per-country document and its nested records.
//!
//! One [`CountryDocument`] exists per non-aggregate location code. The whole
//! collection is replaced on every data refresh; documents are never updated
//! in place.

use serde::{Deserialize, Serialize};

/// Both measures for one meat type within one year. Absent source measures
/// are stored as `0.0`, never as null — all downstream arithmetic is
/// total-preserving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeatMeasurement {
  pub meat_type_code:        String,
  pub per_capita_kg:         f64,
  pub total_thousand_tonnes: f64,
}

/// All measurements for one year. At most one [`MeatMeasurement`] per
/// distinct meat type; measurements keep the order in which their meat type
/// first appeared, since display order matters for reproducible output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
  pub year:              i32,
  pub meat_measurements: Vec<MeatMeasurement>,
}

/// The persisted unit: one document per country, keyed by location code.
///
/// `location_code` is stable and doubles as the ISO-3 join key for
/// geographic rendering. `yearly_records` is ascending by year and years are
/// unique within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDocument {
  pub location_code:  String,
  pub country_name:   String,
  pub yearly_records: Vec<YearRecord>,
}
