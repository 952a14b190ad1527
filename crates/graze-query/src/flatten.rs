//! Flattening: the exact structural inverse of document building.
//!
//! Each (document, year record, measurement) triple becomes one [`FlatRow`]
//! carrying country identity, year, meat type, and both measures.

use graze_core::{document::CountryDocument, flat::FlatRow, lookup};

/// Zero is the only acceptable stand-in for "no data" in the flattened
/// table. The builder never stores non-finite values, so this is a second
/// line of defense against malformed persisted documents.
fn finite_or_zero(v: f64) -> f64 {
  if v.is_finite() { v } else { 0.0 }
}

/// Expand `documents` into the flat analytical row set.
///
/// Rows come out in document order (location code), then year, then
/// measurement order — the deterministic order the documents themselves
/// guarantee.
pub fn flatten(documents: &[CountryDocument]) -> Vec<FlatRow> {
  let mut rows = Vec::new();

  for doc in documents {
    for record in &doc.yearly_records {
      for m in &record.meat_measurements {
        rows.push(FlatRow {
          country_code:          doc.location_code.clone(),
          country_name:          doc.country_name.clone(),
          year:                  record.year,
          meat_type_code:        m.meat_type_code.clone(),
          meat_type_label:       lookup::meat_label(&m.meat_type_code).to_owned(),
          per_capita_kg:         finite_or_zero(m.per_capita_kg),
          total_thousand_tonnes: finite_or_zero(m.total_thousand_tonnes),
        });
      }
    }
  }

  rows
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use graze_core::document::{CountryDocument, MeatMeasurement, YearRecord};

  use super::flatten;

  fn measurement(meat: &str, kg: f64, tonnes: f64) -> MeatMeasurement {
    MeatMeasurement {
      meat_type_code:        meat.into(),
      per_capita_kg:         kg,
      total_thousand_tonnes: tonnes,
    }
  }

  #[test]
  fn one_row_per_measurement_with_labels() {
    let rows = flatten(&[CountryDocument {
      location_code:  "BRA".into(),
      country_name:   "Brazil".into(),
      yearly_records: vec![YearRecord {
        year:              2019,
        meat_measurements: vec![
          measurement("POULTRY", 40.0, 8000.0),
          measurement("BEEF", 25.0, 0.0),
        ],
      }],
    }]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].meat_type_label, "Poultry");
    assert_eq!(rows[1].meat_type_label, "Beef");
    assert_eq!(rows[1].total_thousand_tonnes, 0.0);
  }

  #[test]
  fn unknown_meat_code_passes_through_as_label() {
    let rows = flatten(&[CountryDocument {
      location_code:  "BRA".into(),
      country_name:   "Brazil".into(),
      yearly_records: vec![YearRecord {
        year:              2019,
        meat_measurements: vec![measurement("GOAT", 1.0, 1.0)],
      }],
    }]);
    assert_eq!(rows[0].meat_type_label, "GOAT");
  }

  #[test]
  fn non_finite_stored_values_are_zero_filled() {
    let rows = flatten(&[CountryDocument {
      location_code:  "BRA".into(),
      country_name:   "Brazil".into(),
      yearly_records: vec![YearRecord {
        year:              2019,
        meat_measurements: vec![measurement("BEEF", f64::NAN, f64::INFINITY)],
      }],
    }]);
    assert_eq!(rows[0].per_capita_kg, 0.0);
    assert_eq!(rows[0].total_thousand_tonnes, 0.0);
  }
}
