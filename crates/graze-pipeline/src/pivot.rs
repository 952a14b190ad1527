//! Pivot: long form (one row per measure) to wide form (one row per
//! location/meat type/year with one column per measure).
//!
//! Aggregate regions are excluded here, before any grouping — downstream
//! aggregation must operate over actual countries only. Country display
//! names are resolved in the same pass; unmapped codes are logged and pass
//! through unchanged.

use std::collections::{BTreeSet, HashMap};

use graze_core::{
  lookup,
  observation::{Measure, RawObservation, WideRow},
};

/// Pivot `observations` into wide rows, sorted by (location_code, year).
///
/// Values are summed within each (location, meat type, year, measure) group.
/// Well-formed input carries at most one value per group, but summation keeps
/// the operation well-defined against duplicate source rows. Groups with no
/// value for either measure are zero-filled, not dropped.
pub fn pivot(observations: &[RawObservation]) -> Vec<WideRow> {
  let mut rows: Vec<WideRow> = Vec::new();
  let mut index: HashMap<(String, String, i32), usize> = HashMap::new();
  let mut unmapped: BTreeSet<String> = BTreeSet::new();

  for obs in observations {
    if lookup::is_aggregate(&obs.location_code) {
      continue;
    }

    let name = lookup::country_name(&obs.location_code);
    if name == obs.location_code {
      unmapped.insert(obs.location_code.clone());
    }

    let key = (
      obs.location_code.clone(),
      obs.meat_type_code.clone(),
      obs.year,
    );
    let idx = *index.entry(key).or_insert_with(|| {
      rows.push(WideRow {
        location_code:         obs.location_code.clone(),
        country_name:          name.to_owned(),
        meat_type_code:        obs.meat_type_code.clone(),
        year:                  obs.year,
        per_capita_kg:         0.0,
        total_thousand_tonnes: 0.0,
      });
      rows.len() - 1
    });

    let value = obs.value.unwrap_or(0.0);
    match obs.measure {
      Measure::PerCapitaKg => rows[idx].per_capita_kg += value,
      Measure::TotalThousandTonnes => rows[idx].total_thousand_tonnes += value,
    }
  }

  for code in &unmapped {
    tracing::warn!(%code, "no display name for location code; using raw code");
  }

  // Stable: rows with equal (location, year) keep first-appearance order.
  rows.sort_by(|a, b| {
    (a.location_code.as_str(), a.year).cmp(&(b.location_code.as_str(), b.year))
  });
  rows
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use graze_core::observation::{Measure, RawObservation};

  use super::pivot;

  fn obs(
    location: &str,
    meat: &str,
    year: i32,
    measure: Measure,
    value: Option<f64>,
  ) -> RawObservation {
    RawObservation {
      location_code: location.into(),
      meat_type_code: meat.into(),
      year,
      measure,
      value,
    }
  }

  #[test]
  fn both_measures_land_in_one_row() {
    let rows = pivot(&[
      obs("BRA", "POULTRY", 2019, Measure::PerCapitaKg, Some(40.0)),
      obs("BRA", "POULTRY", 2019, Measure::TotalThousandTonnes, Some(8000.0)),
    ]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].country_name, "Brazil");
    assert_eq!(rows[0].per_capita_kg, 40.0);
    assert_eq!(rows[0].total_thousand_tonnes, 8000.0);
  }

  #[test]
  fn missing_measure_is_zero_filled_not_dropped() {
    let rows =
      pivot(&[obs("BRA", "BEEF", 2019, Measure::PerCapitaKg, Some(25.0))]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].per_capita_kg, 25.0);
    assert_eq!(rows[0].total_thousand_tonnes, 0.0);
  }

  #[test]
  fn absent_value_is_zero_filled() {
    let rows = pivot(&[obs("ARG", "SHEEP", 2010, Measure::PerCapitaKg, None)]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].per_capita_kg, 0.0);
  }

  #[test]
  fn duplicate_source_rows_are_summed() {
    let rows = pivot(&[
      obs("CHL", "PIG", 2015, Measure::PerCapitaKg, Some(10.0)),
      obs("CHL", "PIG", 2015, Measure::PerCapitaKg, Some(2.5)),
    ]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].per_capita_kg, 12.5);
  }

  #[test]
  fn aggregates_are_excluded() {
    let rows = pivot(&[
      obs("WLD", "BEEF", 2019, Measure::PerCapitaKg, Some(6.0)),
      obs("EU28", "BEEF", 2019, Measure::PerCapitaKg, Some(10.0)),
      obs("BRA", "BEEF", 2019, Measure::PerCapitaKg, Some(25.0)),
    ]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].location_code, "BRA");
  }

  #[test]
  fn unknown_location_passes_through_as_name() {
    let rows = pivot(&[obs("XYZ", "BEEF", 2019, Measure::PerCapitaKg, Some(1.0))]);
    assert_eq!(rows[0].country_name, "XYZ");
  }

  #[test]
  fn output_sorted_by_location_then_year() {
    let rows = pivot(&[
      obs("USA", "BEEF", 2018, Measure::PerCapitaKg, Some(1.0)),
      obs("ARG", "BEEF", 2019, Measure::PerCapitaKg, Some(2.0)),
      obs("ARG", "BEEF", 2017, Measure::PerCapitaKg, Some(3.0)),
    ]);

    let keys: Vec<(&str, i32)> = rows
      .iter()
      .map(|r| (r.location_code.as_str(), r.year))
      .collect();
    assert_eq!(keys, vec![("ARG", 2017), ("ARG", 2019), ("USA", 2018)]);
  }
}
