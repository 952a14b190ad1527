//! Document building: fold wide rows into the three-level nested per-country
//! document shape.
//!
//! Explicit two-level grouping (location → year → meat type) rather than a
//! library pivot, so the ordering guarantees are ours: documents keep the
//! input order of locations, year records are ascending by year, and
//! measurements keep the order in which their meat type first appeared.

use std::collections::{BTreeMap, HashMap};

use graze_core::{
  Error, Result,
  document::{CountryDocument, MeatMeasurement, YearRecord},
  observation::WideRow,
};

/// Measurements for one year, in meat-type first-appearance order.
#[derive(Default)]
struct YearGroup {
  measurements: Vec<MeatMeasurement>,
  by_meat:      HashMap<String, usize>,
}

impl YearGroup {
  fn add(&mut self, row: &WideRow) {
    match self.by_meat.get(&row.meat_type_code) {
      Some(&idx) => {
        // Duplicate (location, year, meat) keys are summed, mirroring the
        // pivot's handling of duplicate source rows.
        self.measurements[idx].per_capita_kg += row.per_capita_kg;
        self.measurements[idx].total_thousand_tonnes +=
          row.total_thousand_tonnes;
      }
      None => {
        self.by_meat.insert(row.meat_type_code.clone(), self.measurements.len());
        self.measurements.push(MeatMeasurement {
          meat_type_code:        row.meat_type_code.clone(),
          per_capita_kg:         row.per_capita_kg,
          total_thousand_tonnes: row.total_thousand_tonnes,
        });
      }
    }
  }
}

struct CountryGroup {
  country_name: String,
  years:        BTreeMap<i32, YearGroup>,
}

/// Build one [`CountryDocument`] per location present in `wide_rows`.
///
/// All rows for a location must carry the same country name;
/// [`Error::InconsistentCountryName`] otherwise.
pub fn build(wide_rows: &[WideRow]) -> Result<Vec<CountryDocument>> {
  let mut order: Vec<String> = Vec::new();
  let mut groups: HashMap<String, CountryGroup> = HashMap::new();

  for row in wide_rows {
    if !groups.contains_key(&row.location_code) {
      order.push(row.location_code.clone());
      groups.insert(row.location_code.clone(), CountryGroup {
        country_name: row.country_name.clone(),
        years:        BTreeMap::new(),
      });
    }

    let group = groups.get_mut(&row.location_code).expect("inserted above");
    if group.country_name != row.country_name {
      return Err(Error::InconsistentCountryName {
        code:  row.location_code.clone(),
        first: group.country_name.clone(),
        other: row.country_name.clone(),
      });
    }

    group.years.entry(row.year).or_default().add(row);
  }

  let documents = order
    .into_iter()
    .map(|code| {
      let group = groups.remove(&code).expect("grouped above");
      CountryDocument {
        location_code:  code,
        country_name:   group.country_name,
        yearly_records: group
          .years
          .into_iter()
          .map(|(year, yg)| YearRecord {
            year,
            meat_measurements: yg.measurements,
          })
          .collect(),
      }
    })
    .collect();

  Ok(documents)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
