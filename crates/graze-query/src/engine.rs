//! The stateless query engine: filter predicates and aggregation verbs over
//! the flattened table.
//!
//! No row is ever mutated in place; every operation produces a new table or
//! result. All operations are pure, idempotent transforms of the immutable
//! session snapshot, and none of them returns an error — a filter that
//! matches nothing yields an empty table.

use std::{cmp::Ordering, collections::HashMap, ops::RangeInclusive};

use graze_core::{flat::FlatRow, observation::Measure};
use serde::{Deserialize, Serialize};

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Conjunction of up to three predicates. Every dashboard query is expressed
/// as a subset of these; an absent field matches everything.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
  /// Country-code set membership.
  pub countries: Option<Vec<String>>,
  /// Closed year range.
  pub years:     Option<RangeInclusive<i32>>,
  /// Meat-type code equality.
  pub meat_type: Option<String>,
}

impl RowFilter {
  pub fn matches(&self, row: &FlatRow) -> bool {
    if let Some(countries) = &self.countries {
      if !countries.iter().any(|c| c == &row.country_code) {
        return false;
      }
    }
    if let Some(years) = &self.years {
      if !years.contains(&row.year) {
        return false;
      }
    }
    if let Some(meat) = &self.meat_type {
      if meat != &row.meat_type_code {
        return false;
      }
    }
    true
  }
}

/// Apply `filter` to `rows`, producing a new table in input order.
pub fn filter(rows: &[FlatRow], filter: &RowFilter) -> Vec<FlatRow> {
  rows.iter().filter(|r| filter.matches(r)).cloned().collect()
}

// ─── Grouped mean ────────────────────────────────────────────────────────────

/// A grouping column of the flattened table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
  Country,
  Year,
  MeatType,
}

impl GroupKey {
  fn key_of(self, row: &FlatRow) -> String {
    match self {
      Self::Country => row.country_code.clone(),
      Self::Year => row.year.to_string(),
      Self::MeatType => row.meat_type_code.clone(),
    }
  }

  fn label_of(self, row: &FlatRow) -> String {
    match self {
      Self::Country => row.country_name.clone(),
      Self::Year => row.year.to_string(),
      Self::MeatType => row.meat_type_label.clone(),
    }
  }
}

/// One output row of [`group_mean`]: the grouping values, their display
/// forms, and the aggregated measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
  /// Grouping values in `by` order (codes; years as decimal strings).
  pub key:   Vec<String>,
  /// Display forms of `key` (country name, meat label, year).
  pub label: Vec<String>,
  pub value: f64,
}

/// Group `rows` by the `by` columns and take the arithmetic mean of
/// `measure` per group.
///
/// Groups appear in first-appearance order. Countries, years, or meat types
/// absent from the input simply do not appear — there is no zero-padding
/// across the full domain.
pub fn group_mean(
  rows: &[FlatRow],
  by: &[GroupKey],
  measure: Measure,
) -> Vec<GroupRow> {
  struct Acc {
    label: Vec<String>,
    sum:   f64,
    count: usize,
  }

  let mut order: Vec<Vec<String>> = Vec::new();
  let mut groups: HashMap<Vec<String>, Acc> = HashMap::new();

  for row in rows {
    let key: Vec<String> = by.iter().map(|k| k.key_of(row)).collect();
    let acc = groups.entry(key.clone()).or_insert_with(|| {
      order.push(key);
      Acc {
        label: by.iter().map(|k| k.label_of(row)).collect(),
        sum:   0.0,
        count: 0,
      }
    });
    acc.sum += measure.of(row);
    acc.count += 1;
  }

  order
    .into_iter()
    .map(|key| {
      let acc = groups.remove(&key).expect("grouped above");
      GroupRow {
        key,
        label: acc.label,
        value: acc.sum / acc.count as f64,
      }
    })
    .collect()
}

// ─── Top N ───────────────────────────────────────────────────────────────────

/// Sort descending by value and take the first `n` rows.
///
/// The sort is stable: ties keep their input order. No secondary key is
/// defined beyond that (see DESIGN.md).
pub fn top_n(groups: &[GroupRow], n: usize) -> Vec<GroupRow> {
  let mut sorted = groups.to_vec();
  sorted.sort_by(|a, b| {
    b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal)
  });
  sorted.truncate(n);
  sorted
}

// ─── Composition share ───────────────────────────────────────────────────────

/// One meat type's share of a country's per-capita consumption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRow {
  pub country_code:       String,
  pub country_name:       String,
  pub meat_type_code:     String,
  pub meat_type_label:    String,
  /// Mean per-capita consumption of this meat type over the filtered rows.
  pub mean_per_capita_kg: f64,
  /// `mean_per_capita_kg` divided by the country's summed mean. Shares for
  /// one country sum to 1.
  pub share:              f64,
}

/// Per country, divide each meat type's mean per-capita consumption by the
/// country's total across all meat types in the filtered set.
///
/// Countries whose total is zero are excluded — a country with no
/// consumption data in the filtered period has no defined composition.
pub fn composition_share(rows: &[FlatRow]) -> Vec<ShareRow> {
  let means =
    group_mean(rows, &[GroupKey::Country, GroupKey::MeatType], Measure::PerCapitaKg);

  let mut totals: HashMap<&str, f64> = HashMap::new();
  for m in &means {
    *totals.entry(m.key[0].as_str()).or_insert(0.0) += m.value;
  }

  means
    .iter()
    .filter(|m| totals[m.key[0].as_str()] > 0.0)
    .map(|m| ShareRow {
      country_code:       m.key[0].clone(),
      country_name:       m.label[0].clone(),
      meat_type_code:     m.key[1].clone(),
      meat_type_label:    m.label[1].clone(),
      mean_per_capita_kg: m.value,
      share:              m.value / totals[m.key[0].as_str()],
    })
    .collect()
}

// ─── Growth between endpoints ────────────────────────────────────────────────

/// One endpoint of a growth computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Endpoint {
  pub year:  i32,
  pub value: f64,
}

/// Period-over-period growth for one country's series, or an explicit
/// "insufficient data" marker. Never 0% as a stand-in, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Trend {
  Change {
    /// Signed percentage: `(v1 - v0) / v0 × 100`.
    percent: f64,
    from:    Endpoint,
    to:      Endpoint,
  },
  /// Single data point, degenerate zero-valued start, or no rows at all.
  Insufficient,
}

/// Growth between the earliest and latest year of `rows` for `measure`.
///
/// `rows` is expected to be the filtered subsequence for a single country;
/// the function orders it by year itself.
pub fn growth_between_endpoints(rows: &[FlatRow], measure: Measure) -> Trend {
  let mut series: Vec<Endpoint> = rows
    .iter()
    .map(|r| Endpoint { year: r.year, value: measure.of(r) })
    .collect();
  series.sort_by_key(|e| e.year);

  let (Some(first), Some(last)) = (series.first(), series.last()) else {
    return Trend::Insufficient;
  };

  if first.value > 0.0 && last.year > first.year {
    Trend::Change {
      percent: (last.value - first.value) / first.value * 100.0,
      from:    *first,
      to:      *last,
    }
  } else {
    Trend::Insufficient
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
