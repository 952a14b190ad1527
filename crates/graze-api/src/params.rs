//! Shared query parameters: every read endpoint accepts the same filter
//! fields, mapped onto [`RowFilter`].
//!
//! `countries` is a comma-separated list of location codes; `from`/`to`
//! bound the closed year range; `meat` is a meat-type code; `measure` is a
//! raw measure token (`KG_CAP`, the default, or `THND_TONNE`).

use graze_core::observation::Measure;
use graze_query::engine::{GroupKey, RowFilter};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct FilterParams {
  /// Comma-separated country codes, e.g. `BRA,USA,CHN`.
  pub countries: Option<String>,
  /// First year of the closed analysis range.
  pub from:      Option<i32>,
  /// Last year of the closed analysis range.
  pub to:        Option<i32>,
  /// Meat-type code, e.g. `POULTRY`.
  pub meat:      Option<String>,
  /// Measure token; defaults to `KG_CAP`.
  pub measure:   Option<String>,
}

impl FilterParams {
  pub fn row_filter(&self) -> RowFilter {
    let years = match (self.from, self.to) {
      (None, None) => None,
      (from, to) => {
        Some(from.unwrap_or(i32::MIN)..=to.unwrap_or(i32::MAX))
      }
    };

    RowFilter {
      countries: self.countries.as_deref().map(split_csv),
      years,
      meat_type: self.meat.clone(),
    }
  }

  pub fn measure(&self) -> Result<Measure, ApiError> {
    match self.measure.as_deref() {
      None => Ok(Measure::PerCapitaKg),
      Some(token) => {
        token.parse().map_err(|e: graze_core::Error| {
          ApiError::BadRequest(e.to_string())
        })
      }
    }
  }
}

fn split_csv(s: &str) -> Vec<String> {
  s.split(',')
    .map(|t| t.trim().to_owned())
    .filter(|t| !t.is_empty())
    .collect()
}

/// Parse a comma-separated `by` list (`country`, `year`, `meat_type`) into
/// grouping columns.
pub fn parse_group_keys(s: &str) -> Result<Vec<GroupKey>, ApiError> {
  s.split(',')
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(|t| match t {
      "country" => Ok(GroupKey::Country),
      "year" => Ok(GroupKey::Year),
      "meat_type" => Ok(GroupKey::MeatType),
      other => Err(ApiError::BadRequest(format!(
        "unknown grouping column: {other:?}"
      ))),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use graze_query::engine::GroupKey;

  use super::{FilterParams, parse_group_keys};

  #[test]
  fn csv_countries_are_split_and_trimmed() {
    let params = FilterParams {
      countries: Some("BRA, USA ,CHN".into()),
      ..Default::default()
    };
    assert_eq!(
      params.row_filter().countries,
      Some(vec!["BRA".to_owned(), "USA".to_owned(), "CHN".to_owned()])
    );
  }

  #[test]
  fn half_open_year_params_still_bound_the_range() {
    let params = FilterParams { to: Some(2017), ..Default::default() };
    let filter = params.row_filter();
    assert!(filter.years.as_ref().unwrap().contains(&1990));
    assert!(!filter.years.as_ref().unwrap().contains(&2018));
  }

  #[test]
  fn bad_measure_token_is_a_bad_request() {
    let params =
      FilterParams { measure: Some("TONNES".into()), ..Default::default() };
    assert!(params.measure().is_err());
  }

  #[test]
  fn group_keys_parse() {
    assert_eq!(
      parse_group_keys("country, meat_type").unwrap(),
      vec![GroupKey::Country, GroupKey::MeatType]
    );
    assert!(parse_group_keys("country,bogus").is_err());
  }
}
