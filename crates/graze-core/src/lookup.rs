//! Fixed lookup tables: country names, aggregate-region codes, and meat-type
//! display labels.
//!
//! All lookups degrade gracefully: an unmapped code is returned unchanged, so
//! a missing mapping surfaces visibly in analysis labels instead of halting
//! processing. Callers that care about data quality log the miss.

// ─── Country names ───────────────────────────────────────────────────────────

/// Location code → display name for every code known to appear in the source
/// data set. Aggregate codes are mapped too; they are excluded from analysis
/// by [`is_aggregate`], not by this table.
const COUNTRY_NAMES: &[(&str, &str)] = &[
  ("ARG", "Argentina"),
  ("AUS", "Australia"),
  ("BGD", "Bangladesh"),
  ("BRA", "Brazil"),
  ("BRICS", "BRICS"),
  ("CAN", "Canada"),
  ("CHE", "Switzerland"),
  ("CHL", "Chile"),
  ("CHN", "China"),
  ("COL", "Colombia"),
  ("DZA", "Algeria"),
  ("EGY", "Egypt"),
  ("ETH", "Ethiopia"),
  ("EU28", "European Union (28)"),
  ("GBR", "United Kingdom"),
  ("HTI", "Haiti"),
  ("IDN", "Indonesia"),
  ("IND", "India"),
  ("IRN", "Iran"),
  ("ISR", "Israel"),
  ("JPN", "Japan"),
  ("KAZ", "Kazakhstan"),
  ("KOR", "South Korea"),
  ("MEX", "Mexico"),
  ("MOZ", "Mozambique"),
  ("MYS", "Malaysia"),
  ("NGA", "Nigeria"),
  ("NOR", "Norway"),
  ("NZL", "New Zealand"),
  ("OECD", "OECD"),
  ("PAK", "Pakistan"),
  ("PER", "Peru"),
  ("PHL", "Philippines"),
  ("PRY", "Paraguay"),
  ("RUS", "Russia"),
  ("SAU", "Saudi Arabia"),
  ("SDN", "Sudan"),
  ("SSA", "Sub-Saharan Africa"),
  ("THA", "Thailand"),
  ("TUR", "Turkey"),
  ("TZA", "Tanzania"),
  ("UKR", "Ukraine"),
  ("URY", "Uruguay"),
  ("USA", "United States"),
  ("VNM", "Vietnam"),
  ("ZAF", "South Africa"),
  ("ZMB", "Zambia"),
];

/// Resolve a location code to its display name. Unknown codes pass through
/// unchanged.
pub fn country_name(code: &str) -> &str {
  COUNTRY_NAMES
    .iter()
    .find(|(c, _)| *c == code)
    .map(|(_, name)| *name)
    .unwrap_or(code)
}

// ─── Aggregate regions ───────────────────────────────────────────────────────

/// Synthetic codes representing bloc/region/world totals rather than single
/// countries. Rows for these are excluded before pivoting — an aggregate row
/// double-counts its underlying countries.
const AGGREGATE_CODES: &[&str] = &["WLD", "OECD", "BRICS", "EU28", "SSA"];

/// Whether `code` denotes a synthetic aggregate region.
pub fn is_aggregate(code: &str) -> bool { AGGREGATE_CODES.contains(&code) }

// ─── Meat-type labels ────────────────────────────────────────────────────────

const MEAT_LABELS: &[(&str, &str)] = &[
  ("POULTRY", "Poultry"),
  ("BEEF", "Beef"),
  ("PIG", "Pork"),
  ("SHEEP", "Sheep"),
];

/// Translate a meat-type code to its display label. Unknown codes pass
/// through unchanged — same fallback policy as [`country_name`], for the
/// same operability reason.
pub fn meat_label(code: &str) -> &str {
  MEAT_LABELS
    .iter()
    .find(|(c, _)| *c == code)
    .map(|(_, label)| *label)
    .unwrap_or(code)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_country_resolves() {
    assert_eq!(country_name("BRA"), "Brazil");
    assert_eq!(country_name("KOR"), "South Korea");
  }

  #[test]
  fn unknown_country_falls_back_to_code() {
    assert_eq!(country_name("XYZ"), "XYZ");
  }

  #[test]
  fn aggregates_are_flagged() {
    for code in ["WLD", "OECD", "BRICS", "EU28", "SSA"] {
      assert!(is_aggregate(code), "{code} should be an aggregate");
    }
    assert!(!is_aggregate("BRA"));
    assert!(!is_aggregate("USA"));
  }

  #[test]
  fn meat_labels_translate_with_fallback() {
    assert_eq!(meat_label("PIG"), "Pork");
    assert_eq!(meat_label("POULTRY"), "Poultry");
    assert_eq!(meat_label("GOAT"), "GOAT");
  }
}
