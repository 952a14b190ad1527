//! Cross-stage pipeline tests: pivot + build invariants and the full load
//! against an in-memory store.

use std::{convert::Infallible, sync::Mutex};

use graze_core::{
  document::CountryDocument,
  lookup,
  observation::{Measure, RawObservation},
  store::DocumentStore,
};

use crate::{builder, load::run_load, pivot};

fn obs(
  location: &str,
  meat: &str,
  year: i32,
  measure: Measure,
  value: f64,
) -> RawObservation {
  RawObservation {
    location_code: location.into(),
    meat_type_code: meat.into(),
    year,
    measure,
    value: Some(value),
  }
}

fn sample() -> Vec<RawObservation> {
  vec![
    obs("BRA", "POULTRY", 2019, Measure::PerCapitaKg, 40.0),
    obs("BRA", "POULTRY", 2019, Measure::TotalThousandTonnes, 8000.0),
    obs("BRA", "BEEF", 2019, Measure::PerCapitaKg, 25.0),
    obs("ARG", "BEEF", 2018, Measure::PerCapitaKg, 40.5),
    obs("WLD", "BEEF", 2019, Measure::PerCapitaKg, 6.4),
  ]
}

// ─── Pivot + build invariants ────────────────────────────────────────────────

#[test]
fn end_to_end_scenario_nests_bra_correctly() {
  let docs = builder::build(&pivot::pivot(&[
    obs("BRA", "POULTRY", 2019, Measure::PerCapitaKg, 40.0),
    obs("BRA", "POULTRY", 2019, Measure::TotalThousandTonnes, 8000.0),
    obs("BRA", "BEEF", 2019, Measure::PerCapitaKg, 25.0),
  ]))
  .unwrap();

  assert_eq!(docs.len(), 1);
  let doc = &docs[0];
  assert_eq!(doc.location_code, "BRA");
  assert_eq!(doc.country_name, "Brazil");
  assert_eq!(doc.yearly_records.len(), 1);

  let record = &doc.yearly_records[0];
  assert_eq!(record.year, 2019);
  assert_eq!(record.meat_measurements.len(), 2);

  let poultry = &record.meat_measurements[0];
  assert_eq!(poultry.meat_type_code, "POULTRY");
  assert_eq!(poultry.per_capita_kg, 40.0);
  assert_eq!(poultry.total_thousand_tonnes, 8000.0);

  let beef = &record.meat_measurements[1];
  assert_eq!(beef.meat_type_code, "BEEF");
  assert_eq!(beef.per_capita_kg, 25.0);
  assert_eq!(beef.total_thousand_tonnes, 0.0);
}

#[test]
fn pipeline_is_idempotent() {
  let input = sample();
  let first = builder::build(&pivot::pivot(&input)).unwrap();
  let second = builder::build(&pivot::pivot(&input)).unwrap();
  assert_eq!(first, second);
}

#[test]
fn no_document_carries_an_aggregate_code() {
  let docs = builder::build(&pivot::pivot(&sample())).unwrap();
  assert!(!docs.is_empty());
  assert!(docs.iter().all(|d| !lookup::is_aggregate(&d.location_code)));
}

// ─── run_load against an in-memory store ─────────────────────────────────────

#[derive(Default)]
struct MemStore {
  docs: Mutex<Vec<CountryDocument>>,
}

impl DocumentStore for MemStore {
  type Error = Infallible;

  async fn find_all(&self) -> Result<Vec<CountryDocument>, Infallible> {
    Ok(self.docs.lock().unwrap().clone())
  }

  async fn delete_all(&self) -> Result<(), Infallible> {
    self.docs.lock().unwrap().clear();
    Ok(())
  }

  async fn insert_many(
    &self,
    docs: Vec<CountryDocument>,
  ) -> Result<(), Infallible> {
    self.docs.lock().unwrap().extend(docs);
    Ok(())
  }
}

#[tokio::test]
async fn run_load_replaces_the_collection() {
  let store = MemStore::default();
  store
    .insert_many(vec![CountryDocument {
      location_code:  "OLD".into(),
      country_name:   "Stale".into(),
      yearly_records: vec![],
    }])
    .await
    .unwrap();

  let summary = run_load(&store, &sample()).await.unwrap();
  assert_eq!(summary.observations, 5);
  assert_eq!(summary.documents, 2);

  let docs = store.find_all().await.unwrap();
  assert_eq!(docs.len(), 2);
  assert!(docs.iter().all(|d| d.location_code != "OLD"));
}

#[tokio::test]
async fn run_load_rejects_empty_input() {
  let store = MemStore::default();
  let err = run_load(&store, &[]).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(graze_core::Error::EmptySource(_))
  ));
}

#[tokio::test]
async fn run_load_rejects_aggregate_only_input() {
  let store = MemStore::default();
  let err = run_load(
    &store,
    &[obs("WLD", "BEEF", 2019, Measure::PerCapitaKg, 6.4)],
  )
  .await
  .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(graze_core::Error::EmptySource(_))
  ));
}
