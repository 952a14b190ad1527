//! Integration tests for `SqliteStore` against an in-memory database.

use graze_core::{
  document::{CountryDocument, MeatMeasurement, YearRecord},
  observation::{Measure, RawObservation},
  store::DocumentStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn doc(code: &str, name: &str, year: i32) -> CountryDocument {
  CountryDocument {
    location_code:  code.into(),
    country_name:   name.into(),
    yearly_records: vec![YearRecord {
      year,
      meat_measurements: vec![MeatMeasurement {
        meat_type_code:        "BEEF".into(),
        per_capita_kg:         25.0,
        total_thousand_tonnes: 0.0,
      }],
    }],
  }
}

#[tokio::test]
async fn find_all_on_fresh_store_is_empty() {
  let s = store().await;
  assert!(s.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_and_find_roundtrip() {
  let s = store().await;
  let original = doc("BRA", "Brazil", 2019);
  s.insert_many(vec![original.clone()]).await.unwrap();

  let found = s.find_all().await.unwrap();
  assert_eq!(found, vec![original]);
}

#[tokio::test]
async fn find_all_orders_by_location_code() {
  let s = store().await;
  s.insert_many(vec![
    doc("USA", "United States", 2019),
    doc("ARG", "Argentina", 2019),
    doc("BRA", "Brazil", 2019),
  ])
  .await
  .unwrap();

  let codes: Vec<String> = s
    .find_all()
    .await
    .unwrap()
    .into_iter()
    .map(|d| d.location_code)
    .collect();
  assert_eq!(codes, vec!["ARG", "BRA", "USA"]);
}

#[tokio::test]
async fn replace_all_discards_the_previous_collection() {
  let s = store().await;
  s.insert_many(vec![doc("OLD", "Stale", 2000)]).await.unwrap();

  s.replace_all(vec![doc("BRA", "Brazil", 2019), doc("ARG", "Argentina", 2019)])
    .await
    .unwrap();

  let found = s.find_all().await.unwrap();
  assert_eq!(found.len(), 2);
  assert!(found.iter().all(|d| d.location_code != "OLD"));
}

#[tokio::test]
async fn duplicate_location_code_fails_the_write() {
  let s = store().await;
  s.insert_many(vec![doc("BRA", "Brazil", 2019)]).await.unwrap();

  let err = s.insert_many(vec![doc("BRA", "Brazil", 2020)]).await.unwrap_err();
  assert!(matches!(err, crate::Error::Database { step: "write", .. }));
}

#[tokio::test]
async fn pipeline_output_persists_and_reloads() {
  let s = store().await;

  let observations = vec![
    RawObservation {
      location_code:  "BRA".into(),
      meat_type_code: "POULTRY".into(),
      year:           2019,
      measure:        Measure::PerCapitaKg,
      value:          Some(40.0),
    },
    RawObservation {
      location_code:  "BRA".into(),
      meat_type_code: "POULTRY".into(),
      year:           2019,
      measure:        Measure::TotalThousandTonnes,
      value:          Some(8000.0),
    },
  ];

  graze_pipeline::run_load(&s, &observations).await.unwrap();

  let docs = s.find_all().await.unwrap();
  assert_eq!(docs.len(), 1);
  assert_eq!(docs[0].country_name, "Brazil");
  assert_eq!(docs[0].yearly_records[0].meat_measurements[0].per_capita_kg, 40.0);
}
