//! [`SqliteStore`] — the SQLite implementation of [`DocumentStore`].

use std::path::Path;

use graze_core::{
  document::{CountryDocument, YearRecord},
  store::DocumentStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A graze document store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(|source| Error::Database { step: "open", source })?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(|source| Error::Database { step: "open", source })?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(|source| Error::Database { step: "open", source })?;
    Ok(())
  }
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `documents` row.
struct RawDocument {
  location_code:  String,
  country_name:   String,
  yearly_records: String,
}

impl RawDocument {
  fn into_document(self) -> Result<CountryDocument> {
    let yearly_records: Vec<YearRecord> =
      serde_json::from_str(&self.yearly_records).map_err(|source| {
        Error::Json { location_code: self.location_code.clone(), source }
      })?;

    Ok(CountryDocument {
      location_code: self.location_code,
      country_name: self.country_name,
      yearly_records,
    })
  }
}

// ─── DocumentStore impl ──────────────────────────────────────────────────────

impl DocumentStore for SqliteStore {
  type Error = Error;

  async fn find_all(&self) -> Result<Vec<CountryDocument>> {
    let raws: Vec<RawDocument> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT location_code, country_name, yearly_records
           FROM documents
           ORDER BY location_code",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawDocument {
              location_code:  row.get(0)?,
              country_name:   row.get(1)?,
              yearly_records: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(|source| Error::Database { step: "read", source })?;

    raws.into_iter().map(RawDocument::into_document).collect()
  }

  async fn delete_all(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM documents", [])?;
        Ok(())
      })
      .await
      .map_err(|source| Error::Database { step: "write", source })?;
    Ok(())
  }

  async fn insert_many(&self, docs: Vec<CountryDocument>) -> Result<()> {
    // Serialise outside the connection thread so JSON errors surface as
    // store errors with the offending location code.
    let mut rows: Vec<(String, String, String)> = Vec::with_capacity(docs.len());
    for doc in docs {
      let json = serde_json::to_string(&doc.yearly_records).map_err(
        |source| Error::Json { location_code: doc.location_code.clone(), source },
      )?;
      rows.push((doc.location_code, doc.country_name, json));
    }

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO documents (location_code, country_name, yearly_records)
             VALUES (?1, ?2, ?3)",
          )?;
          for (code, name, json) in &rows {
            stmt.execute(rusqlite::params![code, name, json])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(|source| Error::Database { step: "write", source })?;
    Ok(())
  }
}
