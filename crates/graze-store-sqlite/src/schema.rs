//! SQL schema for the graze SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One document per non-aggregate country. The collection is replaced
-- wholesale on each data refresh; no row is ever updated in place.
CREATE TABLE IF NOT EXISTS documents (
    location_code  TEXT PRIMARY KEY,  -- ISO-3 style code; the join key
    country_name   TEXT NOT NULL,
    yearly_records TEXT NOT NULL      -- JSON array of YearRecord
);

PRAGMA user_version = 1;
";
