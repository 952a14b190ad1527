//! Write path: CSV ingestion, pivot, document building, and the
//! full-replace load against a [`graze_core::store::DocumentStore`].
//!
//! The pipeline is a batch, single-writer job run once per data refresh:
//!
//! ```text
//! raw rows → resolve/exclude → pivot → build documents → replace collection
//! ```

pub mod builder;
pub mod error;
pub mod ingest;
pub mod load;
pub mod pivot;

pub use error::{Error, Result};
pub use load::{LoadSummary, run_load};

#[cfg(test)]
mod tests;
