//! Core types and trait definitions for the graze consumption-analytics
//! pipeline.
//!
//! This crate is deliberately free of I/O, HTTP, and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod document;
pub mod error;
pub mod flat;
pub mod lookup;
pub mod observation;
pub mod store;

pub use error::{Error, Result};
