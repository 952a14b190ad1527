//! Read path: flatten persisted documents into the analytical row set and
//! run filter/aggregation queries over it.
//!
//! Everything here is pure and side-effect-free apart from
//! [`snapshot::Snapshot::load`], which reads the document collection once per
//! analysis session. Query operations never fail; an empty result means the
//! current filter combination matched nothing and is rendered as such by the
//! caller.

pub mod engine;
pub mod error;
pub mod flatten;
pub mod snapshot;

pub use error::{Error, Result};
pub use snapshot::Snapshot;
