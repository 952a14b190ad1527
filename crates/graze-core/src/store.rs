//! The `DocumentStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `graze-store-sqlite`).
//! Higher layers (`graze-pipeline`, `graze-query`, `graze-api`) depend on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use crate::document::CountryDocument;

/// Abstraction over the per-country document collection.
///
/// The write path performs a full-collection replace (delete-all then
/// insert-all); there is no partial update. The two steps are not atomic: a
/// reader that queries between them observes an empty collection. This is a
/// documented eventual-consistency gap of the batch refresh, not something
/// the store masks.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DocumentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every document in the collection, ordered by location code.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<CountryDocument>, Self::Error>> + Send + '_;

  /// Delete every document in the collection.
  fn delete_all(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert a batch of documents. Fails if a location code already exists.
  fn insert_many(
    &self,
    docs: Vec<CountryDocument>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Replace the whole collection: delete-all followed by insert-many.
  fn replace_all(
    &self,
    docs: Vec<CountryDocument>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_ {
    async move {
      self.delete_all().await?;
      self.insert_many(docs).await
    }
  }
}
