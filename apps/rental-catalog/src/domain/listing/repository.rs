//! Catalog Store Port
//!
//! Persistence abstraction for property listings.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::{NewListing, PropertyListing};
use super::errors::CatalogError;

/// Store owning the collection of property listings.
///
/// Listings are append-only: there is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Return every stored listing in insertion order.
    ///
    /// Each call re-reads current state. An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Storage`] if the backend cannot be read.
    async fn list_all(&self) -> Result<Vec<PropertyListing>, CatalogError>;

    /// Persist a validated listing and return it with its new id.
    ///
    /// The write is atomic: either the whole record is stored or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Storage`] if the write is rejected.
    async fn insert(&self, listing: NewListing) -> Result<PropertyListing, CatalogError>;
}
