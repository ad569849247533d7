//! In-memory catalog store for testing and local development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::listing::{CatalogError, CatalogStore, ListingId, NewListing, PropertyListing};

/// In-memory implementation of `CatalogStore`.
///
/// Ids are assigned from 1 upward. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    listings: RwLock<Vec<PropertyListing>>,
}

impl InMemoryCatalogStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_all(&self) -> Result<Vec<PropertyListing>, CatalogError> {
        let listings = self
            .listings
            .read()
            .map_err(|_| CatalogError::storage("in-memory catalog lock poisoned"))?;
        Ok(listings.clone())
    }

    async fn insert(&self, listing: NewListing) -> Result<PropertyListing, CatalogError> {
        let mut listings = self
            .listings
            .write()
            .map_err(|_| CatalogError::storage("in-memory catalog lock poisoned"))?;

        let next_id = listings.last().map_or(1, |last| last.id().value() + 1);
        let stored = listing.into_listing(ListingId::new(next_id));
        listings.push(stored.clone());
        Ok(stored)
    }
}
