//! List Listings Use Case

use std::sync::Arc;

use crate::domain::listing::{CatalogError, CatalogStore, PropertyListing};

/// Use case for reading the whole catalog.
pub struct ListListingsUseCase<S>
where
    S: CatalogStore,
{
    store: Arc<S>,
}

impl<S> ListListingsUseCase<S>
where
    S: CatalogStore,
{
    /// Create a new `ListListingsUseCase`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Return every listing in insertion order.
    pub async fn execute(&self) -> Result<Vec<PropertyListing>, CatalogError> {
        match self.store.list_all().await {
            Ok(listings) => {
                tracing::debug!(count = listings.len(), "Listings loaded");
                Ok(listings)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load listings");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::CreateListingDto;
    use crate::application::use_cases::CreateListingUseCase;
    use crate::infrastructure::persistence::InMemoryCatalogStore;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let list = ListListingsUseCase::new(Arc::new(InMemoryCatalogStore::new()));
        assert!(list.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fresh_call_sees_new_listing() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let list = ListListingsUseCase::new(Arc::clone(&store));
        let create = CreateListingUseCase::new(Arc::clone(&store));

        assert_eq!(list.execute().await.unwrap().len(), 0);

        create
            .execute(CreateListingDto::new("Loft A", "Sunny loft", "1200.50", "Downtown"))
            .await
            .unwrap();

        let listings = list.execute().await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title(), "Loft A");
    }
}
