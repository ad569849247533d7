//! Create Listing Use Case

use std::sync::Arc;

use crate::application::dto::CreateListingDto;
use crate::domain::listing::{CatalogError, CatalogStore, NewListing, PropertyListing};

/// Use case for adding a listing to the catalog.
pub struct CreateListingUseCase<S>
where
    S: CatalogStore,
{
    store: Arc<S>,
}

impl<S> CreateListingUseCase<S>
where
    S: CatalogStore,
{
    /// Create a new `CreateListingUseCase`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate the input and persist it as a new listing.
    ///
    /// Nothing is written when validation fails.
    pub async fn execute(&self, dto: CreateListingDto) -> Result<PropertyListing, CatalogError> {
        // 1. Validate
        let new_listing =
            match NewListing::parse(&dto.title, &dto.description, &dto.price, &dto.location) {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::info!(
                        problems = e.problems().len(),
                        error = %e,
                        "Listing rejected by validation"
                    );
                    return Err(e.into());
                }
            };

        // 2. Persist
        match self.store.insert(new_listing).await {
            Ok(listing) => {
                tracing::info!(
                    listing_id = %listing.id(),
                    title = listing.title(),
                    price = %listing.price(),
                    "Listing created"
                );
                Ok(listing)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist listing");
                Err(e)
            }
        }
    }
}
