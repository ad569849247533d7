//! Data Transfer Objects (DTOs)
//!
//! Inputs and outputs of the catalog use cases.

use crate::domain::listing::PropertyListing;

/// Raw input for creating a listing, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateListingDto {
    /// Listing title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Price text; parsed as a non-negative decimal.
    pub price: String,
    /// Location of the property.
    pub location: String,
}

impl CreateListingDto {
    /// Convenience constructor.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price: price.into(),
            location: location.into(),
        }
    }
}

/// Display-ready listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDto {
    /// Storage-assigned id.
    pub id: i64,
    /// Listing title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Price formatted as currency, e.g. `$1,200.50`.
    pub price: String,
    /// Location of the property.
    pub location: String,
}

impl From<&PropertyListing> for ListingDto {
    fn from(listing: &PropertyListing) -> Self {
        Self {
            id: listing.id().value(),
            title: listing.title().to_string(),
            description: listing.description().to_string(),
            price: listing.price().to_currency(),
            location: listing.location().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{ListingId, Price};

    #[test]
    fn listing_dto_formats_price() {
        let listing = PropertyListing::restore(
            ListingId::new(1),
            "Loft A".to_string(),
            "Sunny loft".to_string(),
            Price::parse("1200.5").unwrap(),
            "Downtown".to_string(),
        );

        let dto = ListingDto::from(&listing);

        assert_eq!(dto.id, 1);
        assert_eq!(dto.price, "$1,200.50");
        assert_eq!(dto.location, "Downtown");
    }
}
