//! Property Listing Bounded Context
//!
//! The rental property record, its validation rules, and the store port.

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::{LOCATION_MAX_CHARS, NewListing, PropertyListing, TITLE_MAX_CHARS};
pub use errors::{CatalogError, FieldProblem, ListingField, ValidationError};
pub use repository::CatalogStore;
#[cfg(test)]
pub use repository::MockCatalogStore;
pub use value_objects::{ListingId, Price};
