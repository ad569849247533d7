//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod create_listing;
mod list_listings;

pub use create_listing::CreateListingUseCase;
pub use list_listings::ListListingsUseCase;
