// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        missing_docs
    )
)]

//! Rental Catalog - Core Library
//!
//! A small web application for listing and adding rental-property records.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: the `PropertyListing` record, field validation, and the
//!   `CatalogStore` port
//! - **Application**: `CreateListing` and `ListListings` use cases
//! - **Infrastructure**: adapters
//!   - `persistence`: Turso (durable) and in-memory stores
//!   - `http`: axum router and server-rendered HTML views
//!
//! The store is constructed once at startup and injected into the router
//! state; nothing is kept in globals.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::dto::{CreateListingDto, ListingDto};
pub use application::use_cases::{CreateListingUseCase, ListListingsUseCase};
pub use domain::listing::{
    CatalogError, CatalogStore, ListingId, NewListing, Price, PropertyListing, ValidationError,
};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{InMemoryCatalogStore, TursoCatalogStore};
