//! Domain Layer
//!
//! Business rules with no infrastructure dependencies:
//!
//! - [`listing`]: the property listing record, its validation, and the
//!   [`CatalogStore`](listing::CatalogStore) port implemented by adapters.

pub mod listing;
