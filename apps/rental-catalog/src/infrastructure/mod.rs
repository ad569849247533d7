//! Infrastructure Layer
//!
//! Adapters connecting the application to the outside world:
//!
//! - [`persistence`]: `CatalogStore` implementations (Turso, in-memory)
//! - [`http`]: axum router and server-rendered HTML views

pub mod http;
pub mod persistence;
