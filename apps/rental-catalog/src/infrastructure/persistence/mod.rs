//! Persistence Adapters
//!
//! Implementations of the `CatalogStore` port.

pub mod in_memory;
pub mod turso_store;

pub use in_memory::InMemoryCatalogStore;
pub use turso_store::{IN_MEMORY_PATH, TursoCatalogStore};
