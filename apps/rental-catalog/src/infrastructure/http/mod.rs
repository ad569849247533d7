//! HTTP adapter.
//!
//! Inbound adapter serving the server-rendered list and add pages.

mod controller;
mod request;
pub mod views;

pub use controller::{AppState, create_router};
pub use request::AddListingForm;
