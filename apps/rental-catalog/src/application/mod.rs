//! Application Layer
//!
//! Orchestrates domain logic through use cases:
//!
//! - **Use Cases**: create a listing, list all listings
//! - **DTOs**: data crossing the presentation boundary

pub mod dto;
pub mod use_cases;

pub use dto::*;
pub use use_cases::*;
