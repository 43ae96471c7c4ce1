//! Typed async client for the Riot League of Legends API.
//!
//! Every operation is a route template resolved against a region and sent
//! through a shared [`api::ApiClient`], which normalizes all failures into
//! [`types::ApiError`].

pub mod api;
pub mod config;
pub mod logging;
pub mod region;
pub mod types;

pub use region::Region;
pub use types::{ApiError, ApiResponse};
