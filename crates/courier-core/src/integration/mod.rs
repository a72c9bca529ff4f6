//! Integration layer - collaborators the command engine depends on.
//!
//! - [`Client`]: the live connection (own identity, store, send path)
//! - [`EntityStore`]: id to entity resolution
//! - [`EntityCache`]: the in-memory [`EntityStore`] used when caching is enabled

pub mod client;
pub mod store;

pub use client::{ApiError, ApiResult, BoxedClient, Client};
pub use store::{EntityCache, EntityStore};
