//! External Services
//!
//! This module contains services that interact with external systems:
//! - catalog: manifest loads (with cache) and image downloads

pub mod catalog;

// Re-export commonly used types for convenience
pub use catalog::{spawn_catalog_service, CatalogRequest, CatalogResponse, ManifestCache};
