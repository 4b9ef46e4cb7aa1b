//! Catalog and per-client mapping repository interfaces.
//!
//! The repositories themselves are out of scope (any storage engine may
//! back them); this crate only specifies the trait boundary plus the
//! process-wide caches the Matching Service needs in front of them:
//! [`CatalogCache`] (write-once per process, single-loader guarded) and
//! [`MappingCache`] (per-client, invalidated on write).

mod catalog;
mod error;
mod mapping;

pub use catalog::{CatalogCache, CatalogRepo};
pub use error::RepoError;
pub use mapping::{MappingCache, MappingRepo};
