//! Workspace umbrella crate for the B2B plumbing-catalog order matcher.
//!
//! `partmatch` re-exports the normalization, attribute-extraction,
//! repository, capability, filter, and strategy layers so applications
//! can drive the full matching pipeline through a single dependency.
//! [`MatchingService`] is the one entry point downstream callers need:
//! build it once from a catalog, a mapping store, and the ML
//! capabilities you have available, then call `match_item` per order
//! line.
//!
//! ## Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use partmatch::{
//!     CatalogCache, MappingCache, MatchConfig, MatchRequest, MatchingService,
//!     NullEmbeddingIndex, NullLlmMatcher,
//! };
//!
//! # async fn demo(catalog_repo: Arc<dyn partmatch::CatalogRepo>, mapping_repo: Arc<dyn partmatch::MappingRepo>) -> Result<(), partmatch::PartmatchError> {
//! let service = MatchingService::new(
//!     Arc::new(CatalogCache::new(catalog_repo)),
//!     Arc::new(MappingCache::new(mapping_repo)),
//!     Arc::new(NullEmbeddingIndex),
//!     Arc::new(NullLlmMatcher),
//!     MatchConfig::default(),
//! );
//!
//! let result = service.match_item(MatchRequest::new("ABC123", "труба ппр 20")).await?;
//! # let _ = result;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`PartmatchConfig`] loads a [`MatchConfig`] from a YAML document via
//! [`PartmatchConfig::from_file`], the same pattern the stage configs
//! in the original pipeline crate used.

mod config;

pub use crate::config::{ConfigLoadError, PartmatchConfig};

pub use partmatch_attributes::extract_all as extract_attributes;
pub use partmatch_capabilities::{
    Candidate, EmbeddingError, EmbeddingIndex, LlmError, LlmMatcher, NullEmbeddingIndex,
    NullLlmMatcher, Suggestion,
};
pub use partmatch_filters::{filter_by_angle, filter_by_category, filter_by_product_type};
pub use partmatch_normalize::{normalize_name, normalize_sku};
pub use partmatch_repo::{CatalogCache, CatalogRepo, MappingCache, MappingRepo, RepoError};
pub use partmatch_service::{AutoSavePolicy, MatchingService, Stats, StatsSnapshot};
pub use partmatch_strategies::{
    default_pipeline, fuzzy_name_score, MatchConfig, MatchContext, MatchStrategy,
};
pub use partmatch_types::{
    Attributes, ClientId, ClientMapping, MatchRequest, MatchResult, MatchType, PartmatchError,
    Product, ProductId,
};
