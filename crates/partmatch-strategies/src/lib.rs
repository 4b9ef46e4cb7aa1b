//! # partmatch-strategies
//!
//! ## Purpose
//!
//! The ordered matching pipeline: a fixed chain of [`MatchStrategy`]
//! implementations, each trying to resolve one client order line
//! against the catalog in [`MatchContext`]. The first strategy to
//! return `Some(_)` wins — there is no scoring across strategies, only
//! within the strategy that produced a result.
//!
//! ## Pipeline order
//!
//! [`default_pipeline`] builds, in order: [`ExactSku`], [`ExactName`],
//! [`CachedMapping`], [`FuzzySku`], [`Hybrid`], [`Llm`], then
//! [`SemanticFallback`]. The first five are grounded directly in the
//! spec; the last two consult the ML capabilities in
//! `partmatch-capabilities` and no-op when those are disabled or
//! absent.
//!
//! ## Configuration
//!
//! [`MatchConfig`] carries every threshold and confidence constant the
//! strategies reference, with `serde` defaults so a deployment only
//! needs to override what it cares to tune.

mod cached_mapping;
mod config;
mod context;
mod exact_name;
mod exact_sku;
mod fuzzy;
mod fuzzy_sku;
mod hybrid;
mod hybrid_candidates;
mod llm;
mod pipeline;
mod semantic_fallback;
mod strategy;

pub use crate::cached_mapping::CachedMapping;
pub use crate::config::MatchConfig;
pub use crate::context::MatchContext;
pub use crate::exact_name::ExactName;
pub use crate::exact_sku::ExactSku;
pub use crate::fuzzy::{fuzzy_name_score, ratio, token_set_ratio, token_sort_ratio};
pub use crate::fuzzy_sku::FuzzySku;
pub use crate::hybrid::Hybrid;
pub use crate::llm::Llm;
pub use crate::pipeline::default_pipeline;
pub use crate::semantic_fallback::SemanticFallback;
pub use crate::strategy::MatchStrategy;
