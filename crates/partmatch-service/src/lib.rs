//! # partmatch-service
//!
//! ## Purpose
//!
//! The public entry point of the matching core: [`MatchingService`] wires
//! the catalog/mapping caches (`partmatch-repo`), the capability
//! implementations (`partmatch-capabilities`), and the strategy pipeline
//! (`partmatch-strategies`) into the single operation downstream callers
//! (HTTP handlers, bot framing, batch import — all out of scope here) are
//! expected to drive: `match_item`.
//!
//! Every result also flows through [`Stats`] (thread-safe counters) and
//! the [`AutoSavePolicy`] (best-effort persistence of high-confidence
//! exact matches), mirroring how `ufp_match::engine::Matcher` sits above
//! its own pipeline stages in the teacher repo.

mod autosave;
mod service;
mod stats;

pub use crate::autosave::AutoSavePolicy;
pub use crate::service::MatchingService;
pub use crate::stats::{Stats, StatsSnapshot};
