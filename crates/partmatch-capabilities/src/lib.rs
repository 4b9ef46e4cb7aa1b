//! Capability interfaces for the two optional, externally-backed
//! matching stages: the Embedding Index (semantic nearest-neighbor
//! search) and the LLM Matcher (last-resort candidate selection).
//!
//! Both are fallible and both ship a null implementation so the
//! strategy pipeline degrades to the deterministic stages alone when
//! `enable_ml_matching = false`, or in tests that don't want a live
//! backend.

mod embedding;
mod error;
mod llm;

pub use embedding::{EmbeddingIndex, NullEmbeddingIndex};
pub use error::{EmbeddingError, LlmError};
pub use llm::{Candidate, LlmMatcher, NullLlmMatcher, Suggestion};
