use std::collections::HashMap;

use partmatch_capabilities::{EmbeddingIndex, LlmMatcher};
use partmatch_types::{ClientMapping, MatchRequest, Product};

use crate::config::MatchConfig;

/// Everything one `match_one` call needs. The Matching Service builds
/// one of these per request; strategies never reach past it for
/// catalog or capability access, which keeps them pure and testable in
/// isolation from any repository or network concern.
pub struct MatchContext<'a> {
    pub request: &'a MatchRequest,
    pub products: &'a [Product],
    /// `normalize_sku(client_sku) -> ClientMapping`, already loaded and
    /// cached by the caller. `None` when the request carries no
    /// `client_id`.
    pub client_mapping: Option<&'a HashMap<String, ClientMapping>>,
    pub embedding_index: &'a (dyn EmbeddingIndex + 'a),
    pub llm_matcher: &'a (dyn LlmMatcher + 'a),
    pub config: &'a MatchConfig,
}
