use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Closed set of outcomes a matching strategy (or the orchestrator's
/// final fallback) may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    ExactSku,
    ExactName,
    CachedMapping,
    FuzzySku,
    FuzzyName,
    LlmMatch,
    NotFound,
}

impl MatchType {
    pub fn is_found(self) -> bool {
        !matches!(self, MatchType::NotFound)
    }
}

/// The outcome of resolving one `MatchRequest`. `product_id` is set iff
/// `match_type != NotFound`; `not_found` always carries `confidence = 0`
/// and `needs_review = true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub product_id: Option<ProductId>,
    pub product_sku: Option<String>,
    pub product_name: Option<String>,
    pub confidence: f32,
    pub match_type: MatchType,
    pub needs_review: bool,
    pub pack_qty: u32,
}

impl MatchResult {
    pub fn not_found() -> Self {
        Self {
            product_id: None,
            product_sku: None,
            product_name: None,
            confidence: 0.0,
            match_type: MatchType::NotFound,
            needs_review: true,
            pack_qty: 1,
        }
    }

    /// `true` when this result represents a well-formed catalog hit,
    /// i.e. every universal invariant in the testable-properties section
    /// holds for it.
    pub fn is_well_formed(&self) -> bool {
        let product_present = self.product_id.is_some();
        let found = self.match_type.is_found();
        if found != product_present {
            return false;
        }
        if self.match_type == MatchType::NotFound
            && (!self.needs_review || self.confidence != 0.0)
        {
            return false;
        }
        (0.0..=100.0).contains(&self.confidence)
    }
}
