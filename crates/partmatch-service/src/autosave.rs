use partmatch_repo::MappingCache;
use partmatch_strategies::MatchConfig;
use partmatch_types::{ClientMapping, MatchRequest, MatchResult, MatchType};
use tracing::warn;

const AUTO_SAVEABLE: [MatchType; 3] = [
    MatchType::ExactSku,
    MatchType::ExactName,
    MatchType::CachedMapping,
];

/// Whether a result qualifies for unverified persistence, and the write
/// itself. Failures are logged and swallowed; they must never affect the
/// result already returned to the caller.
pub struct AutoSavePolicy;

impl AutoSavePolicy {
    /// Saves `(client_id, client_sku) -> product_id` as `verified=false`
    /// when every condition in the policy holds. Returns whether a save
    /// was attempted and succeeded.
    pub fn maybe_save(
        &self,
        request: &MatchRequest,
        result: &MatchResult,
        config: &MatchConfig,
        mappings: &MappingCache,
    ) -> bool {
        if !AUTO_SAVEABLE.contains(&result.match_type) {
            return false;
        }
        if result.confidence < config.confidence_exact_name {
            return false;
        }
        let Some(product_id) = result.product_id else {
            return false;
        };
        if request.client_sku.trim().is_empty() {
            return false;
        }
        let Some(client_id) = &request.client_id else {
            return false;
        };

        let mapping = ClientMapping {
            client_id: client_id.clone(),
            client_sku: request.client_sku.clone(),
            product_id,
            confidence: result.confidence,
            match_type: result.match_type,
            verified: false,
            verified_at: None,
        };

        match mappings.upsert(mapping) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, client = %client_id, "auto-save of mapping failed");
                false
            }
        }
    }
}
