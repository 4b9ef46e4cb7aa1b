use async_trait::async_trait;
use partmatch_normalize::normalize_sku;
use partmatch_types::{MatchResult, MatchType, PartmatchError};
use tracing::debug;

use crate::context::MatchContext;
use crate::strategy::MatchStrategy;

/// A previously verified `(client_id, client_sku) -> product_id`
/// association, read from the per-client mapping cache the Matching
/// Service loaded before running the pipeline.
pub struct CachedMapping;

#[async_trait]
impl MatchStrategy for CachedMapping {
    fn name(&self) -> &'static str {
        "cached_mapping"
    }

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError> {
        let Some(mappings) = ctx.client_mapping else {
            return Ok(None);
        };
        let key = normalize_sku(&ctx.request.client_sku);
        if key.is_empty() {
            return Ok(None);
        }
        let Some(mapping) = mappings.get(&key) else {
            return Ok(None);
        };
        let Some(product) = ctx.products.iter().find(|p| p.id == mapping.product_id) else {
            return Ok(None);
        };

        debug!(sku = %product.sku, "cached mapping match");
        Ok(Some(MatchResult {
            product_id: Some(product.id),
            product_sku: Some(product.sku.clone()),
            product_name: Some(product.name.clone()),
            confidence: ctx.config.confidence_exact_sku,
            match_type: MatchType::CachedMapping,
            needs_review: false,
            pack_qty: product.pack_qty,
        }))
    }
}
