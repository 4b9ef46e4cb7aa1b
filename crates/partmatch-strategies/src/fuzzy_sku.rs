use async_trait::async_trait;
use partmatch_normalize::normalize_sku;
use partmatch_types::{MatchResult, MatchType, PartmatchError};
use tracing::debug;

use crate::context::MatchContext;
use crate::fuzzy::ratio;
use crate::strategy::MatchStrategy;

/// Levenshtein-ratio fuzzy SKU match: typos and transpositions in an
/// otherwise-correct SKU, e.g. `"202O51110"` (letter O for zero).
pub struct FuzzySku;

#[async_trait]
impl MatchStrategy for FuzzySku {
    fn name(&self) -> &'static str {
        "fuzzy_sku"
    }

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError> {
        let query = normalize_sku(&ctx.request.client_sku);
        if query.is_empty() {
            return Ok(None);
        }

        let best = ctx
            .products
            .iter()
            .map(|p| (p, ratio(&query, &normalize_sku(&p.sku))))
            .filter(|(_, r)| *r >= 90.0)
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap());

        let Some((product, best_ratio)) = best else {
            return Ok(None);
        };

        debug!(sku = %product.sku, ratio = best_ratio, "fuzzy sku match");
        Ok(Some(MatchResult {
            product_id: Some(product.id),
            product_sku: Some(product.sku.clone()),
            product_name: Some(product.name.clone()),
            confidence: ctx.config.confidence_fuzzy_sku * best_ratio / 100.0,
            match_type: MatchType::FuzzySku,
            needs_review: best_ratio < 95.0,
            pack_qty: product.pack_qty,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use partmatch_capabilities::{NullEmbeddingIndex, NullLlmMatcher};
    use partmatch_types::{MatchRequest, Product};

    fn ctx<'a>(
        request: &'a MatchRequest,
        products: &'a [Product],
        config: &'a MatchConfig,
        embedding: &'a NullEmbeddingIndex,
        llm: &'a NullLlmMatcher,
    ) -> MatchContext<'a> {
        MatchContext {
            request,
            products,
            client_mapping: None,
            embedding_index: embedding,
            llm_matcher: llm,
            config,
        }
    }

    #[tokio::test]
    async fn near_match_accepted_above_threshold() {
        let product = Product::new("202051110R", "отвод 110");
        let products = vec![product];
        let request = MatchRequest::new("2O2051110R", "");
        let config = MatchConfig::default();
        let (embedding, llm) = (NullEmbeddingIndex, NullLlmMatcher);
        let c = ctx(&request, &products, &config, &embedding, &llm);

        let result = FuzzySku.match_one(&c).await.unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn distant_sku_rejected() {
        let product = Product::new("202051110R", "отвод 110");
        let products = vec![product];
        let request = MatchRequest::new("ZZZZZZZZZZ", "");
        let config = MatchConfig::default();
        let (embedding, llm) = (NullEmbeddingIndex, NullLlmMatcher);
        let c = ctx(&request, &products, &config, &embedding, &llm);

        assert!(FuzzySku.match_one(&c).await.unwrap().is_none());
    }
}
