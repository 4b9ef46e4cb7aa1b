use std::time::Duration;

use async_trait::async_trait;
use partmatch_attributes::{embedding_query_text, extract_all};
use partmatch_filters::{effective_category, filter_by_angle, filter_by_category, filter_by_product_type};
use partmatch_types::{Category, MatchResult, MatchType, PartmatchError, Product};
use tracing::{debug, warn};

use crate::context::MatchContext;
use crate::strategy::MatchStrategy;

const EMBEDDING_TOP_K: usize = 50;
const EMBEDDING_MIN_SCORE: f32 = 0.4;
const EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplemented strategy, not present in the original closed pipeline
/// description: when neither Hybrid nor the LLM produce a result but
/// the Embedding Index is configured, rank purely by semantic
/// similarity under the same product-type/category gates Hybrid uses.
/// Always `needs_review`, since no fuzzy text signal corroborates it.
pub struct SemanticFallback;

#[async_trait]
impl MatchStrategy for SemanticFallback {
    fn name(&self) -> &'static str {
        "semantic_fallback"
    }

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError> {
        if !ctx.config.enable_ml_matching || ctx.products.is_empty() {
            return Ok(None);
        }

        let query_text = embedding_query_text(&ctx.request.client_name);
        let search = ctx
            .embedding_index
            .search(&query_text, EMBEDDING_TOP_K, EMBEDDING_MIN_SCORE);

        let hits = match tokio::time::timeout(EMBEDDING_TIMEOUT, search).await {
            Ok(Ok(hits)) if !hits.is_empty() => hits,
            Ok(Ok(_)) => return Ok(None),
            Ok(Err(err)) => {
                warn!(error = %err, "embedding index unavailable for semantic fallback");
                return Ok(None);
            }
            Err(_) => {
                warn!("embedding index timed out for semantic fallback");
                return Ok(None);
            }
        };

        let client = extract_all(&ctx.request.client_name);
        let mut candidates: Vec<(&Product, f32)> = hits
            .into_iter()
            .filter_map(|(id, sim)| ctx.products.iter().find(|p| p.id == id).map(|p| (p, sim)))
            .collect();

        let products: Vec<&Product> = candidates.iter().map(|(p, _)| *p).collect();
        let Some(kept) = filter_by_product_type(&products, client.product_type) else {
            return Ok(None);
        };
        candidates = narrow(candidates, &kept);

        let products: Vec<&Product> = candidates.iter().map(|(p, _)| *p).collect();
        let kept = filter_by_angle(&products, client.angle);
        candidates = narrow(candidates, &kept);

        let effective = effective_category(client.category);
        let products: Vec<&Product> = candidates.iter().map(|(p, _)| *p).collect();
        let kept = filter_by_category(&products, effective);
        if kept.is_empty() {
            // Only an explicitly detected sewer category is strict; a
            // category defaulted from `None` must fall back to the prior
            // survivors instead of emptying the set.
            if client.category == Category::Sewer {
                return Ok(None);
            }
        } else {
            candidates = narrow(candidates, &kept);
        }

        if candidates.is_empty() {
            return Ok(None);
        }

        let (product, similarity) = candidates
            .into_iter()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .expect("non-empty");

        let confidence = (similarity * 100.0).clamp(0.0, 100.0);
        debug!(sku = %product.sku, confidence, "semantic fallback match");
        Ok(Some(MatchResult {
            product_id: Some(product.id),
            product_sku: Some(product.sku.clone()),
            product_name: Some(product.name.clone()),
            confidence,
            match_type: MatchType::FuzzyName,
            needs_review: true,
            pack_qty: product.pack_qty,
        }))
    }
}

fn narrow<'a>(
    candidates: Vec<(&'a Product, f32)>,
    kept: &[&'a Product],
) -> Vec<(&'a Product, f32)> {
    let kept_ids: std::collections::HashSet<_> = kept.iter().map(|p| p.id).collect();
    candidates
        .into_iter()
        .filter(|(p, _)| kept_ids.contains(&p.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use async_trait::async_trait;
    use partmatch_capabilities::{EmbeddingError, EmbeddingIndex, NullLlmMatcher};
    use partmatch_types::{MatchRequest, ProductId};

    struct StubIndex {
        hits: Vec<(ProductId, f32)>,
    }

    #[async_trait]
    impl EmbeddingIndex for StubIndex {
        async fn search(
            &self,
            _query_text: &str,
            _top_k: usize,
            _min_score: f32,
        ) -> Result<Vec<(ProductId, f32)>, EmbeddingError> {
            Ok(self.hits.clone())
        }
    }

    #[tokio::test]
    async fn ranks_by_similarity_when_embedding_available() {
        let product = Product::new("ABC1", "труба ппр 20");
        let id = product.id;
        let products = vec![product];
        let request = MatchRequest::new("", "нечто похожее");
        let config = MatchConfig::default();
        let embedding = StubIndex {
            hits: vec![(id, 0.92)],
        };
        let llm = NullLlmMatcher;
        let c = MatchContext {
            request: &request,
            products: &products,
            client_mapping: None,
            embedding_index: &embedding,
            llm_matcher: &llm,
            config: &config,
        };

        let result = SemanticFallback.match_one(&c).await.unwrap().unwrap();
        assert!(result.needs_review);
        assert_eq!(result.confidence, 92.0);
    }

    #[tokio::test]
    async fn disabled_when_ml_matching_off() {
        let product = Product::new("ABC1", "труба ппр 20");
        let products = vec![product];
        let request = MatchRequest::new("", "нечто похожее");
        let mut config = MatchConfig::default();
        config.enable_ml_matching = false;
        let embedding = StubIndex { hits: vec![] };
        let llm = NullLlmMatcher;
        let c = MatchContext {
            request: &request,
            products: &products,
            client_mapping: None,
            embedding_index: &embedding,
            llm_matcher: &llm,
            config: &config,
        };

        assert!(SemanticFallback.match_one(&c).await.unwrap().is_none());
    }
}
