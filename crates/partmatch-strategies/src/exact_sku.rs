use async_trait::async_trait;
use partmatch_normalize::normalize_sku;
use partmatch_types::{MatchResult, MatchType, PartmatchError};
use tracing::debug;

use crate::context::MatchContext;
use crate::strategy::MatchStrategy;

/// Exact SKU match: the normalized client SKU, or (when present) a
/// SKU-shaped token at the front of the client name, against every
/// normalized product SKU.
pub struct ExactSku;

#[async_trait]
impl MatchStrategy for ExactSku {
    fn name(&self) -> &'static str {
        "exact_sku"
    }

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError> {
        let from_sku = normalize_sku(&ctx.request.client_sku);
        let from_name = name_prefix_sku(&ctx.request.client_name);

        for product in ctx.products {
            let candidate_sku = normalize_sku(&product.sku);
            let matches_sku = !from_sku.is_empty() && candidate_sku == from_sku;
            let matches_name_prefix = from_name
                .as_deref()
                .map(|s| s == candidate_sku)
                .unwrap_or(false);

            if matches_sku || matches_name_prefix {
                debug!(sku = %product.sku, "exact sku match");
                return Ok(Some(MatchResult {
                    product_id: Some(product.id),
                    product_sku: Some(product.sku.clone()),
                    product_name: Some(product.name.clone()),
                    confidence: ctx.config.confidence_exact_sku,
                    match_type: MatchType::ExactSku,
                    needs_review: false,
                    pack_qty: product.pack_qty,
                }));
            }
        }

        Ok(None)
    }
}

/// A client name sometimes leads with the supplier's own SKU, e.g.
/// `"202051110R отвод 110"`. Only the first whitespace-delimited token
/// is considered, and only when it contains a digit — a bare word is
/// never mistaken for a SKU.
fn name_prefix_sku(name: &str) -> Option<String> {
    let first = name.split_whitespace().next()?;
    if first.chars().any(|c| c.is_ascii_digit()) {
        Some(normalize_sku(first))
    } else {
        None
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
    async fn matches_normalized_sku() {
        let product = Product::new("202-051-110R", "отвод серый 110");
        let products = vec![product];
        let request = MatchRequest::new("202051110r", "");
        let config = MatchConfig::default();
        let (embedding, llm) = (NullEmbeddingIndex, NullLlmMatcher);
        let c = ctx(&request, &products, &config, &embedding, &llm);

        let result = ExactSku.match_one(&c).await.unwrap().unwrap();
        assert_eq!(result.match_type, MatchType::ExactSku);
        assert_eq!(result.confidence, 100.0);
        assert!(!result.needs_review);
    }

    #[tokio::test]
    async fn matches_sku_prefix_in_name() {
        let product = Product::new("202051110R", "отвод серый 110");
        let products = vec![product];
        let request = MatchRequest::new("", "202051110R отвод 110 серый");
        let config = MatchConfig::default();
        let (embedding, llm) = (NullEmbeddingIndex, NullLlmMatcher);
        let c = ctx(&request, &products, &config, &embedding, &llm);

        let result = ExactSku.match_one(&c).await.unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn no_match_returns_none() {
        let product = Product::new("ABC1", "труба");
        let products = vec![product];
        let request = MatchRequest::new("ZZZ9", "");
        let config = MatchConfig::default();
        let (embedding, llm) = (NullEmbeddingIndex, NullLlmMatcher);
        let c = ctx(&request, &products, &config, &embedding, &llm);

        assert!(ExactSku.match_one(&c).await.unwrap().is_none());
    }
}
