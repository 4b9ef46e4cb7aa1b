use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use partmatch_attributes::{embedding_query_text, extract_all, normalize_equal_sizes};
use partmatch_filters::{
    effective_category, filter_by_angle, filter_by_category, filter_by_clamp, filter_by_detachable,
    filter_by_product_type, filter_by_reducer, filter_by_thread_direction, filter_eco_preference,
};
use partmatch_normalize::{normalize_name, normalize_sku};
use partmatch_types::{
    Attributes, Category, Color, FittingSize, MatchResult, MatchType, PartmatchError, Product, ProductId,
};
use tracing::{debug, warn};

use crate::context::MatchContext;
use crate::fuzzy::fuzzy_name_score;
use crate::strategy::MatchStrategy;

const EMBEDDING_TOP_K: usize = 50;
const EMBEDDING_MIN_SCORE: f32 = 0.4;
const EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);
const SEMANTIC_BOOST_MIN_SIMILARITY: f32 = 0.85;
const SEMANTIC_BOOST_MIN_FUZZY: f32 = 40.0;

/// The crux of the pipeline: semantic pre-filter, hard attribute
/// gating, fuzzy text scoring, a semantic-similarity boost, a
/// threshold, and an ordered chain of post-filters over the survivors.
pub struct Hybrid;

#[async_trait]
impl MatchStrategy for Hybrid {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError> {
        if ctx.products.is_empty() {
            return Ok(None);
        }
        let client = extract_all(&ctx.request.client_name);
        let normalized_query = normalize_name(&ctx.request.client_name);
        if normalized_query.is_empty() {
            return Ok(None);
        }

        let similarity = semantic_pre_filter(ctx, &ctx.request.client_name).await;
        let pool: Vec<&Product> = match &similarity {
            Some(hits) if !hits.is_empty() => ctx
                .products
                .iter()
                .filter(|p| hits.contains_key(&p.id))
                .collect(),
            _ => ctx.products.iter().collect(),
        };

        let survivors: Vec<&Product> = pool
            .into_iter()
            .filter(|p| !hard_gate_rejects(&client, p))
            .collect();

        let mut scored: Vec<(&Product, f32)> = survivors
            .into_iter()
            .map(|p| {
                let mut score = fuzzy_name_score(&normalized_query, &normalize_name(&p.name));
                if let Some(hits) = &similarity {
                    if let Some(&sem) = hits.get(&p.id) {
                        if sem >= SEMANTIC_BOOST_MIN_SIMILARITY && score > SEMANTIC_BOOST_MIN_FUZZY {
                            score = score.max(sem * 100.0);
                        }
                    }
                }
                (p, score)
            })
            .filter(|(_, score)| *score >= ctx.config.fuzzy_threshold)
            .collect();

        if scored.is_empty() {
            return Ok(None);
        }

        scored = match apply_post_filters(&client, scored) {
            Some(s) => s,
            None => return Ok(None),
        };
        if scored.is_empty() {
            return Ok(None);
        }

        let (product, score) = scored
            .into_iter()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .expect("non-empty after filtering");

        debug!(sku = %product.sku, score, "hybrid match");
        Ok(Some(MatchResult {
            product_id: Some(product.id),
            product_sku: Some(product.sku.clone()),
            product_name: Some(product.name.clone()),
            confidence: score.clamp(0.0, 100.0),
            match_type: MatchType::FuzzyName,
            needs_review: score < 90.0,
            pack_qty: product.pack_qty,
        }))
    }
}

async fn semantic_pre_filter(
    ctx: &MatchContext<'_>,
    raw_query: &str,
) -> Option<HashMap<ProductId, f32>> {
    if !ctx.config.enable_ml_matching {
        return None;
    }
    let query_text = embedding_query_text(raw_query);
    let search = ctx
        .embedding_index
        .search(&query_text, EMBEDDING_TOP_K, EMBEDDING_MIN_SCORE);

    match tokio::time::timeout(EMBEDDING_TIMEOUT, search).await {
        Ok(Ok(hits)) if !hits.is_empty() => Some(hits.into_iter().collect()),
        Ok(Ok(_)) => None,
        Ok(Err(err)) => {
            warn!(error = %err, "embedding index unavailable, falling back to full catalog scan");
            None
        }
        Err(_) => {
            warn!("embedding index search timed out, falling back to full catalog scan");
            None
        }
    }
}

fn hard_gate_rejects(client: &Attributes, product: &Product) -> bool {
    if let Some(client_pipe) = client.pipe_size {
        if product.attributes.pipe_size != Some(client_pipe) {
            return true;
        }
    }

    if client.thread_size.is_some() && product.attributes.thread_size != client.thread_size {
        return true;
    }

    if let Some(client_fitting) = &client.fitting_size {
        if fitting_size_disagrees(client_fitting, product.attributes.fitting_size.as_deref()) {
            return true;
        }
    }

    if client.color != Color::None {
        let product_sku_norm = normalize_sku(&product.sku);
        if product.attributes.color != Color::None && product.attributes.color != client.color {
            return true;
        }
        let conflict = match client.color {
            Color::White => product_sku_norm.starts_with("202"),
            Color::Gray => product_sku_norm.starts_with("403"),
            Color::Red => product_sku_norm.starts_with("202") || product_sku_norm.starts_with("403"),
            Color::None => false,
        };
        if conflict {
            return true;
        }
    }

    false
}

fn fitting_size_disagrees(client_fitting: &FittingSize, product_fitting: Option<&[u32]>) -> bool {
    let client_norm = normalize_equal_sizes(client_fitting);
    let Some(product_fitting) = product_fitting else {
        return true;
    };
    let product_norm = normalize_equal_sizes(product_fitting);

    if client_norm.len() == 1 {
        product_norm.first() != client_norm.first()
    } else {
        product_norm != client_norm
    }
}

/// Runs the seven post-filters in the declared order. Returns `None`
/// when the product-type or strict-sewer-category gate demands "no
/// match"; otherwise the (possibly narrowed) survivor set.
fn apply_post_filters<'a>(
    client: &Attributes,
    scored: Vec<(&'a Product, f32)>,
) -> Option<Vec<(&'a Product, f32)>> {
    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();

    let kept = filter_by_product_type(&products, client.product_type)?;
    let scored = narrow(scored, &kept);

    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();
    let kept = filter_by_angle(&products, client.angle);
    let scored = narrow(scored, &kept);

    let effective = effective_category(client.category);
    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();
    let kept = filter_by_category(&products, effective);
    let scored = if kept.is_empty() {
        // Only an explicitly detected sewer category is strict; a
        // category defaulted from `None` must fall back to the prior
        // survivors instead of emptying the set.
        if client.category == Category::Sewer {
            return None;
        }
        scored
    } else {
        narrow(scored, &kept)
    };

    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();
    let kept = filter_by_thread_direction(&products, client.thread_direction);
    let scored = narrow(scored, &kept);

    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();
    let kept = filter_by_clamp(&products, client.clamp_mm);
    let scored = narrow(scored, &kept);

    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();
    let kept = filter_by_detachable(&products, client.detachable);
    let scored = narrow(scored, &kept);

    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();
    let kept = filter_by_reducer(&products, client.reducer);
    let scored = narrow(scored, &kept);

    let products: Vec<&Product> = scored.iter().map(|(p, _)| *p).collect();
    let kept = filter_eco_preference(&products, client.eco);
    let scored = narrow(scored, &kept);

    Some(scored)
}

fn narrow<'a>(scored: Vec<(&'a Product, f32)>, kept: &[&'a Product]) -> Vec<(&'a Product, f32)> {
    let kept_ids: std::collections::HashSet<ProductId> = kept.iter().map(|p| p.id).collect();
    scored.into_iter().filter(|(p, _)| kept_ids.contains(&p.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use async_trait::async_trait;
    use partmatch_capabilities::{EmbeddingError, EmbeddingIndex, NullEmbeddingIndex, NullLlmMatcher};
    use partmatch_types::MatchRequest;

    fn ctx<'a>(
        request: &'a MatchRequest,
        products: &'a [Product],
        config: &'a MatchConfig,
        embedding: &'a dyn EmbeddingIndex,
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
    async fn fuzzy_name_matches_above_threshold() {
        let product = Product::new("ABC1", "труба ппр 20 армированная");
        let products = vec![product];
        let request = MatchRequest::new("", "труба ппр 20");
        let config = MatchConfig::default();
        let embedding = NullEmbeddingIndex;
        let llm = NullLlmMatcher;
        let c = ctx(&request, &products, &config, &embedding, &llm);

        let result = Hybrid.match_one(&c).await.unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().match_type, MatchType::FuzzyName);
    }

    #[tokio::test]
    async fn pipe_size_hard_gate_rejects_mismatch() {
        let mut product = Product::new("ABC1", "труба 20-100");
        product.attributes.pipe_size = Some(partmatch_types::PipeSize { d: 25, l: 100 });
        let products = vec![product];
        let request = MatchRequest::new("", "труба 20-100");
        let config = MatchConfig::default();
        let embedding = NullEmbeddingIndex;
        let llm = NullLlmMatcher;
        let c = ctx(&request, &products, &config, &embedding, &llm);

        let result = Hybrid.match_one(&c).await.unwrap();
        assert!(result.is_none());
    }

    struct FailingEmbeddingIndex;

    #[async_trait]
    impl EmbeddingIndex for FailingEmbeddingIndex {
        async fn search(
            &self,
            _query_text: &str,
            _top_k: usize,
            _min_score: f32,
        ) -> Result<Vec<(ProductId, f32)>, EmbeddingError> {
            Err(EmbeddingError::Transport("unreachable in test".into()))
        }
    }

    #[tokio::test]
    async fn embedding_failure_falls_back_to_full_scan() {
        let product = Product::new("ABC1", "труба ппр 20");
        let products = vec![product];
        let request = MatchRequest::new("", "труба ппр 20");
        let config = MatchConfig::default();
        let embedding = FailingEmbeddingIndex;
        let llm = NullLlmMatcher;
        let c = ctx(&request, &products, &config, &embedding, &llm);

        let result = Hybrid.match_one(&c).await.unwrap();
        assert!(result.is_some());
    }
}
