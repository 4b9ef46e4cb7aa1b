use std::time::Duration;

use async_trait::async_trait;
use partmatch_capabilities::Candidate;
use partmatch_normalize::normalize_sku;
use partmatch_types::{MatchResult, MatchType, PartmatchError, Product, ThreadDirection};
use tracing::{debug, warn};

use crate::context::MatchContext;
use crate::hybrid_candidates::llm_candidates;
use crate::strategy::MatchStrategy;

const LLM_TIMEOUT: Duration = Duration::from_secs(15);
const HALLUCINATION_REJECTED_CONFIDENCE: f32 = 10.0;

/// Last-resort candidate selection via the LLM Matcher capability, with
/// the post-validation gates from the type/thread-direction/
/// hallucination/confidence-floor table run before a suggestion is
/// trusted.
pub struct Llm;

#[async_trait]
impl MatchStrategy for Llm {
    fn name(&self) -> &'static str {
        "llm_match"
    }

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError> {
        if !ctx.config.enable_ml_matching || ctx.products.is_empty() {
            return Ok(None);
        }

        let candidates = llm_candidates(ctx).await;
        if candidates.is_empty() {
            return Ok(None);
        }

        let call = ctx
            .llm_matcher
            .suggest(&ctx.request.client_name, &candidates);

        let suggestion = match tokio::time::timeout(LLM_TIMEOUT, call).await {
            Ok(Ok(Some(s))) => s,
            Ok(Ok(None)) => return Ok(None),
            Ok(Err(err)) => {
                warn!(error = %err, "llm matcher unavailable");
                return Ok(None);
            }
            Err(_) => {
                warn!("llm matcher timed out");
                return Ok(None);
            }
        };

        let Some(sku) = suggestion.sku.as_deref() else {
            return Ok(None);
        };
        let normalized_sku = normalize_sku(sku);
        let Some(product) = ctx
            .products
            .iter()
            .find(|p| normalize_sku(&p.sku) == normalized_sku)
        else {
            warn!(sku, "llm suggested a sku not present in the catalog");
            return Ok(None);
        };

        let confidence = if suggestion.confidence.is_finite() {
            suggestion.confidence.clamp(0.0, 100.0)
        } else {
            0.0
        };

        if post_validation_rejects(ctx, product) {
            return Ok(None);
        }
        if confidence <= HALLUCINATION_REJECTED_CONFIDENCE {
            return Ok(None);
        }

        debug!(sku = %product.sku, confidence, "llm match");
        Ok(Some(MatchResult {
            product_id: Some(product.id),
            product_sku: Some(product.sku.clone()),
            product_name: Some(product.name.clone()),
            confidence,
            match_type: MatchType::LlmMatch,
            needs_review: confidence < ctx.config.min_confidence_auto,
            pack_qty: product.pack_qty,
        }))
    }
}

fn post_validation_rejects(ctx: &MatchContext<'_>, product: &Product) -> bool {
    let client = partmatch_attributes::extract_all(&ctx.request.client_name);

    if let Some(client_type) = client.product_type {
        if partmatch_filters::is_critical(client_type) && product.attributes.product_type != Some(client_type) {
            return true;
        }
    }

    if let Some(client_dir) = client.thread_direction {
        if let Some(product_dir) = product.attributes.thread_direction {
            if client_dir_disagrees(client_dir, product_dir) {
                return true;
            }
        }
    }

    false
}

fn client_dir_disagrees(a: ThreadDirection, b: ThreadDirection) -> bool {
    a != b
}
