use std::time::Duration;

use partmatch_capabilities::Candidate;
use tracing::warn;

use crate::context::MatchContext;

const LLM_EMBEDDING_TOP_K: usize = 20;
const LLM_EMBEDDING_MIN_SCORE: f32 = 0.4;
const LLM_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);
const CATALOG_FALLBACK_LIMIT: usize = 50;

/// Candidates offered to the LLM Matcher: the Embedding Index's
/// top-20 when it's available, else the first 50 catalog entries.
pub async fn llm_candidates(ctx: &MatchContext<'_>) -> Vec<Candidate> {
    let search = ctx.embedding_index.search(
        &ctx.request.client_name,
        LLM_EMBEDDING_TOP_K,
        LLM_EMBEDDING_MIN_SCORE,
    );

    let hits = match tokio::time::timeout(LLM_EMBEDDING_TIMEOUT, search).await {
        Ok(Ok(hits)) => hits,
        Ok(Err(err)) => {
            warn!(error = %err, "embedding index unavailable for llm candidates, using catalog prefix");
            Vec::new()
        }
        Err(_) => {
            warn!("embedding index timed out for llm candidates, using catalog prefix");
            Vec::new()
        }
    };

    if !hits.is_empty() {
        let ids: std::collections::HashSet<_> = hits.into_iter().map(|(id, _)| id).collect();
        return ctx
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(|p| Candidate {
                sku: p.sku.clone(),
                name: p.name.clone(),
            })
            .collect();
    }

    ctx.products
        .iter()
        .take(CATALOG_FALLBACK_LIMIT)
        .map(|p| Candidate {
            sku: p.sku.clone(),
            name: p.name.clone(),
        })
        .collect()
}
