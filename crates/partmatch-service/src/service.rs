use std::sync::Arc;

use partmatch_capabilities::{EmbeddingIndex, LlmMatcher};
use partmatch_repo::{CatalogCache, MappingCache};
use partmatch_strategies::{default_pipeline, MatchConfig, MatchContext, MatchStrategy};
use partmatch_types::{ClientId, MatchRequest, MatchResult, PartmatchError};
use tracing::warn;

use crate::autosave::AutoSavePolicy;
use crate::stats::{Stats, StatsSnapshot};

const HEURISTIC_SKU_MIN_LEN: usize = 10;

/// The orchestrator: loads the catalog and per-client mapping caches,
/// runs the fixed strategy pipeline in order, and routes every result
/// through [`Stats`] and the [`AutoSavePolicy`]. Mirrors
/// `ufp_match::engine::Matcher`'s role of wiring the pipeline stages
/// behind one public entry point.
pub struct MatchingService {
    catalog: Arc<CatalogCache>,
    mappings: Arc<MappingCache>,
    embedding_index: Arc<dyn EmbeddingIndex>,
    llm_matcher: Arc<dyn LlmMatcher>,
    config: MatchConfig,
    pipeline: Vec<Box<dyn MatchStrategy>>,
    stats: Stats,
    autosave: AutoSavePolicy,
}

impl MatchingService {
    pub fn new(
        catalog: Arc<CatalogCache>,
        mappings: Arc<MappingCache>,
        embedding_index: Arc<dyn EmbeddingIndex>,
        llm_matcher: Arc<dyn LlmMatcher>,
        config: MatchConfig,
    ) -> Self {
        let pipeline = default_pipeline(&config);
        Self {
            catalog,
            mappings,
            embedding_index,
            llm_matcher,
            config,
            pipeline,
            stats: Stats::new(),
            autosave: AutoSavePolicy,
        }
    }

    /// Resolves one order line against the catalog. Only
    /// [`PartmatchError::CatalogUnavailable`] escapes; every other
    /// failure degrades to a narrower result per the error table.
    pub async fn match_item(&self, request: MatchRequest) -> Result<MatchResult, PartmatchError> {
        if request.is_empty() {
            return Ok(MatchResult::not_found());
        }
        let request = apply_name_heuristic(request);

        let result = self.resolve(&request).await?;
        self.stats.record(result.match_type, result.confidence);
        self.autosave
            .maybe_save(&request, &result, &self.config, &self.mappings);
        Ok(result)
    }

    /// Convenience wrapper over `match_item` for a whole order: every
    /// item is matched under `client_id`, with auto-save gated by the
    /// `auto_save` flag rather than always-on.
    pub async fn match_order_items(
        &self,
        client_id: ClientId,
        items: Vec<MatchRequest>,
        auto_save: bool,
    ) -> Result<Vec<(MatchRequest, MatchResult, bool)>, PartmatchError> {
        let mut out = Vec::with_capacity(items.len());
        for mut item in items {
            item.client_id = Some(client_id.clone());
            if item.is_empty() {
                out.push((item, MatchResult::not_found(), false));
                continue;
            }
            let item = apply_name_heuristic(item);
            let result = self.resolve(&item).await?;
            self.stats.record(result.match_type, result.confidence);
            let saved = if auto_save {
                self.autosave
                    .maybe_save(&item, &result, &self.config, &self.mappings)
            } else {
                false
            };
            out.push((item, result, saved));
        }
        Ok(out)
    }

    async fn resolve(&self, request: &MatchRequest) -> Result<MatchResult, PartmatchError> {
        let products = self
            .catalog
            .get()
            .map_err(|e| PartmatchError::CatalogUnavailable(e.to_string()))?;

        let client_mapping = match &request.client_id {
            Some(client_id) => match self.mappings.get(client_id) {
                Ok(map) => Some(map),
                Err(err) => {
                    warn!(error = %err, client = %client_id, "mapping repository unavailable, proceeding without cached mappings");
                    None
                }
            },
            None => None,
        };

        let ctx = MatchContext {
            request,
            products: &products,
            client_mapping: client_mapping.as_deref(),
            embedding_index: self.embedding_index.as_ref(),
            llm_matcher: self.llm_matcher.as_ref(),
            config: &self.config,
        };

        for strategy in &self.pipeline {
            match strategy.match_one(&ctx).await {
                Ok(Some(result)) => return Ok(result),
                Ok(None) => continue,
                Err(err) => {
                    warn!(error = %err, strategy = strategy.name(), "strategy failed, trying next");
                    continue;
                }
            }
        }

        Ok(MatchResult::not_found())
    }

    /// Drops the catalog cache and every client's mapping cache.
    pub fn clear_cache(&self) {
        self.catalog.clear();
        self.mappings.clear();
    }

    pub fn get_stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

/// If the client left `client_name` empty but put a long, whitespace-
/// containing string in `client_sku`, it's almost always a
/// misclassified free-text description; use it as the name too so
/// name-based strategies can still run.
fn apply_name_heuristic(mut request: MatchRequest) -> MatchRequest {
    if request.client_name.trim().is_empty()
        && request.client_sku.len() > HEURISTIC_SKU_MIN_LEN
        && request.client_sku.contains(char::is_whitespace)
    {
        request.client_name = request.client_sku.clone();
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use partmatch_capabilities::{NullEmbeddingIndex, NullLlmMatcher};
    use partmatch_repo::{CatalogRepo, MappingRepo, RepoError};
    use partmatch_types::{MatchType, Product, ProductId};

    struct FixtureCatalog {
        products: Vec<Product>,
    }

    impl CatalogRepo for FixtureCatalog {
        fn list_all(&self) -> Result<Vec<Product>, RepoError> {
            Ok(self.products.clone())
        }

        fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
            Ok(self.products.iter().find(|p| p.id == id).cloned())
        }
    }

    struct EmptyMappings;

    impl MappingRepo for EmptyMappings {
        fn list_verified(
            &self,
            _client_id: &ClientId,
        ) -> Result<Vec<partmatch_types::ClientMapping>, RepoError> {
            Ok(vec![])
        }

        fn upsert(&self, _mapping: partmatch_types::ClientMapping) -> Result<(), RepoError> {
            Ok(())
        }
    }

    fn service(products: Vec<Product>) -> MatchingService {
        let catalog = Arc::new(CatalogCache::new(Arc::new(FixtureCatalog { products })));
        let mappings = Arc::new(MappingCache::new(Arc::new(EmptyMappings)));
        MatchingService::new(
            catalog,
            mappings,
            Arc::new(NullEmbeddingIndex),
            Arc::new(NullLlmMatcher),
            MatchConfig::default(),
        )
    }

    #[tokio::test]
    async fn empty_request_short_circuits_to_not_found() {
        let svc = service(vec![]);
        let result = svc.match_item(MatchRequest::new("", "")).await.unwrap();
        assert_eq!(result.match_type, MatchType::NotFound);
    }

    #[tokio::test]
    async fn exact_sku_resolves_and_records_stats() {
        let product = Product::new("ABC1", "труба ппр 20");
        let svc = service(vec![product]);

        let result = svc.match_item(MatchRequest::new("ABC1", "")).await.unwrap();
        assert_eq!(result.match_type, MatchType::ExactSku);

        let snap = svc.get_stats();
        assert_eq!(snap.total, 1);
        assert_eq!(snap.by_type[&MatchType::ExactSku], 1);
    }

    #[tokio::test]
    async fn name_heuristic_promotes_long_sku_field() {
        let product = Product::new("ABC1", "труба ппр 20 армированная");
        let svc = service(vec![product]);

        let request = MatchRequest::new("труба ппр 20 армированная", "");
        let result = svc.match_item(request).await.unwrap();
        assert!(result.match_type.is_found());
    }

    #[tokio::test]
    async fn unmatched_request_falls_back_to_not_found() {
        let svc = service(vec![]);
        let result = svc
            .match_item(MatchRequest::new("NOPE", "неизвестный товар"))
            .await
            .unwrap();
        assert_eq!(result.match_type, MatchType::NotFound);
        assert!(result.needs_review);
        assert_eq!(result.confidence, 0.0);
    }

    #[tokio::test]
    async fn reset_stats_clears_counters() {
        let product = Product::new("ABC1", "труба ппр 20");
        let svc = service(vec![product]);
        svc.match_item(MatchRequest::new("ABC1", "")).await.unwrap();
        svc.reset_stats();
        assert_eq!(svc.get_stats().total, 0);
    }
}
