//! Demo entry point for the partmatch matching core.
//!
//! Builds an in-memory catalog and a client mapping store, runs a
//! handful of representative order lines through [`MatchingService`],
//! and prints each result.

use std::error::Error;
use std::sync::{Arc, RwLock};

use partmatch::{
    CatalogCache, CatalogRepo, ClientId, ClientMapping, MappingCache, MappingRepo, MatchConfig,
    MatchRequest, MatchingService, NullEmbeddingIndex, NullLlmMatcher, Product, RepoError,
};
use tracing_subscriber::EnvFilter;

struct DemoCatalog {
    products: Vec<Product>,
}

impl CatalogRepo for DemoCatalog {
    fn list_all(&self) -> Result<Vec<Product>, RepoError> {
        Ok(self.products.clone())
    }

    fn get_by_id(&self, id: partmatch::ProductId) -> Result<Option<Product>, RepoError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

struct DemoMappings {
    rows: RwLock<Vec<ClientMapping>>,
}

impl MappingRepo for DemoMappings {
    fn list_verified(&self, client_id: &ClientId) -> Result<Vec<ClientMapping>, RepoError> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|m| &m.client_id == client_id && m.verified)
            .cloned()
            .collect())
    }

    fn upsert(&self, mapping: ClientMapping) -> Result<(), RepoError> {
        self.rows.write().unwrap().push(mapping);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = Arc::new(CatalogCache::new(Arc::new(DemoCatalog {
        products: vec![
            Product::new("202051110R", "Труба ПП 110 рыжая"),
            Product::new("TEE-50-45", "Тройник ПП 50x45"),
            Product::new("CPL-32-ECO", "Муфта ПП 32 эко"),
        ],
    })));
    let mappings = Arc::new(MappingCache::new(Arc::new(DemoMappings {
        rows: RwLock::new(vec![]),
    })));

    let service = MatchingService::new(
        catalog,
        mappings,
        Arc::new(NullEmbeddingIndex),
        Arc::new(NullLlmMatcher),
        MatchConfig::default(),
    );

    let client_for_order = ClientId::new("demo-client");
    let orders = vec![
        MatchRequest::new("202051110R", ""),
        MatchRequest::new("", "тройник пп 50 45"),
        MatchRequest::new("UNKNOWN-SKU", "неизвестная деталь"),
    ];

    let rows = service
        .match_order_items(client_for_order, orders, true)
        .await?;

    for (request, result, saved) in &rows {
        println!(
            "{:?} -> {:?} confidence={:.1} needs_review={} saved={}",
            request.client_sku, result.match_type, result.confidence, result.needs_review, saved
        );
    }

    let snapshot = service.get_stats();
    println!(
        "total={} avg_confidence={:.1} success_rate={:.2}",
        snapshot.total, snapshot.avg_confidence, snapshot.success_rate
    );

    Ok(())
}
