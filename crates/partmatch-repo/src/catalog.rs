use std::sync::{Arc, RwLock};

use partmatch_types::{Product, ProductId};
use tracing::{debug, info};

use crate::error::RepoError;

/// Bulk catalog access. The core assumes reads are strongly consistent
/// within a single call; implementations may back this with any storage
/// engine.
pub trait CatalogRepo: Send + Sync {
    fn list_all(&self) -> Result<Vec<Product>, RepoError>;
    fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepoError>;
}

/// A write-once-per-process cache in front of a [`CatalogRepo`]. Uses a
/// lock covering the full check-load-store sequence so concurrent
/// first-time callers observe the loader invoked exactly once, per the
/// concurrency model's single-loader guarantee. Deliberately does not
/// rely on `OnceCell`/`LazyLock` so the contract stays explicit and
/// `clear()` can force a reload.
pub struct CatalogCache {
    repo: Arc<dyn CatalogRepo>,
    products: RwLock<Option<Arc<Vec<Product>>>>,
}

impl CatalogCache {
    pub fn new(repo: Arc<dyn CatalogRepo>) -> Self {
        Self {
            repo,
            products: RwLock::new(None),
        }
    }

    /// Returns the cached catalog, loading it on first use. Only the
    /// first concurrent caller invokes `CatalogRepo::list_all`; the rest
    /// observe the cached result.
    pub fn get(&self) -> Result<Arc<Vec<Product>>, RepoError> {
        if let Some(cached) = self.products.read().unwrap_or_else(|p| p.into_inner()).as_ref() {
            debug!("catalog cache hit");
            return Ok(Arc::clone(cached));
        }

        let mut guard = self.products.write().unwrap_or_else(|p| p.into_inner());
        if let Some(cached) = guard.as_ref() {
            return Ok(Arc::clone(cached));
        }

        info!("loading catalog from repository");
        let loaded = Arc::new(self.repo.list_all()?);
        *guard = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Drops the cached catalog; the next `get()` reloads from the repo.
    pub fn clear(&self) {
        let mut guard = self.products.write().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }
}
