use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use partmatch_normalize::normalize_sku;
use partmatch_types::{ClientId, ClientMapping};
use tracing::{debug, info};

use crate::error::RepoError;

/// Per-client verified-mapping access. `(client_id, client_sku)` is
/// unique; only `verified = true` rows are ever loaded.
pub trait MappingRepo: Send + Sync {
    fn list_verified(&self, client_id: &ClientId) -> Result<Vec<ClientMapping>, RepoError>;
    fn upsert(&self, mapping: ClientMapping) -> Result<(), RepoError>;
}

type ClientMap = HashMap<String, ClientMapping>;

/// A per-client read-through cache in front of a [`MappingRepo`].
/// Invalidated for exactly the client whose mapping was just written,
/// per the concurrency model: a mapping written by one call becomes
/// visible to later calls only after its per-client entry is dropped.
pub struct MappingCache {
    repo: Arc<dyn MappingRepo>,
    by_client: RwLock<HashMap<ClientId, Arc<ClientMap>>>,
}

impl MappingCache {
    pub fn new(repo: Arc<dyn MappingRepo>) -> Self {
        Self {
            repo,
            by_client: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, client_id: &ClientId) -> Result<Arc<ClientMap>, RepoError> {
        if let Some(cached) = self
            .by_client
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(client_id)
        {
            debug!(client = %client_id, "mapping cache hit");
            return Ok(Arc::clone(cached));
        }

        let mut guard = self.by_client.write().unwrap_or_else(|p| p.into_inner());
        if let Some(cached) = guard.get(client_id) {
            return Ok(Arc::clone(cached));
        }

        info!(client = %client_id, "loading client mappings from repository");
        let mut map = ClientMap::new();
        for mapping in self.repo.list_verified(client_id)? {
            map.insert(normalize_sku(&mapping.client_sku), mapping);
        }
        let loaded = Arc::new(map);
        guard.insert(client_id.clone(), Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Upserts into the backing repo and invalidates only this client's
    /// cache entry.
    pub fn upsert(&self, mapping: ClientMapping) -> Result<(), RepoError> {
        let client_id = mapping.client_id.clone();
        self.repo.upsert(mapping)?;
        self.invalidate(&client_id);
        Ok(())
    }

    pub fn invalidate(&self, client_id: &ClientId) {
        self.by_client
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .remove(client_id);
    }

    /// Drops every client's cache entry.
    pub fn clear(&self) {
        self.by_client
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }
}
