use serde::{Deserialize, Serialize};

use crate::ids::ClientId;

/// A single free-form order line to resolve against the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRequest {
    pub client_id: Option<ClientId>,
    pub client_sku: String,
    pub client_name: String,
}

impl MatchRequest {
    pub fn new(client_sku: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            client_id: None,
            client_sku: client_sku.into(),
            client_name: client_name.into(),
        }
    }

    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// At least one of `client_sku`/`client_name` must be non-empty for a
    /// non-trivial result.
    pub fn is_empty(&self) -> bool {
        self.client_sku.trim().is_empty() && self.client_name.trim().is_empty()
    }
}
