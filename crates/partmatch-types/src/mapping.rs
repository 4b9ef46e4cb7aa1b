use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ClientId, ProductId};
use crate::result::MatchType;

/// A recorded `(client_id, client_sku) <-> product_id` association, used
/// as a per-client learning cache for repeat orders. Unique by
/// `(client_id, normalize_sku(client_sku))`; only `verified = true` rows
/// are loaded into the read-through cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientMapping {
    pub client_id: ClientId,
    pub client_sku: String,
    pub product_id: ProductId,
    pub confidence: f32,
    pub match_type: MatchType,
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}
