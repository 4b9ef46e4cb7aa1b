use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::ids::ProductId;

/// A canonical catalog entry. `id` is immutable once assigned; `sku` is
/// unique modulo `normalize_sku`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub pack_qty: u32,
    pub attributes: Attributes,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(),
            sku: sku.into(),
            name: name.into(),
            category: None,
            pack_qty: 1,
            attributes: Attributes::default(),
        }
    }
}
