use async_trait::async_trait;
use partmatch_attributes::extract_all;
use partmatch_normalize::{normalize_name, normalize_sku};
use partmatch_types::{Category, Color, MatchResult, MatchType, PartmatchError, Product};
use tracing::debug;

use crate::context::MatchContext;
use crate::strategy::MatchStrategy;

/// Exact name match, gated against color/category-implied SKU-prefix
/// disagreement so a normalized-name collision between a white/outdoor
/// fitting and its gray sewer counterpart never silently picks the
/// wrong one.
pub struct ExactName;

#[async_trait]
impl MatchStrategy for ExactName {
    fn name(&self) -> &'static str {
        "exact_name"
    }

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError> {
        let normalized_query = normalize_name(&ctx.request.client_name);
        if normalized_query.is_empty() {
            return Ok(None);
        }
        let client_attrs = extract_all(&ctx.request.client_name);

        for product in ctx.products {
            if normalize_name(&product.name) != normalized_query {
                continue;
            }
            if color_disagrees(client_attrs.color, product.attributes.color) {
                continue;
            }
            if sewer_prefix_conflict(client_attrs.color, client_attrs.category, &product.sku) {
                continue;
            }

            debug!(sku = %product.sku, "exact name match");
            return Ok(Some(MatchResult {
                product_id: Some(product.id),
                product_sku: Some(product.sku.clone()),
                product_name: Some(product.name.clone()),
                confidence: ctx.config.confidence_exact_name,
                match_type: MatchType::ExactName,
                needs_review: false,
                pack_qty: product.pack_qty,
            }));
        }

        Ok(None)
    }
}

fn color_disagrees(client: Color, product: Color) -> bool {
    client != Color::None && product != Color::None && client != product
}

/// `client asked for white/prestige and candidate SKU starts with 202
/// (sewer-gray prefix), or vice versa`: a white/prestige request
/// rejects a `202`-prefixed candidate, and a gray/sewer request
/// rejects a candidate that is *not* `202`-prefixed.
fn sewer_prefix_conflict(client_color: Color, client_category: Category, sku: &str) -> bool {
    let starts_202 = normalize_sku(sku).starts_with("202");
    let wants_white_or_prestige = client_color == Color::White || client_category == Category::Prestige;
    let wants_sewer_gray = client_color == Color::Gray || client_category == Category::Sewer;

    (wants_white_or_prestige && starts_202) || (wants_sewer_gray && !starts_202)
}
