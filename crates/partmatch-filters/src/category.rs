use partmatch_normalize::normalize_sku;
use partmatch_types::{Category, Product};

fn sku(product: &Product) -> String {
    normalize_sku(&product.sku)
}

fn name_has(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
}

fn category_has(product: &Product, needle: &str) -> bool {
    product
        .category
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
        .contains(needle)
}

/// Per-candidate keep rule for the six named categories plus `None`,
/// which resolves to the table's `default` row directly (used when a
/// caller wants the bare table semantics without the
/// `client_category ∨ sewer` substitution — see [`effective_category`]).
fn keep(product: &Product, category: Category) -> bool {
    match category {
        Category::Pert => sku(product).starts_with("501") || name_has(product, "pert"),
        Category::Pnd => sku(product).starts_with("704") || name_has(product, "компресс"),
        Category::Prestige => category_has(product, "малошум") || name_has(product, "prestige"),
        Category::Outdoor => {
            let sku = sku(product);
            sku.starts_with("303")
                || sku.starts_with("604")
                || category_has(product, "наружн")
                || category_has(product, "нар.кан")
                || category_has(product, "рифлен")
                || name_has(product, "наружн")
                || name_has(product, "нар.кан")
                || name_has(product, "рифлен")
        }
        Category::Ppr => category_has(product, "ппр") || name_has(product, "ппр"),
        Category::Sewer => {
            sku(product).starts_with("202") || (name_has(product, "серый") && !name_has(product, "рифлен"))
        }
        Category::None => false,
    }
}

/// `effective = client_category ∨ sewer`: a missing client category
/// defaults to `sewer` for the purposes of the Hybrid post-filter,
/// per the category-filter step.
pub fn effective_category(client_category: Category) -> Category {
    match client_category {
        Category::None => Category::Sewer,
        other => other,
    }
}

/// Applies the category filter table to `candidates`. `sewer` is
/// strict: an empty result is returned as-is and must be treated by
/// the caller as "no match", not skipped. Every other named category
/// follows the generic post-filter rule ("skip if it would empty the
/// set"). `Category::None` applies the table's `default` preference
/// cascade: SKU `202` prefix, else sewer-category-but-not-prestige-or-
/// outdoor, else a `серый` name mention, else the candidates unchanged.
pub fn filter_by_category<'a>(candidates: &[&'a Product], category: Category) -> Vec<&'a Product> {
    match category {
        Category::Sewer => candidates
            .iter()
            .copied()
            .filter(|p| keep(p, Category::Sewer))
            .collect(),
        Category::None => default_preference(candidates),
        named => {
            let kept: Vec<&Product> = candidates.iter().copied().filter(|p| keep(p, named)).collect();
            if kept.is_empty() {
                candidates.to_vec()
            } else {
                kept
            }
        }
    }
}

fn default_preference<'a>(candidates: &[&'a Product]) -> Vec<&'a Product> {
    let by_202: Vec<&Product> = candidates
        .iter()
        .copied()
        .filter(|p| sku(p).starts_with("202"))
        .collect();
    if !by_202.is_empty() {
        return by_202;
    }

    let sewer_like: Vec<&Product> = candidates
        .iter()
        .copied()
        .filter(|p| category_has(p, "канализац") && !category_has(p, "малошум") && !category_has(p, "наружн"))
        .collect();
    if !sewer_like.is_empty() {
        return sewer_like;
    }

    let grey_named: Vec<&Product> = candidates.iter().copied().filter(|p| name_has(p, "серый")).collect();
    if !grey_named.is_empty() {
        return grey_named;
    }

    candidates.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use partmatch_types::Attributes;

    fn product(sku: &str, name: &str, category: Option<&str>) -> Product {
        let mut p = Product::new(sku, name);
        p.category = category.map(str::to_string);
        p.attributes = Attributes::default();
        p
    }

    #[test]
    fn sewer_is_strict_and_can_return_empty() {
        let a = product("303-110-45", "отвод наружный 110", None);
        let candidates = vec![&a];
        let kept = filter_by_category(&candidates, Category::Sewer);
        assert!(kept.is_empty());
    }

    #[test]
    fn named_category_skips_filter_when_it_would_empty() {
        let a = product("999-1", "труба нейтральная", None);
        let candidates = vec![&a];
        let kept = filter_by_category(&candidates, Category::Pert);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn default_prefers_202_prefix_first() {
        let a = product("202-110", "отвод серый", None);
        let b = product("303-110", "отвод наружный", None);
        let candidates = vec![&a, &b];
        let kept = filter_by_category(&candidates, Category::None);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].sku, "202-110");
    }

    #[test]
    fn effective_category_defaults_none_to_sewer() {
        assert_eq!(effective_category(Category::None), Category::Sewer);
        assert_eq!(effective_category(Category::Ppr), Category::Ppr);
    }
}
