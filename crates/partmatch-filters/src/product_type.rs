use partmatch_types::{Product, ProductType};

/// Product types for which a missing or disagreeing match is treated
/// as a hard failure rather than a skipped filter — `кран, муфта,
/// отвод, тройник, переходник, заглушка, ревизия, крестовина`.
pub const CRITICAL_TYPES: &[ProductType] = &[
    ProductType::Valve,
    ProductType::Coupling,
    ProductType::Elbow,
    ProductType::Tee,
    ProductType::Adapter,
    ProductType::Cap,
    ProductType::Revision,
    ProductType::Crosspiece,
];

pub fn is_critical(product_type: ProductType) -> bool {
    CRITICAL_TYPES.contains(&product_type)
}

/// Restricts `candidates` to those whose extracted product type equals
/// `client_type`. `None` means the client specified no type: the
/// filter is skipped entirely. A critical client type whose filter
/// would empty the set returns `None` (the caller must treat this as
/// "no match"); a non-critical type instead leaves the set unfiltered.
pub fn filter_by_product_type<'a>(
    candidates: &[&'a Product],
    client_type: Option<ProductType>,
) -> Option<Vec<&'a Product>> {
    let Some(client_type) = client_type else {
        return Some(candidates.to_vec());
    };

    let kept: Vec<&Product> = candidates
        .iter()
        .copied()
        .filter(|p| p.attributes.product_type == Some(client_type))
        .collect();

    if kept.is_empty() {
        if is_critical(client_type) {
            None
        } else {
            Some(candidates.to_vec())
        }
    } else {
        Some(kept)
    }
}
