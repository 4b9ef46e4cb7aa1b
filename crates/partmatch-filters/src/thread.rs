use partmatch_types::{Product, ThreadDirection};

/// Restricts `candidates` to products whose thread direction matches
/// `client_direction`. `None` skips the filter; an empty intersection
/// leaves the set unfiltered.
pub fn filter_by_thread_direction<'a>(
    candidates: &[&'a Product],
    client_direction: Option<ThreadDirection>,
) -> Vec<&'a Product> {
    let Some(client_direction) = client_direction else {
        return candidates.to_vec();
    };

    let kept: Vec<&Product> = candidates
        .iter()
        .copied()
        .filter(|p| p.attributes.thread_direction == Some(client_direction))
        .collect();

    if kept.is_empty() {
        candidates.to_vec()
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_direction(sku: &str, dir: Option<ThreadDirection>) -> Product {
        let mut p = Product::new(sku, sku);
        p.attributes.thread_direction = dir;
        p
    }

    #[test]
    fn narrows_to_matching_direction() {
        let a = product_with_direction("1", Some(ThreadDirection::Inner));
        let b = product_with_direction("2", Some(ThreadDirection::Outer));
        let candidates = vec![&a, &b];
        let kept = filter_by_thread_direction(&candidates, Some(ThreadDirection::Outer));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].sku, "2");
    }

    #[test]
    fn no_client_direction_skips_filter() {
        let a = product_with_direction("1", Some(ThreadDirection::Inner));
        let candidates = vec![&a];
        assert_eq!(filter_by_thread_direction(&candidates, None).len(), 1);
    }
}
