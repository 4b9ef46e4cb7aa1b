use partmatch_attributes::normalize_angle;
use partmatch_types::Product;

/// Restricts `candidates` to products whose extracted angle equals
/// `normalize_angle(client_angle)`. `None` client angle skips the
/// filter; an empty intersection also leaves the set unfiltered, per
/// the generic post-filter "skip if empty" rule.
pub fn filter_by_angle<'a>(candidates: &[&'a Product], client_angle: Option<u32>) -> Vec<&'a Product> {
    let Some(client_angle) = client_angle else {
        return candidates.to_vec();
    };
    let target = normalize_angle(client_angle);

    let kept: Vec<&Product> = candidates
        .iter()
        .copied()
        .filter(|p| p.attributes.angle == Some(target))
        .collect();

    if kept.is_empty() {
        candidates.to_vec()
    } else {
        kept
    }
}
