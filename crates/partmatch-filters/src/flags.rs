use partmatch_types::Product;

/// Restricts `candidates` to `detachable == true` products, but only
/// when the client actually asked for it; an empty intersection
/// leaves the set unfiltered.
pub fn filter_by_detachable<'a>(candidates: &[&'a Product], requested: bool) -> Vec<&'a Product> {
    filter_by_flag(candidates, requested, |p| p.attributes.detachable)
}

/// Restricts `candidates` to `reducer == true` products under the same
/// rule as [`filter_by_detachable`].
pub fn filter_by_reducer<'a>(candidates: &[&'a Product], requested: bool) -> Vec<&'a Product> {
    filter_by_flag(candidates, requested, |p| p.attributes.reducer)
}

fn filter_by_flag<'a>(
    candidates: &[&'a Product],
    requested: bool,
    get: impl Fn(&Product) -> bool,
) -> Vec<&'a Product> {
    if !requested {
        return candidates.to_vec();
    }

    let kept: Vec<&Product> = candidates.iter().copied().filter(|p| get(p)).collect();

    if kept.is_empty() {
        candidates.to_vec()
    } else {
        kept
    }
}

/// Eco preference: if the client did not ask for eco and more than one
/// candidate remains, eco variants are dropped in favour of the rest.
pub fn filter_eco_preference<'a>(candidates: &[&'a Product], client_wants_eco: bool) -> Vec<&'a Product> {
    if client_wants_eco || candidates.len() <= 1 {
        return candidates.to_vec();
    }

    let non_eco: Vec<&Product> = candidates.iter().copied().filter(|p| !p.attributes.eco).collect();

    if non_eco.is_empty() {
        candidates.to_vec()
    } else {
        non_eco
    }
}
