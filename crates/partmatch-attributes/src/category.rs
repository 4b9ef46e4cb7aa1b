use partmatch_types::Category;

fn has_any(lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| lower.contains(m))
}

/// A name is a "sewer" candidate if it names the sewage-pipe category
/// explicitly; shared between the `prestige`/`sewer`/`ppr` rules below so
/// the coupling is auditable in one place.
fn is_sewer_marker(lower: &str) -> bool {
    has_any(lower, &["кан", "канализац", "сантех"])
}

/// Ordered category rules on the lowercased raw name; first match wins.
pub fn detect_category(s: &str) -> Category {
    let lower = s.to_lowercase();

    if has_any(&lower, &["pert", "pe-rt", "термостойк"]) {
        return Category::Pert;
    }
    if has_any(&lower, &["пнд", "hdpe", "компресс", "цанг"]) {
        return Category::Pnd;
    }
    if has_any(&lower, &["малошум", "prestige"]) || (is_sewer_marker(&lower) && lower.contains("бел")) {
        return Category::Prestige;
    }
    if has_any(&lower, &["нар кан", "нар.кан", "наружн", "рыж"]) {
        return Category::Outdoor;
    }
    if lower.contains("сер") || is_sewer_marker(&lower) {
        return Category::Sewer;
    }
    if has_any(
        &lower,
        &["ппр", "ppr", "водопровод", "отоплен", " пп ", "армир", "вн/нр"],
    ) || (lower.contains("бел") && !is_sewer_marker(&lower))
    {
        return Category::Ppr;
    }
    Category::None
}
