use partmatch_types::ProductType;

/// Ordered substring markers; order is significant because several
/// markers reduce to the same [`ProductType`] and the first match wins
/// (e.g. `"колено"`/`"угол"` both resolve to `Elbow`, same as `"отвод"`,
/// but `"отвод"` is checked first since it is the catalog's primary term).
const MARKERS: &[(&str, ProductType)] = &[
    ("крестовин", ProductType::Crosspiece),
    ("тройник", ProductType::Tee),
    ("переход", ProductType::Adapter),
    ("ред", ProductType::Adapter),
    ("разъемн", ProductType::Coupling),
    ("отвод", ProductType::Elbow),
    ("колено", ProductType::Elbow),
    ("угол", ProductType::Elbow),
    ("муфт", ProductType::Coupling),
    ("заглуш", ProductType::Cap),
    ("ревизи", ProductType::Revision),
    ("патруб", ProductType::Pipe),
    ("опор", ProductType::Clip),
    ("клипс", ProductType::Clip),
    ("труб", ProductType::Tube),
    ("хомут", ProductType::Clamp),
    ("кран", ProductType::Valve),
    ("фильтр", ProductType::Filter),
    ("клапан", ProductType::ReliefValve),
    ("сифон", ProductType::Siphon),
];

/// Closed set of product types, `None` if no marker matches. Operates on
/// the raw (not normalized) string; markers are matched case-insensitively.
pub fn extract_product_type(s: &str) -> Option<ProductType> {
    let lower = s.to_lowercase();
    MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|(_, ty)| *ty)
}
