use partmatch_types::Color;

/// `White`/`Gray`/`Red`/`None` from a closed token set, case-insensitive.
pub fn extract_color(s: &str) -> Color {
    let lower = s.to_lowercase();
    if lower.contains("бел") {
        Color::White
    } else if lower.contains("сер") {
        Color::Gray
    } else if lower.contains("красн") || lower.contains("рыж") {
        Color::Red
    } else {
        Color::None
    }
}
