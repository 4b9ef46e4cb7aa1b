use once_cell::sync::Lazy;
use regex::Regex;

static CLAMP_MM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bхомут\D{0,20}?(\d{2,3})\b").unwrap());
static FIT_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+)\s*-\s*(\d+)\)").unwrap());

/// The clamp diameter in mm, only extracted when `"хомут"` is present;
/// size must be in `15..200`.
pub fn extract_clamp_mm(s: &str) -> Option<u32> {
    let lower = s.to_lowercase();
    if !lower.contains("хомут") {
        return None;
    }
    let mm: u32 = CLAMP_MM.captures(&lower)?[1].parse().ok()?;
    (15..200).contains(&mm).then_some(mm)
}

/// `true` if the product name's `(a-b)` fit range covers `target_mm`.
pub fn clamp_fits_mm(product_name: &str, target_mm: u32) -> bool {
    FIT_RANGE
        .captures(product_name)
        .and_then(|caps| {
            let a: u32 = caps[1].parse().ok()?;
            let b: u32 = caps[2].parse().ok()?;
            Some(target_mm >= a && target_mm <= b)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_khomut_token() {
        assert_eq!(extract_clamp_mm("труба 110"), None);
    }

    #[test]
    fn extracts_clamp_mm() {
        assert_eq!(extract_clamp_mm("хомут 110"), Some(110));
    }

    #[test]
    fn out_of_range_clamp_rejected() {
        assert_eq!(extract_clamp_mm("хомут 5"), None);
    }

    #[test]
    fn fit_range_covers_target() {
        assert!(clamp_fits_mm("Хомут в комплекте 4\" (107-115)", 110));
        assert!(!clamp_fits_mm("Хомут в комплекте 4\" (107-115)", 120));
    }

    #[test]
    fn no_range_never_fits() {
        assert!(!clamp_fits_mm("Хомут в комплекте 4\"", 110));
    }
}
