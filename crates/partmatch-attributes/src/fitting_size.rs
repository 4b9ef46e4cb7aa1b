use once_cell::sync::Lazy;
use partmatch_types::FittingSize;
use regex::Regex;

static ANGLE_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:45|67|87|90)\s*°").unwrap());
static GROUP_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2,3}(?:[-/×xхXХ*]\d{2,3}){1,2})\b").unwrap());
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-/×xхXХ*]").unwrap());

const FITTING_TYPE_MARKERS: &[&str] = &[
    "муфт", "заглуш", "ревизи", "крестовин", "тройник", "переход", "отвод", "сифон",
];

fn in_range(n: u32) -> bool {
    (25..=200).contains(&n)
}

/// A tuple of 1-3 diameters (mm). Angle literals like `45°` are removed
/// first so a fitting named `"Отвод 45° 110"` doesn't have its angle
/// mistaken for a second fitting diameter. A multi-group run (`25-40`,
/// `32×40×50`) is preferred; a bare single diameter is only accepted in
/// the presence of a fitting-type marker, since an unqualified number
/// elsewhere in the name is too weak a signal.
pub fn extract_fitting_size(s: &str) -> Option<FittingSize> {
    let cleaned = ANGLE_LITERAL.replace_all(s, "");

    if let Some(caps) = GROUP_RUN.captures(&cleaned) {
        let run = &caps[1];
        let parts: Vec<u32> = SEPARATOR
            .split(run)
            .filter_map(|p| p.parse::<u32>().ok())
            .collect();
        if !parts.is_empty() && parts.len() <= 3 && parts.iter().all(|n| in_range(*n)) {
            return Some(parts);
        }
    }

    let has_marker = FITTING_TYPE_MARKERS.iter().any(|m| cleaned.contains(m));
    if has_marker {
        if let Some(single) = extract_single_in_range(&cleaned) {
            return Some(vec![single]);
        }
    }
    None
}

fn extract_single_in_range(s: &str) -> Option<u32> {
    static SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{2,3})\b").unwrap());
    SINGLE
        .captures_iter(s)
        .filter_map(|c| c[1].parse::<u32>().ok())
        .find(|n| in_range(*n))
}

/// Collapse an all-equal tuple to length 1, e.g. `(25,25) -> (25,)`, so a
/// PND-style query like "отвод 25-25" matches a catalog entry named
/// "отвод 25".
pub fn normalize_equal_sizes(t: &[u32]) -> Vec<u32> {
    if t.len() >= 2 && t.iter().all(|x| *x == t[0]) {
        vec![t[0]]
    } else {
        t.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_group_run() {
        assert_eq!(extract_fitting_size("тройник 32-40-50"), Some(vec![32, 40, 50]));
    }

    #[test]
    fn angle_literal_not_mistaken_for_group() {
        assert_eq!(extract_fitting_size("отвод 45° 110"), None);
    }

    #[test]
    fn single_requires_marker() {
        assert_eq!(extract_fitting_size("заглушка 110"), Some(vec![110]));
        assert_eq!(extract_fitting_size("нечто 110"), None);
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(extract_fitting_size("муфта 500"), None);
        assert_eq!(extract_fitting_size("муфта 10"), None);
    }

    #[test]
    fn normalize_equal_sizes_collapses() {
        assert_eq!(normalize_equal_sizes(&[25, 25]), vec![25]);
        assert_eq!(normalize_equal_sizes(&[25, 40]), vec![25, 40]);
        assert_eq!(normalize_equal_sizes(&[25]), vec![25]);
    }
}
