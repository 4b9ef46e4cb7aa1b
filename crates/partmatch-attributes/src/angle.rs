use once_cell::sync::Lazy;
use partmatch_types::Angle;
use regex::Regex;

static ANGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?P<prefixed>15|30|45|67|87|90)\b|\b(?P<suffixed>15|30|45|67|87|90)\s*(?:°|градус\w*)")
        .unwrap()
});

/// One of `{15,30,45,67,87,90}`, disambiguated from a bare size number by
/// either a leading `/` (`"110/45"`) or a trailing `°`/`градус` marker.
pub fn extract_angle(s: &str) -> Option<Angle> {
    let caps = ANGLE.captures(s)?;
    let raw = caps
        .name("prefixed")
        .or_else(|| caps.name("suffixed"))?
        .as_str();
    raw.parse().ok()
}

/// `90 -> 87` (catalog convention); every other angle is unchanged.
/// Isolated here so the convention can be replaced per deployment without
/// touching the extractor.
pub fn normalize_angle(a: Angle) -> Angle {
    if a == 90 {
        87
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_angle() {
        assert_eq!(extract_angle("Отвод 110/45 серый"), Some(45));
    }

    #[test]
    fn suffixed_degree_angle() {
        assert_eq!(extract_angle("отвод 45° 110"), Some(45));
        assert_eq!(extract_angle("отвод 90 градусов 110"), Some(90));
    }

    #[test]
    fn bare_number_is_not_an_angle() {
        assert_eq!(extract_angle("труба 110"), None);
    }

    #[test]
    fn normalize_angle_maps_90_to_87() {
        assert_eq!(normalize_angle(90), 87);
        for a in [15, 30, 45, 67, 87] {
            assert_eq!(normalize_angle(a), a);
        }
    }
}
