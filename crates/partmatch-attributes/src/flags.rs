/// Eco (thinner-walled) variant: `(1.8)` is the standard wall thickness
/// for small diameters and explicitly means *not* eco; `эко`/`eko`/`(2.2)`
/// mean eco.
pub fn is_eco(s: &str) -> bool {
    let lower = s.to_lowercase();
    if lower.contains("(1.8)") {
        return false;
    }
    lower.contains("эко") || lower.contains("eko") || lower.contains("(2.2)")
}

/// Detachable coupling ("американка"), identified by the `разъемн` token.
pub fn is_detachable(s: &str) -> bool {
    s.to_lowercase().contains("разъемн")
}

/// A fitting whose diameters differ, identified by the `редукц`/`переходн`
/// token set (catalog convention; distinct from the `Adapter` product
/// type, which also covers same-size adapters).
pub fn is_reducer(s: &str) -> bool {
    let lower = s.to_lowercase();
    lower.contains("редукц") || lower.contains("переходн")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eco_standard_thickness_wins_over_other_markers() {
        assert!(!is_eco("труба эко (1.8)"));
    }

    #[test]
    fn eco_markers() {
        assert!(is_eco("труба эко"));
        assert!(is_eco("труба eko"));
        assert!(is_eco("труба (2.2)"));
        assert!(!is_eco("труба"));
    }

    #[test]
    fn detachable_token() {
        assert!(is_detachable("муфта разъемная"));
        assert!(!is_detachable("муфта"));
    }

    #[test]
    fn reducer_token() {
        assert!(is_reducer("переходник редукционный"));
        assert!(!is_reducer("муфта"));
    }
}
