use once_cell::sync::Lazy;
use partmatch_types::{ThreadDirection, ThreadSize};
use regex::Regex;

static THREAD_SIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\d+)\s*(?:мм)?\s*[×x*]\s*((?:\d+\s+\d+/\d+)|(?:\d+/\d+)|\d+)\s*(?:"|″)"#)
        .unwrap()
});

/// `(mm, inch)` for combinations like `32×1"`, `20×1/2"`, `40×1 1/4"`.
pub fn extract_thread_size(s: &str) -> Option<ThreadSize> {
    let caps = THREAD_SIZE.captures(s)?;
    let mm: u32 = caps[1].parse().ok()?;
    Some(ThreadSize {
        mm,
        inch: format!("{}\"", &caps[2]),
    })
}

const INNER_TOKENS: &[&str] = &["в/р", "вн.рез", "вн рез", "внутр", "(вр)", "вр)", " вр "];
const OUTER_TOKENS: &[&str] = &["н/р", "нар.рез", "наруж", "(нр)", "нр)", " нр "];

/// `Inner`/`Outer`/`None` from a closed token set, matched case-insensitively.
pub fn extract_thread_direction(s: &str) -> Option<ThreadDirection> {
    let lower = s.to_lowercase();
    if INNER_TOKENS.iter().any(|t| lower.contains(t)) {
        return Some(ThreadDirection::Inner);
    }
    if OUTER_TOKENS.iter().any(|t| lower.contains(t)) {
        return Some(ThreadDirection::Outer);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_thread_size() {
        let t = extract_thread_size("Муфта НР 32×1\"").unwrap();
        assert_eq!(t.mm, 32);
        assert_eq!(t.inch, "1\"");
    }

    #[test]
    fn fractional_thread_size() {
        let t = extract_thread_size("кран 20×1/2\"").unwrap();
        assert_eq!(t.mm, 20);
        assert_eq!(t.inch, "1/2\"");
    }

    #[test]
    fn mixed_fraction_thread_size() {
        let t = extract_thread_size("муфта 40×1 1/4\"").unwrap();
        assert_eq!(t.mm, 40);
        assert_eq!(t.inch, "1 1/4\"");
    }

    #[test]
    fn no_thread_size() {
        assert_eq!(extract_thread_size("труба 110×2000"), None);
    }

    #[test]
    fn thread_direction_inner_and_outer() {
        assert_eq!(extract_thread_direction("муфта в/р 32"), Some(ThreadDirection::Inner));
        assert_eq!(extract_thread_direction("муфта НР 32"), Some(ThreadDirection::Outer));
        assert_eq!(extract_thread_direction("труба 110"), None);
    }
}
