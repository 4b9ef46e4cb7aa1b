use once_cell::sync::Lazy;
use partmatch_types::PipeSize;
use regex::Regex;

static PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*[-xхXХ*×]\s*(\d+)").unwrap());

/// `(d,l)` pair with `16 <= d <= 400`, `100 <= l <= 6000`. Scans every
/// digit-pair in the string and returns the first that satisfies both
/// bounds, so a leading fitting-size pair (e.g. an angle like `45-67`,
/// both well under 100) is skipped in favor of a later genuine pipe-size
/// pair.
pub fn extract_pipe_size(s: &str) -> Option<PipeSize> {
    for caps in PAIR.captures_iter(s) {
        let d: u32 = caps[1].parse().ok()?;
        let l: u32 = caps[2].parse().ok()?;
        if (16..=400).contains(&d) && (100..=6000).contains(&l) {
            return Some(PipeSize { d, l });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_pipe_size() {
        assert_eq!(extract_pipe_size("труба 110-2000"), Some(PipeSize { d: 110, l: 2000 }));
    }

    #[test]
    fn rejects_fitting_sized_pairs() {
        // 45-67 are both below the 100 lower bound for `l`, so this is
        // not mistaken for a pipe size.
        assert_eq!(extract_pipe_size("отвод 45-67"), None);
    }

    #[test]
    fn finds_first_valid_pair_after_a_fitting_pair() {
        assert_eq!(
            extract_pipe_size("отвод 45-67 труба 110×2000"),
            Some(PipeSize { d: 110, l: 2000 })
        );
    }

    #[test]
    fn out_of_range_diameter_rejected() {
        assert_eq!(extract_pipe_size("труба 10-2000"), None);
        assert_eq!(extract_pipe_size("труба 500-2000"), None);
    }

    #[test]
    fn no_pair_present() {
        assert_eq!(extract_pipe_size("муфта"), None);
    }
}
