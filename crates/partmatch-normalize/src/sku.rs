use once_cell::sync::Lazy;
use regex::Regex;

static SKU_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-./_]+").unwrap());

/// Uppercase; strip whitespace/`-`/`.`/`/`/`_`; strip leading zeros,
/// collapsing an all-zero SKU to `"0"`. Pure and total: empty input maps
/// to empty output. Idempotent: `normalize_sku(normalize_sku(x)) ==
/// normalize_sku(x)`.
pub fn normalize_sku(sku: &str) -> String {
    if sku.is_empty() {
        return String::new();
    }
    let upper = sku.to_uppercase();
    let stripped = SKU_SEPARATORS.replace_all(&upper, "");
    let trimmed = stripped.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty() {
        assert_eq!(normalize_sku(""), "");
    }

    #[test]
    fn strips_separators_and_cases() {
        assert_eq!(normalize_sku("202-051.110_R/"), "202051110R");
    }

    #[test]
    fn collapses_all_zero() {
        assert_eq!(normalize_sku("0000"), "0");
        assert_eq!(normalize_sku("000-000"), "0");
    }

    #[test]
    fn strips_leading_zeros_only() {
        assert_eq!(normalize_sku("00501a"), "501A");
    }

    #[test]
    fn idempotent() {
        for sku in ["202051110R", "  00-100/a ", "", "0000", "abc"] {
            let once = normalize_sku(sku);
            let twice = normalize_sku(&once);
            assert_eq!(once, twice, "not idempotent for {sku:?}");
        }
    }
}
