use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::tables::{mm_to_inch, SYNONYMS};

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Compiled, longest-key-first synonym patterns. A boundary assertion is
/// only added on a side whose edge character is a word character, so
/// keys ending in punctuation (`"кан."`) or containing it (`"в/р"`)
/// still only match at real word edges instead of silently matching
/// nowhere (a naive `\bкан\.\b` never matches because `.` is not a word
/// character).
static SYNONYM_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SYNONYMS
        .iter()
        .map(|(key, canonical)| {
            let first_is_word = key.chars().next().map(is_word_char).unwrap_or(false);
            let last_is_word = key.chars().last().map(is_word_char).unwrap_or(false);
            let mut pattern = String::new();
            if first_is_word {
                pattern.push_str(r"\b");
            }
            pattern.push_str(&regex::escape(key));
            if last_is_word {
                pattern.push_str(r"\b");
            }
            (Regex::new(&pattern).expect("synonym pattern compiles"), *canonical)
        })
        .collect()
});

static PACKAGE_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\s*уп\.?\s*\d+\s*шт\.?\s*\)?|\(?\s*\d+\s*шт\s*\)?").unwrap());
static WALL_THICKNESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s*\d+\.\d+\s*\)").unwrap());
static STRIP_PARENTHETICALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*(двухраструбная|ремонтная)\s*\)").unwrap());
static PEREHOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bпереход\b").unwrap());
static KOMPENSATOR_KAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bкомпенсатор\s+кан\b").unwrap());
static KHOMUT_MM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bхомут\s+(\d+)\b").unwrap());
static COLOR_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(серый|белый)\b").unwrap());
static PAIR_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)\s*[-xхXХ*×]\s*(\d)").unwrap());
static DROP_TOKENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(jk|jakko)\b").unwrap());
static MALOSHUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"малошумн\w*").unwrap());
static PN_SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bpn[ -]?(\d+)\b").unwrap());
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw product/query name into the canonical text used for
/// fuzzy comparison. Pure and total; idempotent under repeated
/// application. Seventeen ordered steps; see the crate's design notes
/// for why the order matters (synonym expansion must run before
/// punctuation collapsing, or multi-word keys like `"нар.кан"` would
/// already have lost their delimiter).
pub fn normalize_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    // 1. lowercase
    let mut s: Cow<str> = Cow::Owned(name.to_lowercase());

    // 2. Unicode NFKC
    s = Cow::Owned(s.nfkc().collect::<String>());

    // 3. ё -> е
    if s.contains('ё') {
        s = Cow::Owned(s.replace('ё', "е"));
    }

    // 4. synonym expansion, longest key first
    for (pattern, canonical) in SYNONYM_PATTERNS.iter() {
        if pattern.is_match(&s) {
            s = Cow::Owned(pattern.replace_all(&s, *canonical).into_owned());
        }
    }

    // 5. strip package counts, keep metric runs like "(5 м)"
    s = Cow::Owned(PACKAGE_COUNT.replace_all(&s, " ").into_owned());

    // 6. strip wall-thickness parentheticals "(F.F)"
    s = Cow::Owned(WALL_THICKNESS.replace_all(&s, " ").into_owned());

    // 7. strip "(двухраструбная)" / "(ремонтная)"
    s = Cow::Owned(STRIP_PARENTHETICALS.replace_all(&s, " ").into_owned());

    // 8. переход -> переходник
    s = Cow::Owned(PEREHOD.replace_all(&s, "переходник").into_owned());

    // 9. компенсатор кан -> патрубок компенсационный
    s = Cow::Owned(
        KOMPENSATOR_KAN
            .replace_all(&s, "патрубок компенсационный")
            .into_owned(),
    );

    // 10. хомут N (mm) -> хомут в комплекте X"
    s = Cow::Owned(
        KHOMUT_MM
            .replace_all(&s, |caps: &regex::Captures| {
                let mm: u32 = caps[1].parse().unwrap_or(0);
                match mm_to_inch(mm) {
                    Some(inch) => format!("хомут в комплекте {inch}"),
                    None => caps[0].to_string(),
                }
            })
            .into_owned(),
    );

    // 11. drop color words серый/белый
    s = Cow::Owned(COLOR_WORDS.replace_all(&s, " ").into_owned());

    // 12. unify pair separators between digits to ×
    s = Cow::Owned(PAIR_SEPARATOR.replace_all(&s, "$1×$2").into_owned());

    // 13. delete tokens jk, jakko
    s = Cow::Owned(DROP_TOKENS.replace_all(&s, " ").into_owned());

    // 14. малошумн* -> prestige
    s = Cow::Owned(MALOSHUM.replace_all(&s, "prestige").into_owned());

    // 15. pn[ -]?N -> pnN
    s = Cow::Owned(PN_SIZE.replace_all(&s, "pn$1").into_owned());

    // 16. collapse punctuation to spaces (keep × which is not a \w\s char,
    // so protect it first).
    s = Cow::Owned(s.replace('×', "\u{E000}"));
    s = Cow::Owned(PUNCTUATION.replace_all(&s, " ").into_owned());
    s = Cow::Owned(s.replace('\u{E000}', "×"));

    // 17. collapse whitespace runs
    let collapsed = WHITESPACE.replace_all(s.trim(), " ");
    collapsed.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty() {
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_name("  Труба   ПП  "), "труба полипропилен");
    }

    #[test]
    fn yo_becomes_ye() {
        assert_eq!(normalize_name("тройник ёлочка"), "тройник елочка");
    }

    #[test]
    fn synonym_expansion_longest_first() {
        // "нар.кан" must expand as a whole, not leave a dangling "кан."
        assert_eq!(
            normalize_name("труба нар.кан 110"),
            "труба наружная канализация 110"
        );
    }

    #[test]
    fn package_count_stripped_but_metric_run_kept() {
        assert_eq!(normalize_name("труба (уп. 10 шт.)"), "труба");
        assert_eq!(normalize_name("труба (5 м)"), "труба 5 м");
    }

    #[test]
    fn pair_separators_unified() {
        for sep in ["-", "x", "х", "X", "Х", "*", "×"] {
            let input = format!("отвод 110{sep}45");
            assert_eq!(normalize_name(&input), "отвод 110×45", "sep {sep:?}");
        }
    }

    #[test]
    fn khomut_mm_translated_via_table() {
        // The inch mark is punctuation and is collapsed away in step 16,
        // same as any other quote: normalize_name is for fuzzy text
        // comparison, not attribute extraction, which reads the raw string.
        assert_eq!(normalize_name("хомут 110"), "хомут в комплекте 4");
    }

    #[test]
    fn maloshum_maps_to_prestige() {
        assert_eq!(normalize_name("труба малошумная"), "труба prestige");
    }

    #[test]
    fn pn_size_normalized() {
        assert_eq!(normalize_name("труба pn 16"), "труба pn16");
        assert_eq!(normalize_name("труба pn-16"), "труба pn16");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Труба ПП канализационная 110×2000",
            "Хомут в комплекте 4\" (107-115)",
            "",
            "  Отвод 45 нар.кан  ",
        ];
        for sample in samples {
            let once = normalize_name(sample);
            let twice = normalize_name(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn unicode_nfkc_equivalence() {
        let composed = "muffa caf\u{00E9}";
        let decomposed = "muffa cafe\u{0301}";
        assert_eq!(normalize_name(composed), normalize_name(decomposed));
    }
}
