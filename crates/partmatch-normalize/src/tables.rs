//! Static lookup tables used by [`crate::name::normalize_name`].
//!
//! Kept in one module so the coupling between the synonym vocabulary and
//! the mm->inch clamp conversions is auditable in one place, the same
//! rationale the spec gives for keeping the category filter rules
//! together.

use once_cell::sync::Lazy;

/// `(abbreviation/synonym, canonical form)`, sorted longest-key-first at
/// first use so multi-word keys are matched before any single-word key
/// they contain (e.g. `"нар.кан"` before `"кан."`).
pub static SYNONYMS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut table: Vec<(&str, &str)> = vec![
        // Material abbreviations.
        ("ппр", "полипропилен"),
        ("ppr", "полипропилен"),
        ("пп", "полипропилен"),
        ("pp", "полипропилен"),
        ("pe-rt", "полиэтилен"),
        ("pert", "полиэтилен"),
        ("пэ", "полиэтилен"),
        ("pe", "полиэтилен"),
        ("пвх", "поливинилхлорид"),
        ("pvc", "поливинилхлорид"),
        // Product-name synonyms.
        ("угольник", "отвод"),
        ("колено", "отвод"),
        ("угол", "отвод"),
        ("elbow", "отвод"),
        ("coupling", "муфта"),
        ("plug", "заглушка"),
        ("cap", "заглушка"),
        ("tee", "тройник"),
        ("нар.кан", "наружная канализация"),
        ("нар кан", "наружная канализация"),
        ("кан.", "канализационн"),
        ("малошум", "малошумная"),
        // Thread-direction abbreviations.
        ("внутр рез", "внутренняя резьба"),
        ("вн.рез", "внутренняя резьба"),
        ("вн рез", "внутренняя резьба"),
        ("в/р", "внутренняя резьба"),
        ("нар.рез", "наружная резьба"),
        ("нар рез", "наружная резьба"),
        ("н/р", "наружная резьба"),
    ];
    table.sort_by_key(|(key, _)| std::cmp::Reverse(key.len()));
    table
});

/// Fixed mm -> inch clamp conversion table (17 entries, 15-166 mm).
/// Unknown sizes pass through numerically untranslated.
pub static MM_TO_INCH: &[(u32, &str)] = &[
    (15, "3/8\""),
    (20, "1/2\""),
    (25, "3/4\""),
    (32, "1\""),
    (40, "1 1/4\""),
    (50, "1 1/2\""),
    (63, "2\""),
    (75, "2 1/2\""),
    (90, "3\""),
    (100, "3 1/2\""),
    (110, "4\""),
    (125, "4 1/2\""),
    (133, "5\""),
    (140, "5\""),
    (152, "5 1/2\""),
    (160, "6\""),
    (166, "6\""),
];

pub fn mm_to_inch(mm: u32) -> Option<&'static str> {
    MM_TO_INCH
        .iter()
        .find(|(m, _)| *m == mm)
        .map(|(_, inch)| *inch)
}
