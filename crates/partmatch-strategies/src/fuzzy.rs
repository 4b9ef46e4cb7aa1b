use std::collections::BTreeSet;

/// Normalized Levenshtein similarity as a `0..=100` ratio, the same
/// scale `rapidfuzz.fuzz.ratio` uses in the original implementation.
pub fn ratio(a: &str, b: &str) -> f32 {
    (strsim::normalized_levenshtein(a, b) * 100.0) as f32
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// `ratio` after sorting each string's whitespace tokens alphabetically,
/// so word order differences (`"муфта 110"` vs `"110 муфта"`) don't
/// depress the score.
pub fn token_sort_ratio(a: &str, b: &str) -> f32 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// `rapidfuzz`'s token-set ratio: split into the shared-token
/// intersection plus each side's leftover tokens, then take the best
/// `ratio` among the three pairings this yields. Tolerant of one side
/// carrying extra descriptive words the other lacks.
pub fn token_set_ratio(a: &str, b: &str) -> f32 {
    let ta: BTreeSet<&str> = a.split_whitespace().collect();
    let tb: BTreeSet<&str> = b.split_whitespace().collect();

    let intersection: Vec<&str> = ta.intersection(&tb).copied().collect();
    let only_a: Vec<&str> = ta.difference(&tb).copied().collect();
    let only_b: Vec<&str> = tb.difference(&ta).copied().collect();

    let sect = intersection.join(" ");
    let combined_a = join_nonempty(&sect, &only_a.join(" "));
    let combined_b = join_nonempty(&sect, &only_b.join(" "));

    let candidates = [
        ratio(&sect, &combined_a),
        ratio(&sect, &combined_b),
        ratio(&combined_a, &combined_b),
    ];
    candidates.into_iter().fold(0.0_f32, f32::max)
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => String::new(),
        (true, false) => b.to_string(),
        (false, true) => a.to_string(),
        (false, false) => format!("{a} {b}"),
    }
}

/// `(token_sort_ratio + token_set_ratio) / 2`, the Hybrid strategy's
/// fuzzy name score.
pub fn fuzzy_name_score(a: &str, b: &str) -> f32 {
    (token_sort_ratio(a, b) + token_set_ratio(a, b)) / 2.0
}
