use serde::{Deserialize, Serialize};

fn default_fuzzy_threshold() -> f32 {
    70.0
}
fn default_confidence_exact_sku() -> f32 {
    100.0
}
fn default_confidence_exact_name() -> f32 {
    95.0
}
fn default_confidence_fuzzy_sku() -> f32 {
    90.0
}
fn default_confidence_fuzzy_name() -> f32 {
    80.0
}
fn default_confidence_ml() -> f32 {
    70.0
}
fn default_min_confidence_auto() -> f32 {
    80.0
}
fn default_enable_ml_matching() -> bool {
    true
}

/// Tunable thresholds consulted by the strategy pipeline. Mirrors
/// `spec.md` §6's external interface table; every field independently
/// defaults so a caller's YAML document only needs to override what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum Hybrid score accepted as a match.
    pub fuzzy_threshold: f32,
    pub confidence_exact_sku: f32,
    pub confidence_exact_name: f32,
    pub confidence_fuzzy_sku: f32,
    /// Reference confidence for fuzzy-name matches; Hybrid's returned
    /// confidence is always the computed score itself (`spec.md` §4.8
    /// step 8), so this field documents the expected order of magnitude
    /// rather than gating the calculation.
    pub confidence_fuzzy_name: f32,
    /// Confidence floor applied when the LLM strategy returns a
    /// suggestion with no more specific signal to use.
    pub confidence_ml: f32,
    /// Below this confidence, an LLM match is flagged `needs_review`.
    pub min_confidence_auto: f32,
    /// When `false`, the Embedding Index pre-filter is skipped and
    /// Hybrid scores the full catalog; the Llm/SemanticFallback
    /// strategies are also disabled.
    pub enable_ml_matching: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            confidence_exact_sku: default_confidence_exact_sku(),
            confidence_exact_name: default_confidence_exact_name(),
            confidence_fuzzy_sku: default_confidence_fuzzy_sku(),
            confidence_fuzzy_name: default_confidence_fuzzy_name(),
            confidence_ml: default_confidence_ml(),
            min_confidence_auto: default_min_confidence_auto(),
            enable_ml_matching: default_enable_ml_matching(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_values() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.fuzzy_threshold, 70.0);
        assert_eq!(cfg.confidence_exact_sku, 100.0);
        assert_eq!(cfg.confidence_exact_name, 95.0);
        assert_eq!(cfg.confidence_fuzzy_sku, 90.0);
        assert_eq!(cfg.confidence_fuzzy_name, 80.0);
        assert_eq!(cfg.confidence_ml, 70.0);
        assert_eq!(cfg.min_confidence_auto, 80.0);
        assert!(cfg.enable_ml_matching);
    }
}
