use crate::cached_mapping::CachedMapping;
use crate::config::MatchConfig;
use crate::exact_name::ExactName;
use crate::exact_sku::ExactSku;
use crate::fuzzy_sku::FuzzySku;
use crate::hybrid::Hybrid;
use crate::llm::Llm;
use crate::semantic_fallback::SemanticFallback;
use crate::strategy::MatchStrategy;

/// The fixed, ordered strategy chain: first strategy to return
/// `Some(_)` wins. `config` is currently unused beyond the pipeline's
/// shape being fixed regardless of its contents, but is taken for
/// symmetry with the rest of the crate and in case future strategies
/// need to be conditionally included.
pub fn default_pipeline(_config: &MatchConfig) -> Vec<Box<dyn MatchStrategy>> {
    vec![
        Box::new(ExactSku),
        Box::new(ExactName),
        Box::new(CachedMapping),
        Box::new(FuzzySku),
        Box::new(Hybrid),
        Box::new(Llm),
        Box::new(SemanticFallback),
    ]
}
