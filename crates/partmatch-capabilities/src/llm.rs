use async_trait::async_trait;

use crate::error::LlmError;

/// A catalog row offered to the LLM as a candidate to choose among.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub sku: String,
    pub name: String,
}

/// The LLM's pick, if any, plus its self-reported confidence. A `None`
/// `sku`/`name` means the model declined to choose any candidate.
/// Post-validation (does `sku` appear among the candidates offered,
/// is `confidence` in range) is the caller's responsibility — see
/// the Llm strategy's hallucination gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub confidence: f32,
}

#[async_trait]
pub trait LlmMatcher: Send + Sync {
    async fn suggest(
        &self,
        query_name: &str,
        candidates: &[Candidate],
    ) -> Result<Option<Suggestion>, LlmError>;
}

/// No-op matcher used when `enable_ml_matching = false`, and in tests.
/// Always declines, never errors.
#[derive(Debug, Default)]
pub struct NullLlmMatcher;

#[async_trait]
impl LlmMatcher for NullLlmMatcher {
    async fn suggest(
        &self,
        _query_name: &str,
        _candidates: &[Candidate],
    ) -> Result<Option<Suggestion>, LlmError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn null_matcher_declines() {
        let matcher = NullLlmMatcher;
        let candidates = vec![Candidate {
            sku: "ABC1".into(),
            name: "труба ппр 20".into(),
        }];
        let suggestion = matcher.suggest("труба 20мм", &candidates).await.unwrap();
        assert!(suggestion.is_none());
    }
}
