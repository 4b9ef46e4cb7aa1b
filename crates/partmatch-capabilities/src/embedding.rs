use async_trait::async_trait;
use partmatch_types::ProductId;

use crate::error::EmbeddingError;

/// Top-K candidates by cosine similarity from an external similarity
/// search over a text query. Implementations may fail (network error,
/// timeout); callers are responsible for treating a failure as "no
/// candidates" rather than propagating it, per the embedding_unavailable
/// entry in the error-handling table — this trait does not swallow
/// errors itself so implementations can still report *why* a search
/// failed, for logging.
#[async_trait]
pub trait EmbeddingIndex: Send + Sync {
    async fn search(
        &self,
        query_text: &str,
        top_k: usize,
        min_score: f32,
    ) -> Result<Vec<(ProductId, f32)>, EmbeddingError>;
}

/// No-op index used when `enable_ml_matching = false`, and in tests.
/// Always returns an empty result, never an error.
#[derive(Debug, Default)]
pub struct NullEmbeddingIndex;

#[async_trait]
impl EmbeddingIndex for NullEmbeddingIndex {
    async fn search(
        &self,
        _query_text: &str,
        _top_k: usize,
        _min_score: f32,
    ) -> Result<Vec<(ProductId, f32)>, EmbeddingError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn null_index_returns_empty() {
        let index = NullEmbeddingIndex;
        let hits = index.search("труба", 50, 0.4).await.unwrap();
        assert!(hits.is_empty());
    }
}
