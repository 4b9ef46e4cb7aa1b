use thiserror::Error;

/// Crate-spanning error type. Only [`PartmatchError::CatalogUnavailable`]
/// is allowed to escape [`MatchingService::match_item`](../partmatch_service/struct.MatchingService.html);
/// every other variant is caught at its boundary and degrades gracefully
/// per the error-handling table.
#[derive(Debug, Error, Clone)]
pub enum PartmatchError {
    #[error("client_sku and client_name are both empty")]
    InvalidInput,

    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("mapping repository unavailable for client: {0}")]
    MappingUnavailable(String),

    #[error("embedding index unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("llm matcher unavailable: {0}")]
    LlmUnavailable(String),

    #[error("llm returned a sku not present in the catalog: {0}")]
    LlmHallucination(String),

    #[error("failed to persist mapping: {0}")]
    AutosaveFailed(String),
}
