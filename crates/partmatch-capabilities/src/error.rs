use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum EmbeddingError {
    #[error("embedding index transport error: {0}")]
    Transport(String),

    #[error("embedding index timed out")]
    Timeout,
}

#[derive(Debug, Error, Clone)]
pub enum LlmError {
    #[error("llm transport error: {0}")]
    Transport(String),

    #[error("llm timed out")]
    Timeout,

    #[error("llm response could not be parsed: {0}")]
    Parse(String),
}
