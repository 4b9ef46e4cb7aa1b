use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum RepoError {
    #[error("catalog repository error: {0}")]
    Catalog(String),

    #[error("mapping repository error: {0}")]
    Mapping(String),
}
