use thiserror::Error;

/// Custom error types for the dealership assistant core.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Query must not be empty")]
    EmptyQuery,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Request to upstream provider failed: {0}")]
    UpstreamRequest(reqwest::Error),
    #[error("Failed to deserialize upstream response: {0}")]
    UpstreamDeserialization(reqwest::Error),
    #[error("Upstream provider returned an error: {0}")]
    UpstreamApi(String),
    #[error("Storage connection error: {0}")]
    StorageConnection(String),
    #[error("Storage operation failed: {0}")]
    StorageOperationFailed(String),
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read knowledge base file: {0}")]
    KnowledgeBaseIo(#[from] std::io::Error),
}

impl ChatError {
    /// Whether this error is a user input problem (a 400-class failure) as
    /// opposed to an upstream or internal one (a 500-class failure).
    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::EmptyQuery | ChatError::InvalidInput(_))
    }
}
