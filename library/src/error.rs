use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown combine mode: {0}")]
    UnknownMode(String),
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
