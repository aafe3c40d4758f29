use thiserror::Error;

/// Errors surfaced by the open/reveal operations.
#[derive(Debug, Error)]
pub enum OpenerError {
    #[error("Path does not exist: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to execute {0}: {1}")]
    Launch(String, #[source] std::io::Error),
}

pub type OpenerResult<T> = Result<T, OpenerError>;
