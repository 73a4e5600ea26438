use crate::domain::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("http request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway response deserialization: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to checkout: {message}")]
    GatewayRejected { message: String },

    #[error("user {0} not found")]
    NotFound(i64),

    #[error("gateway request cancelled")]
    Cancelled,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable machine-readable code used in HTTP error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "INVALID_INPUT",
            Error::Transport(e) if e.is_timeout() => "GATEWAY_TIMEOUT",
            Error::Transport(_) => "GATEWAY_UNREACHABLE",
            Error::Decode(_) => "GATEWAY_BAD_RESPONSE",
            Error::GatewayRejected { .. } => "GATEWAY_REJECTED",
            Error::NotFound(_) => "USER_NOT_FOUND",
            Error::Cancelled => "CANCELLED",
            Error::Config(_) => "INVALID_CONFIG",
            Error::Malformed(_) => "MALFORMED_REQUEST",
            Error::Storage(_) => "INTERNAL_ERROR",
        }
    }
}
