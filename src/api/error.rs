// API error taxonomy

use thiserror::Error;

/// Everything that can go wrong talking to the article server
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS, TLS, timeout, ...
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Login answered without a token, or rejected the credentials
    #[error("the user name or password is incorrect")]
    InvalidCredentials,

    /// Success status but the body was not what we expected
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the server put in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
