//! Authentication error types.

use thiserror::Error;

/// Result type for token verification.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while verifying a token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication token missing")]
    MissingToken,

    #[error("authentication service rejected the token (status {status})")]
    Rejected { status: u16 },

    #[error("invalid response from authentication service: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AuthError {
    /// True when the token itself was refused, as opposed to the
    /// authentication service being unreachable or misbehaving.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::MissingToken | AuthError::Rejected { .. })
    }
}
