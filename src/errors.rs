use thiserror::Error;
/// Common result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type that unifies reqwest transport errors with local failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors produced by reqwest HTTP client.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The registration endpoint answered outside the contract's status range.
    #[error("unexpected status from registration endpoint: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// Fallback catch-all with a human readable message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}
