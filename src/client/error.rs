use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("base url cannot carry a path: {0}")]
    NotABase(String),
    /// Transport failures and non-2xx statuses, passed through unmodified.
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status when the server answered with an error status.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}
