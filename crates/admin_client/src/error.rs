use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("backend URL is not configured")]
    MissingBackendUrl,
    #[error("service key is not configured")]
    MissingServiceKey,
    #[error("invalid backend URL: {0}")]
    InvalidBackendUrl(#[from] url::ParseError),
    #[error("invalid backend URL: unsupported scheme {0}")]
    UnsupportedScheme(String),
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} - {status}, {message}")]
    Backend {
        url: String,
        status: StatusCode,
        message: String,
    },
    #[error("error parsing JSON response: {0}")]
    Response(&'static str),
}

impl Error {
    /// True for errors caused by missing or malformed deployment
    /// configuration. These are fatal to the calling operation and indicate
    /// a deployment defect, not a user mistake; retrying cannot succeed.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingBackendUrl
                | Self::MissingServiceKey
                | Self::InvalidBackendUrl(_)
                | Self::UnsupportedScheme(_)
        )
    }
}
