use thiserror::Error;

/// Every way a backend call can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection could not be established or broke mid-request.
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Backend answered with a non-2xx status.
    #[error("Server error: HTTP {status}")]
    Server { status: u16 },

    /// A 2xx body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The client could not be built from the provided settings.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404 })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Server {
                status: status.as_u16(),
            }
        } else if err.is_builder() {
            ApiError::Configuration(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
