use reqwest::StatusCode;
use thiserror::Error;

/// Boxed underlying cause of a failed fetch
pub type FetchCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A remote listing could not be fetched.
///
/// Transport errors, non-success statuses and malformed JSON all collapse
/// into this one kind. Callers branch on success/failure only; the cause is
/// kept for logging and display.
#[derive(Debug, Error)]
#[error("failed to fetch {url}: {cause}")]
pub struct FetchFailure {
    pub url: String,
    #[source]
    pub cause: FetchCause,
}

impl FetchFailure {
    pub fn new(url: impl Into<String>, cause: impl Into<FetchCause>) -> Self {
        Self {
            url: url.into(),
            cause: cause.into(),
        }
    }

    /// Failure for a response that arrived with a non-success status
    pub fn status(url: impl Into<String>, status: StatusCode) -> Self {
        Self::new(url, format!("unexpected status {}", status))
    }
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Package configuration outside its documented ranges
    #[error("Invalid package: {0}")]
    InvalidPackage(String),
    /// Booking inquiry failed validation
    #[error("Invalid inquiry: {0}")]
    InvalidInquiry(String),
    /// Gallery fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchFailure),
    /// Email relay rejected the submission
    #[error("Relay error ({status}): {message}")]
    RelayError { status: StatusCode, message: String },
    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
}
