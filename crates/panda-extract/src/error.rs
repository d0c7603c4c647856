//! Error types for the extraction pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Authentication failed (401 response)
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message from API
        message: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Completion arrived without usable content
    #[error("Response contained no completion content")]
    MissingContent,
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create an unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Timeout(_) | Self::Server { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Per-file errors from the extraction pipeline.
///
/// Everything here is contained by the batch aggregator and surfaced as an
/// error record for that file; none of these abort the batch.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The PDF could not be opened or parsed
    #[error("Failed to read PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The PDF has no text layer (scanned image)
    #[error("No extractable text in PDF")]
    EmptyText,

    /// The model call failed
    #[error("Model call failed: {0}")]
    Client(#[from] ClientError),

    /// The model response does not contain a recognizable 3-column table
    #[error("Unrecognizable table in model response: {reason}")]
    UnparseableResponse {
        /// What made the response unusable
        reason: String,
    },

    /// Temporary file spooling failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Create an unparseable-response error.
    #[must_use]
    pub fn unparseable(reason: impl Into<String>) -> Self {
        Self::UnparseableResponse { reason: reason.into() }
    }

    /// Short category label for structured logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Pdf(_) => "pdf",
            Self::EmptyText => "empty-text",
            Self::Client(_) => "client",
            Self::UnparseableResponse { .. } => "unparseable",
            Self::Io(_) => "io",
        }
    }
}

/// Errors that abort a whole batch run.
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    /// No PDF files in the working set
    #[error("No PDF files in the working set")]
    NoInput,
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for per-file pipeline operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
