//! Configuration for the extraction pipeline.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAI API.
    pub const BASE_URL: &str = "https://api.openai.com/v1";

    /// Chat model used for extraction.
    pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

    /// Decoding temperature. Zero keeps repeated runs as deterministic as the
    /// model allows.
    pub const TEMPERATURE: f32 = 0.0;

    /// Request timeout (completions on long articles can take a while).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum retries for transient failures (429/5xx/transport).
    pub const MAX_RETRIES: u32 = 3;

    /// Minimum backoff between retries.
    pub const RETRY_MIN_BACKOFF: Duration = Duration::from_secs(1);

    /// Maximum backoff between retries.
    pub const RETRY_MAX_BACKOFF: Duration = Duration::from_secs(30);
}

/// Batch processing constants.
pub mod batch {
    /// Hard cap on files accepted into one batch; extra files are dropped
    /// with a warning.
    pub const MAX_FILES: usize = 100;

    /// Pages read from the start of each PDF.
    pub const DEFAULT_PAGE_LIMIT: usize = 3;
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key (optional; the CLI requires one, tests do not).
    pub api_key: Option<String>,

    /// Chat model identifier.
    pub model: String,

    /// Base URL for the API (for testing with mock servers).
    pub api_url: String,

    /// Pages read from the start of each PDF.
    pub page_limit: usize,

    /// Progress chunk size; `None` processes the batch as one chunk.
    pub chunk_size: Option<usize>,

    /// Whether to attach token/cost usage to the report.
    pub report_usage: bool,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Maximum retries for transient failures.
    pub max_retries: u32,

    /// Minimum retry backoff.
    pub retry_min_backoff: Duration,

    /// Maximum retry backoff.
    pub retry_max_backoff: Duration,
}

impl Config {
    /// Create a new configuration with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: api::DEFAULT_MODEL.to_string(),
            api_url: api::BASE_URL.to_string(),
            page_limit: batch::DEFAULT_PAGE_LIMIT,
            chunk_size: None,
            report_usage: true,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            retry_min_backoff: api::RETRY_MIN_BACKOFF,
            retry_max_backoff: api::RETRY_MAX_BACKOFF,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            model: api::DEFAULT_MODEL.to_string(),
            api_url: format!("{}/v1", base_url),
            page_limit: batch::DEFAULT_PAGE_LIMIT,
            chunk_size: None,
            report_usage: true,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0, // No retries in tests unless a test opts in
            retry_min_backoff: Duration::from_millis(1),
            retry_max_backoff: Duration::from_millis(10),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok();
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        Ok(config)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
