use std::time::Duration;

use jobscout_core::error::AppError;
use jobscout_core::traits::Fetcher;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Configuration for [`RetryingFetcher`].
///
/// Explicit and immutable after construction; defaults match what the
/// target job boards tolerate in practice. The backoff is linear
/// (`attempt_index * backoff_base`); a 429 response is retried on the
/// same schedule as timeouts and 5xx, while deterministic client
/// errors give up immediately.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout applied to each individual attempt, independent of the
    /// total retry budget.
    pub attempt_timeout: Duration,
    /// Additional attempts after the first one fails.
    pub max_retries: u32,
    /// Base delay for the linear backoff between attempts.
    pub backoff_base: Duration,
    /// Headers sent on every request unless overridden per call.
    pub default_headers: Vec<(String, String)>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_secs(10),
            max_retries: 2,
            backoff_base: Duration::from_millis(500),
            default_headers: vec![
                (
                    "User-Agent".to_string(),
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                     (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
                        .to_string(),
                ),
                (
                    "Accept".to_string(),
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
                ),
                ("Accept-Language".to_string(), "en-US,en;q=0.5".to_string()),
            ],
        }
    }
}

impl FetchConfig {
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Delay before attempt `attempt` (1-indexed; attempt 0 is immediate).
    fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_base * attempt
    }
}

/// HTTP fetcher using reqwest, with bounded retry and linear backoff.
///
/// Every source adapter shares one instance, so resilience behavior is
/// uniform across sites instead of re-implemented per call site.
#[derive(Debug, Clone)]
pub struct RetryingFetcher {
    client: Client,
    config: FetchConfig,
}

impl RetryingFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::ConfigError(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::ConfigError(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.attempt_timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// One GET attempt, classified into the error taxonomy so the retry
    /// loop can ask [`AppError::is_retryable`].
    async fn attempt(
        &self,
        url: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<String, AppError> {
        let mut request = self.client.get(url);
        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.config.attempt_timeout.as_secs())
            } else if e.is_connect() {
                AppError::NetworkError(format!("connection failed: {e}"))
            } else {
                AppError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailed {
                status: Some(status.as_u16()),
                message: format!("HTTP {} for {}", status.as_u16(), url),
            });
        }

        response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("failed to read body: {e}")))
    }

    async fn get_with_retry(
        &self,
        url: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<String, AppError> {
        let mut last: Option<AppError> = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = self.config.backoff_delay(attempt);
                tracing::debug!(%url, attempt, delay_ms = delay.as_millis() as u64, "Retrying fetch");
                tokio::time::sleep(delay).await;
            }

            match self.attempt(url, extra_headers).await {
                Ok(body) => return Ok(body),
                Err(error) => {
                    tracing::warn!(%url, attempt, %error, "Fetch attempt failed");
                    // Deterministic failures (4xx, bad request shape) are
                    // surfaced immediately instead of burning the backoff.
                    let retryable = error.is_retryable();
                    last = Some(error);
                    if !retryable {
                        break;
                    }
                }
            }
        }

        Err(last.unwrap_or_else(|| AppError::NetworkError("no attempts made".to_string())))
    }
}

impl Fetcher for RetryingFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.get_with_retry(url, &[]).await
    }

    async fn fetch_with_headers(
        &self,
        url: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<String, AppError> {
        self.get_with_retry(url, extra_headers).await
    }
}
