//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AppError;
use crate::models::{JobPosting, SourceOutcome};
use crate::site::JobSite;
use crate::traits::{Fetcher, JobSource};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns a configurable queue of responses.
#[derive(Clone)]
pub struct MockFetcher {
    /// Each call pops the first element. If empty, returns a default
    /// HTML string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    /// URLs requested, in order.
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Ok(body.to_string())])),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(error)])),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn next(&self, url: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>default</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.next(url)
    }

    async fn fetch_with_headers(
        &self,
        url: &str,
        _extra_headers: &[(&str, &str)],
    ) -> Result<String, AppError> {
        self.next(url)
    }
}

// ---------------------------------------------------------------------------
// MockSource
// ---------------------------------------------------------------------------

/// Recorded scrape call: (site, query, location, limit).
pub type ScrapeCall = (JobSite, String, String, usize);

/// Mock job source with per-site canned outcomes and optional delays.
///
/// Sites without a configured outcome settle as an empty success.
#[derive(Clone, Default)]
pub struct MockSource {
    outcomes: Arc<Mutex<HashMap<JobSite, SourceOutcome>>>,
    delays: Arc<Mutex<HashMap<JobSite, Duration>>>,
    pub calls: Arc<Mutex<Vec<ScrapeCall>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the outcome returned for `site`.
    pub fn outcome(self, site: JobSite, outcome: SourceOutcome) -> Self {
        self.outcomes.lock().unwrap().insert(site, outcome);
        self
    }

    /// Make `site` sleep before settling (for deadline tests).
    pub fn delay(self, site: JobSite, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(site, delay);
        self
    }
}

impl JobSource for MockSource {
    async fn scrape(
        &self,
        site: JobSite,
        query: &str,
        location: &str,
        limit: usize,
    ) -> SourceOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((site, query.to_string(), location.to_string(), limit));

        let delay = self.delays.lock().unwrap().get(&site).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.outcomes
            .lock()
            .unwrap()
            .get(&site)
            .cloned()
            .unwrap_or_else(|| SourceOutcome::success(vec![]))
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a posting with a site-derived URL, for tests that only care
/// about title/company.
pub fn make_posting(site: JobSite, title: &str, company: &str) -> JobPosting {
    JobPosting::new(
        site,
        title,
        company,
        "Remote",
        format!("{}/jobs/test", site.origin()),
    )
}
