use std::future::Future;

use crate::error::AppError;
use crate::models::SourceOutcome;
use crate::site::JobSite;

/// Fetches the raw body of a URL as text.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;

    /// Fetch with additional/overriding request headers.
    ///
    /// Used by adapters whose target site needs a specific header set
    /// (e.g. a different User-Agent).
    fn fetch_with_headers(
        &self,
        url: &str,
        extra_headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Scrapes one external site into a normalized [`SourceOutcome`].
///
/// Implementations must never fail out of `scrape`: any fetch or parse
/// fault is converted into `SourceOutcome { jobs: [], error: Some(..) }`
/// so the orchestrator can treat every dispatch as settled.
pub trait JobSource: Send + Sync + Clone {
    fn scrape(
        &self,
        site: JobSite,
        query: &str,
        location: &str,
        limit: usize,
    ) -> impl Future<Output = SourceOutcome> + Send;
}
