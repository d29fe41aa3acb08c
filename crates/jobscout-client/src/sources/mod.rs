//! Site adapters and their dispatch.
//!
//! Each board gets its own module with two layers: an async `scrape`
//! that builds the search URL and fetches it, and a synchronous `parse`
//! that walks the DOM (or JSON) and extracts postings. Parsing stays
//! synchronous because `scraper::Html` is not `Send`; nothing holds a
//! parsed document across an await point.

pub mod arbeitnow;
pub mod dice;
pub mod google;
pub mod hackernews;
pub mod himalayas;
pub mod indeed;
pub mod jobspresso;
pub mod naukri;
pub mod remoteco;
pub mod remoteok;
pub mod simplyhired;
pub mod startupjobs;
pub mod wellfound;
pub mod weworkremotely;

use jobscout_core::error::AppError;
use jobscout_core::models::{JobPosting, SourceOutcome};
use jobscout_core::site::JobSite;
use jobscout_core::traits::{Fetcher, JobSource};
use scraper::Selector;

/// Routes a scrape request to the adapter for the given site.
///
/// Dispatch is a plain match over [`JobSite`], so adding a board means
/// adding a variant, a module, and one match arm.
#[derive(Clone)]
pub struct SiteScraper<F: Fetcher> {
    fetcher: F,
}

impl<F: Fetcher> SiteScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    async fn dispatch(
        &self,
        site: JobSite,
        query: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, AppError> {
        match site {
            JobSite::RemoteOk => remoteok::scrape(&self.fetcher, query, limit).await,
            JobSite::WeWorkRemotely => weworkremotely::scrape(&self.fetcher, query, limit).await,
            JobSite::HackerNews => hackernews::scrape(&self.fetcher, query, limit).await,
            JobSite::Indeed => indeed::scrape(&self.fetcher, query, location, limit).await,
            JobSite::Naukri => naukri::scrape(&self.fetcher, query, location, limit).await,
            JobSite::Google => google::scrape(&self.fetcher, query, location, limit).await,
            JobSite::Dice => dice::scrape(&self.fetcher, query, location, limit).await,
            JobSite::SimplyHired => simplyhired::scrape(&self.fetcher, query, location, limit).await,
            JobSite::Arbeitnow => arbeitnow::scrape(&self.fetcher, query, limit).await,
            JobSite::Jobspresso => jobspresso::scrape(&self.fetcher, query, limit).await,
            JobSite::StartupJobs => startupjobs::scrape(&self.fetcher, query, limit).await,
            JobSite::Wellfound => wellfound::scrape(&self.fetcher, query, limit).await,
            JobSite::Himalayas => himalayas::scrape(&self.fetcher, query, limit).await,
            JobSite::RemoteCo => remoteco::scrape(&self.fetcher, query, limit).await,
        }
    }
}

impl<F: Fetcher> JobSource for SiteScraper<F> {
    async fn scrape(
        &self,
        site: JobSite,
        query: &str,
        location: &str,
        limit: usize,
    ) -> SourceOutcome {
        tracing::debug!(site = %site, %query, limit, "Scraping site");
        match self.dispatch(site, query, location, limit).await {
            Ok(jobs) => SourceOutcome::success(jobs),
            Err(error) => SourceOutcome::failed(error.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Compile a CSS selector, mapping the (static-typo) failure into a
/// parse error instead of panicking.
pub(crate) fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::ParseError(format!("bad selector {css:?}: {e}")))
}

/// Resolve a possibly relative `href` against the site origin.
pub(crate) fn absolute_url(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

/// Build a search URL with percent-encoded query parameters.
pub(crate) fn build_url(base: &str, params: &[(&str, &str)]) -> Result<String, AppError> {
    let mut url = url::Url::parse(base)
        .map_err(|e| AppError::ParseError(format!("invalid base URL {base:?}: {e}")))?;
    url.query_pairs_mut().extend_pairs(params.iter().copied());
    Ok(url.into())
}

/// First non-empty text under `element` matching `sel`.
pub(crate) fn first_text(element: &scraper::ElementRef<'_>, sel: &Selector) -> Option<String> {
    element
        .select(sel)
        .map(|e| element_text(&e))
        .find(|t| !t.is_empty())
}

/// First matching descendant's attribute value, if present and non-empty.
pub(crate) fn first_attr(
    element: &scraper::ElementRef<'_>,
    sel: &Selector,
    attr: &str,
) -> Option<String> {
    element
        .select(sel)
        .find_map(|e| e.value().attr(attr))
        .map(str::to_string)
        .filter(|v| !v.is_empty())
}

/// Element text with whitespace collapsed, the way boards render titles.
pub(crate) fn element_text(element: &scraper::ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_core::testutil::MockFetcher;

    #[test]
    fn absolute_url_passes_through_full_urls() {
        assert_eq!(
            absolute_url("https://remoteok.com", "https://example.com/x"),
            "https://example.com/x"
        );
    }

    #[test]
    fn absolute_url_joins_rooted_and_bare_paths() {
        assert_eq!(
            absolute_url("https://remoteok.com", "/remote-jobs/1"),
            "https://remoteok.com/remote-jobs/1"
        );
        assert_eq!(
            absolute_url("https://remoteok.com", "remote-jobs/1"),
            "https://remoteok.com/remote-jobs/1"
        );
    }

    #[test]
    fn build_url_encodes_parameters() {
        let url = build_url(
            "https://www.indeed.com/jobs",
            &[("q", "backend engineer"), ("l", "new york")],
        )
        .unwrap();
        assert_eq!(url, "https://www.indeed.com/jobs?q=backend+engineer&l=new+york");
    }

    #[test]
    fn bad_selector_is_a_parse_error() {
        assert!(matches!(selector(":::"), Err(AppError::ParseError(_))));
    }

    #[tokio::test]
    async fn dispatch_failure_becomes_a_failed_outcome() {
        let fetcher = MockFetcher::with_error(AppError::NetworkError("dns".into()));
        let scraper = SiteScraper::new(fetcher);
        let outcome = scraper
            .scrape(JobSite::RemoteOk, "backend", "remote", 5)
            .await;
        assert!(outcome.error.is_some());
        assert!(outcome.jobs.is_empty());
    }

    #[tokio::test]
    async fn dispatch_success_becomes_a_successful_outcome() {
        let fetcher = MockFetcher::new("<html><body></body></html>");
        let scraper = SiteScraper::new(fetcher);
        let outcome = scraper
            .scrape(JobSite::RemoteOk, "backend", "remote", 5)
            .await;
        assert!(outcome.error.is_none());
    }
}
