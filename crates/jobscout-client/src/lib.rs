//! HTTP fetching and per-board scraping.
//!
//! This crate owns everything that touches the network: the retrying
//! fetcher and one adapter per supported job board, dispatched through
//! [`SiteScraper`]. Orchestration, filtering, and dedup live in
//! `jobscout-core`; this crate only produces raw postings.

pub mod fetcher;
pub mod sources;

pub use fetcher::{FetchConfig, RetryingFetcher};
pub use sources::SiteScraper;

use jobscout_core::error::AppError;

/// Production scraper wired to the retrying HTTP fetcher.
pub fn default_scraper() -> Result<SiteScraper<RetryingFetcher>, AppError> {
    Ok(SiteScraper::new(RetryingFetcher::new()?))
}
