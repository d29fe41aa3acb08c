//! Arbeitnow adapter.
//!
//! The only board in the set with a real JSON API, so this adapter
//! deserializes instead of walking a DOM. The API occasionally returns
//! entries with blank titles; those are dropped rather than surfaced as
//! unusable postings.

use chrono::DateTime;
use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use serde::Deserialize;

use super::build_url;

const SITE: JobSite = JobSite::Arbeitnow;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiJob>,
}

#[derive(Debug, Deserialize)]
struct ApiJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    url: String,
    /// Unix seconds.
    #[serde(default)]
    created_at: Option<i64>,
}

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = build_url(
        &format!("{}/api/job-board-api", SITE.origin()),
        &[("search", query)],
    )?;
    let body = fetcher.fetch(&url).await?;
    parse(&body, limit)
}

fn parse(body: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    let jobs = response
        .data
        .into_iter()
        .filter(|job| !job.title.is_empty())
        .take(limit)
        .map(|job| {
            let mut posting = JobPosting::new(
                SITE,
                job.title,
                if job.company_name.is_empty() {
                    "Unknown".to_string()
                } else {
                    job.company_name
                },
                if job.location.is_empty() {
                    "Remote".to_string()
                } else {
                    job.location
                },
                job.url,
            );
            posting.posted_at = job
                .created_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0));
            posting
        })
        .collect();

    Ok(jobs)
}
