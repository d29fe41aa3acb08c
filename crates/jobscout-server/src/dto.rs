use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobscout_core::models::{AggregateResult, JobPosting, SourceStatus};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn default_results_wanted() -> usize {
    20
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SearchRequestDto {
    /// Site identifiers to scrape ("remoteok", "indeed", ...). Unknown
    /// identifiers are skipped with a warning.
    pub sites: Vec<String>,
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_results_wanted")]
    pub results_wanted: usize,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct JobDto {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_url: String,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl From<JobPosting> for JobDto {
    fn from(job: JobPosting) -> Self {
        Self {
            title: job.title,
            company: job.company,
            location: job.location,
            job_url: job.url,
            site: job.site.to_string(),
            posted_at: job.posted_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SourceStatusDto {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SourceStatus> for SourceStatusDto {
    fn from(status: SourceStatus) -> Self {
        Self {
            count: status.count,
            error: status.error,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchMeta {
    /// Unique postings after filtering and dedup.
    pub total_found: usize,
    /// Raw postings before filtering and dedup.
    pub scraped: usize,
    pub sources: BTreeMap<String, SourceStatusDto>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub jobs: Vec<JobDto>,
    pub meta: SearchMeta,
}

impl From<AggregateResult> for SearchResponse {
    fn from(result: AggregateResult) -> Self {
        Self {
            success: true,
            meta: SearchMeta {
                total_found: result.total_unique,
                scraped: result.total_scraped,
                sources: result
                    .source_status
                    .into_iter()
                    .map(|(site, status)| (site.to_string(), status.into()))
                    .collect(),
                timestamp: result.timestamp,
            },
            jobs: result.jobs.into_iter().map(JobDto::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sites & system
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SitesResponse {
    pub sites: Vec<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of source adapters available.
    pub sources: usize,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
