use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::site::JobSite;

/// A normalized job posting, the unit of output of every source adapter.
///
/// Adapters guarantee `title` and `company` are non-empty after trimming;
/// entries that fail that invariant are skipped at parse time rather than
/// emitted half-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Absolute URL of the posting. Adapters rewrite root-relative
    /// paths against the site's canonical origin.
    pub url: String,
    pub site: JobSite,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    /// Match score/reason annotated by an external scoring service.
    /// Never produced here; dedupe and serialization pass them through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_reason: Option<String>,
}

impl JobPosting {
    pub fn new(
        site: JobSite,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            url: url.into(),
            site,
            posted_at: None,
            match_score: None,
            match_reason: None,
        }
    }

    /// Composite key for deduplication across sites.
    pub fn merge_key(&self) -> String {
        format!(
            "{}-{}",
            self.title.to_lowercase(),
            self.company.to_lowercase()
        )
    }
}

/// Per-adapter result. Always produced: a source failure is data
/// (`error: Some(..)`), never a fault propagated past the orchestrator
/// boundary.
#[derive(Debug, Clone, Default)]
pub struct SourceOutcome {
    pub jobs: Vec<JobPosting>,
    pub error: Option<String>,
}

impl SourceOutcome {
    pub fn success(jobs: Vec<JobPosting>) -> Self {
        Self { jobs, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            jobs: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// A search request as received from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub sites: Vec<JobSite>,
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    pub results_wanted: usize,
}

impl SearchRequest {
    /// Validate the request and return the effective site list
    /// (duplicates removed, original order preserved).
    ///
    /// Fails with [`AppError::InvalidRequest`] before any scraping work
    /// is dispatched.
    pub fn validate(&self) -> Result<Vec<JobSite>, AppError> {
        let mut sites = Vec::with_capacity(self.sites.len());
        for &site in &self.sites {
            if !sites.contains(&site) {
                sites.push(site);
            }
        }
        if sites.is_empty() {
            return Err(AppError::InvalidRequest("no sites selected".into()));
        }
        if self.results_wanted == 0 {
            return Err(AppError::InvalidRequest(
                "results_wanted must be greater than zero".into(),
            ));
        }
        Ok(sites)
    }

    /// Per-source extraction cap: the result budget divided evenly
    /// (ceiling) across the requested sites.
    pub fn per_site_limit(&self, site_count: usize) -> usize {
        self.results_wanted.div_ceil(site_count)
    }
}

/// Per-site outcome summary reported alongside the merged results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceStatus {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The merged, filtered, deduplicated result of one aggregation call.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Deduplicated postings, in site dispatch order then within-site order.
    pub jobs: Vec<JobPosting>,
    pub source_status: BTreeMap<JobSite, SourceStatus>,
    /// Raw posting count across all sources, before filtering and dedupe.
    pub total_scraped: usize,
    /// Posting count after relevance filtering and dedupe.
    pub total_unique: usize,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(sites: Vec<JobSite>, results_wanted: usize) -> SearchRequest {
        SearchRequest {
            sites,
            search_term: "backend engineer".into(),
            location: "remote".into(),
            results_wanted,
        }
    }

    #[test]
    fn test_validate_rejects_empty_site_list() {
        let err = request(vec![], 20).validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let err = request(vec![JobSite::RemoteOk], 0).validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_validate_dedupes_sites_preserving_order() {
        let sites = request(
            vec![JobSite::Indeed, JobSite::RemoteOk, JobSite::Indeed],
            20,
        )
        .validate()
        .unwrap();
        assert_eq!(sites, vec![JobSite::Indeed, JobSite::RemoteOk]);
    }

    #[test]
    fn test_per_site_limit_is_ceiling_division() {
        let req = request(vec![JobSite::RemoteOk], 20);
        assert_eq!(req.per_site_limit(3), 7);
        assert_eq!(req.per_site_limit(4), 5);
        assert_eq!(req.per_site_limit(1), 20);
    }

    #[test]
    fn test_merge_key_is_case_insensitive() {
        let a = JobPosting::new(JobSite::RemoteOk, "Backend Engineer", "ACME", "Remote", "u1");
        let b = JobPosting::new(JobSite::Indeed, "backend engineer", "acme", "NYC", "u2");
        assert_eq!(a.merge_key(), b.merge_key());
    }

    #[test]
    fn test_posting_serialization_skips_absent_annotations() {
        let posting = JobPosting::new(JobSite::Dice, "SRE", "ACME", "Remote", "https://x/y");
        let json = serde_json::to_value(&posting).unwrap();
        assert!(json.get("match_score").is_none());
        assert!(json.get("posted_at").is_none());
        assert_eq!(json["site"], "dice");
    }

    #[test]
    fn test_posting_preserves_external_annotations() {
        let mut posting = JobPosting::new(JobSite::Dice, "SRE", "ACME", "Remote", "https://x/y");
        posting.match_score = Some(0.82);
        posting.match_reason = Some("kubernetes overlap".into());
        let json = serde_json::to_string(&posting).unwrap();
        let back: JobPosting = serde_json::from_str(&json).unwrap();
        assert_eq!(back.match_score, Some(0.82));
        assert_eq!(back.match_reason.as_deref(), Some("kubernetes overlap"));
    }
}
