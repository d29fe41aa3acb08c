//! Fan-out/fan-in orchestration of source adapters.
//!
//! One aggregation call dispatches every requested site concurrently,
//! waits for all of them to settle, then merges, filters, and dedupes
//! the combined postings. Adapters never fail out of `scrape`, so the
//! join is "wait for all, keep everything" — never fail-fast.

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;

use crate::error::AppError;
use crate::models::{AggregateResult, JobPosting, SearchRequest, SourceOutcome, SourceStatus};
use crate::relevance::RelevanceFilter;
use crate::traits::JobSource;

/// Orchestrator tuning knobs.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Hard ceiling on any single adapter's wall-clock time. A task
    /// still pending at the deadline is dropped and reported as a
    /// failed source; it can no longer touch the merged results.
    pub source_deadline: Duration,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            source_deadline: Duration::from_secs(30),
        }
    }
}

impl AggregatorConfig {
    pub fn with_source_deadline(mut self, deadline: Duration) -> Self {
        self.source_deadline = deadline;
        self
    }
}

/// Dispatches source adapters concurrently and assembles the merged,
/// relevance-filtered, deduplicated result.
///
/// Generic over the [`JobSource`] implementation so tests can run the
/// whole pipeline against recorded outcomes without network access.
#[derive(Clone)]
pub struct Aggregator<J: JobSource> {
    source: J,
    filter: RelevanceFilter,
    config: AggregatorConfig,
}

impl<J: JobSource> Aggregator<J> {
    pub fn new(source: J) -> Self {
        Self {
            source,
            filter: RelevanceFilter::default(),
            config: AggregatorConfig::default(),
        }
    }

    pub fn with_filter(mut self, filter: RelevanceFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one aggregation: validate → fan-out → join all → merge →
    /// filter → dedupe.
    ///
    /// Individual source failures are folded into `source_status`; the
    /// call itself only fails for an invalid request.
    pub async fn aggregate(&self, request: &SearchRequest) -> Result<AggregateResult, AppError> {
        let sites = request.validate()?;
        let limit = request.per_site_limit(sites.len());

        tracing::info!(
            query = %request.search_term,
            location = %request.location,
            sites = sites.len(),
            per_site_limit = limit,
            "Dispatching source adapters"
        );

        let tasks = sites.iter().map(|&site| {
            let source = self.source.clone();
            let query = request.search_term.clone();
            let location = request.location.clone();
            let deadline = self.config.source_deadline;

            async move {
                let outcome =
                    match tokio::time::timeout(deadline, source.scrape(site, &query, &location, limit))
                        .await
                    {
                        Ok(outcome) => outcome,
                        Err(_) => SourceOutcome::failed(format!(
                            "source exceeded the {}s deadline",
                            deadline.as_secs()
                        )),
                    };
                (site, outcome)
            }
        });

        // join_all preserves dispatch order, which fixes merge order and
        // therefore dedupe precedence.
        let settled = join_all(tasks).await;

        let mut merged: Vec<JobPosting> = Vec::new();
        let mut source_status = BTreeMap::new();
        for (site, outcome) in settled {
            match &outcome.error {
                Some(error) => {
                    tracing::warn!(site = %site, %error, "Source failed");
                }
                None => {
                    tracing::info!(site = %site, count = outcome.jobs.len(), "Source settled");
                }
            }
            source_status.insert(
                site,
                SourceStatus {
                    count: outcome.jobs.len(),
                    error: outcome.error,
                },
            );
            merged.extend(outcome.jobs);
        }

        let total_scraped = merged.len();
        let relevant = self.filter.filter(merged, &request.search_term);
        let jobs = dedupe(relevant);

        tracing::info!(
            total_scraped,
            total_unique = jobs.len(),
            "Aggregation complete"
        );

        Ok(AggregateResult {
            total_unique: jobs.len(),
            jobs,
            source_status,
            total_scraped,
            timestamp: Utc::now(),
        })
    }
}

/// Collapse postings sharing a merge key (lowercased title + company),
/// keeping the first occurrence.
fn dedupe(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::with_capacity(jobs.len());
    jobs.into_iter()
        .filter(|job| seen.insert(job.merge_key()))
        .collect()
}
