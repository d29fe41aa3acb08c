//! Indeed adapter.
//!
//! Indeed fingerprints the default crawler UA aggressively; a desktop
//! Safari-flavored override gets plain HTML back. Result cards expose a
//! `data-jk` job key that maps to the canonical `/viewjob` URL, so we
//! never need the tracking-wrapped hrefs.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{build_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::Indeed;

const UA_OVERRIDE: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                           AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    location: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let limit_param = limit.to_string();
    let url = build_url(
        &format!("{}/jobs", SITE.origin()),
        &[("q", query), ("l", location), ("limit", &limit_param)],
    )?;
    let html = fetcher
        .fetch_with_headers(&url, &[("User-Agent", UA_OVERRIDE)])
        .await?;
    parse(&html, location, limit)
}

fn parse(html: &str, fallback_location: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(".job_seen_beacon, .jobsearch-ResultsList > li, .result")?;
    let title_sel = selector("h2.jobTitle span, .jobTitle, a[data-jk]")?;
    let company_sel = selector(r#"[data-testid="company-name"], .companyName, .company"#)?;
    let location_sel = selector(r#"[data-testid="text-location"], .companyLocation, .location"#)?;
    let key_sel = selector("a[data-jk]")?;

    let mut jobs = Vec::new();
    for el in document.select(&card) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        let Some(job_key) = first_attr(&el, &key_sel, "data-jk")
            .or_else(|| el.value().attr("data-jk").map(str::to_string))
        else {
            continue;
        };
        let company =
            first_text(&el, &company_sel).unwrap_or_else(|| "Unknown".to_string());
        let location = first_text(&el, &location_sel)
            .unwrap_or_else(|| fallback_location.to_string());

        jobs.push(JobPosting::new(
            SITE,
            title,
            company,
            location,
            format!("{}/viewjob?jk={job_key}", SITE.origin()),
        ));
    }

    Ok(jobs)
}
