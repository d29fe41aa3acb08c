//! Hacker News jobs adapter.
//!
//! The `/jobs` page has no search endpoint, so filtering happens
//! client-side against the full title. Companies are not structured;
//! the convention "Acme (YC W21) is hiring engineers" puts the company
//! name ahead of the first parenthesis.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::HackerNews;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = format!("{}/jobs", SITE.origin());
    let html = fetcher.fetch(&url).await?;
    parse(&html, query, limit)
}

/// Company name from a posting title, or the generic fallback when the
/// title does not follow the "Company is hiring" convention.
fn extract_company(title: &str) -> String {
    let head = title.split('(').next().unwrap_or(title);
    let head = match head.to_lowercase().find("is hiring") {
        Some(idx) => head.get(..idx).unwrap_or(head),
        None => head,
    };
    let head = head.trim();
    if head.is_empty() {
        "Y Combinator Startup".to_string()
    } else {
        head.to_string()
    }
}

fn parse(html: &str, query: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let row = selector("tr.athing")?;
    let link_sel = selector(".titleline > a")?;

    let query_lower = query.to_lowercase();
    let mut jobs = Vec::new();
    for el in document.select(&row) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &link_sel) else {
            continue;
        };
        if !query_lower.is_empty() && !title.to_lowercase().contains(&query_lower) {
            continue;
        }
        let href = first_attr(&el, &link_sel, "href").unwrap_or_default();

        let company = extract_company(&title);
        jobs.push(JobPosting::new(
            SITE,
            &title,
            company,
            "Remote / Various",
            absolute_url(SITE.origin(), &href),
        ));
    }

    Ok(jobs)
}
