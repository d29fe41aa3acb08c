//! Dice adapter.
//!
//! Dice honors a `pageSize` parameter, so the per-site budget goes into
//! the URL and the parser only has to cap defensively.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, build_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::Dice;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    location: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let page_size = limit.to_string();
    let url = build_url(
        &format!("{}/jobs", SITE.origin()),
        &[("q", query), ("location", location), ("pageSize", &page_size)],
    )?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, location, limit)
}

fn parse(html: &str, fallback_location: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(r#"dhi-search-card, .card, [data-cy="search-result-card"]"#)?;
    let link_sel = selector(r#".card-title a, [data-cy="card-title"] a, a.cardTitle"#)?;
    let company_sel = selector(r#"[data-cy="card-company"], .companyDisplay, .card-company"#)?;
    let location_sel = selector(r#"[data-cy="card-location"], .location, .card-location"#)?;

    let mut jobs = Vec::new();
    for el in document.select(&card) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &link_sel) else {
            continue;
        };
        let company =
            first_text(&el, &company_sel).unwrap_or_else(|| "Unknown".to_string());
        let location = first_text(&el, &location_sel)
            .unwrap_or_else(|| fallback_location.to_string());
        let href = first_attr(&el, &link_sel, "href").unwrap_or_default();

        jobs.push(JobPosting::new(
            SITE,
            title,
            company,
            location,
            absolute_url(SITE.origin(), &href),
        ));
    }

    Ok(jobs)
}
