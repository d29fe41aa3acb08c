//! Remote.co adapter.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, build_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::RemoteCo;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = build_url(
        &format!("{}/remote-jobs/search/", SITE.origin()),
        &[("search_keywords", query)],
    )?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, limit)
}

fn parse(html: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(".job_listing, .card")?;
    let title_sel = selector(".position, h3, .job-title")?;
    let company_sel = selector(".company, .company-name")?;
    let link_sel = selector("a")?;

    let mut jobs = Vec::new();
    for el in document.select(&card) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        let company =
            first_text(&el, &company_sel).unwrap_or_else(|| "Company".to_string());
        let href = first_attr(&el, &link_sel, "href").unwrap_or_default();

        jobs.push(JobPosting::new(
            SITE,
            title,
            company,
            "Remote",
            absolute_url(SITE.origin(), &href),
        ));
    }

    Ok(jobs)
}
