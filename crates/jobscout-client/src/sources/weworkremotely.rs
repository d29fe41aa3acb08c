//! We Work Remotely adapter.
//!
//! Listings appear as `li` entries under the jobs sections, with
//! `.title` / `.company` / `.region` spans and a relative link to the
//! detail page.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, build_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::WeWorkRemotely;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = build_url(
        &format!("{}/remote-jobs/search", SITE.origin()),
        &[("term", query)],
    )?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, limit)
}

fn parse(html: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let item = selector("li.feature, li.new-feature, section.jobs article li")?;
    let title_sel = selector(".title")?;
    let company_sel = selector(".company")?;
    let region_sel = selector(".region")?;
    let link_sel = selector("a")?;

    let mut jobs = Vec::new();
    for el in document.select(&item) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        let Some(company) = first_text(&el, &company_sel) else {
            continue;
        };
        let location = first_text(&el, &region_sel).unwrap_or_else(|| "Remote".to_string());
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
