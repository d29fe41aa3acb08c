//! Startup Jobs adapter.
//!
//! The listing markup is loose (`class*="job"` catches chrome too), so
//! a minimum title length drops navigation entries the way the
//! Himalayas adapter does.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, build_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::StartupJobs;

const MIN_TITLE_LEN: usize = 6;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = build_url(&format!("{}/", SITE.origin()), &[("q", query)])?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, limit)
}

fn parse(html: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(r#"div[class*="job"], .job-listing, article"#)?;
    let title_sel = selector(r#"h2, h3, .job-title, [class*="title"]"#)?;
    let company_sel = selector(r#".company, [class*="company"]"#)?;
    let location_sel = selector(r#".location, [class*="location"]"#)?;
    let link_sel = selector("a")?;

    let mut jobs = Vec::new();
    for el in document.select(&card) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        if title.len() < MIN_TITLE_LEN {
            continue;
        }
        let company =
            first_text(&el, &company_sel).unwrap_or_else(|| "Startup".to_string());
        let location =
            first_text(&el, &location_sel).unwrap_or_else(|| "Various".to_string());
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
