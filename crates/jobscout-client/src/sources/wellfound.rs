//! Wellfound (formerly AngelList Talent) adapter.
//!
//! Searches are addressed by role slug (`/role/{query}`), words
//! hyphenated. The obfuscated class names force substring selectors.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::Wellfound;

const MIN_TITLE_LEN: usize = 6;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let slug = query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let url = format!("{}/role/{slug}", SITE.origin());
    let html = fetcher.fetch(&url).await?;
    parse(&html, limit)
}

fn parse(html: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(r#"[class*="job"], [class*="startup-link"]"#)?;
    let title_sel = selector(r#"[class*="title"], h4"#)?;
    let company_sel = selector(r#"[class*="company"], [class*="name"]"#)?;
    let location_sel = selector(r#"[class*="location"]"#)?;
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
