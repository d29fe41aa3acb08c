//! Naukri adapter.
//!
//! Naukri addresses searches with path slugs rather than query
//! parameters: `/{query}-jobs-in-{location}`, words hyphenated.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::Naukri;

fn slug(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("-")
}

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    location: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = format!("{}/{}-jobs-in-{}", SITE.origin(), slug(query), slug(location));
    let html = fetcher.fetch(&url).await?;
    parse(&html, location, limit)
}

fn parse(html: &str, fallback_location: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(".jobTuple, .srp-jobtuple-wrapper, article.jobTuple")?;
    let title_sel = selector("a.title, .title, .jobTitle")?;
    let company_sel = selector(".companyInfo a, .subTitle, .comp-name")?;
    let location_sel = selector(".locWdth, .location, .loc-wrap")?;

    let mut jobs = Vec::new();
    for el in document.select(&card) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        let Some(href) = first_attr(&el, &title_sel, "href") else {
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
            absolute_url(SITE.origin(), &href),
        ));
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_core::testutil::MockFetcher;

    const FIXTURE: &str = r#"
    <html><body>
      <article class="jobTuple">
        <a class="title" href="https://www.naukri.com/job-listings-backend-1">Backend Engineer</a>
        <div class="companyInfo"><a>ACME India</a></div>
        <span class="locWdth">Bengaluru</span>
      </article>
      <article class="jobTuple">
        <span class="title">No Link Role</span>
      </article>
    </body></html>
    "#;

    #[test]
    fn parses_cards_and_skips_linkless_entries() {
        let jobs = parse(FIXTURE, "india", 10).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].company, "ACME India");
        assert_eq!(jobs[0].location, "Bengaluru");
        assert_eq!(jobs[0].url, "https://www.naukri.com/job-listings-backend-1");
    }

    #[tokio::test]
    async fn builds_the_path_slug_url() {
        let fetcher = MockFetcher::new(FIXTURE);
        scrape(&fetcher, "backend engineer", "new delhi", 5)
            .await
            .unwrap();
        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(
            requested[0],
            "https://www.naukri.com/backend-engineer-jobs-in-new-delhi"
        );
    }
}
