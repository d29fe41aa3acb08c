//! Himalayas adapter.
//!
//! Listing markup is anchor-centric: every posting is an `<a>` whose
//! href contains `/jobs/`. Navigation links match that selector too, so
//! a minimum title length weeds out "All jobs"-style chrome.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, build_url, first_text, selector};

const SITE: JobSite = JobSite::Himalayas;

const MIN_TITLE_LEN: usize = 6;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = build_url(&format!("{}/jobs", SITE.origin()), &[("q", query)])?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, limit)
}

fn parse(html: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let anchor = selector(r#"a[href*="/jobs/"]"#)?;
    let title_sel = selector(r#"h3, [class*="title"]"#)?;
    let company_sel = selector(r#"[class*="company"]"#)?;

    let mut jobs = Vec::new();
    for el in document.select(&anchor) {
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
            first_text(&el, &company_sel).unwrap_or_else(|| "Company".to_string());
        let href = el.value().attr("href").unwrap_or_default();

        jobs.push(JobPosting::new(
            SITE,
            title,
            company,
            "Remote",
            absolute_url(SITE.origin(), href),
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
      <a href="/jobs/acme-backend-engineer">
        <h3>Backend Engineer</h3>
        <span class="company-name">ACME</span>
      </a>
      <a href="/jobs"><h3>Jobs</h3></a>
      <a href="/jobs/globex-data"><h3>Data Engineer</h3></a>
    </body></html>
    "#;

    #[test]
    fn parses_anchors_and_drops_short_navigation_titles() {
        let jobs = parse(FIXTURE, 10).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].company, "ACME");
        assert_eq!(jobs[0].location, "Remote");
        assert_eq!(jobs[0].url, "https://himalayas.app/jobs/acme-backend-engineer");
        assert_eq!(jobs[1].company, "Company");
    }

    #[tokio::test]
    async fn builds_the_search_url() {
        let fetcher = MockFetcher::new(FIXTURE);
        scrape(&fetcher, "backend engineer", 5).await.unwrap();
        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(
            requested[0],
            "https://himalayas.app/jobs?q=backend+engineer"
        );
    }
}
