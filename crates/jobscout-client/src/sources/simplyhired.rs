//! SimplyHired adapter.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, build_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::SimplyHired;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    location: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = build_url(
        &format!("{}/search", SITE.origin()),
        &[("q", query), ("l", location)],
    )?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, location, limit)
}

fn parse(html: &str, fallback_location: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(r#"[data-testid="searchSerpJob"], .SerpJob, article"#)?;
    let title_sel = selector(r#"h2 a, .jobTitle, [data-testid="searchSerpJobTitle"]"#)?;
    let company_sel = selector(r#"[data-testid="companyName"], .companyName, .company"#)?;
    let location_sel = selector(r#"[data-testid="searchSerpJobLocation"], .location"#)?;
    let link_sel = selector("h2 a, a.jobTitle")?;

    let mut jobs = Vec::new();
    for el in document.select(&card) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
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

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_core::testutil::MockFetcher;

    const FIXTURE: &str = r#"
    <html><body>
      <div data-testid="searchSerpJob">
        <h2><a href="/job/abc">Backend Engineer</a></h2>
        <span data-testid="companyName">ACME</span>
        <span data-testid="searchSerpJobLocation">Denver, CO</span>
      </div>
      <div data-testid="searchSerpJob">
        <h2><a href="/job/def">QA Engineer</a></h2>
      </div>
    </body></html>
    "#;

    #[test]
    fn parses_serp_cards() {
        let jobs = parse(FIXTURE, "remote", 10).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company, "ACME");
        assert_eq!(jobs[0].url, "https://www.simplyhired.com/job/abc");
        assert_eq!(jobs[1].company, "Unknown");
        assert_eq!(jobs[1].location, "remote");
    }

    #[tokio::test]
    async fn builds_the_search_url() {
        let fetcher = MockFetcher::new(FIXTURE);
        scrape(&fetcher, "backend", "denver", 5).await.unwrap();
        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(
            requested[0],
            "https://www.simplyhired.com/search?q=backend&l=denver"
        );
    }
}
