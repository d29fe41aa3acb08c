//! Google Jobs adapter.
//!
//! Scrapes the jobs widget on a search results page. The widget has no
//! stable detail URLs, so each posting links back to a jobs-mode search
//! for its own title and company.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{build_url, first_text, selector};

const SITE: JobSite = JobSite::Google;

/// Jobs-mode search URL for arbitrary terms. `ibp=htl;jobs` switches
/// the results page into the jobs widget; the semicolon must stay
/// unencoded, so it is appended after the encoded query.
fn jobs_search_url(terms: &str) -> Result<String, AppError> {
    let url = build_url(&format!("{}/search", SITE.origin()), &[("q", terms)])?;
    Ok(format!("{url}&ibp=htl;jobs"))
}

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    location: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = jobs_search_url(&format!("{query} jobs in {location}"))?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, location, limit)
}

fn parse(html: &str, fallback_location: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let card = selector(r#"[data-hveid] [role="treeitem"], .PwjeAc, .iFjolb"#)?;
    let title_sel = selector(r#".BjJfJf, .sH3zFd, [role="heading"]"#)?;
    let company_sel = selector(".vNEEBe, .nJlQNd")?;
    let location_sel = selector(".Qk80Jf, .pwO9Dc")?;

    let mut jobs = Vec::new();
    for el in document.select(&card) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        let company =
            first_text(&el, &company_sel).unwrap_or_else(|| "Various".to_string());
        let location = first_text(&el, &location_sel)
            .unwrap_or_else(|| fallback_location.to_string());
        let url = jobs_search_url(&format!("{title} {company} jobs"))?;

        jobs.push(JobPosting::new(SITE, title, company, location, url));
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_core::testutil::MockFetcher;

    const FIXTURE: &str = r#"
    <html><body>
      <div data-hveid="abc">
        <div role="treeitem">
          <div role="heading">Backend Engineer</div>
          <div class="vNEEBe">ACME</div>
          <div class="Qk80Jf">Austin, TX</div>
        </div>
        <div role="treeitem">
          <div role="heading">Platform Engineer</div>
        </div>
        <div role="treeitem">
          <div class="vNEEBe">Titleless Co</div>
        </div>
      </div>
    </body></html>
    "#;

    #[test]
    fn parses_widget_cards_into_search_links() {
        let jobs = parse(FIXTURE, "remote", 10).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].company, "ACME");
        assert_eq!(jobs[0].location, "Austin, TX");
        assert_eq!(
            jobs[0].url,
            "https://www.google.com/search?q=Backend+Engineer+ACME+jobs&ibp=htl;jobs"
        );
        // Missing company/location fall back; missing title skips the card.
        assert_eq!(jobs[1].company, "Various");
        assert_eq!(jobs[1].location, "remote");
    }

    #[tokio::test]
    async fn builds_the_jobs_mode_search_url() {
        let fetcher = MockFetcher::new(FIXTURE);
        scrape(&fetcher, "backend engineer", "austin", 5)
            .await
            .unwrap();
        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(
            requested[0],
            "https://www.google.com/search?q=backend+engineer+jobs+in+austin&ibp=htl;jobs"
        );
    }
}
