//! Jobspresso adapter.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, build_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::Jobspresso;

pub(crate) async fn scrape<F: Fetcher>(
    fetcher: &F,
    query: &str,
    limit: usize,
) -> Result<Vec<JobPosting>, AppError> {
    let url = build_url(
        &format!("{}/remote-work/", SITE.origin()),
        &[("search_keywords", query)],
    )?;
    let html = fetcher.fetch(&url).await?;
    parse(&html, limit)
}

fn parse(html: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let item = selector(".job_listing, article.job_listing")?;
    let title_sel = selector(".job_listing-title, h3 a")?;
    let company_sel = selector(".job_listing-company, .company strong")?;
    let location_sel = selector(".job_listing-location, .location")?;
    let link_sel = selector("a")?;

    let mut jobs = Vec::new();
    for el in document.select(&item) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        let company =
            first_text(&el, &company_sel).unwrap_or_else(|| "Unknown".to_string());
        let location =
            first_text(&el, &location_sel).unwrap_or_else(|| "Remote".to_string());
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
      <article class="job_listing">
        <a href="https://jobspresso.co/job/backend-engineer-acme/">
          <h3 class="job_listing-title">Backend Engineer</h3>
          <div class="job_listing-company">ACME</div>
          <div class="job_listing-location">Worldwide</div>
        </a>
      </article>
      <article class="job_listing">
        <a href="/job/devops/">
          <h3 class="job_listing-title">DevOps Engineer</h3>
        </a>
      </article>
    </body></html>
    "#;

    #[test]
    fn parses_listings_with_defaults() {
        let jobs = parse(FIXTURE, 10).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(
            jobs[0].url,
            "https://jobspresso.co/job/backend-engineer-acme/"
        );
        assert_eq!(jobs[1].company, "Unknown");
        assert_eq!(jobs[1].location, "Remote");
        assert_eq!(jobs[1].url, "https://jobspresso.co/job/devops/");
    }

    #[tokio::test]
    async fn builds_the_search_url() {
        let fetcher = MockFetcher::new(FIXTURE);
        scrape(&fetcher, "backend", 5).await.unwrap();
        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(
            requested[0],
            "https://jobspresso.co/remote-work/?search_keywords=backend"
        );
    }
}
