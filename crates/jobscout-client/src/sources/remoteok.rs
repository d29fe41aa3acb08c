//! RemoteOK adapter.
//!
//! RemoteOK serves slug-addressed search pages
//! (`/remote-{query}-jobs`) with one `tr.job` row per posting. Rows
//! carry their detail URL in a `data-href` attribute.

use jobscout_core::error::AppError;
use jobscout_core::models::JobPosting;
use jobscout_core::site::JobSite;
use jobscout_core::traits::Fetcher;
use scraper::Html;

use super::{absolute_url, first_attr, first_text, selector};

const SITE: JobSite = JobSite::RemoteOk;

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
    let url = format!("{}/remote-{slug}-jobs", SITE.origin());
    let html = fetcher.fetch(&url).await?;
    parse(&html, limit)
}

fn parse(html: &str, limit: usize) -> Result<Vec<JobPosting>, AppError> {
    let document = Html::parse_document(html);
    let row = selector("tr.job")?;
    let title_sel = selector(r#"h2[itemprop="title"], .company_and_position h2"#)?;
    let company_sel = selector(r#"h3[itemprop="name"], .company h3"#)?;
    let location_sel = selector(".location")?;
    let link_sel = selector("a.preventLink")?;

    let mut jobs = Vec::new();
    for el in document.select(&row) {
        if jobs.len() >= limit {
            break;
        }

        let Some(title) = first_text(&el, &title_sel) else {
            continue;
        };
        let Some(company) = first_text(&el, &company_sel) else {
            continue;
        };
        let location =
            first_text(&el, &location_sel).unwrap_or_else(|| "Remote".to_string());
        let href = el
            .value()
            .attr("data-href")
            .map(str::to_string)
            .or_else(|| first_attr(&el, &link_sel, "href"))
            .unwrap_or_default();

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
    <html><body><table>
      <tr class="job" data-href="/remote-jobs/100-backend-engineer">
        <td class="company_and_position">
          <h2 itemprop="title">Backend Engineer</h2>
          <h3 itemprop="name">ACME</h3>
          <div class="location">Worldwide</div>
        </td>
      </tr>
      <tr class="job">
        <td>
          <h2 itemprop="title">No Company Row</h2>
        </td>
      </tr>
      <tr class="job" data-href="https://example.com/external">
        <td>
          <h2 itemprop="title">Platform Engineer</h2>
          <h3 itemprop="name">Globex</h3>
        </td>
      </tr>
    </table></body></html>
    "#;

    #[test]
    fn parses_rows_and_resolves_urls() {
        let jobs = parse(FIXTURE, 10).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].company, "ACME");
        assert_eq!(jobs[0].location, "Worldwide");
        assert_eq!(
            jobs[0].url,
            "https://remoteok.com/remote-jobs/100-backend-engineer"
        );
        // Row without a company is skipped; absolute data-href passes through.
        assert_eq!(jobs[1].url, "https://example.com/external");
        assert_eq!(jobs[1].location, "Remote");
    }

    #[test]
    fn stops_at_the_limit() {
        let jobs = parse(FIXTURE, 1).unwrap();
        assert_eq!(jobs.len(), 1);
    }

    #[tokio::test]
    async fn builds_the_slug_search_url() {
        let fetcher = MockFetcher::new(FIXTURE);
        scrape(&fetcher, "Backend Engineer", 5).await.unwrap();
        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(requested[0], "https://remoteok.com/remote-backend-engineer-jobs");
    }
}
