use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobscout_client::default_scraper;
use jobscout_core::aggregate::{Aggregator, AggregatorConfig};
use jobscout_core::models::SearchRequest;
use jobscout_core::site::JobSite;

#[derive(Parser)]
#[command(name = "jobscout", version, about = "Multi-source job search aggregator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for jobs across multiple boards
    Search {
        /// Search query (e.g., "backend engineer")
        #[arg(short, long)]
        query: String,

        /// Location filter, for boards that support one
        #[arg(short, long, default_value = "remote")]
        location: String,

        /// Comma-separated site list (defaults to all supported boards)
        #[arg(short, long, value_delimiter = ',')]
        sites: Vec<String>,

        /// Total number of results wanted across all sites
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,

        /// Per-source deadline in seconds
        #[arg(long, default_value_t = 30)]
        deadline: u64,

        /// Output raw JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List supported job boards
    Sites,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jobscout=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            location,
            sites,
            limit,
            deadline,
            json,
        } => {
            cmd_search(&query, &location, &sites, limit, deadline, json).await?;
        }
        Commands::Sites => {
            for site in JobSite::ALL {
                println!("{site}");
            }
        }
    }

    Ok(())
}

/// Resolve site names from the CLI, falling back to every board when
/// none were given. Unknown names are skipped with a warning.
fn resolve_sites(names: &[String]) -> Vec<JobSite> {
    if names.is_empty() {
        return JobSite::ALL.to_vec();
    }

    let mut sites = Vec::new();
    for name in names {
        match name.parse::<JobSite>() {
            Ok(site) => sites.push(site),
            Err(_) => tracing::warn!(site = %name, "Skipping unknown site"),
        }
    }
    sites
}

async fn cmd_search(
    query: &str,
    location: &str,
    site_names: &[String],
    limit: usize,
    deadline: u64,
    json: bool,
) -> Result<()> {
    let request = SearchRequest {
        sites: resolve_sites(site_names),
        search_term: query.to_string(),
        location: location.to_string(),
        results_wanted: limit,
    };

    let aggregator = Aggregator::new(default_scraper()?).with_config(
        AggregatorConfig::default().with_source_deadline(Duration::from_secs(deadline)),
    );

    let result = aggregator.aggregate(&request).await?;

    for (site, status) in &result.source_status {
        match &status.error {
            Some(error) => tracing::warn!(%site, %error, "Source failed"),
            None => tracing::info!(%site, count = status.count, "Source ok"),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for job in &result.jobs {
        println!("{} | {} ({})", job.title, job.company, job.location);
        println!("    {} [{}]", job.url, job.site);
    }
    println!(
        "\n{} unique jobs ({} scraped) from {} sources",
        result.total_unique,
        result.total_scraped,
        result.source_status.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_site_list_means_all_boards() {
        assert_eq!(resolve_sites(&[]).len(), JobSite::ALL.len());
    }

    #[test]
    fn unknown_names_are_dropped() {
        let sites = resolve_sites(&["remoteok".to_string(), "linkedin".to_string()]);
        assert_eq!(sites, vec![JobSite::RemoteOk]);
    }
}
