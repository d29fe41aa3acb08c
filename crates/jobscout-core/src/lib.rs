pub mod aggregate;
pub mod error;
pub mod models;
pub mod relevance;
pub mod site;
pub mod testutil;
pub mod traits;

pub use aggregate::{Aggregator, AggregatorConfig};
pub use error::AppError;
pub use models::{AggregateResult, JobPosting, SearchRequest, SourceOutcome, SourceStatus};
pub use relevance::{RelevanceConfig, RelevanceFilter};
pub use site::JobSite;
pub use traits::{Fetcher, JobSource};
