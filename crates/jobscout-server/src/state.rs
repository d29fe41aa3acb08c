use jobscout_core::aggregate::Aggregator;
use jobscout_core::traits::JobSource;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
///
/// Generic over the job source so integration tests can run the full
/// router against canned outcomes.
pub struct AppState<J: JobSource> {
    pub aggregator: Aggregator<J>,
}
