use std::sync::Arc;

use axum::Router;

use jobscout_core::aggregate::Aggregator;
use jobscout_core::testutil::MockSource;
use jobscout_server::routes;
use jobscout_server::state::AppState;

/// Build the test app router over a mock source with canned outcomes.
pub fn setup_test_app(source: MockSource) -> Router {
    let state = Arc::new(AppState {
        aggregator: Aggregator::new(source),
    });
    routes::router(state)
}
