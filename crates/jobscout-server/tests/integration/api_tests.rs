use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use jobscout_core::models::SourceOutcome;
use jobscout_core::site::JobSite;
use jobscout_core::testutil::{MockSource, make_posting};

use crate::integration::common::setup_test_app;

fn search_request(body: &serde_json::Value) -> Request<Body> {
    Request::post("/v1/search")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app(MockSource::new());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["sources"], 14);
}

#[tokio::test]
async fn sites_lists_every_supported_board() {
    let app = setup_test_app(MockSource::new());

    let response = app
        .oneshot(Request::get("/v1/sites").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let sites = json["sites"].as_array().unwrap();
    assert_eq!(sites.len(), 14);
    assert!(sites.iter().any(|s| s == "remoteok"));
    assert!(sites.iter().any(|s| s == "hackernews"));
    assert!(sites.iter().any(|s| s == "wellfound"));
    assert!(sites.iter().any(|s| s == "remoteco"));
}

#[tokio::test]
async fn search_returns_jobs_and_meta() {
    let source = MockSource::new()
        .outcome(
            JobSite::RemoteOk,
            SourceOutcome::success(vec![make_posting(
                JobSite::RemoteOk,
                "Backend Engineer",
                "ACME",
            )]),
        )
        .outcome(JobSite::Dice, SourceOutcome::failed("HTTP 503"));
    let app = setup_test_app(source);

    let response = app
        .oneshot(search_request(&serde_json::json!({
            "sites": ["remoteok", "dice"],
            "search_term": "backend engineer",
            "location": "remote",
            "results_wanted": 10
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["jobs"].as_array().unwrap().len(), 1);
    assert_eq!(json["jobs"][0]["title"], "Backend Engineer");
    assert!(json["jobs"][0]["job_url"].as_str().unwrap().starts_with("https://"));
    assert_eq!(json["meta"]["total_found"], 1);
    assert_eq!(json["meta"]["scraped"], 1);
    assert_eq!(json["meta"]["sources"]["remoteok"]["count"], 1);
    assert_eq!(json["meta"]["sources"]["dice"]["count"], 0);
    assert_eq!(json["meta"]["sources"]["dice"]["error"], "HTTP 503");
    assert!(json["meta"]["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_sites_are_skipped() {
    let source = MockSource::new().outcome(
        JobSite::RemoteOk,
        SourceOutcome::success(vec![make_posting(
            JobSite::RemoteOk,
            "Backend Engineer",
            "ACME",
        )]),
    );
    let app = setup_test_app(source);

    let response = app
        .oneshot(search_request(&serde_json::json!({
            "sites": ["remoteok", "linkedin"],
            "search_term": "backend",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    // Only the recognized site appears in the per-source status.
    assert!(json["meta"]["sources"].get("linkedin").is_none());
    assert_eq!(json["meta"]["sources"]["remoteok"]["count"], 1);
}

#[tokio::test]
async fn empty_site_list_returns_400() {
    let app = setup_test_app(MockSource::new());

    let response = app
        .oneshot(search_request(&serde_json::json!({
            "sites": [],
            "search_term": "backend",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn results_wanted_defaults_to_twenty() {
    let source = MockSource::new();
    let app = setup_test_app(source.clone());

    let response = app
        .oneshot(search_request(&serde_json::json!({
            "sites": ["remoteok", "dice"],
            "search_term": "backend",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // ceil(20 / 2) = 10 per site.
    let calls = source.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(_, _, _, limit)| *limit == 10));
}
