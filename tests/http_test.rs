//! Router-level tests driven through `tower::ServiceExt::oneshot`

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use procwatch::{
    router, AppState, FeedConfig, GeneratorConfig, IntelStore, MonitorConfig, PoliticalMonitor,
    ProcurementSimulator,
};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> (Router, AppState) {
    let intel = IntelStore::generate(GeneratorConfig::seeded(7)).unwrap();
    let feed = ProcurementSimulator::new(FeedConfig {
        seed: Some(7),
        ..FeedConfig::default()
    });
    let political = PoliticalMonitor::new(MonitorConfig {
        seed: Some(7),
        reference_date: None,
    });
    let state = AppState::new(intel, feed, political);
    (router(state.clone()), state)
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

#[tokio::test]
async fn test_status_reports_table_sizes() {
    let (app, _) = app();
    let (status, body) = get(app, "/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["people"], 50);
    assert_eq!(body["storage"]["companies"], 30);
    assert_eq!(body["storage"]["procurements"], 50);
}

#[tokio::test]
async fn test_company_search_without_query_returns_all() {
    let (app, _) = app();
    let (status, body) = get(app, "/companies/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn test_company_search_by_org_nr() {
    let (app, state) = app();
    let org_nr = state.intel.org_nrs()[0].clone();
    let (status, body) = get(app, &format!("/companies/search?q={}", org_nr)).await;

    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert!(hits.iter().any(|c| c["orgNr"] == org_nr.as_str()));
}

#[tokio::test]
async fn test_company_details_resolves_people() {
    let (app, state) = app();
    let org_nr = state.intel.org_nrs()[0].clone();
    let (status, body) = get(app, &format!("/companies/{}", org_nr)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orgNr"], org_nr.as_str());
    assert!(body.get("company").is_none());
    // references are replaced, not duplicated
    assert!(body["owners"][0]["person"]["name"].is_string());
    assert!(body["ceo"]["personId"].is_string());
    assert!(body["owners"].as_array().unwrap().len() >= 1);
}

#[tokio::test]
async fn test_unknown_company_is_not_found() {
    let (app, _) = app();
    let (status, body) = get(app, "/companies/0000000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("0000000000"));
}

#[tokio::test]
async fn test_network_of_unknown_company_is_empty() {
    let (app, _) = app();
    let (status, body) = get(app, "/companies/0000000000/network").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_risk_analysis_shape() {
    let (app, _) = app();
    let (status, body) = get(app, "/risk-analysis").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalAnalyzedCompanies"], 30);
    assert_eq!(body["totalAnalyzedPeople"], 50);
    let stats = &body["riskStatistics"];
    let total = stats["low"].as_u64().unwrap()
        + stats["medium"].as_u64().unwrap()
        + stats["high"].as_u64().unwrap();
    assert_eq!(total, 30);
}

#[tokio::test]
async fn test_bidding_risk_for_unknown_municipality() {
    let (app, _) = app();
    let (status, body) = get(app, "/municipalities/Atlantis/bidding-risk").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_procurement_limit() {
    let (app, _) = app();
    let (status, body) = get(app, "/procurements?limit=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_feed_update_prepends_real_time_batch() {
    let (app, state) = app();
    let (status, body) = send(app.clone(), Method::POST, "/procurements/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let feed = state.feed.read().await;
    let newest = feed.procurements(5);
    assert!(newest.iter().all(|p| p.id.starts_with("proc_new_")));
    assert_eq!(feed.procurements(usize::MAX).len(), 55);
}

#[tokio::test]
async fn test_feed_analysis_records_anomaly() {
    let (app, state) = app();
    let (status, body) = send(app, Method::POST, "/procurements/analysis").await;

    assert_eq!(status, StatusCode::OK);
    let score = body["anomaly"]["score"].as_f64().unwrap();
    assert!((5.0..10.0).contains(&score));
    assert_eq!(body["anomaly"]["anomaly_type"], "Misstänkt mönster");

    let feed = state.feed.read().await;
    assert_eq!(feed.anomalies(1)[0].id, body["anomaly"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (app, _) = app();
    let (status, body) = get(app, "/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCompanies"], 30);
    assert_eq!(body["totalContracts"], 100);
}

#[tokio::test]
async fn test_politician_search_and_municipality() {
    let (app, _) = app();
    let (status, body) = get(app.clone(), "/politicians/municipality/Stockholm").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 25);
    assert!(body[0]["economicInterests"].is_array());

    let (status, body) = get(app, "/politicians/search?q=Uppsala").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().len() >= 15);
}

#[tokio::test]
async fn test_conflicts_filtered_by_level() {
    let (app, state) = app();
    let (status, body) = get(app.clone(), "/conflicts?level=H%C3%96G").await;
    assert_eq!(status, StatusCode::OK);
    let high = body.as_array().unwrap();
    assert!(high.iter().all(|a| a["riskLevel"] == "HÖG"));
    assert_eq!(
        high.len(),
        state
            .political
            .conflicts_by_level(Some(procwatch::political::ConflictLevel::High))
            .len()
    );

    let (_, all) = get(app, "/conflicts").await;
    assert_eq!(all.as_array().unwrap().len(), state.political.conflicts().len());
}

#[tokio::test]
async fn test_unknown_conflict_level_rejected() {
    let (app, _) = app();
    let response = app
        .oneshot(Request::builder().uri("/conflicts?level=KRITISK").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_political_report_and_dashboard() {
    let (app, _) = app();
    let (status, report) = get(app.clone(), "/political/report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["summary"]["totalPoliticians"], 170);
    assert_eq!(report["summary"]["monitoredMunicipalities"], 10);
    assert_eq!(report["municipalityStats"]["Stockholm"]["politicians"], 25);

    let (_, dashboard) = get(app.clone(), "/political/dashboard").await;
    assert_eq!(dashboard["totalPoliticians"], 170);
    assert_eq!(dashboard["activeConflicts"], report["summary"]["activeConflicts"]);

    let (_, municipalities) = get(app, "/political/municipalities").await;
    assert_eq!(municipalities.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_decision_search_and_cross_reference() {
    let (app, _) = app();
    let (status, body) = get(app.clone(), "/decisions/search?q=upphandling&municipality=Malm%C3%B6").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|d| d["municipality"] == "Malmö" && d["decisionType"] == "Upphandling"));

    let (status, body) = get(app, "/political/cross-reference").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["matchingCompanies"].is_array());
}
