//! HTTP handlers for the portal API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::intel::{IntelStore, OrgNr};
use crate::political::{ConflictLevel, PoliticalMonitor};
use crate::procurement::ProcurementSimulator;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared handler state
///
/// The company-intelligence tables and the political monitor never change
/// after startup and are read without locking; the procurement feed is
/// refreshed through POST routes.
#[derive(Clone)]
pub struct AppState {
    pub intel: Arc<IntelStore>,
    pub feed: Arc<RwLock<ProcurementSimulator>>,
    pub political: Arc<PoliticalMonitor>,
}

impl AppState {
    pub fn new(intel: IntelStore, feed: ProcurementSimulator, political: PoliticalMonitor) -> Self {
        Self {
            intel: Arc::new(intel),
            feed: Arc::new(RwLock::new(feed)),
            political: Arc::new(political),
        }
    }
}

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Company {0} not found")]
    CompanyNotFound(OrgNr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::CompanyNotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// `?q=` search parameter; a missing query matches everything
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DecisionQuery {
    #[serde(default)]
    pub q: String,
    pub municipality: Option<String>,
}

/// `?level=HÖG|MEDIUM|LÅG`; absent means every unresolved alert
#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    pub level: Option<ConflictLevel>,
}

/// Handler for system status
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let feed = state.feed.read().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "storage": {
            "people": state.intel.person_count(),
            "companies": state.intel.company_count(),
            "contracts": state.intel.contracts().len(),
            "legalEvents": state.intel.legal_events().len(),
            "procurements": feed.procurements(usize::MAX).len(),
            "politicians": state.political.politicians().count(),
            "decisions": state.political.decisions().len(),
        }
    }))
}

pub async fn search_companies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    debug!(q = %params.q, "company search");
    Json(state.intel.search_company(&params.q)).into_response()
}

pub async fn company_details(
    State(state): State<AppState>,
    Path(org_nr): Path<String>,
) -> Result<Response, ApiError> {
    let org_nr = OrgNr::new(org_nr);
    match state.intel.company_details(&org_nr) {
        Some(details) => Ok(Json(details).into_response()),
        None => Err(ApiError::CompanyNotFound(org_nr)),
    }
}

pub async fn company_network(
    State(state): State<AppState>,
    Path(org_nr): Path<String>,
) -> impl IntoResponse {
    let org_nr = OrgNr::new(org_nr);
    Json(state.intel.network_connections(&org_nr)).into_response()
}

pub async fn shared_people(
    State(state): State<AppState>,
    Path((org_nr, other)): Path<(String, String)>,
) -> impl IntoResponse {
    Json(state.intel.shared_people(&OrgNr::new(org_nr), &OrgNr::new(other)))
}

pub async fn search_people(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    debug!(q = %params.q, "person search");
    Json(state.intel.search_person(&params.q)).into_response()
}

pub async fn bidding_risk(
    State(state): State<AppState>,
    Path(municipality): Path<String>,
) -> impl IntoResponse {
    Json(state.intel.competitor_bidding(&municipality)).into_response()
}

pub async fn risk_analysis(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.intel.risk_analysis()).into_response()
}

pub async fn dashboard_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.intel.dashboard_stats())
}

pub async fn list_procurements(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> impl IntoResponse {
    let feed = state.feed.read().await;
    Json(feed.procurements(params.limit.unwrap_or(50))).into_response()
}

pub async fn list_anomalies(
    State(state): State<AppState>,
    Query(params): Query<DaysQuery>,
) -> impl IntoResponse {
    let feed = state.feed.read().await;
    Json(feed.anomalies(params.days.unwrap_or(30))).into_response()
}

pub async fn feed_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let feed = state.feed.read().await;
    Json(feed.dashboard()).into_response()
}

pub async fn update_feed(State(state): State<AppState>) -> impl IntoResponse {
    state.feed.write().await.update_data();
    Json(json!({ "success": true, "message": "Datauppdatering klar" }))
}

pub async fn run_feed_analysis(State(state): State<AppState>) -> impl IntoResponse {
    let anomaly = state.feed.write().await.run_analysis();
    Json(json!({ "success": true, "message": "Analys klar", "anomaly": anomaly }))
}

pub async fn search_politicians(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    debug!(q = %params.q, "politician search");
    Json(state.political.search_politician(&params.q)).into_response()
}

pub async fn politicians_by_municipality(
    State(state): State<AppState>,
    Path(municipality): Path<String>,
) -> impl IntoResponse {
    Json(state.political.politicians_by_municipality(&municipality)).into_response()
}

pub async fn high_risk_politicians(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.political.high_risk_politicians()).into_response()
}

pub async fn search_decisions(
    State(state): State<AppState>,
    Query(params): Query<DecisionQuery>,
) -> impl IntoResponse {
    let decisions = state
        .political
        .search_decisions(&params.q, params.municipality.as_deref());
    Json(decisions).into_response()
}

pub async fn list_conflicts(
    State(state): State<AppState>,
    Query(params): Query<LevelQuery>,
) -> impl IntoResponse {
    Json(state.political.conflicts_by_level(params.level)).into_response()
}

pub async fn attendance_patterns(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.political.attendance_patterns()).into_response()
}

pub async fn cross_reference(State(state): State<AppState>) -> impl IntoResponse {
    let feed = state.feed.read().await;
    let refs = state.political.cross_reference(feed.procurements(usize::MAX));
    Json(refs).into_response()
}

pub async fn political_report(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.political.report()).into_response()
}

pub async fn political_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.political.dashboard())
}

pub async fn political_municipalities(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.political.municipalities())
}
