//! HTTP server exposing the portal API

use axum::{
    routing::{get, post},
    Router,
};
use crate::config::ServerConfig;
use super::handler::{self, AppState};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the API router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(handler::status_handler))
        .route("/companies/search", get(handler::search_companies))
        .route("/companies/:org_nr", get(handler::company_details))
        .route("/companies/:org_nr/network", get(handler::company_network))
        .route("/companies/:org_nr/shared/:other", get(handler::shared_people))
        .route("/people/search", get(handler::search_people))
        .route("/municipalities/:name/bidding-risk", get(handler::bidding_risk))
        .route("/risk-analysis", get(handler::risk_analysis))
        .route("/dashboard/stats", get(handler::dashboard_stats))
        .route("/procurements", get(handler::list_procurements))
        .route("/procurements/dashboard", get(handler::feed_dashboard))
        .route("/procurements/update", post(handler::update_feed))
        .route("/procurements/analysis", post(handler::run_feed_analysis))
        .route("/anomalies", get(handler::list_anomalies))
        .route("/politicians/search", get(handler::search_politicians))
        .route("/politicians/high-risk", get(handler::high_risk_politicians))
        .route("/politicians/municipality/:name", get(handler::politicians_by_municipality))
        .route("/decisions/search", get(handler::search_decisions))
        .route("/conflicts", get(handler::list_conflicts))
        .route("/political/attendance", get(handler::attendance_patterns))
        .route("/political/cross-reference", get(handler::cross_reference))
        .route("/political/report", get(handler::political_report))
        .route("/political/dashboard", get(handler::political_dashboard))
        .route("/political/municipalities", get(handler::political_municipalities))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server managing the portal API
pub struct HttpServer {
    state: AppState,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self { state, config }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.state.clone());

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Portal API listening on http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
