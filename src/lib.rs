//! procwatch
//!
//! Backend for a demo news portal covering Swedish public procurement,
//! corporate ownership and conflict-of-interest alerts. Every table is
//! produced by a randomized simulator; nothing is ingested from real sources.
//!
//! # Components
//!
//! - [`intel`]: people, companies, contracts and legal events wired together
//!   through ownership, board, CEO and subsidiary links, with search, detail,
//!   network, competitor-bidding and risk queries
//! - [`procurement`]: a simulated procurement feed with frequency and value
//!   anomaly detection
//! - [`political`]: simulated municipal politicians and council decisions,
//!   with conflict-of-interest alerts against procurement winners
//! - [`http`]: a JSON API over all three, served with axum
//!
//! ## Example Usage
//!
//! ```rust
//! use procwatch::intel::{GeneratorConfig, IntelStore, OrgNr};
//!
//! // Build the dataset once and query it
//! let store = IntelStore::generate(GeneratorConfig::seeded(1)).unwrap();
//! assert_eq!(store.person_count(), 50);
//!
//! let report = store.risk_analysis();
//! assert_eq!(report.total_analyzed_companies, 30);
//!
//! // Unknown organization numbers resolve to nothing
//! assert!(store.company_details(&OrgNr::new("0000000000")).is_none());
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod http;
pub mod intel;
pub mod political;
pub mod procurement;

// Re-export main types for convenience
pub use config::ServerConfig;
pub use http::{router, ApiError, AppState, HttpServer};
pub use intel::{GeneratorConfig, IntelError, IntelResult, IntelStore};
pub use political::{MonitorConfig, PoliticalMonitor};
pub use procurement::{FeedConfig, ProcurementSimulator};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
