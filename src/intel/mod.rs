//! Company-intelligence simulator
//!
//! Generates people, companies, contracts and legal events with ownership,
//! board, CEO and subsidiary links, then answers read-only queries over them:
//! search, detail lookup, network connections, competitor-bidding patterns and
//! an aggregate risk report.
//!
//! ```rust
//! use procwatch::intel::{GeneratorConfig, IntelStore};
//!
//! let store = IntelStore::generate(GeneratorConfig::seeded(42)).unwrap();
//! assert_eq!(store.search_company("").len(), 30);
//!
//! let first = store.org_nrs()[0].clone();
//! for conn in store.network_connections(&first) {
//!     assert_ne!(conn.company.org_nr, first);
//! }
//! ```

pub mod generator;
pub mod model;
pub mod risk;
pub mod store;
pub mod types;
pub mod views;
mod vocab;

pub use generator::{Generator, GeneratorConfig};
pub use model::{Address, Affiliation, BoardMember, Ceo, Company, Contract, LegalEvent, Owner, Person};
pub use risk::{RiskAnalysis, RiskFactors, RiskStatistics};
pub use store::{IntelError, IntelResult, IntelStore};
pub use types::{
    ConnectionType, ContractStatus, LegalEventStatus, LegalEventType, OrgNr, PersonId, RiskLevel, Role,
};
pub use views::{
    BiddingPattern, CompanyDetails, DashboardStats, NetworkConnection, PersonMatch, SharedPerson,
};

pub(crate) use vocab::MUNICIPALITIES;
