//! Simulated public-procurement feed
//!
//! Generates awarded procurements from fixed vocabularies and flags companies
//! that win unusually often or contracts with unusually high values.

pub mod detector;
pub mod model;
pub mod simulator;

pub use model::{Anomaly, AnomalyType, FeedDashboard, FeedStats, Procurement, Source};
pub use simulator::{FeedConfig, ProcurementSimulator};
