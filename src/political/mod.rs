//! Political conflict-of-interest monitor
//!
//! Generates politicians for ten municipalities with their declared economic
//! interests and business connections, a stream of council decisions, and
//! alerts wherever a politician is tied to the winner of a procurement
//! decided in their own municipality.

pub mod conflicts;
pub mod model;
pub mod monitor;
mod vocab;

pub use model::{
    AttendancePatterns, ConflictAlert, ConflictLevel, ConflictType, CrossReference, Decision,
    PoliticalDashboard, PoliticalReport, Politician, VotingResult,
};
pub use monitor::{MonitorConfig, PoliticalMonitor};
