//! Procurement feed records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a procurement notice was picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "TED")]
    Ted,
    #[serde(rename = "Visma")]
    Visma,
    #[serde(rename = "Real-time")]
    RealTime,
}

/// An awarded public procurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procurement {
    pub id: String,
    pub title: String,
    pub municipality: String,
    pub value: u64,
    pub date: DateTime<Utc>,
    pub winner_company: String,
    pub winner_org_nr: String,
    pub category: String,
    pub source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyType {
    #[serde(rename = "Hög vinstfrekvens")]
    HighWinFrequency,
    #[serde(rename = "Ovanligt högt värde")]
    UnusualValue,
    #[serde(rename = "Misstänkt mönster")]
    SuspiciousPattern,
}

/// Heuristic flag raised over the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: String,
    pub company_name: String,
    pub company_org_nr: String,
    pub municipality: String,
    pub anomaly_type: AnomalyType,
    pub score: f64,
    pub details: String,
    pub evidence: Vec<String>,
    pub detected_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    pub total_procurements: usize,
    pub total_anomalies: usize,
    pub municipalities_monitored: usize,
    /// Anomalies scoring above 7
    pub high_risk_companies: usize,
}

/// Everything the procurement dashboard renders in one payload
#[derive(Debug, Clone, Serialize)]
pub struct FeedDashboard<'a> {
    pub procurements: Vec<&'a Procurement>,
    pub anomalies: Vec<&'a Anomaly>,
    pub municipalities: &'a [&'static str],
    pub stats: FeedStats,
}
