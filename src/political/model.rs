//! Politician, decision and conflict records

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a conflict-of-interest alert, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConflictLevel {
    #[serde(rename = "LÅG")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HÖG")]
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictType {
    #[serde(rename = "Direkt ekonomiskt intresse")]
    DirectInterest,
    #[serde(rename = "Företagsanslutning")]
    BusinessConnection,
    #[serde(rename = "Potentiell branschkonflikt")]
    IndustryConflict,
}

impl ConflictType {
    pub fn label(&self) -> &'static str {
        match self {
            ConflictType::DirectInterest => "Direkt ekonomiskt intresse",
            ConflictType::BusinessConnection => "Företagsanslutning",
            ConflictType::IndustryConflict => "Potentiell branschkonflikt",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VotingResult {
    #[serde(rename = "Bifallen")]
    Approved,
    #[serde(rename = "Avslag")]
    Rejected,
    #[serde(rename = "Återremiss")]
    Referred,
}

impl VotingResult {
    pub const ALL: [VotingResult; 3] = [
        VotingResult::Approved,
        VotingResult::Rejected,
        VotingResult::Referred,
    ];
}

/// An elected municipal politician
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Politician {
    /// `{municipality}_{n}`, n counting from 1
    pub id: String,
    pub name: String,
    pub party: String,
    pub position: String,
    pub municipality: String,
    pub phone: String,
    pub email: String,
    pub economic_interests: Vec<String>,
    /// Share of meetings attended, in [0.7, 1.0)
    pub attendance_rate: f64,
    pub business_connections: Vec<String>,
    pub risk_score: f64,
    pub total_decisions: usize,
    pub conflict_count: usize,
    pub start_date: NaiveDate,
    pub committees: Vec<String>,
}

/// A municipal council decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub municipality: String,
    pub voting_result: VotingResult,
    /// Names of the politicians who took part
    pub participants: Vec<String>,
    pub absent_members: Vec<String>,
    pub economic_impact: f64,
    /// Zero unless the decision is a procurement
    pub contract_value: f64,
    /// Empty unless the decision is a procurement
    pub winning_company: String,
    pub decision_type: String,
}

impl Decision {
    pub fn is_procurement(&self) -> bool {
        self.decision_type == super::conflicts::PROCUREMENT_DECISION && !self.winning_company.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictAlert {
    pub id: String,
    pub politician_id: String,
    pub politician_name: String,
    pub politician_party: String,
    pub decision_title: String,
    pub conflict_type: ConflictType,
    pub risk_level: ConflictLevel,
    /// The winning company the politician is tied to
    pub economic_interest: String,
    pub contract_value: f64,
    pub municipality: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}

/// One absence from a high-value decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence<'a> {
    pub decision: &'a str,
    pub value: f64,
    pub municipality: &'a str,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequentAbsence<'a> {
    pub politician: &'a str,
    pub absence_count: usize,
    pub total_value: f64,
    pub decisions: Vec<Absence<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePatterns<'a> {
    pub frequent_absences: Vec<FrequentAbsence<'a>>,
}

/// A politician whose interests match a large procurement winner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticianMatch<'a> {
    pub politician: &'a str,
    pub party: &'a str,
    pub municipality: &'a str,
    pub connections: Vec<&'a str>,
    pub risk_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference<'a> {
    pub matching_companies: Vec<PoliticianMatch<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_politicians: usize,
    /// Decisions dated within the last 30 days
    pub recent_decisions: usize,
    pub active_conflicts: usize,
    pub monitored_municipalities: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityStats {
    pub politicians: usize,
    pub decisions: usize,
    pub conflicts: usize,
    pub avg_attendance: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticalReport<'a> {
    pub summary: ReportSummary,
    /// Politician count per party, in first-seen order
    pub party_distribution: IndexMap<&'a str, usize>,
    pub high_risk_politicians: Vec<&'a Politician>,
    pub municipality_stats: IndexMap<&'a str, MunicipalityStats>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticalDashboard {
    pub total_politicians: usize,
    pub recent_decisions: usize,
    pub active_conflicts: usize,
    pub high_risk_politicians: usize,
    pub monitored_municipalities: usize,
}
