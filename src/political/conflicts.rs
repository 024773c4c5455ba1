//! Conflict-of-interest rules
//!
//! A politician conflicts with a procurement decision in their municipality
//! when one of their economic interests names the winner (HÖG), one of their
//! business connections names it (MEDIUM), or, for contracts above 10 MSEK,
//! any of them sits in the same industry as the winner (MEDIUM).

use super::model::{ConflictAlert, ConflictLevel, ConflictType, Decision, Politician};
use crate::procurement::detector::format_sek;
use chrono::{DateTime, Utc};

/// Decision type that carries a contract value and a winner
pub const PROCUREMENT_DECISION: &str = "Upphandling";

/// Contracts above this value are also checked for industry overlap
pub const INDUSTRY_CHECK_VALUE: f64 = 10_000_000.0;

const MAX_RISK_SCORE: f64 = 10.0;

/// Keyword groups used to place company names in an industry
const INDUSTRIES: &[(&str, &[&str])] = &[
    ("bygg", &["bygg", "konstruktion", "anläggning", "skanska", "peab", "ncc"]),
    ("it", &["it", "tech", "system", "digital", "konsult"]),
    ("transport", &["transport", "logistik", "frakt"]),
    ("städ", &["städ", "service", "clean", "renhållning"]),
];

/// Two points per interest, 1.5 per connection, two more when both kinds exist; capped at 10
pub fn politician_risk_score(economic_interests: &[String], business_connections: &[String]) -> f64 {
    let mut score = economic_interests.len() as f64 * 2.0 + business_connections.len() as f64 * 1.5;
    if !economic_interests.is_empty() && !business_connections.is_empty() {
        score += 2.0;
    }
    score.min(MAX_RISK_SCORE)
}

/// Case-insensitive containment in either direction
pub fn is_company_match(interest: &str, company: &str) -> bool {
    let interest = interest.to_lowercase();
    let company = company.to_lowercase();
    interest.contains(&company) || company.contains(&interest)
}

/// True when both names hit a keyword of the same industry
pub fn is_same_industry(interest: &str, company: &str) -> bool {
    let interest = interest.to_lowercase();
    let company = company.to_lowercase();
    INDUSTRIES.iter().any(|(_, keywords)| {
        keywords.iter().any(|k| interest.contains(k)) && keywords.iter().any(|k| company.contains(k))
    })
}

/// Classify the strongest conflict between a politician and a decision's winner
pub fn classify(politician: &Politician, decision: &Decision) -> Option<(ConflictType, ConflictLevel)> {
    let winner = decision.winning_company.as_str();

    if politician.economic_interests.iter().any(|i| is_company_match(i, winner)) {
        return Some((ConflictType::DirectInterest, ConflictLevel::High));
    }
    if politician.business_connections.iter().any(|c| is_company_match(c, winner)) {
        return Some((ConflictType::BusinessConnection, ConflictLevel::Medium));
    }
    if decision.contract_value > INDUSTRY_CHECK_VALUE
        && politician
            .economic_interests
            .iter()
            .chain(&politician.business_connections)
            .any(|i| is_same_industry(i, winner))
    {
        return Some((ConflictType::IndustryConflict, ConflictLevel::Medium));
    }
    None
}

/// Alerts for every politician/procurement pair in the same municipality,
/// highest risk first. Ties keep decision order.
pub fn analyze<'a>(
    politicians: impl IntoIterator<Item = &'a Politician> + Clone,
    decisions: &[Decision],
    now: DateTime<Utc>,
) -> Vec<ConflictAlert> {
    let mut alerts = Vec::new();

    for decision in decisions.iter().filter(|d| d.is_procurement()) {
        for politician in politicians
            .clone()
            .into_iter()
            .filter(|p| p.municipality == decision.municipality)
        {
            let Some((conflict_type, risk_level)) = classify(politician, decision) else {
                continue;
            };
            alerts.push(ConflictAlert {
                id: format!("conflict_{}_{}", politician.id, decision.id),
                politician_id: politician.id.clone(),
                politician_name: politician.name.clone(),
                politician_party: politician.party.clone(),
                decision_title: decision.title.clone(),
                conflict_type,
                risk_level,
                economic_interest: decision.winning_company.clone(),
                contract_value: decision.contract_value,
                municipality: decision.municipality.clone(),
                details: format!(
                    "{} ({}) har {} relaterat till {} (värde: {} kr)",
                    politician.name,
                    politician.party,
                    conflict_type.label().to_lowercase(),
                    decision.winning_company,
                    format_sek(decision.contract_value)
                ),
                timestamp: now,
                resolved: false,
            });
        }
    }

    alerts.sort_by(|a, b| b.risk_level.cmp(&a.risk_level));
    alerts
}
