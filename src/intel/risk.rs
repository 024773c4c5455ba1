//! Heuristic risk scoring and the aggregate risk report

use super::model::{Company, Person};
use serde::Serialize;

/// Companies scoring strictly above this are reported as high risk
pub const COMPANY_RISK_THRESHOLD: f64 = 6.0;
/// People scoring strictly above this are reported as high risk
pub const PERSON_RISK_THRESHOLD: f64 = 7.0;
/// Length of each top list in the report
pub const TOP_N: usize = 10;

const MAX_SCORE: f64 = 10.0;

/// Inputs to the company risk rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactors {
    pub economic_health: u8,
    pub contract_count: usize,
    pub employees: u32,
    pub subsidiary_count: usize,
    pub has_parent: bool,
}

impl RiskFactors {
    pub fn from_company(company: &Company) -> Self {
        Self {
            economic_health: company.economic_health,
            contract_count: company.contracts.len(),
            employees: company.employees,
            subsidiary_count: company.subsidiaries.len(),
            has_parent: company.parent_company.is_some(),
        }
    }

    /// Weighted rule, clamped to [0, 10]
    pub fn score(&self) -> f64 {
        let mut score: f64 = 0.0;

        if self.economic_health < 3 {
            score += 3.0;
        } else if self.economic_health < 5 {
            score += 1.0;
        }

        let ratio = self.contract_count as f64 / f64::from(self.employees.max(1));
        if ratio > 2.0 {
            score += 2.0;
        }

        if self.subsidiary_count > 3 {
            score += 1.0;
        }
        if self.has_parent {
            score += 0.5;
        }

        score.clamp(0.0, MAX_SCORE)
    }
}

/// Histogram of companies by risk band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskStatistics {
    /// score <= 3
    pub low: usize,
    /// 3 < score <= 6
    pub medium: usize,
    /// score > 6
    pub high: usize,
}

impl RiskStatistics {
    pub fn record(&mut self, score: f64) {
        if score <= 3.0 {
            self.low += 1;
        } else if score <= COMPANY_RISK_THRESHOLD {
            self.medium += 1;
        } else {
            self.high += 1;
        }
    }
}

/// Aggregate risk report over the whole dataset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis<'a> {
    pub high_risk_companies: Vec<&'a Company>,
    pub high_risk_people: Vec<&'a Person>,
    pub total_analyzed_companies: usize,
    pub total_analyzed_people: usize,
    pub risk_statistics: RiskStatistics,
}

/// Build the report from the company and person tables
pub fn analyze<'a>(
    companies: impl IntoIterator<Item = &'a Company>,
    people: impl IntoIterator<Item = &'a Person>,
) -> RiskAnalysis<'a> {
    let companies: Vec<&Company> = companies.into_iter().collect();
    let people: Vec<&Person> = people.into_iter().collect();

    let mut statistics = RiskStatistics::default();
    for company in &companies {
        statistics.record(company.risk_score);
    }

    let mut risky_companies: Vec<&Company> = companies
        .iter()
        .copied()
        .filter(|c| c.risk_score > COMPANY_RISK_THRESHOLD)
        .collect();
    risky_companies.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
    risky_companies.truncate(TOP_N);

    let mut risky_people: Vec<&Person> = people
        .iter()
        .copied()
        .filter(|p| p.risk_score > PERSON_RISK_THRESHOLD)
        .collect();
    risky_people.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
    risky_people.truncate(TOP_N);

    RiskAnalysis {
        high_risk_companies: risky_companies,
        high_risk_people: risky_people,
        total_analyzed_companies: companies.len(),
        total_analyzed_people: people.len(),
        risk_statistics: statistics,
    }
}
