//! Frequency and value anomaly detection over the procurement feed

use super::model::{Anomaly, AnomalyType, Procurement};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Winning this many procurements flags the company
pub const WIN_FREQUENCY_THRESHOLD: usize = 4;
/// Values above this multiple of the mean are flagged
pub const VALUE_MULTIPLIER: f64 = 3.0;

const MAX_FREQUENCY_SCORE: f64 = 10.0;
const MAX_VALUE_SCORE: f64 = 8.0;

/// Scan the feed and return anomalies sorted by descending score
pub fn detect(procurements: &[Procurement], now: DateTime<Utc>) -> Vec<Anomaly> {
    let mut anomalies = frequency_anomalies(procurements, now);
    anomalies.extend(value_anomalies(procurements, now));
    anomalies.sort_by(|a, b| b.score.total_cmp(&a.score));
    anomalies
}

fn frequency_anomalies(procurements: &[Procurement], now: DateTime<Utc>) -> Vec<Anomaly> {
    // company name -> (wins, latest win)
    let mut wins: IndexMap<&str, (usize, &Procurement)> = IndexMap::new();
    for award in procurements {
        wins.entry(award.winner_company.as_str())
            .and_modify(|(count, latest)| {
                *count += 1;
                *latest = award;
            })
            .or_insert((1, award));
    }

    wins.into_iter()
        .filter(|(_, (count, _))| *count >= WIN_FREQUENCY_THRESHOLD)
        .map(|(company, (count, latest))| Anomaly {
            id: format!("anom_freq_{}", slug(company)),
            company_name: company.to_string(),
            company_org_nr: latest.winner_org_nr.clone(),
            municipality: latest.municipality.clone(),
            anomaly_type: AnomalyType::HighWinFrequency,
            score: (count as f64 * 1.5).min(MAX_FREQUENCY_SCORE),
            details: format!("Företaget har vunnit {} upphandlingar (ovanligt högt)", count),
            evidence: vec![
                format!("Antal vinster: {}", count),
                "Överstiger normalförväntan".to_string(),
            ],
            detected_at: now,
        })
        .collect()
}

fn value_anomalies(procurements: &[Procurement], now: DateTime<Utc>) -> Vec<Anomaly> {
    if procurements.is_empty() {
        return Vec::new();
    }
    let total: u64 = procurements.iter().map(|p| p.value).sum();
    let mean = total as f64 / procurements.len() as f64;

    procurements
        .iter()
        .filter(|p| p.value as f64 > mean * VALUE_MULTIPLIER)
        .map(|p| {
            let ratio = p.value as f64 / mean;
            Anomaly {
                id: format!("anom_value_{}", p.id),
                company_name: p.winner_company.clone(),
                company_org_nr: p.winner_org_nr.clone(),
                municipality: p.municipality.clone(),
                anomaly_type: AnomalyType::UnusualValue,
                score: ratio.min(MAX_VALUE_SCORE),
                details: format!(
                    "Upphandling värderad till {} kr (medel: {} kr)",
                    format_sek(p.value as f64),
                    format_sek(mean)
                ),
                evidence: vec![
                    format!("Värde: {} kr", format_sek(p.value as f64)),
                    format!("{}x över medel", ratio.round()),
                ],
                detected_at: now,
            }
        })
        .collect()
}

/// Round and group thousands with spaces, Swedish style: 1 250 000
pub fn format_sek(amount: f64) -> String {
    let digits = format!("{}", amount.round().abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if amount < -0.5 {
        grouped.insert(0, '-');
    }
    grouped
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
