//! Simulated municipal politicians, council decisions and their conflict alerts

use super::conflicts::{self, PROCUREMENT_DECISION};
use super::model::{
    Absence, AttendancePatterns, ConflictAlert, ConflictLevel, CrossReference, Decision,
    FrequentAbsence, MunicipalityStats, PoliticalDashboard, PoliticalReport, Politician,
    PoliticianMatch, ReportSummary, VotingResult,
};
use super::vocab::{self, MUNICIPALITIES};
use crate::procurement::Procurement;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use indexmap::IndexMap;
use rand::prelude::*;
use tracing::{debug, info};

/// Politicians above this risk score count as high risk even without conflicts
pub const POLITICIAN_RISK_THRESHOLD: f64 = 5.0;
/// Decisions and procurements above this value are cross-checked
pub const HIGH_VALUE: f64 = 5_000_000.0;
/// Absences from this many high-value decisions are reported
pub const FREQUENT_ABSENCE_COUNT: usize = 2;

const RECENT_DAYS: i64 = 30;
const DECISION_WINDOW_DAYS: i64 = 90;
const MAX_COMMITTEE_SIZE: usize = 15;
const REPORT_TOP_N: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorConfig {
    pub seed: Option<u64>,
    /// Date decisions count back from; `None` means today (UTC)
    pub reference_date: Option<NaiveDate>,
}

fn politician_quota(municipality: &str) -> usize {
    match municipality {
        "Stockholm" => 25,
        "Göteborg" | "Malmö" => 20,
        _ => 15,
    }
}

fn decision_quota(municipality: &str) -> usize {
    match municipality {
        "Stockholm" => 35,
        "Göteborg" | "Malmö" => 25,
        _ => 20,
    }
}

/// Politicians, decisions and the conflicts found between them
#[derive(Debug, Clone)]
pub struct PoliticalMonitor {
    politicians: IndexMap<String, Politician>,
    decisions: Vec<Decision>,
    conflicts: Vec<ConflictAlert>,
    today: NaiveDate,
}

impl PoliticalMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let today = config.reference_date.unwrap_or_else(|| Utc::now().date_naive());

        let mut politicians = generate_politicians(&mut rng, today);
        let decisions = generate_decisions(&mut rng, today, &mut politicians);
        let monitor = Self::from_records(politicians, decisions, today);

        info!(
            politicians = monitor.politicians.len(),
            decisions = monitor.decisions.len(),
            conflicts = monitor.conflicts.len(),
            "Generated political monitor"
        );
        monitor
    }

    /// Build a monitor over existing records and run conflict analysis.
    /// Conflict counts on the politicians are recomputed from the alerts.
    pub fn from_records(politicians: Vec<Politician>, decisions: Vec<Decision>, today: NaiveDate) -> Self {
        let mut politicians: IndexMap<String, Politician> =
            politicians.into_iter().map(|p| (p.id.clone(), p)).collect();
        let conflicts = conflicts::analyze(politicians.values(), &decisions, Utc::now());

        for politician in politicians.values_mut() {
            politician.conflict_count = 0;
        }
        for alert in &conflicts {
            if let Some(politician) = politicians.get_mut(&alert.politician_id) {
                politician.conflict_count += 1;
            }
        }

        Self {
            politicians,
            decisions,
            conflicts,
            today,
        }
    }

    pub fn politician(&self, id: &str) -> Option<&Politician> {
        self.politicians.get(id)
    }

    pub fn politicians(&self) -> impl Iterator<Item = &Politician> {
        self.politicians.values()
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn conflicts(&self) -> &[ConflictAlert] {
        &self.conflicts
    }

    pub fn municipalities(&self) -> &'static [&'static str] {
        MUNICIPALITIES
    }

    /// Case-insensitive match on name, party, municipality or position
    pub fn search_politician(&self, query: &str) -> Vec<&Politician> {
        let needle = query.to_lowercase();
        self.politicians
            .values()
            .filter(|p| {
                [&p.name, &p.party, &p.municipality, &p.position]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Case-insensitive match on title, decision type or winner, optionally
    /// restricted to one municipality
    pub fn search_decisions(&self, query: &str, municipality: Option<&str>) -> Vec<&Decision> {
        let needle = query.to_lowercase();
        self.decisions
            .iter()
            .filter(|d| municipality.map_or(true, |m| d.municipality == m))
            .filter(|d| {
                d.title.to_lowercase().contains(&needle)
                    || d.decision_type.to_lowercase().contains(&needle)
                    || d.winning_company.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn politicians_by_municipality(&self, municipality: &str) -> Vec<&Politician> {
        self.politicians
            .values()
            .filter(|p| p.municipality == municipality)
            .collect()
    }

    /// Unresolved alerts, optionally only those at `level`
    pub fn conflicts_by_level(&self, level: Option<ConflictLevel>) -> Vec<&ConflictAlert> {
        self.conflicts
            .iter()
            .filter(|a| !a.resolved && level.map_or(true, |l| a.risk_level == l))
            .collect()
    }

    /// Politicians with a conflict or a risk score above 5, most conflicts first
    pub fn high_risk_politicians(&self) -> Vec<&Politician> {
        let mut risky: Vec<&Politician> = self
            .politicians
            .values()
            .filter(|p| p.conflict_count > 0 || p.risk_score > POLITICIAN_RISK_THRESHOLD)
            .collect();
        risky.sort_by(|a, b| b.conflict_count.cmp(&a.conflict_count));
        risky
    }

    /// Members absent from at least two decisions worth more than 5 MSEK
    pub fn attendance_patterns(&self) -> AttendancePatterns<'_> {
        let mut absences: IndexMap<&str, Vec<Absence<'_>>> = IndexMap::new();
        for decision in self.decisions.iter().filter(|d| d.contract_value > HIGH_VALUE) {
            for member in &decision.absent_members {
                absences.entry(member.as_str()).or_default().push(Absence {
                    decision: &decision.title,
                    value: decision.contract_value,
                    municipality: &decision.municipality,
                    date: decision.date,
                });
            }
        }

        let frequent_absences = absences
            .into_iter()
            .filter(|(_, list)| list.len() >= FREQUENT_ABSENCE_COUNT)
            .map(|(politician, decisions)| FrequentAbsence {
                politician,
                absence_count: decisions.len(),
                total_value: decisions.iter().map(|a| a.value).sum(),
                decisions,
            })
            .collect();
        AttendancePatterns { frequent_absences }
    }

    /// Politicians whose interests or connections match the winner of a
    /// procurement worth more than 5 MSEK
    pub fn cross_reference<'p>(
        &self,
        procurements: impl IntoIterator<Item = &'p Procurement>,
    ) -> CrossReference<'_> {
        let winners: Vec<&str> = procurements
            .into_iter()
            .filter(|p| p.value as f64 > HIGH_VALUE)
            .map(|p| p.winner_company.as_str())
            .collect();
        debug!(winners = winners.len(), "cross-referencing politicians with procurements");

        let matching_companies = self
            .politicians
            .values()
            .filter_map(|politician| {
                let connections: Vec<&str> = politician
                    .economic_interests
                    .iter()
                    .chain(&politician.business_connections)
                    .map(String::as_str)
                    .filter(|c| winners.iter().any(|w| conflicts::is_company_match(c, w)))
                    .collect();
                if connections.is_empty() {
                    return None;
                }
                Some(PoliticianMatch {
                    politician: &politician.name,
                    party: &politician.party,
                    municipality: &politician.municipality,
                    connections,
                    risk_score: politician.risk_score,
                })
            })
            .collect();
        CrossReference { matching_companies }
    }

    pub fn report(&self) -> PoliticalReport<'_> {
        let cutoff = self.today - Duration::days(RECENT_DAYS);

        let mut party_distribution: IndexMap<&str, usize> = IndexMap::new();
        for politician in self.politicians.values() {
            *party_distribution.entry(politician.party.as_str()).or_default() += 1;
        }

        let mut high_risk_politicians = self.high_risk_politicians();
        high_risk_politicians.truncate(REPORT_TOP_N);

        let municipality_stats = MUNICIPALITIES
            .iter()
            .map(|&municipality| {
                let members = self.politicians_by_municipality(municipality);
                let avg_attendance = if members.is_empty() {
                    0.0
                } else {
                    members.iter().map(|p| p.attendance_rate).sum::<f64>() / members.len() as f64
                };
                let stats = MunicipalityStats {
                    politicians: members.len(),
                    decisions: self.decisions.iter().filter(|d| d.municipality == municipality).count(),
                    conflicts: self.conflicts.iter().filter(|c| c.municipality == municipality).count(),
                    avg_attendance,
                };
                (municipality, stats)
            })
            .collect();

        PoliticalReport {
            summary: ReportSummary {
                total_politicians: self.politicians.len(),
                recent_decisions: self.decisions.iter().filter(|d| d.date > cutoff).count(),
                active_conflicts: self.conflicts_by_level(None).len(),
                monitored_municipalities: MUNICIPALITIES.len(),
            },
            party_distribution,
            high_risk_politicians,
            municipality_stats,
            generated_at: Utc::now(),
        }
    }

    pub fn dashboard(&self) -> PoliticalDashboard {
        let report = self.report();
        PoliticalDashboard {
            total_politicians: report.summary.total_politicians,
            recent_decisions: report.summary.recent_decisions,
            active_conflicts: report.summary.active_conflicts,
            high_risk_politicians: report.high_risk_politicians.len(),
            monitored_municipalities: report.summary.monitored_municipalities,
        }
    }
}

fn pick(rng: &mut StdRng, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn generate_politicians(rng: &mut StdRng, today: NaiveDate) -> Vec<Politician> {
    let mut politicians = Vec::new();

    for &municipality in MUNICIPALITIES {
        for n in 1..=politician_quota(municipality) {
            let first = pick(rng, vocab::FIRST_NAMES);
            let last = pick(rng, vocab::LAST_NAMES);

            let mut economic_interests = Vec::new();
            if rng.gen_bool(0.25) {
                economic_interests.push(pick(rng, vocab::INTEREST_COMPANIES).to_string());
            }
            let mut business_connections = Vec::new();
            if rng.gen_bool(0.15) {
                business_connections.push(pick(rng, vocab::CONSULTING_COMPANIES).to_string());
            }

            let years_back: i32 = rng.gen_range(1..=8);
            let start_date = NaiveDate::from_ymd_opt(today.year() - years_back, 1, 1).unwrap_or(today);

            let committee_draws: u32 = rng.gen_range(1..=3);
            let mut committees: Vec<String> = Vec::new();
            for _ in 0..committee_draws {
                let committee = pick(rng, vocab::COMMITTEES);
                if !committees.iter().any(|c| c == committee) {
                    committees.push(committee.to_string());
                }
            }

            politicians.push(Politician {
                id: format!("{}_{}", municipality, n),
                name: format!("{} {}", first, last),
                party: pick(rng, vocab::PARTIES).to_string(),
                position: pick(rng, vocab::POSITIONS).to_string(),
                municipality: municipality.to_string(),
                phone: format!(
                    "{}-{}",
                    vocab::area_code(municipality),
                    rng.gen_range(100_000..1_000_000u32)
                ),
                email: format!(
                    "{}.{}@{}.se",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    municipality.to_lowercase()
                ),
                risk_score: conflicts::politician_risk_score(&economic_interests, &business_connections),
                economic_interests,
                attendance_rate: rng.gen::<f64>() * 0.3 + 0.7,
                business_connections,
                total_decisions: 0,
                conflict_count: 0,
                start_date,
                committees,
            });
        }
    }
    politicians
}

/// Decisions per municipality; bumps `total_decisions` on every participant
fn generate_decisions(rng: &mut StdRng, today: NaiveDate, politicians: &mut [Politician]) -> Vec<Decision> {
    let mut decisions = Vec::new();

    for &municipality in MUNICIPALITIES {
        let members: Vec<usize> = politicians
            .iter()
            .enumerate()
            .filter(|(_, p)| p.municipality == municipality)
            .map(|(i, _)| i)
            .collect();

        for n in 1..=decision_quota(municipality) {
            let decision_type = pick(rng, vocab::DECISION_TYPES);
            let is_procurement = decision_type == PROCUREMENT_DECISION;

            let mut order = members.clone();
            order.shuffle(rng);
            let seats = MAX_COMMITTEE_SIZE.min(order.len());
            let dropped: usize = rng.gen_range(0..3);
            let participant_count = seats.saturating_sub(dropped);
            let absent_count: usize = rng.gen_range(0..3);
            let (participants, rest) = order.split_at(participant_count);
            let absent = &rest[..absent_count.min(rest.len())];

            for &i in participants {
                politicians[i].total_decisions += 1;
            }

            let days_ago = rng.gen_range(0..DECISION_WINDOW_DAYS);
            decisions.push(Decision {
                id: format!("{}_decision_{}", municipality, n),
                title: format!("{} - {}", decision_type, pick(rng, vocab::decision_titles(decision_type))),
                date: today - Duration::days(days_ago),
                municipality: municipality.to_string(),
                voting_result: VotingResult::ALL[rng.gen_range(0..VotingResult::ALL.len())],
                participants: participants.iter().map(|&i| politicians[i].name.clone()).collect(),
                absent_members: absent.iter().map(|&i| politicians[i].name.clone()).collect(),
                economic_impact: rng.gen::<f64>() * 50_000_000.0 + 100_000.0,
                contract_value: if is_procurement {
                    rng.gen::<f64>() * 20_000_000.0 + 500_000.0
                } else {
                    0.0
                },
                winning_company: if is_procurement {
                    pick(rng, vocab::PROCUREMENT_WINNERS).to_string()
                } else {
                    String::new()
                },
                decision_type: decision_type.to_string(),
            });
        }
    }
    decisions
}
