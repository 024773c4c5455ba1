//! Simulated procurement feed with refresh and analysis cycles

use super::detector;
use super::model::{Anomaly, AnomalyType, FeedDashboard, FeedStats, Procurement, Source};
use crate::intel::MUNICIPALITIES;
use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use tracing::{debug, info};
use uuid::Uuid;

const WINNERS: &[&str] = &[
    "TechSolution AB",
    "BuildCorp Sweden",
    "ConsultPro Nordic",
    "DataSystem Solutions",
    "Infrastructure Sweden AB",
    "SmartCity Technologies",
    "Public Services Nordic",
    "DigitalFirst Sweden",
    "Construction Elite AB",
    "IT-Konsult Stockholm",
];

const CATEGORIES: &[&str] = &[
    "IT-tjänster",
    "Byggentreprenad",
    "Konsulttjänster",
    "Systemutveckling",
    "Infrastruktur",
    "Underhåll",
];

const TITLE_PREFIXES: &[&str] = &[
    "Upphandling av",
    "Ramavtal för",
    "Inköp av",
    "Leverans av",
    "Utveckling av",
    "Underhåll av",
];

const TITLE_SUBJECTS: &[&str] = &[
    "IT-system",
    "mjukvarulösningar",
    "konsulttjänster",
    "byggnadsarbeten",
    "infrastruktur",
    "digitala tjänster",
    "underhållstjänster",
    "teknisk support",
    "systemintegration",
];

/// Upper bound for anomaly look-back windows
const MAX_LOOKBACK_DAYS: i64 = 36_500;

/// Feed sizes used by the simulator
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// Procurements generated at construction
    pub initial_procurements: usize,
    /// Procurements added per `update_data` call
    pub batch_size: usize,
    /// Newest procurements kept after an update
    pub max_procurements: usize,
    /// Newest anomalies kept after an analysis run
    pub max_anomalies: usize,
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            initial_procurements: 50,
            batch_size: 5,
            max_procurements: 100,
            max_anomalies: 20,
            seed: None,
        }
    }
}

/// In-memory procurement feed and its detected anomalies
pub struct ProcurementSimulator {
    config: FeedConfig,
    rng: StdRng,
    procurements: Vec<Procurement>,
    anomalies: Vec<Anomaly>,
    next_id: u64,
}

impl ProcurementSimulator {
    pub fn new(config: FeedConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut sim = Self {
            config,
            rng,
            procurements: Vec::new(),
            anomalies: Vec::new(),
            next_id: 0,
        };

        let now = Utc::now();
        for _ in 0..sim.config.initial_procurements {
            let source = if sim.rng.gen_bool(0.5) { Source::Ted } else { Source::Visma };
            let days_ago = sim.rng.gen_range(0..365);
            let procurement = sim.procurement(now - Duration::days(days_ago), source);
            sim.procurements.push(procurement);
        }
        sim.anomalies = detector::detect(&sim.procurements, now);

        info!(
            procurements = sim.procurements.len(),
            anomalies = sim.anomalies.len(),
            "Generated procurement feed"
        );
        sim
    }

    /// The first `limit` procurements, newest additions first
    pub fn procurements(&self, limit: usize) -> Vec<&Procurement> {
        self.procurements.iter().take(limit).collect()
    }

    /// Anomalies detected within the last `days` days
    pub fn anomalies(&self, days: i64) -> Vec<&Anomaly> {
        let cutoff = Utc::now() - Duration::days(days.clamp(0, MAX_LOOKBACK_DAYS));
        self.anomalies.iter().filter(|a| a.detected_at > cutoff).collect()
    }

    pub fn municipalities(&self) -> &'static [&'static str] {
        MUNICIPALITIES
    }

    pub fn dashboard(&self) -> FeedDashboard<'_> {
        let procurements = self.procurements(50);
        let anomalies = self.anomalies(30);
        let stats = FeedStats {
            total_procurements: procurements.len(),
            total_anomalies: anomalies.len(),
            municipalities_monitored: MUNICIPALITIES.len(),
            high_risk_companies: anomalies.iter().filter(|a| a.score > 7.0).count(),
        };
        FeedDashboard {
            procurements,
            anomalies,
            municipalities: MUNICIPALITIES,
            stats,
        }
    }

    /// Pull in a batch of real-time procurements and re-run detection
    pub fn update_data(&mut self) {
        let now = Utc::now();
        for _ in 0..self.config.batch_size {
            let procurement = self.procurement(now, Source::RealTime);
            self.procurements.insert(0, procurement);
        }
        self.procurements.truncate(self.config.max_procurements);
        self.anomalies = detector::detect(&self.procurements, now);

        debug!(
            procurements = self.procurements.len(),
            anomalies = self.anomalies.len(),
            "Procurement feed updated"
        );
    }

    /// Record one pattern-analysis finding with a score in [5, 10)
    pub fn run_analysis(&mut self) -> Anomaly {
        let anomaly = Anomaly {
            id: format!("anom_analysis_{}", self.uuid()),
            company_name: self.pick(WINNERS).to_string(),
            company_org_nr: self.org_nr(),
            municipality: self.pick(MUNICIPALITIES).to_string(),
            anomaly_type: AnomalyType::SuspiciousPattern,
            score: self.rng.gen::<f64>() * 5.0 + 5.0,
            details: "Upptäckt genom avancerad analys av bidragsmönster".to_string(),
            evidence: vec![
                "Ovanligt beteende".to_string(),
                "Kräver vidare granskning".to_string(),
            ],
            detected_at: Utc::now(),
        };
        debug!(id = %anomaly.id, score = anomaly.score, "Analysis flagged pattern");

        self.anomalies.insert(0, anomaly.clone());
        self.anomalies.truncate(self.config.max_anomalies);
        anomaly
    }

    fn procurement(&mut self, date: DateTime<Utc>, source: Source) -> Procurement {
        let id = match source {
            Source::RealTime => format!("proc_new_{}", self.next_id),
            _ => format!("proc_{}", self.next_id),
        };
        self.next_id += 1;

        Procurement {
            id,
            title: format!("{} {}", self.pick(TITLE_PREFIXES), self.pick(TITLE_SUBJECTS)),
            municipality: self.pick(MUNICIPALITIES).to_string(),
            value: self.rng.gen_range(50_000..10_000_000),
            date,
            winner_company: self.pick(WINNERS).to_string(),
            winner_org_nr: self.org_nr(),
            category: self.pick(CATEGORIES).to_string(),
            source,
        }
    }

    fn org_nr(&mut self) -> String {
        format!("55{:08}", self.rng.gen_range(0..100_000_000u32))
    }

    fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }
}
