//! Randomized population, company, contract and legal-event generator
//!
//! Generation order matters: people first, then companies with their roles,
//! the corporate groups, contracts and legal events. Risk scores are computed
//! last so they reflect the finished wiring.

use super::model::{Address, Company, Contract, LegalEvent, Person};
use super::store::{IntelResult, IntelStore};
use super::types::{ContractStatus, LegalEventStatus, LegalEventType, OrgNr, PersonId, Role};
use super::vocab;
use chrono::{Duration, NaiveDate, Utc};
use rand::prelude::*;
use tracing::{debug, info, warn};

/// Sizes and seed for a generated dataset
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub people: usize,
    pub companies: usize,
    pub contracts: usize,
    pub legal_events: usize,
    /// Number of parent draws when building corporate groups
    pub corporate_groups: usize,
    /// Fixed seed for reproducible data; `None` draws from entropy
    pub seed: Option<u64>,
    /// Date that "days ago" offsets count back from; `None` means today (UTC)
    pub reference_date: Option<NaiveDate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            people: 50,
            companies: 30,
            contracts: 100,
            legal_events: 20,
            corporate_groups: 5,
            seed: None,
            reference_date: None,
        }
    }
}

impl GeneratorConfig {
    /// Default sizes with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Builds an [`IntelStore`] from a [`GeneratorConfig`]
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
    today: NaiveDate,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let today = config.reference_date.unwrap_or_else(|| Utc::now().date_naive());
        Self { config, rng, today }
    }

    pub fn generate(mut self) -> IntelResult<IntelStore> {
        let mut store = IntelStore::new();

        self.generate_people(&mut store)?;
        self.generate_companies(&mut store)?;
        self.create_corporate_structures(&mut store)?;
        self.generate_contracts(&mut store)?;
        self.generate_legal_events(&mut store)?;
        store.refresh_risk_scores();

        info!(
            people = store.person_count(),
            companies = store.company_count(),
            contracts = store.contracts().len(),
            legal_events = store.legal_events().len(),
            "Generated company-intelligence dataset"
        );
        Ok(store)
    }

    fn generate_people(&mut self, store: &mut IntelStore) -> IntelResult<()> {
        for _ in 0..self.config.people {
            let name = format!(
                "{} {}",
                self.pick_str(vocab::FIRST_NAMES),
                self.pick_str(vocab::LAST_NAMES)
            );
            let mut id = self.person_id();
            while store.has_person(&id) {
                id = self.person_id();
            }
            let address = self.address();
            let risk_score = self.rng.gen::<f64>() * 10.0;

            store.insert_person(Person::new(id, name, address, risk_score))?;
        }
        Ok(())
    }

    fn generate_companies(&mut self, store: &mut IntelStore) -> IntelResult<()> {
        let people = store.person_ids();

        for _ in 0..self.config.companies {
            let mut org_nr = self.org_nr();
            while store.has_company(&org_nr) {
                org_nr = self.org_nr();
            }
            let business_area = self.pick_str(vocab::BUSINESS_AREAS);
            let legal_form = self.pick_str(vocab::LEGAL_FORMS);
            let name = format!("{} {} {}", business_area, self.pick_str(vocab::NAME_PARTS), legal_form);

            let company = Company {
                org_nr: org_nr.clone(),
                name,
                business_area: business_area.to_string(),
                registration_date: self.date(3650),
                address: self.address(),
                revenue: self.rng.gen_range(100_000..50_100_000),
                employees: self.rng.gen_range(1..=100),
                owners: Vec::new(),
                board_members: Vec::new(),
                ceo: None,
                subsidiaries: Vec::new(),
                parent_company: None,
                economic_health: self.rng.gen_range(1..=10),
                contracts: Vec::new(),
                risk_score: 0.0,
            };
            store.insert_company(company)?;

            if people.is_empty() {
                continue;
            }
            self.add_owners(store, &org_nr, &people)?;
            self.add_board_members(store, &org_nr, &people)?;
            self.add_ceo(store, &org_nr, &people)?;
        }

        if self.config.companies > 0 && people.is_empty() {
            warn!("No people generated; companies have no owners, board or CEO");
        }
        Ok(())
    }

    fn add_owners(&mut self, store: &mut IntelStore, org_nr: &OrgNr, people: &[PersonId]) -> IntelResult<()> {
        let count: u32 = self.rng.gen_range(1..=3);
        let max_share = 100.0 / f64::from(count);
        for _ in 0..count {
            let Some(person_id) = people.choose(&mut self.rng) else {
                break;
            };
            let ownership = self.rng.gen::<f64>() * max_share;
            store.link_owner(org_nr, person_id, ownership)?;
        }
        Ok(())
    }

    fn add_board_members(
        &mut self,
        store: &mut IntelStore,
        org_nr: &OrgNr,
        people: &[PersonId],
    ) -> IntelResult<()> {
        let draws: u32 = self.rng.gen_range(2..=5);
        for i in 0..draws {
            let Some(person_id) = people.choose(&mut self.rng) else {
                break;
            };
            let role = if i == 0 { Role::Chair } else { Role::BoardMember };
            let appointed = self.date(1095);
            store.link_board_member(org_nr, person_id, role, appointed)?;
        }
        Ok(())
    }

    fn add_ceo(&mut self, store: &mut IntelStore, org_nr: &OrgNr, people: &[PersonId]) -> IntelResult<()> {
        if let Some(person_id) = people.choose(&mut self.rng) {
            let appointed = self.date(1825);
            store.link_ceo(org_nr, person_id, appointed)?;
        }
        Ok(())
    }

    fn create_corporate_structures(&mut self, store: &mut IntelStore) -> IntelResult<()> {
        let companies = store.org_nrs();
        if companies.is_empty() {
            return Ok(());
        }

        let mut attached = 0;
        for _ in 0..self.config.corporate_groups {
            let Some(parent) = companies.choose(&mut self.rng) else {
                break;
            };
            let candidates: u32 = self.rng.gen_range(1..=3);
            for _ in 0..candidates {
                let Some(child) = companies.choose(&mut self.rng) else {
                    break;
                };
                if store.attach_subsidiary(parent, child)? {
                    attached += 1;
                }
            }
        }
        debug!(attached, "Built corporate structures");
        Ok(())
    }

    fn generate_contracts(&mut self, store: &mut IntelStore) -> IntelResult<()> {
        let companies = store.org_nrs();
        if companies.is_empty() {
            return Ok(());
        }

        for i in 0..self.config.contracts {
            let Some(org_nr) = companies.choose(&mut self.rng) else {
                break;
            };
            let contract = Contract {
                id: format!("contract_{}", i),
                company_org_nr: org_nr.clone(),
                municipality: self.pick_str(vocab::MUNICIPALITIES).to_string(),
                contract_type: self.pick_str(vocab::CONTRACT_TYPES).to_string(),
                value: self.rng.gen_range(50_000..10_050_000),
                start_date: self.date(1095),
                end_date: None,
                title: self.pick_str(vocab::CONTRACT_TITLES).to_string(),
                status: self.pick(&ContractStatus::ALL),
            };
            store.add_contract(contract)?;
        }
        Ok(())
    }

    fn generate_legal_events(&mut self, store: &mut IntelStore) -> IntelResult<()> {
        let companies = store.org_nrs();
        if companies.is_empty() {
            return Ok(());
        }

        for i in 0..self.config.legal_events {
            let Some(org_nr) = companies.choose(&mut self.rng) else {
                break;
            };
            let event = LegalEvent {
                id: format!("event_{}", i),
                company_org_nr: org_nr.clone(),
                event_type: self.pick(&LegalEventType::ALL),
                date: self.date(1825),
                description: self.pick_str(vocab::LEGAL_EVENT_DESCRIPTIONS).to_string(),
                severity: self.rng.gen_range(1..=5),
                status: self.pick(&LegalEventStatus::ALL),
            };
            store.add_legal_event(event)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Field generators
    // ------------------------------------------------------------------

    /// `19YYMMDD-NNNC`, birth years 1950-1999
    fn person_id(&mut self) -> PersonId {
        let year: u32 = self.rng.gen_range(50..100);
        let month: u32 = self.rng.gen_range(1..=12);
        let day: u32 = self.rng.gen_range(1..=28);
        let serial: u32 = self.rng.gen_range(1..=999);
        let check: u32 = self.rng.gen_range(0..10);
        PersonId::new(format!("19{:02}{:02}{:02}-{:03}{}", year, month, day, serial, check))
    }

    /// `55` followed by eight digits
    fn org_nr(&mut self) -> OrgNr {
        OrgNr::new(format!("55{:08}", self.rng.gen_range(0..100_000_000u32)))
    }

    /// A date between `max_days_ago - 1` days ago and today
    fn date(&mut self, max_days_ago: i64) -> NaiveDate {
        let days_ago = self.rng.gen_range(0..max_days_ago);
        self.today - Duration::days(days_ago)
    }

    fn address(&mut self) -> Address {
        let street = self.pick_str(vocab::STREETS);
        let number: u32 = self.rng.gen_range(1..=100);
        let city = self.pick_str(vocab::CITIES);
        let postal_code = format!(
            "{} {}",
            self.rng.gen_range(100..1000u32),
            self.rng.gen_range(10..100u32)
        );
        Address {
            street: format!("{} {}", street, number),
            city: city.to_string(),
            postal_code,
        }
    }

    fn pick_str(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Uniform draw from a non-empty constant table
    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }
}
