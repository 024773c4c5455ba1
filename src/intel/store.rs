//! In-memory company-intelligence store
//!
//! Holds the person, company, contract and legal-event tables and keeps the
//! denormalized relationship lists on both sides in step. Lookups by
//! identifier return `None`/empty on a miss; only wiring operations that
//! reference unknown records return an error.

use super::generator::{Generator, GeneratorConfig};
use super::model::{Affiliation, BoardMember, Ceo, Company, Contract, LegalEvent, Owner, Person};
use super::risk::{self, RiskAnalysis, RiskFactors};
use super::types::{ConnectionType, OrgNr, PersonId, RiskLevel, Role};
use super::views::{
    BiddingPattern, CompanyDetails, DashboardStats, NetworkConnection, PersonMatch,
    ResolvedAffiliation, ResolvedBoardMember, ResolvedCeo, ResolvedOwner, SharedPerson,
};
use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

/// Errors raised while wiring or validating the store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntelError {
    #[error("Company {0} not found")]
    CompanyNotFound(OrgNr),

    #[error("Person {0} not found")]
    PersonNotFound(PersonId),

    #[error("Company {0} already exists")]
    CompanyAlreadyExists(OrgNr),

    #[error("Person {0} already exists")]
    PersonAlreadyExists(PersonId),

    #[error("Affiliation of {person_id} as {role} in {org_nr} is not recorded on both sides")]
    AffiliationMismatch {
        person_id: PersonId,
        org_nr: OrgNr,
        role: Role,
    },

    #[error("Parent link between {parent} and {child} is not recorded on both sides")]
    ParentMismatch { parent: OrgNr, child: OrgNr },

    #[error("Contract {contract_id} is not listed on company {org_nr}")]
    DanglingContract { contract_id: String, org_nr: OrgNr },
}

pub type IntelResult<T> = Result<T, IntelError>;

/// Company-intelligence tables plus their read-only queries
///
/// Tables keep insertion order, so searches return records in generation order.
#[derive(Debug, Clone, Default)]
pub struct IntelStore {
    people: IndexMap<PersonId, Person>,
    companies: IndexMap<OrgNr, Company>,
    contracts: Vec<Contract>,
    legal_events: Vec<LegalEvent>,
}

impl IntelStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fully wired store from the given configuration
    pub fn generate(config: GeneratorConfig) -> IntelResult<Self> {
        Generator::new(config).generate()
    }

    // ------------------------------------------------------------------
    // Tables
    // ------------------------------------------------------------------

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn company(&self, org_nr: &OrgNr) -> Option<&Company> {
        self.companies.get(org_nr)
    }

    pub fn has_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    pub fn has_company(&self, org_nr: &OrgNr) -> bool {
        self.companies.contains_key(org_nr)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.values()
    }

    pub fn person_ids(&self) -> Vec<PersonId> {
        self.people.keys().cloned().collect()
    }

    pub fn org_nrs(&self) -> Vec<OrgNr> {
        self.companies.keys().cloned().collect()
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn legal_events(&self) -> &[LegalEvent] {
        &self.legal_events
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    // ------------------------------------------------------------------
    // Wiring
    // ------------------------------------------------------------------

    /// Add a person; its affiliation list must be empty or already mirrored
    pub fn insert_person(&mut self, person: Person) -> IntelResult<()> {
        if self.people.contains_key(&person.id) {
            return Err(IntelError::PersonAlreadyExists(person.id));
        }
        self.people.insert(person.id.clone(), person);
        Ok(())
    }

    /// Add a company; role lists are expected to be empty and filled via `link_*`
    pub fn insert_company(&mut self, company: Company) -> IntelResult<()> {
        if self.companies.contains_key(&company.org_nr) {
            return Err(IntelError::CompanyAlreadyExists(company.org_nr));
        }
        self.companies.insert(company.org_nr.clone(), company);
        Ok(())
    }

    /// Split borrow of one company and one person for two-sided updates
    fn pair_mut(
        &mut self,
        org_nr: &OrgNr,
        person_id: &PersonId,
    ) -> IntelResult<(&mut Company, &mut Person)> {
        let company = self
            .companies
            .get_mut(org_nr)
            .ok_or_else(|| IntelError::CompanyNotFound(org_nr.clone()))?;
        let person = self
            .people
            .get_mut(person_id)
            .ok_or_else(|| IntelError::PersonNotFound(person_id.clone()))?;
        Ok((company, person))
    }

    /// Record an ownership stake. The same person may own several stakes.
    pub fn link_owner(&mut self, org_nr: &OrgNr, person_id: &PersonId, ownership: f64) -> IntelResult<()> {
        let (company, person) = self.pair_mut(org_nr, person_id)?;
        company.owners.push(Owner {
            person_id: person_id.clone(),
            ownership,
            role: Role::Owner,
        });
        person.add_affiliation(
            Affiliation { org_nr: org_nr.clone(), role: Role::Owner, ownership: Some(ownership) },
            &company.name,
        );
        Ok(())
    }

    /// Record a board seat. Returns `false` and changes nothing when the
    /// person already sits on this board.
    pub fn link_board_member(
        &mut self,
        org_nr: &OrgNr,
        person_id: &PersonId,
        role: Role,
        appointed_date: NaiveDate,
    ) -> IntelResult<bool> {
        let (company, person) = self.pair_mut(org_nr, person_id)?;
        if company.board_members.iter().any(|m| &m.person_id == person_id) {
            return Ok(false);
        }
        company.board_members.push(BoardMember {
            person_id: person_id.clone(),
            role,
            appointed_date,
        });
        person.add_affiliation(
            Affiliation { org_nr: org_nr.clone(), role, ownership: None },
            &company.name,
        );
        Ok(true)
    }

    /// Appoint the CEO. A company has exactly one; the generator calls this once.
    pub fn link_ceo(&mut self, org_nr: &OrgNr, person_id: &PersonId, appointed_date: NaiveDate) -> IntelResult<()> {
        let (company, person) = self.pair_mut(org_nr, person_id)?;
        company.ceo = Some(Ceo {
            person_id: person_id.clone(),
            appointed_date,
        });
        person.add_affiliation(
            Affiliation { org_nr: org_nr.clone(), role: Role::Ceo, ownership: None },
            &company.name,
        );
        Ok(())
    }

    /// Make `child` a subsidiary of `parent`.
    ///
    /// Skipped (returns `false`) when the child is the parent itself or
    /// already has a parent. Cycles through deeper levels are not checked.
    pub fn attach_subsidiary(&mut self, parent: &OrgNr, child: &OrgNr) -> IntelResult<bool> {
        if !self.companies.contains_key(parent) {
            return Err(IntelError::CompanyNotFound(parent.clone()));
        }
        let child_company = self
            .companies
            .get_mut(child)
            .ok_or_else(|| IntelError::CompanyNotFound(child.clone()))?;
        if child == parent || child_company.parent_company.is_some() {
            return Ok(false);
        }
        child_company.parent_company = Some(parent.clone());

        if let Some(parent_company) = self.companies.get_mut(parent) {
            parent_company.subsidiaries.push(child.clone());
        }
        Ok(true)
    }

    /// Store a contract and back-reference it from its company
    pub fn add_contract(&mut self, contract: Contract) -> IntelResult<()> {
        let company = self
            .companies
            .get_mut(&contract.company_org_nr)
            .ok_or_else(|| IntelError::CompanyNotFound(contract.company_org_nr.clone()))?;
        company.contracts.push(contract.id.clone());
        self.contracts.push(contract);
        Ok(())
    }

    pub fn add_legal_event(&mut self, event: LegalEvent) -> IntelResult<()> {
        if !self.companies.contains_key(&event.company_org_nr) {
            return Err(IntelError::CompanyNotFound(event.company_org_nr.clone()));
        }
        self.legal_events.push(event);
        Ok(())
    }

    /// Recompute every company's risk score from its current wiring
    pub fn refresh_risk_scores(&mut self) {
        for company in self.companies.values_mut() {
            company.risk_score = RiskFactors::from_company(company).score();
        }
    }

    /// Verify both sides of every relationship agree
    pub fn check_integrity(&self) -> IntelResult<()> {
        let mismatch = |person_id: &PersonId, org_nr: &OrgNr, role: Role| IntelError::AffiliationMismatch {
            person_id: person_id.clone(),
            org_nr: org_nr.clone(),
            role,
        };

        // Same (person, company, role) multiplicity on both sides, people first
        for person in self.people.values() {
            for aff in &person.affiliations {
                let on_company = self
                    .companies
                    .get(&aff.org_nr)
                    .map_or(0, |c| c.role_count(&person.id, aff.role));
                if person.affiliation_count(&aff.org_nr, aff.role) != on_company {
                    return Err(mismatch(&person.id, &aff.org_nr, aff.role));
                }
            }
        }
        for company in self.companies.values() {
            for (person_id, role) in company_roles(company) {
                let on_person = self
                    .people
                    .get(person_id)
                    .map_or(0, |p| p.affiliation_count(&company.org_nr, role));
                if on_person != company.role_count(person_id, role) {
                    return Err(mismatch(person_id, &company.org_nr, role));
                }
            }
        }

        for company in self.companies.values() {
            if let Some(parent) = &company.parent_company {
                let listed = self
                    .companies
                    .get(parent)
                    .is_some_and(|p| p.subsidiaries.contains(&company.org_nr));
                if !listed {
                    return Err(IntelError::ParentMismatch {
                        parent: parent.clone(),
                        child: company.org_nr.clone(),
                    });
                }
            }
            for child in &company.subsidiaries {
                let points_back = self
                    .companies
                    .get(child)
                    .is_some_and(|c| c.parent_company.as_ref() == Some(&company.org_nr));
                if !points_back {
                    return Err(IntelError::ParentMismatch {
                        parent: company.org_nr.clone(),
                        child: child.clone(),
                    });
                }
            }
        }

        for contract in &self.contracts {
            let listed = self
                .companies
                .get(&contract.company_org_nr)
                .is_some_and(|c| c.contracts.contains(&contract.id));
            if !listed {
                return Err(IntelError::DanglingContract {
                    contract_id: contract.id.clone(),
                    org_nr: contract.company_org_nr.clone(),
                });
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Case-insensitive substring match on company name or org number.
    /// An empty query matches every company.
    pub fn search_company(&self, query: &str) -> Vec<&Company> {
        let needle = query.to_lowercase();
        self.companies
            .values()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.org_nr.as_str().contains(&needle))
            .collect()
    }

    /// Company with every referenced record resolved, or `None` if unknown
    pub fn company_details(&self, org_nr: &OrgNr) -> Option<CompanyDetails<'_>> {
        let company = self.companies.get(org_nr)?;

        Some(CompanyDetails {
            company,
            owners: company
                .owners
                .iter()
                .map(|owner| ResolvedOwner { owner, person: self.people.get(&owner.person_id) })
                .collect(),
            board_members: company
                .board_members
                .iter()
                .map(|member| ResolvedBoardMember { member, person: self.people.get(&member.person_id) })
                .collect(),
            ceo: company
                .ceo
                .as_ref()
                .map(|ceo| ResolvedCeo { ceo, person: self.people.get(&ceo.person_id) }),
            subsidiaries: company
                .subsidiaries
                .iter()
                .filter_map(|sub| self.companies.get(sub))
                .collect(),
            parent_company: company
                .parent_company
                .as_ref()
                .and_then(|parent| self.companies.get(parent)),
            contracts: self
                .contracts
                .iter()
                .filter(|c| &c.company_org_nr == org_nr)
                .collect(),
            legal_events: self
                .legal_events
                .iter()
                .filter(|e| &e.company_org_nr == org_nr)
                .collect(),
        })
    }

    /// Case-insensitive substring match on person name or id
    pub fn search_person(&self, query: &str) -> Vec<PersonMatch<'_>> {
        let needle = query.to_lowercase();
        self.people
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle) || p.id.as_str().contains(&needle))
            .map(|person| PersonMatch {
                person,
                companies: person
                    .affiliations
                    .iter()
                    .map(|affiliation| ResolvedAffiliation {
                        affiliation,
                        company: self.companies.get(&affiliation.org_nr),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Owners, board members and CEO of a company, in that order
    pub fn company_people(&self, org_nr: &OrgNr) -> Vec<SharedPerson> {
        self.companies
            .get(org_nr)
            .map(|company| {
                company_roles(company)
                    .into_iter()
                    .map(|(person_id, role)| SharedPerson { person_id: person_id.clone(), role })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// People of `a` who are also associated with `b`, labelled with their role on `a`
    pub fn shared_people(&self, a: &OrgNr, b: &OrgNr) -> Vec<SharedPerson> {
        let others: FxHashSet<PersonId> = self
            .company_people(b)
            .into_iter()
            .map(|p| p.person_id)
            .collect();

        self.company_people(a)
            .into_iter()
            .filter(|p| others.contains(&p.person_id))
            .collect()
    }

    /// Companies sharing at least one person with `org_nr`, in discovery order
    pub fn network_connections(&self, org_nr: &OrgNr) -> Vec<NetworkConnection<'_>> {
        let Some(company) = self.companies.get(org_nr) else {
            return Vec::new();
        };

        let people: IndexSet<&PersonId> = company_roles(company)
            .into_iter()
            .map(|(person_id, _)| person_id)
            .collect();

        let mut reachable: IndexSet<&OrgNr> = IndexSet::new();
        for person_id in people {
            let Some(person) = self.people.get(person_id) else {
                continue;
            };
            for affiliation in &person.affiliations {
                if &affiliation.org_nr != org_nr {
                    reachable.insert(&affiliation.org_nr);
                }
            }
        }

        reachable
            .into_iter()
            .filter_map(|other| {
                let connected = self.companies.get(other)?;
                Some(NetworkConnection {
                    company: connected,
                    connection_type: ConnectionType::SharedPerson,
                    shared_people: self.shared_people(org_nr, other),
                })
            })
            .collect()
    }

    /// Bidders in `municipality` that are connected to other bidders there
    pub fn competitor_bidding(&self, municipality: &str) -> Vec<BiddingPattern<'_>> {
        let bidders: IndexSet<&OrgNr> = self
            .contracts
            .iter()
            .filter(|c| c.municipality == municipality)
            .map(|c| &c.company_org_nr)
            .collect();
        debug!(municipality, bidders = bidders.len(), "analyzing competitor bidding");

        bidders
            .iter()
            .filter_map(|org_nr| {
                let company = self.companies.get(*org_nr)?;
                let suspicious: Vec<NetworkConnection<'_>> = self
                    .network_connections(org_nr)
                    .into_iter()
                    .filter(|conn| bidders.contains(&conn.company.org_nr))
                    .collect();
                if suspicious.is_empty() {
                    return None;
                }
                let risk_level = if suspicious.len() > 2 {
                    RiskLevel::High
                } else {
                    RiskLevel::Medium
                };
                Some(BiddingPattern {
                    company,
                    suspicious_connections: suspicious,
                    risk_level,
                })
            })
            .collect()
    }

    /// Top-risk companies and people plus a company risk histogram
    pub fn risk_analysis(&self) -> RiskAnalysis<'_> {
        risk::analyze(self.companies.values(), self.people.values())
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_companies: self.companies.len(),
            total_people: self.people.len(),
            high_risk_companies: self.risk_analysis().high_risk_companies.len(),
            total_contracts: self.contracts.len(),
            legal_events: self.legal_events.len(),
        }
    }
}

/// Every (person, role) entry on a company: owners, board, then CEO
fn company_roles(company: &Company) -> Vec<(&PersonId, Role)> {
    let mut roles: Vec<(&PersonId, Role)> = Vec::with_capacity(
        company.owners.len() + company.board_members.len() + 1,
    );
    roles.extend(company.owners.iter().map(|o| (&o.person_id, Role::Owner)));
    roles.extend(company.board_members.iter().map(|m| (&m.person_id, m.role)));
    if let Some(ceo) = &company.ceo {
        roles.push((&ceo.person_id, Role::Ceo));
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::model::Address;
    use crate::intel::types::{ContractStatus, LegalEventStatus, LegalEventType};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn address() -> Address {
        Address {
            street: "Storgatan 1".to_string(),
            city: "Stockholm".to_string(),
            postal_code: "111 22".to_string(),
        }
    }

    fn person(id: &str, name: &str, risk: f64) -> Person {
        Person::new(PersonId::new(id), name, address(), risk)
    }

    fn company(org_nr: &str, name: &str) -> Company {
        Company {
            org_nr: OrgNr::new(org_nr),
            name: name.to_string(),
            business_area: "Transport".to_string(),
            registration_date: date(),
            address: address(),
            revenue: 1_000_000,
            employees: 10,
            owners: Vec::new(),
            board_members: Vec::new(),
            ceo: None,
            subsidiaries: Vec::new(),
            parent_company: None,
            economic_health: 7,
            contracts: Vec::new(),
            risk_score: 0.0,
        }
    }

    fn contract(id: &str, org_nr: &str, municipality: &str) -> Contract {
        Contract {
            id: id.to_string(),
            company_org_nr: OrgNr::new(org_nr),
            municipality: municipality.to_string(),
            contract_type: "Transport".to_string(),
            value: 100_000,
            start_date: date(),
            end_date: None,
            title: "Transport och logistik".to_string(),
            status: ContractStatus::Active,
        }
    }

    fn two_company_store() -> IntelStore {
        let mut store = IntelStore::new();
        store.insert_person(person("19700101-0011", "Anna Nilsson", 8.0)).unwrap();
        store.insert_person(person("19800101-0022", "Erik Olsson", 1.0)).unwrap();
        store.insert_company(company("5500000001", "Nord Transport AB")).unwrap();
        store.insert_company(company("5500000002", "Syd Bygg AB")).unwrap();
        store
    }

    #[test]
    fn test_link_writes_both_sides() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let p = PersonId::new("19700101-0011");

        store.link_owner(&a, &p, 40.0).unwrap();
        store.link_ceo(&a, &p, date()).unwrap();

        let c = store.company(&a).unwrap();
        assert_eq!(c.owners.len(), 1);
        assert_eq!(c.ceo.as_ref().unwrap().person_id, p);

        let person = store.person(&p).unwrap();
        assert_eq!(person.affiliations.len(), 2);
        assert_eq!(person.roles[1], "VD för Nord Transport AB");
        assert!(store.check_integrity().is_ok());
    }

    #[test]
    fn test_link_unknown_records() {
        let mut store = two_company_store();
        let err = store
            .link_owner(&OrgNr::new("5599999999"), &PersonId::new("19700101-0011"), 10.0)
            .unwrap_err();
        assert_eq!(err, IntelError::CompanyNotFound(OrgNr::new("5599999999")));

        let err = store
            .link_ceo(&OrgNr::new("5500000001"), &PersonId::new("nobody"), date())
            .unwrap_err();
        assert_eq!(err, IntelError::PersonNotFound(PersonId::new("nobody")));
    }

    #[test]
    fn test_duplicate_board_member_skipped() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let p = PersonId::new("19700101-0011");

        assert!(store.link_board_member(&a, &p, Role::Chair, date()).unwrap());
        assert!(!store.link_board_member(&a, &p, Role::BoardMember, date()).unwrap());

        assert_eq!(store.company(&a).unwrap().board_members.len(), 1);
        assert_eq!(store.person(&p).unwrap().affiliations.len(), 1);
    }

    #[test]
    fn test_attach_subsidiary_rules() {
        let mut store = two_company_store();
        store.insert_company(company("5500000003", "Väst AB")).unwrap();
        let a = OrgNr::new("5500000001");
        let b = OrgNr::new("5500000002");
        let c = OrgNr::new("5500000003");

        assert!(!store.attach_subsidiary(&a, &a).unwrap());
        assert!(store.attach_subsidiary(&a, &b).unwrap());
        assert!(!store.attach_subsidiary(&c, &b).unwrap());

        assert_eq!(store.company(&a).unwrap().subsidiaries, vec![b.clone()]);
        assert_eq!(store.company(&b).unwrap().parent_company, Some(a));
        assert!(store.company(&c).unwrap().subsidiaries.is_empty());
        assert!(store.check_integrity().is_ok());
    }

    #[test]
    fn test_integrity_detects_one_sided_link() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let p = PersonId::new("19700101-0011");
        store.companies.get_mut(&a).unwrap().owners.push(Owner {
            person_id: p.clone(),
            ownership: 10.0,
            role: Role::Owner,
        });

        assert_eq!(
            store.check_integrity(),
            Err(IntelError::AffiliationMismatch { person_id: p, org_nr: a, role: Role::Owner })
        );
    }

    #[test]
    fn test_contract_back_reference() {
        let mut store = two_company_store();
        store.add_contract(contract("contract_0", "5500000001", "Stockholm")).unwrap();

        let c = store.company(&OrgNr::new("5500000001")).unwrap();
        assert_eq!(c.contracts, vec!["contract_0".to_string()]);
        assert!(store.add_contract(contract("contract_1", "5599999999", "Malmö")).is_err());
        assert_eq!(store.contracts().len(), 1);
    }

    #[test]
    fn test_search_company() {
        let store = two_company_store();
        assert_eq!(store.search_company("").len(), 2);
        assert_eq!(store.search_company("nord")[0].name, "Nord Transport AB");
        assert_eq!(store.search_company("0002").len(), 1);
        assert!(store.search_company("finns inte").is_empty());
    }

    #[test]
    fn test_company_details() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let b = OrgNr::new("5500000002");
        let p = PersonId::new("19700101-0011");
        store.link_ceo(&a, &p, date()).unwrap();
        store.attach_subsidiary(&a, &b).unwrap();
        store.add_contract(contract("contract_0", "5500000001", "Uppsala")).unwrap();
        store
            .add_legal_event(LegalEvent {
                id: "event_0".to_string(),
                company_org_nr: a.clone(),
                event_type: LegalEventType::TaxDebt,
                date: date(),
                description: "Skatteskuld hos Kronofogden".to_string(),
                severity: 3,
                status: LegalEventStatus::Active,
            })
            .unwrap();

        let details = store.company_details(&a).unwrap();
        assert_eq!(details.ceo.unwrap().person.unwrap().name, "Anna Nilsson");
        assert_eq!(details.subsidiaries[0].org_nr, b);
        assert!(details.parent_company.is_none());
        assert_eq!(details.contracts.len(), 1);
        assert_eq!(details.legal_events.len(), 1);

        let child = store.company_details(&b).unwrap();
        assert_eq!(child.parent_company.unwrap().org_nr, a);
        assert!(store.company_details(&OrgNr::new("5599999999")).is_none());
    }

    #[test]
    fn test_search_person_resolves_companies() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        store.link_owner(&a, &PersonId::new("19800101-0022"), 50.0).unwrap();

        let hits = store.search_person("ERIK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].companies[0].company.unwrap().org_nr, a);
        assert_eq!(store.search_person("19700101").len(), 1);
    }

    #[test]
    fn test_person_match_json_replaces_companies() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        store.link_owner(&a, &PersonId::new("19800101-0022"), 50.0).unwrap();

        let json = serde_json::to_value(&store.search_person("Erik")[0]).unwrap();
        assert!(json.get("person").is_none());
        assert_eq!(json["id"], "19800101-0022");
        assert_eq!(json["riskScore"], 1.0);
        let companies = json["companies"].as_array().unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0]["orgNr"], "5500000001");
        assert_eq!(companies[0]["company"]["name"], "Nord Transport AB");
    }

    #[test]
    fn test_company_details_json_replaces_references() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let b = OrgNr::new("5500000002");
        store.link_ceo(&a, &PersonId::new("19700101-0011"), date()).unwrap();
        store.attach_subsidiary(&a, &b).unwrap();
        store.add_contract(contract("contract_0", "5500000001", "Uppsala")).unwrap();

        let json = serde_json::to_value(store.company_details(&a).unwrap()).unwrap();
        assert!(json.get("company").is_none());
        assert_eq!(json["orgNr"], "5500000001");
        assert_eq!(json["ceo"]["personId"], "19700101-0011");
        assert_eq!(json["ceo"]["person"]["name"], "Anna Nilsson");
        assert_eq!(json["subsidiaries"][0]["name"], "Syd Bygg AB");
        assert_eq!(json["contracts"][0]["id"], "contract_0");
        assert!(json["parentCompany"].is_null());
        assert_eq!(json["legalEvents"], serde_json::json!([]));
    }

    #[test]
    fn test_network_connections_through_ceo_and_board() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let b = OrgNr::new("5500000002");
        let p = PersonId::new("19700101-0011");
        store.link_ceo(&a, &p, date()).unwrap();
        store.link_board_member(&b, &p, Role::BoardMember, date()).unwrap();

        let conns = store.network_connections(&a);
        assert_eq!(conns.len(), 1);
        assert_eq!(conns[0].company.org_nr, b);
        assert_eq!(conns[0].connection_type, ConnectionType::SharedPerson);
        assert_eq!(
            conns[0].shared_people,
            vec![SharedPerson { person_id: p.clone(), role: Role::Ceo }]
        );

        let back = store.shared_people(&b, &a);
        assert_eq!(back, vec![SharedPerson { person_id: p, role: Role::BoardMember }]);
        assert!(store.network_connections(&OrgNr::new("5599999999")).is_empty());
    }

    #[test]
    fn test_competitor_bidding_levels() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let b = OrgNr::new("5500000002");
        let p = PersonId::new("19700101-0011");
        store.link_board_member(&a, &p, Role::Chair, date()).unwrap();
        store.link_board_member(&b, &p, Role::BoardMember, date()).unwrap();
        store.add_contract(contract("contract_0", "5500000001", "Stockholm")).unwrap();
        store.add_contract(contract("contract_1", "5500000002", "Stockholm")).unwrap();

        let patterns = store.competitor_bidding("Stockholm");
        assert_eq!(patterns.len(), 2);
        assert!(patterns.iter().all(|p| p.risk_level == RiskLevel::Medium));
        assert!(store.competitor_bidding("Malmö").is_empty());
    }

    #[test]
    fn test_company_people_order() {
        let mut store = two_company_store();
        let a = OrgNr::new("5500000001");
        let anna = PersonId::new("19700101-0011");
        let erik = PersonId::new("19800101-0022");

        store.link_ceo(&a, &anna, date()).unwrap();
        store.link_board_member(&a, &erik, Role::Chair, date()).unwrap();
        store.link_owner(&a, &anna, 60.0).unwrap();

        let roles: Vec<Role> = store.company_people(&a).into_iter().map(|p| p.role).collect();
        assert_eq!(roles, vec![Role::Owner, Role::Chair, Role::Ceo]);
        assert!(store.company_people(&OrgNr::new("5599999999")).is_empty());
    }

    #[test]
    fn test_risk_analysis_thresholds() {
        let mut store = two_company_store();
        store.companies.get_mut(&OrgNr::new("5500000001")).unwrap().economic_health = 2;
        {
            let b = store.companies.get_mut(&OrgNr::new("5500000002")).unwrap();
            b.economic_health = 1;
            b.employees = 1;
            b.contracts = vec!["x".into(), "y".into(), "z".into()];
        }
        store.refresh_risk_scores();

        let report = store.risk_analysis();
        assert_eq!(report.high_risk_companies.len(), 0);
        assert_eq!(report.high_risk_people.len(), 1);
        assert_eq!(report.risk_statistics.low, 1);
        assert_eq!(report.risk_statistics.medium, 1);
        assert_eq!(store.dashboard_stats().total_people, 2);
    }
}
