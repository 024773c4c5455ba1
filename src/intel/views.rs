//! Read-side projections returned by [`IntelStore`](super::IntelStore) queries
//!
//! Views borrow from the store; referenced records are resolved inline so a
//! caller can serialize one value without further lookups.

use super::model::{BoardMember, Ceo, Company, Contract, LegalEvent, Owner, Person, Affiliation};
use super::types::{ConnectionType, PersonId, RiskLevel, Role};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOwner<'a> {
    #[serde(flatten)]
    pub owner: &'a Owner,
    pub person: Option<&'a Person>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBoardMember<'a> {
    #[serde(flatten)]
    pub member: &'a BoardMember,
    pub person: Option<&'a Person>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCeo<'a> {
    #[serde(flatten)]
    pub ceo: &'a Ceo,
    pub person: Option<&'a Person>,
}

/// Full company view with people, group structure, contracts and legal events
///
/// Serializes as the company record with every reference field replaced by
/// its resolved form.
#[derive(Debug, Clone)]
pub struct CompanyDetails<'a> {
    pub company: &'a Company,
    pub owners: Vec<ResolvedOwner<'a>>,
    pub board_members: Vec<ResolvedBoardMember<'a>>,
    pub ceo: Option<ResolvedCeo<'a>>,
    pub subsidiaries: Vec<&'a Company>,
    pub parent_company: Option<&'a Company>,
    pub contracts: Vec<&'a Contract>,
    pub legal_events: Vec<&'a LegalEvent>,
}

impl Serialize for CompanyDetails<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let c = self.company;
        let mut state = serializer.serialize_struct("CompanyDetails", 16)?;
        state.serialize_field("orgNr", &c.org_nr)?;
        state.serialize_field("name", &c.name)?;
        state.serialize_field("businessArea", &c.business_area)?;
        state.serialize_field("registrationDate", &c.registration_date)?;
        state.serialize_field("address", &c.address)?;
        state.serialize_field("revenue", &c.revenue)?;
        state.serialize_field("employees", &c.employees)?;
        state.serialize_field("owners", &self.owners)?;
        state.serialize_field("boardMembers", &self.board_members)?;
        state.serialize_field("ceo", &self.ceo)?;
        state.serialize_field("subsidiaries", &self.subsidiaries)?;
        state.serialize_field("parentCompany", &self.parent_company)?;
        state.serialize_field("economicHealth", &c.economic_health)?;
        state.serialize_field("contracts", &self.contracts)?;
        state.serialize_field("riskScore", &c.risk_score)?;
        state.serialize_field("legalEvents", &self.legal_events)?;
        state.end()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAffiliation<'a> {
    #[serde(flatten)]
    pub affiliation: &'a Affiliation,
    pub company: Option<&'a Company>,
}

/// Person search hit with each affiliation's company resolved
///
/// Serializes as the person record with `companies` holding the resolved
/// affiliations.
#[derive(Debug, Clone)]
pub struct PersonMatch<'a> {
    pub person: &'a Person,
    pub companies: Vec<ResolvedAffiliation<'a>>,
}

impl Serialize for PersonMatch<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let p = self.person;
        let mut state = serializer.serialize_struct("PersonMatch", 6)?;
        state.serialize_field("id", &p.id)?;
        state.serialize_field("name", &p.name)?;
        state.serialize_field("roles", &p.roles)?;
        state.serialize_field("companies", &self.companies)?;
        state.serialize_field("addresses", &p.addresses)?;
        state.serialize_field("riskScore", &p.risk_score)?;
        state.end()
    }
}

/// A person associated with a company, labelled with the role held there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPerson {
    pub person_id: PersonId,
    pub role: Role,
}

/// Another company reachable through shared people
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConnection<'a> {
    pub company: &'a Company,
    pub connection_type: ConnectionType,
    pub shared_people: Vec<SharedPerson>,
}

/// Bidder in a municipality that is connected to other bidders there
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiddingPattern<'a> {
    pub company: &'a Company,
    pub suspicious_connections: Vec<NetworkConnection<'a>>,
    pub risk_level: RiskLevel,
}

/// Headline counts for the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_companies: usize,
    pub total_people: usize,
    pub high_risk_companies: usize,
    pub total_contracts: usize,
    pub legal_events: usize,
}
