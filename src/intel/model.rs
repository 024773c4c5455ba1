//! Typed records for people, companies, contracts and legal events
//!
//! Relationships are denormalized: a [`Person`] lists its affiliations and a
//! [`Company`] lists its owners, board and CEO. Both sides are written
//! together by the generator.

use super::types::{
    ContractStatus, LegalEventStatus, LegalEventType, OrgNr, PersonId, Role,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Postal address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// A person's link to a company, as seen from the person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliation {
    pub org_nr: OrgNr,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<f64>,
}

/// A generated person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Free-text descriptions such as "Ägare i Nord AB"
    pub roles: Vec<String>,
    /// Serialized as `companies` to match the portal's payloads
    #[serde(rename = "companies")]
    pub affiliations: Vec<Affiliation>,
    pub addresses: Vec<Address>,
    pub risk_score: f64,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, address: Address, risk_score: f64) -> Self {
        Self {
            id,
            name: name.into(),
            roles: Vec::new(),
            affiliations: Vec::new(),
            addresses: vec![address],
            risk_score,
        }
    }

    /// Record a link to a company together with its role description
    pub fn add_affiliation(&mut self, affiliation: Affiliation, company_name: &str) {
        self.roles.push(affiliation.role.describe(company_name));
        self.affiliations.push(affiliation);
    }

    /// Number of affiliations with this company in this role
    pub fn affiliation_count(&self, org_nr: &OrgNr, role: Role) -> usize {
        self.affiliations
            .iter()
            .filter(|a| &a.org_nr == org_nr && a.role == role)
            .count()
    }
}

/// Ownership stake held by a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub person_id: PersonId,
    /// Percentage; stakes of one company are drawn independently
    pub ownership: f64,
    pub role: Role,
}

/// Board seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    pub person_id: PersonId,
    pub role: Role,
    pub appointed_date: NaiveDate,
}

/// Chief executive appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ceo {
    pub person_id: PersonId,
    pub appointed_date: NaiveDate,
}

/// A generated company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub org_nr: OrgNr,
    pub name: String,
    pub business_area: String,
    pub registration_date: NaiveDate,
    pub address: Address,
    pub revenue: u64,
    pub employees: u32,
    pub owners: Vec<Owner>,
    pub board_members: Vec<BoardMember>,
    pub ceo: Option<Ceo>,
    pub subsidiaries: Vec<OrgNr>,
    pub parent_company: Option<OrgNr>,
    /// 1 (poor) to 10 (healthy)
    pub economic_health: u8,
    /// Ids of contracts awarded to this company
    pub contracts: Vec<String>,
    pub risk_score: f64,
}

impl Company {
    /// Number of role entries the person holds here (an owner may be drawn twice)
    pub fn role_count(&self, person_id: &PersonId, role: Role) -> usize {
        match role {
            Role::Owner => self.owners.iter().filter(|o| &o.person_id == person_id).count(),
            Role::Chair | Role::BoardMember => self
                .board_members
                .iter()
                .filter(|m| &m.person_id == person_id && m.role == role)
                .count(),
            Role::Ceo => usize::from(self.ceo.as_ref().is_some_and(|c| &c.person_id == person_id)),
        }
    }
}

/// Municipal contract awarded to a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub company_org_nr: OrgNr,
    pub municipality: String,
    pub contract_type: String,
    pub value: u64,
    pub start_date: NaiveDate,
    /// Always open-ended in generated data
    pub end_date: Option<NaiveDate>,
    pub title: String,
    pub status: ContractStatus,
}

/// Legal or credit event registered against a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalEvent {
    pub id: String,
    pub company_org_nr: OrgNr,
    pub event_type: LegalEventType,
    pub date: NaiveDate,
    pub description: String,
    /// 1 (minor) to 5 (severe)
    pub severity: u8,
    pub status: LegalEventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "Storgatan 1".to_string(),
            city: "Stockholm".to_string(),
            postal_code: "111 22".to_string(),
        }
    }

    #[test]
    fn test_add_affiliation_records_description() {
        let mut person = Person::new(PersonId::new("19800101-0011"), "Anna Nilsson", address(), 2.0);
        person.add_affiliation(
            Affiliation { org_nr: OrgNr::new("5500000001"), role: Role::Ceo, ownership: None },
            "Nord AB",
        );

        assert_eq!(person.affiliations.len(), 1);
        assert_eq!(person.roles, vec!["VD för Nord AB".to_string()]);
        assert_eq!(person.affiliation_count(&OrgNr::new("5500000001"), Role::Ceo), 1);
        assert_eq!(person.affiliation_count(&OrgNr::new("5500000001"), Role::Owner), 0);
    }

    #[test]
    fn test_person_json_shape() {
        let mut person = Person::new(PersonId::new("19800101-0011"), "Anna Nilsson", address(), 2.0);
        person.add_affiliation(
            Affiliation { org_nr: OrgNr::new("5500000001"), role: Role::Owner, ownership: Some(12.5) },
            "Nord AB",
        );
        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json["companies"][0]["orgNr"], "5500000001");
        assert_eq!(json["companies"][0]["ownership"], 12.5);
        assert_eq!(json["addresses"][0]["postalCode"], "111 22");
        assert_eq!(json["riskScore"], 2.0);
    }
}
