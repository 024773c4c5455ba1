//! Identifier newtypes and enumerated tags for the company-intelligence model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organization number of a company (e.g. "5512345678")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct OrgNr(String);

impl OrgNr {
    pub fn new(org_nr: impl Into<String>) -> Self {
        OrgNr(org_nr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgNr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrgNr {
    fn from(s: &str) -> Self {
        OrgNr(s.to_string())
    }
}

impl From<String> for OrgNr {
    fn from(s: String) -> Self {
        OrgNr(s)
    }
}

/// National-id-like identifier of a person (e.g. "19750412-1234")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        PersonId(s)
    }
}

/// Role a person holds in a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Ägare")]
    Owner,
    #[serde(rename = "Styrelseordförande")]
    Chair,
    #[serde(rename = "Styrelseledamot")]
    BoardMember,
    #[serde(rename = "VD")]
    Ceo,
}

impl Role {
    /// Display label used by the portal
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Ägare",
            Role::Chair => "Styrelseordförande",
            Role::BoardMember => "Styrelseledamot",
            Role::Ceo => "VD",
        }
    }

    /// Free-text role description stored on the person, e.g. "VD för Nord AB"
    pub fn describe(&self, company_name: &str) -> String {
        match self {
            Role::Ceo => format!("{} för {}", self.label(), company_name),
            _ => format!("{} i {}", self.label(), company_name),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contract lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    #[serde(rename = "Aktiv")]
    Active,
    #[serde(rename = "Avslutad")]
    Closed,
    #[serde(rename = "Uppsagd")]
    Terminated,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Active,
        ContractStatus::Closed,
        ContractStatus::Terminated,
    ];
}

/// Kind of legal event registered against a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalEventType {
    #[serde(rename = "Konkurs")]
    Bankruptcy,
    #[serde(rename = "Företagsrekonstruktion")]
    Reconstruction,
    #[serde(rename = "Betalningsanmärkning")]
    PaymentDefault,
    #[serde(rename = "Skatteskuld")]
    TaxDebt,
    #[serde(rename = "Rättegång")]
    Litigation,
}

impl LegalEventType {
    pub const ALL: [LegalEventType; 5] = [
        LegalEventType::Bankruptcy,
        LegalEventType::Reconstruction,
        LegalEventType::PaymentDefault,
        LegalEventType::TaxDebt,
        LegalEventType::Litigation,
    ];
}

/// Processing status of a legal event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalEventStatus {
    #[serde(rename = "Aktiv")]
    Active,
    #[serde(rename = "Avslutad")]
    Closed,
    #[serde(rename = "Under utredning")]
    UnderInvestigation,
}

impl LegalEventStatus {
    pub const ALL: [LegalEventStatus; 3] = [
        LegalEventStatus::Active,
        LegalEventStatus::Closed,
        LegalEventStatus::UnderInvestigation,
    ];
}

/// Severity flag attached to a competitor-bidding pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Hög")]
    High,
}

/// How two companies are connected in the network view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "Personkoppling")]
    SharedPerson,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_nr() {
        let org = OrgNr::new("5512345678");
        assert_eq!(org.as_str(), "5512345678");
        assert_eq!(format!("{}", org), "5512345678");

        let org2: OrgNr = "5500000001".into();
        assert_eq!(org2.as_str(), "5500000001");
    }

    #[test]
    fn test_person_id_serializes_as_plain_string() {
        let id = PersonId::new("19750412-1234");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"19750412-1234\"");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Ceo.describe("Nord AB"), "VD för Nord AB");
        assert_eq!(Role::Owner.describe("Nord AB"), "Ägare i Nord AB");
        assert_eq!(Role::Chair.describe("Nord AB"), "Styrelseordförande i Nord AB");
    }

    #[test]
    fn test_enum_wire_labels() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"Hög\"");
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"Ägare\"");
        assert_eq!(
            serde_json::to_string(&LegalEventStatus::UnderInvestigation).unwrap(),
            "\"Under utredning\""
        );
        assert_eq!(
            serde_json::to_string(&ConnectionType::SharedPerson).unwrap(),
            "\"Personkoppling\""
        );
    }
}
