use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// A single asset holding.
///
/// `amount_usd` is canonical USD; amounts entered in another currency are
/// converted before they reach this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetEntry {
    pub id: Uuid,
    pub name: String,
    pub kind: AssetKind,
    pub amount_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssetEntry {
    pub fn new(name: impl Into<String>, kind: AssetKind, amount_usd: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            amount_usd,
            notes: None,
        }
    }
}

impl Identifiable for AssetEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for AssetEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for AssetEntry {
    fn display_label(&self) -> String {
        format!("{} ({:?})", self.name, self.kind)
    }
}

/// Enumerates the supported asset classifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetKind {
    Cash,
    Bank,
    Investment,
    Property,
    Vehicle,
    Other,
}

/// An outstanding obligation, valued canonically in USD.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiabilityEntry {
    pub id: Uuid,
    pub name: String,
    pub kind: LiabilityKind,
    pub amount_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LiabilityEntry {
    pub fn new(name: impl Into<String>, kind: LiabilityKind, amount_usd: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            amount_usd,
            notes: None,
        }
    }
}

impl Identifiable for LiabilityEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for LiabilityEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for LiabilityEntry {
    fn display_label(&self) -> String {
        format!("{} ({:?})", self.name, self.kind)
    }
}

/// Enumerates the supported liability classifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum LiabilityKind {
    CreditCard,
    Loan,
    Mortgage,
    Other,
}
