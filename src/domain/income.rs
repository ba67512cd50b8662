use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// A recurring income stream, valued canonically in USD.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeEntry {
    pub id: Uuid,
    pub source: String,
    pub kind: IncomeKind,
    pub amount_usd: f64,
}

impl IncomeEntry {
    pub fn new(source: impl Into<String>, kind: IncomeKind, amount_usd: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            kind,
            amount_usd,
        }
    }
}

impl Identifiable for IncomeEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for IncomeEntry {
    fn name(&self) -> &str {
        &self.source
    }
}

impl Displayable for IncomeEntry {
    fn display_label(&self) -> String {
        format!("{} ({:?})", self.source, self.kind)
    }
}

/// Enumerates the supported income classifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncomeKind {
    Salary,
    Freelance,
    Investment,
    Passive,
    Other,
}
