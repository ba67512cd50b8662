use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{budget::BudgetItem, income::IncomeEntry, net_worth::{AssetEntry, LiabilityEntry}};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Single-user finance document holding every persisted record.
///
/// Every amount stored here is canonical USD; conversion to and from the
/// user's display currency happens in the service layer on the way in and
/// out of this document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceProfile {
    pub id: Uuid,
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
    #[serde(default)]
    pub liabilities: Vec<LiabilityEntry>,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    #[serde(default)]
    pub income_entries: Vec<IncomeEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "FinanceProfile::schema_version_default")]
    pub schema_version: u8,
}

impl FinanceProfile {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            assets: Vec::new(),
            liabilities: Vec::new(),
            budget_items: Vec::new(),
            income_entries: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    /// Marks the document as modified.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn asset(&self, id: Uuid) -> Option<&AssetEntry> {
        self.assets.iter().find(|entry| entry.id == id)
    }

    pub fn liability(&self, id: Uuid) -> Option<&LiabilityEntry> {
        self.liabilities.iter().find(|entry| entry.id == id)
    }

    pub fn budget_item(&self, id: Uuid) -> Option<&BudgetItem> {
        self.budget_items.iter().find(|entry| entry.id == id)
    }

    pub fn income_entry(&self, id: Uuid) -> Option<&IncomeEntry> {
        self.income_entries.iter().find(|entry| entry.id == id)
    }
}

impl Default for FinanceProfile {
    fn default() -> Self {
        Self::new()
    }
}
