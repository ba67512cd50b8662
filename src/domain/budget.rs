use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// A planned spending line for one category, valued canonically in USD.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetItem {
    pub id: Uuid,
    pub name: String,
    pub category: BudgetCategory,
    pub amount_usd: f64,
}

impl BudgetItem {
    pub fn new(name: impl Into<String>, category: BudgetCategory, amount_usd: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            amount_usd,
        }
    }
}

impl Identifiable for BudgetItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BudgetItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for BudgetItem {
    fn display_label(&self) -> String {
        format!("{} ({:?})", self.name, self.category)
    }
}

/// Enumerates the budgeting categories shown in the planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetCategory {
    Housing,
    Food,
    Transport,
    Health,
    Entertainment,
    Savings,
    Other,
}
