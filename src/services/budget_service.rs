use uuid::Uuid;

use crate::domain::{BudgetCategory, BudgetItem, FinanceProfile};
use crate::settings::CurrencySettings;

use super::{ensure_unique_name, validate_amount, ServiceError, ServiceResult};

pub struct BudgetService;

impl BudgetService {
    /// Records a budget line entered in the active display currency.
    pub fn add_item(
        profile: &mut FinanceProfile,
        settings: &CurrencySettings,
        name: impl Into<String>,
        category: BudgetCategory,
        amount: f64,
    ) -> ServiceResult<Uuid> {
        let name = name.into();
        validate_amount(amount)?;
        ensure_unique_name(
            profile.budget_items.iter().map(|item| item.name.as_str()),
            &name,
            "Budget item",
        )?;
        let item = BudgetItem::new(name, category, settings.convert_to_usd(amount));
        let id = item.id;
        profile.budget_items.push(item);
        profile.touch();
        Ok(id)
    }

    pub fn remove_item(profile: &mut FinanceProfile, id: Uuid) -> ServiceResult<()> {
        let before = profile.budget_items.len();
        profile.budget_items.retain(|item| item.id != id);
        if profile.budget_items.len() == before {
            return Err(ServiceError::Invalid("Budget item not found".into()));
        }
        profile.touch();
        Ok(())
    }

    /// Canonical USD total across every budget line.
    pub fn total_usd(profile: &FinanceProfile) -> f64 {
        profile.budget_items.iter().map(|item| item.amount_usd).sum()
    }

    /// Budget total converted into the active display currency.
    pub fn display_total(profile: &FinanceProfile, settings: &CurrencySettings) -> f64 {
        settings.convert_from_usd(Self::total_usd(profile))
    }
}
