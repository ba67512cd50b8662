use crate::domain::FinanceProfile;
use crate::settings::CurrencySettings;

use super::{BudgetService, IncomeService, NetWorthService, NetWorthSummary};

/// Headline figures for the finance dashboard, in the display currency.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceOverview {
    pub currency: String,
    pub net_worth: NetWorthSummary,
    pub budget_total: f64,
    pub income_total: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Combines the derived metrics of every finance record, converted into
    /// the active display currency.
    pub fn overview(profile: &FinanceProfile, settings: &CurrencySettings) -> FinanceOverview {
        FinanceOverview {
            currency: settings.currency().to_string(),
            net_worth: NetWorthService::display_summary(profile, settings),
            budget_total: BudgetService::display_total(profile, settings),
            income_total: IncomeService::display_total(profile, settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetKind, BudgetCategory, IncomeKind};
    use crate::storage::MemoryStore;

    #[test]
    fn overview_reports_the_active_currency() {
        let mut settings = CurrencySettings::new(Box::new(MemoryStore::new()));
        settings.set_currency("EUR").expect("set EUR");
        let mut profile = FinanceProfile::new();
        NetWorthService::add_asset(&mut profile, &settings, "Savings", AssetKind::Bank, 100.0)
            .expect("add asset");
        BudgetService::add_item(&mut profile, &settings, "Rent", BudgetCategory::Housing, 50.0)
            .expect("add budget line");
        IncomeService::add_entry(&mut profile, &settings, "Job", IncomeKind::Salary, 200.0)
            .expect("add income");

        let overview = SummaryService::overview(&profile, &settings);
        assert_eq!(overview.currency, "EUR");
        assert!((overview.net_worth.total_assets - 100.0).abs() < 1e-9);
        assert!((overview.budget_total - 50.0).abs() < 1e-9);
        assert!((overview.income_total - 200.0).abs() < 1e-9);
    }
}
