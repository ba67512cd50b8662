use uuid::Uuid;

use crate::domain::{FinanceProfile, IncomeEntry, IncomeKind};
use crate::settings::CurrencySettings;

use super::{ensure_unique_name, validate_amount, ServiceError, ServiceResult};

pub struct IncomeService;

impl IncomeService {
    /// Records an income stream entered in the active display currency.
    pub fn add_entry(
        profile: &mut FinanceProfile,
        settings: &CurrencySettings,
        source: impl Into<String>,
        kind: IncomeKind,
        amount: f64,
    ) -> ServiceResult<Uuid> {
        let source = source.into();
        validate_amount(amount)?;
        ensure_unique_name(
            profile
                .income_entries
                .iter()
                .map(|entry| entry.source.as_str()),
            &source,
            "Income source",
        )?;
        let entry = IncomeEntry::new(source, kind, settings.convert_to_usd(amount));
        let id = entry.id;
        profile.income_entries.push(entry);
        profile.touch();
        Ok(id)
    }

    pub fn remove_entry(profile: &mut FinanceProfile, id: Uuid) -> ServiceResult<()> {
        let before = profile.income_entries.len();
        profile.income_entries.retain(|entry| entry.id != id);
        if profile.income_entries.len() == before {
            return Err(ServiceError::Invalid("Income entry not found".into()));
        }
        profile.touch();
        Ok(())
    }

    /// Canonical USD total across every income stream.
    pub fn total_usd(profile: &FinanceProfile) -> f64 {
        profile
            .income_entries
            .iter()
            .map(|entry| entry.amount_usd)
            .sum()
    }

    /// Income total converted into the active display currency.
    pub fn display_total(profile: &FinanceProfile, settings: &CurrencySettings) -> f64 {
        settings.convert_from_usd(Self::total_usd(profile))
    }
}
