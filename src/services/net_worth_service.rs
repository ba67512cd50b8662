use uuid::Uuid;

use crate::domain::{AssetEntry, AssetKind, FinanceProfile, LiabilityEntry, LiabilityKind};
use crate::settings::CurrencySettings;

use super::{ensure_unique_name, validate_amount, ServiceError, ServiceResult};

/// Totals derived from the profile's asset and liability entries.
///
/// The currency of the figures depends on which constructor produced them:
/// [`NetWorthService::summary`] reports canonical USD,
/// [`NetWorthService::display_summary`] the active display currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetWorthSummary {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
}

pub struct NetWorthService;

impl NetWorthService {
    /// Records an asset entered in the active display currency.
    pub fn add_asset(
        profile: &mut FinanceProfile,
        settings: &CurrencySettings,
        name: impl Into<String>,
        kind: AssetKind,
        amount: f64,
    ) -> ServiceResult<Uuid> {
        let name = name.into();
        validate_amount(amount)?;
        ensure_unique_name(
            profile.assets.iter().map(|entry| entry.name.as_str()),
            &name,
            "Asset",
        )?;
        let entry = AssetEntry::new(name, kind, settings.convert_to_usd(amount));
        let id = entry.id;
        profile.assets.push(entry);
        profile.touch();
        Ok(id)
    }

    /// Records a liability entered in the active display currency.
    pub fn add_liability(
        profile: &mut FinanceProfile,
        settings: &CurrencySettings,
        name: impl Into<String>,
        kind: LiabilityKind,
        amount: f64,
    ) -> ServiceResult<Uuid> {
        let name = name.into();
        validate_amount(amount)?;
        ensure_unique_name(
            profile.liabilities.iter().map(|entry| entry.name.as_str()),
            &name,
            "Liability",
        )?;
        let entry = LiabilityEntry::new(name, kind, settings.convert_to_usd(amount));
        let id = entry.id;
        profile.liabilities.push(entry);
        profile.touch();
        Ok(id)
    }

    pub fn remove_asset(profile: &mut FinanceProfile, id: Uuid) -> ServiceResult<()> {
        let before = profile.assets.len();
        profile.assets.retain(|entry| entry.id != id);
        if profile.assets.len() == before {
            return Err(ServiceError::Invalid("Asset not found".into()));
        }
        profile.touch();
        Ok(())
    }

    pub fn remove_liability(profile: &mut FinanceProfile, id: Uuid) -> ServiceResult<()> {
        let before = profile.liabilities.len();
        profile.liabilities.retain(|entry| entry.id != id);
        if profile.liabilities.len() == before {
            return Err(ServiceError::Invalid("Liability not found".into()));
        }
        profile.touch();
        Ok(())
    }

    /// Canonical USD totals straight from the stored records.
    pub fn summary(profile: &FinanceProfile) -> NetWorthSummary {
        let total_assets: f64 = profile.assets.iter().map(|entry| entry.amount_usd).sum();
        let total_liabilities: f64 = profile
            .liabilities
            .iter()
            .map(|entry| entry.amount_usd)
            .sum();
        NetWorthSummary {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
        }
    }

    /// Totals converted into the active display currency.
    pub fn display_summary(
        profile: &FinanceProfile,
        settings: &CurrencySettings,
    ) -> NetWorthSummary {
        let usd = Self::summary(profile);
        NetWorthSummary {
            total_assets: settings.convert_from_usd(usd.total_assets),
            total_liabilities: settings.convert_from_usd(usd.total_liabilities),
            net_worth: settings.convert_from_usd(usd.net_worth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn usd_settings() -> CurrencySettings {
        CurrencySettings::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn duplicate_asset_names_are_rejected_case_insensitively() {
        let settings = usd_settings();
        let mut profile = FinanceProfile::new();
        NetWorthService::add_asset(&mut profile, &settings, "Savings", AssetKind::Bank, 100.0)
            .expect("first add");
        let err =
            NetWorthService::add_asset(&mut profile, &settings, " savings ", AssetKind::Cash, 1.0)
                .expect_err("duplicate must fail");
        assert!(format!("{err}").contains("already exists"));
        assert_eq!(profile.assets.len(), 1);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let settings = usd_settings();
        let mut profile = FinanceProfile::new();
        let err =
            NetWorthService::add_asset(&mut profile, &settings, "Cash", AssetKind::Cash, -5.0)
                .expect_err("negative must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert!(profile.assets.is_empty());
    }

    #[test]
    fn remove_asset_errors_for_unknown_id() {
        let mut profile = FinanceProfile::new();
        let err = NetWorthService::remove_asset(&mut profile, Uuid::new_v4())
            .expect_err("unknown id must fail");
        assert!(format!("{err}").contains("not found"));
    }

    #[test]
    fn summary_nets_assets_against_liabilities() {
        let settings = usd_settings();
        let mut profile = FinanceProfile::new();
        NetWorthService::add_asset(&mut profile, &settings, "Checking", AssetKind::Bank, 800.0)
            .expect("add asset");
        NetWorthService::add_liability(
            &mut profile,
            &settings,
            "Card",
            LiabilityKind::CreditCard,
            300.0,
        )
        .expect("add liability");
        let summary = NetWorthService::summary(&profile);
        assert!((summary.net_worth - 500.0).abs() < f64::EPSILON);
    }
}
