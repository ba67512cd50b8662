pub mod budget_service;
pub mod income_service;
pub mod net_worth_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use income_service::IncomeService;
pub use net_worth_service::{NetWorthService, NetWorthSummary};
pub use summary_service::{FinanceOverview, SummaryService};

use crate::errors::StorageError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("{0}")]
    Invalid(String),
}

/// Rejects empty, non-finite, or negative monetary inputs before they are
/// converted and stored.
pub(crate) fn validate_amount(amount: f64) -> ServiceResult<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(ServiceError::Invalid(
            "Amount must be a non-negative number".into(),
        ))
    }
}

/// Case-insensitive duplicate check shared by the entry services.
pub(crate) fn ensure_unique_name<'a>(
    mut existing: impl Iterator<Item = &'a str>,
    candidate: &str,
    what: &str,
) -> ServiceResult<()> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(format!("{} name is required", what)));
    }
    let normalized = trimmed.to_ascii_lowercase();
    if existing.any(|name| name.trim().to_ascii_lowercase() == normalized) {
        Err(ServiceError::Invalid(format!(
            "{} `{}` already exists",
            what, trimmed
        )))
    } else {
        Ok(())
    }
}
