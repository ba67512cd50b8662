pub mod budget;
pub mod common;
pub mod income;
pub mod net_worth;
pub mod profile;

pub use budget::{BudgetCategory, BudgetItem};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use income::{IncomeEntry, IncomeKind};
pub use net_worth::{AssetEntry, AssetKind, LiabilityEntry, LiabilityKind};
pub use profile::FinanceProfile;
