use thiserror::Error;

use crate::{currency, errors::StorageError, storage::KeyValueStore};

/// Storage key holding the raw currency code string.
pub const SELECTED_CURRENCY_KEY: &str = "selectedCurrency";

const DEFAULT_CURRENCY: &str = "USD";

/// Failures surfaced by the selected-currency wrapper.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown currency code `{0}`")]
    UnknownCurrency(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Holds the user's active display currency and persists it across sessions.
///
/// One instance is owned by the application root; every form reads the same
/// value and converts amounts through it at the persistence boundary. The
/// wrapper starts out assuming USD until [`load_currency`](Self::load_currency)
/// adopts whatever a previous session stored.
pub struct CurrencySettings {
    store: Box<dyn KeyValueStore>,
    active: String,
    loaded: bool,
}

impl CurrencySettings {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            active: DEFAULT_CURRENCY.to_string(),
            loaded: false,
        }
    }

    /// Currently active display currency code.
    pub fn currency(&self) -> &str {
        &self.active
    }

    /// Whether a persisted value has been loaded (or explicitly set).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Adopts the persisted currency, keeping the USD default when no value
    /// was ever stored. Safe to call more than once.
    pub fn load_currency(&mut self) -> Result<(), StorageError> {
        match self.store.get_item(SELECTED_CURRENCY_KEY) {
            Ok(Some(code)) => self.active = code,
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "failed to load selected currency");
                return Err(err);
            }
        }
        self.loaded = true;
        Ok(())
    }

    /// Switches the active display currency and persists the choice.
    ///
    /// Unknown codes are rejected before any mutation. The in-memory value
    /// updates ahead of the store write, so a failed write leaves the new
    /// value active and returns the error for the caller to surface.
    pub fn set_currency(&mut self, code: &str) -> Result<(), SettingsError> {
        if currency::get_currency(code).is_none() {
            return Err(SettingsError::UnknownCurrency(code.to_string()));
        }
        self.active = code.to_string();
        self.loaded = true;
        if let Err(err) = self.store.set_item(SELECTED_CURRENCY_KEY, code) {
            tracing::warn!(error = %err, code, "failed to persist selected currency");
            return Err(err.into());
        }
        Ok(())
    }

    /// Converts an amount entered in the active currency to canonical USD.
    pub fn convert_to_usd(&self, amount: f64) -> f64 {
        currency::convert_currency(amount, &self.active, "USD")
    }

    /// Converts a canonical USD amount into the active currency for display.
    pub fn convert_from_usd(&self, amount: f64) -> f64 {
        currency::convert_currency(amount, "USD", &self.active)
    }

    /// Renders an amount in the active currency.
    pub fn format_amount(&self, amount: f64) -> String {
        currency::format_currency(amount, &self.active)
    }
}
