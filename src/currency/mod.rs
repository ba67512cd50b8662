use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Immutable metadata for one supported currency.
///
/// `rate_to_usd` is how many USD one unit of the currency buys. The values
/// are a frozen snapshot, deliberately not fetched live, so conversions stay
/// deterministic across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
    pub rate_to_usd: f64,
}

static REGISTRY: &[Currency] = &[
    Currency { code: "USD", name: "US Dollar", symbol: "$", flag: "🇺🇸", rate_to_usd: 1.0 },
    Currency { code: "EUR", name: "Euro", symbol: "€", flag: "🇪🇺", rate_to_usd: 1.09 },
    Currency { code: "GBP", name: "British Pound", symbol: "£", flag: "🇬🇧", rate_to_usd: 1.27 },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥", flag: "🇯🇵", rate_to_usd: 0.0067 },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF", flag: "🇨🇭", rate_to_usd: 1.12 },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "$", flag: "🇨🇦", rate_to_usd: 0.73 },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "$", flag: "🇦🇺", rate_to_usd: 0.66 },
    Currency { code: "NZD", name: "New Zealand Dollar", symbol: "$", flag: "🇳🇿", rate_to_usd: 0.61 },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥", flag: "🇨🇳", rate_to_usd: 0.14 },
    Currency { code: "HKD", name: "Hong Kong Dollar", symbol: "$", flag: "🇭🇰", rate_to_usd: 0.128 },
    Currency { code: "TWD", name: "New Taiwan Dollar", symbol: "NT$", flag: "🇹🇼", rate_to_usd: 0.031 },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "$", flag: "🇸🇬", rate_to_usd: 0.74 },
    Currency { code: "KRW", name: "South Korean Won", symbol: "₩", flag: "🇰🇷", rate_to_usd: 0.00073 },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹", flag: "🇮🇳", rate_to_usd: 0.012 },
    Currency { code: "PKR", name: "Pakistani Rupee", symbol: "₨", flag: "🇵🇰", rate_to_usd: 0.0036 },
    Currency { code: "BDT", name: "Bangladeshi Taka", symbol: "৳", flag: "🇧🇩", rate_to_usd: 0.0091 },
    Currency { code: "LKR", name: "Sri Lankan Rupee", symbol: "₨", flag: "🇱🇰", rate_to_usd: 0.0033 },
    Currency { code: "THB", name: "Thai Baht", symbol: "฿", flag: "🇹🇭", rate_to_usd: 0.028 },
    Currency { code: "VND", name: "Vietnamese Dong", symbol: "₫", flag: "🇻🇳", rate_to_usd: 0.00004 },
    Currency { code: "IDR", name: "Indonesian Rupiah", symbol: "Rp", flag: "🇮🇩", rate_to_usd: 0.000062 },
    Currency { code: "MYR", name: "Malaysian Ringgit", symbol: "RM", flag: "🇲🇾", rate_to_usd: 0.21 },
    Currency { code: "PHP", name: "Philippine Peso", symbol: "₱", flag: "🇵🇭", rate_to_usd: 0.017 },
    Currency { code: "PLN", name: "Polish Zloty", symbol: "zł", flag: "🇵🇱", rate_to_usd: 0.25 },
    Currency { code: "SEK", name: "Swedish Krona", symbol: "kr", flag: "🇸🇪", rate_to_usd: 0.095 },
    Currency { code: "NOK", name: "Norwegian Krone", symbol: "kr", flag: "🇳🇴", rate_to_usd: 0.094 },
    Currency { code: "DKK", name: "Danish Krone", symbol: "kr", flag: "🇩🇰", rate_to_usd: 0.146 },
    Currency { code: "CZK", name: "Czech Koruna", symbol: "Kč", flag: "🇨🇿", rate_to_usd: 0.043 },
    Currency { code: "HUF", name: "Hungarian Forint", symbol: "Ft", flag: "🇭🇺", rate_to_usd: 0.0027 },
    Currency { code: "RON", name: "Romanian Leu", symbol: "lei", flag: "🇷🇴", rate_to_usd: 0.22 },
    Currency { code: "BGN", name: "Bulgarian Lev", symbol: "лв", flag: "🇧🇬", rate_to_usd: 0.56 },
    Currency { code: "TRY", name: "Turkish Lira", symbol: "₺", flag: "🇹🇷", rate_to_usd: 0.03 },
    Currency { code: "UAH", name: "Ukrainian Hryvnia", symbol: "₴", flag: "🇺🇦", rate_to_usd: 0.024 },
    Currency { code: "ILS", name: "Israeli New Shekel", symbol: "₪", flag: "🇮🇱", rate_to_usd: 0.27 },
    Currency { code: "AED", name: "UAE Dirham", symbol: "د.إ", flag: "🇦🇪", rate_to_usd: 0.27 },
    Currency { code: "SAR", name: "Saudi Riyal", symbol: "﷼", flag: "🇸🇦", rate_to_usd: 0.27 },
    Currency { code: "QAR", name: "Qatari Riyal", symbol: "﷼", flag: "🇶🇦", rate_to_usd: 0.27 },
    Currency { code: "KWD", name: "Kuwaiti Dinar", symbol: "د.ك", flag: "🇰🇼", rate_to_usd: 3.25 },
    Currency { code: "EGP", name: "Egyptian Pound", symbol: "E£", flag: "🇪🇬", rate_to_usd: 0.021 },
    Currency { code: "MAD", name: "Moroccan Dirham", symbol: "د.م.", flag: "🇲🇦", rate_to_usd: 0.1 },
    Currency { code: "NGN", name: "Nigerian Naira", symbol: "₦", flag: "🇳🇬", rate_to_usd: 0.00065 },
    Currency { code: "KES", name: "Kenyan Shilling", symbol: "KSh", flag: "🇰🇪", rate_to_usd: 0.0077 },
    Currency { code: "ZAR", name: "South African Rand", symbol: "R", flag: "🇿🇦", rate_to_usd: 0.054 },
    Currency { code: "BRL", name: "Brazilian Real", symbol: "R$", flag: "🇧🇷", rate_to_usd: 0.18 },
    Currency { code: "MXN", name: "Mexican Peso", symbol: "$", flag: "🇲🇽", rate_to_usd: 0.055 },
    Currency { code: "ARS", name: "Argentine Peso", symbol: "$", flag: "🇦🇷", rate_to_usd: 0.0011 },
    Currency { code: "CLP", name: "Chilean Peso", symbol: "$", flag: "🇨🇱", rate_to_usd: 0.0011 },
    Currency { code: "COP", name: "Colombian Peso", symbol: "$", flag: "🇨🇴", rate_to_usd: 0.00025 },
    Currency { code: "PEN", name: "Peruvian Sol", symbol: "S/", flag: "🇵🇪", rate_to_usd: 0.27 },
];

static CODE_INDEX: Lazy<HashMap<&'static str, &'static Currency>> =
    Lazy::new(|| REGISTRY.iter().map(|currency| (currency.code, currency)).collect());

/// Currencies whose symbol renders before the amount with no space.
///
/// This is a display convention, not registry data; every other currency
/// renders the symbol after the amount with a single space.
const SYMBOL_PREFIX_CODES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD", "NZD", "SGD", "HKD"];

/// All supported currencies, in picker order.
pub fn currencies() -> &'static [Currency] {
    REGISTRY
}

/// Looks up a currency by its exact uppercase code.
pub fn get_currency(code: &str) -> Option<&'static Currency> {
    CODE_INDEX.get(code).copied()
}

/// Converts an amount between two currencies, pivoting through USD.
///
/// An unknown code on either side falls back to returning the amount
/// unchanged so a bad picker value never crashes the UI; a warning is
/// logged and callers are expected to validate codes upstream.
pub fn convert_currency(amount: f64, from: &str, to: &str) -> f64 {
    let (Some(from_currency), Some(to_currency)) = (get_currency(from), get_currency(to)) else {
        tracing::warn!(from, to, "unknown currency code, returning amount unchanged");
        return amount;
    };
    let amount_in_usd = amount * from_currency.rate_to_usd;
    amount_in_usd / to_currency.rate_to_usd
}

/// Renders an amount with thousands grouping, two decimals, and the
/// currency's symbol. Unknown codes render the bare number.
pub fn format_currency(amount: f64, code: &str) -> String {
    let body = group_thousands(&format!("{:.2}", amount));
    match get_currency(code) {
        None => {
            tracing::warn!(code, "unknown currency code, formatting without symbol");
            body
        }
        Some(currency) if SYMBOL_PREFIX_CODES.contains(&currency.code) => {
            format!("{}{}", currency.symbol, body)
        }
        Some(currency) => format!("{} {}", body, currency.symbol),
    }
}

/// Inserts `,` separators into the integer part of an already formatted
/// number, leaving any sign and fraction intact.
fn group_thousands(body: &str) -> String {
    let (int_part, frac_part) = match body.find('.') {
        Some(pos) => (&body[..pos], &body[pos..]),
        None => (body, ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{}{}{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_codes_are_unique_and_uppercase() {
        let mut seen = HashSet::new();
        for currency in currencies() {
            assert_eq!(currency.code, currency.code.to_uppercase());
            assert!(seen.insert(currency.code), "duplicate code {}", currency.code);
        }
    }

    #[test]
    fn registry_rates_are_positive_and_usd_is_exactly_one() {
        for currency in currencies() {
            assert!(currency.rate_to_usd > 0.0, "{} has a non-positive rate", currency.code);
        }
        let usd = get_currency("USD").expect("USD is registered");
        assert_eq!(usd.rate_to_usd, 1.0);
    }

    #[test]
    fn registry_holds_at_least_forty_currencies() {
        assert!(currencies().len() >= 40);
    }

    #[test]
    fn conversion_pivots_through_usd() {
        // 100 EUR -> 109 USD -> 436 PLN at the snapshot rates.
        let result = convert_currency(100.0, "EUR", "PLN");
        assert!((result - 436.0).abs() < 1e-9);
    }

    #[test]
    fn same_code_conversion_is_identity() {
        let result = convert_currency(42.42, "EUR", "EUR");
        assert!((result - 42.42).abs() < 1e-12);
    }

    #[test]
    fn grouping_handles_sign_and_small_numbers() {
        assert_eq!(group_thousands("999.00"), "999.00");
        assert_eq!(group_thousands("1000.00"), "1,000.00");
        assert_eq!(group_thousands("-1234567.89"), "-1,234,567.89");
    }

    #[test]
    fn every_prefix_code_is_registered() {
        for code in SYMBOL_PREFIX_CODES {
            assert!(get_currency(code).is_some(), "{} missing from registry", code);
        }
    }
}
