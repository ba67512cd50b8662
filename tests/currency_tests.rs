use lifequest_core::currency::{convert_currency, currencies, format_currency, get_currency};

#[test]
fn round_trip_through_usd_preserves_amounts() {
    let amount = 1234.56;
    for currency in currencies() {
        let usd = convert_currency(amount, currency.code, "USD");
        let back = convert_currency(usd, "USD", currency.code);
        let relative_error = ((back - amount) / amount).abs();
        assert!(
            relative_error < 1e-9,
            "round trip drifted for {}: {} -> {}",
            currency.code,
            amount,
            back
        );
    }
}

#[test]
fn same_currency_conversion_is_identity() {
    for currency in currencies() {
        let converted = convert_currency(250.0, currency.code, currency.code);
        assert!(
            (converted - 250.0).abs() < 1e-9,
            "{} did not convert to itself",
            currency.code
        );
    }
}

#[test]
fn direct_conversion_matches_manual_usd_pivot() {
    for from in currencies() {
        for to in currencies() {
            let direct = convert_currency(100.0, from.code, to.code);
            let pivoted =
                convert_currency(convert_currency(100.0, from.code, "USD"), "USD", to.code);
            assert!(
                (direct - pivoted).abs() < 1e-9,
                "pivot mismatch for {} -> {}",
                from.code,
                to.code
            );
        }
    }
}

#[test]
fn unknown_codes_fall_back_to_the_input_amount() {
    assert_eq!(convert_currency(100.0, "ZZZ", "USD"), 100.0);
    assert_eq!(convert_currency(100.0, "USD", "ZZZ"), 100.0);
    assert_eq!(convert_currency(-42.5, "ZZZ", "YYY"), -42.5);
}

#[test]
fn prefix_currencies_render_the_symbol_before_the_number() {
    assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    assert_eq!(format_currency(1234.5, "EUR"), "€1,234.50");
    assert_eq!(format_currency(0.5, "GBP"), "£0.50");
}

#[test]
fn suffix_currencies_render_the_symbol_after_the_number() {
    assert_eq!(format_currency(1234.5, "PLN"), "1,234.50 zł");
    assert_eq!(format_currency(99.9, "SEK"), "99.90 kr");
    assert_eq!(format_currency(1000000.0, "JPY"), "1,000,000.00 ¥");
}

#[test]
fn negative_amounts_keep_the_sign_on_the_number() {
    assert_eq!(format_currency(-1234.5, "USD"), "$-1,234.50");
    assert_eq!(format_currency(-1234.5, "PLN"), "-1,234.50 zł");
}

#[test]
fn unresolved_codes_format_as_a_bare_number() {
    assert_eq!(format_currency(1234.5, "ZZZ"), "1,234.50");
}

#[test]
fn lookup_is_case_sensitive_and_exact() {
    assert!(get_currency("USD").is_some());
    assert!(get_currency("usd").is_none());
    assert!(get_currency("USD ").is_none());
}

#[test]
fn registry_enumerates_for_picker_presentation() {
    let codes: Vec<&str> = currencies().iter().map(|currency| currency.code).collect();
    assert!(codes.contains(&"USD"));
    assert!(codes.contains(&"EUR"));
    assert!(codes.len() >= 40);
}
