//! Integration tests for Settings loading.
//!
//! Precedence:
//! - Defaults → Env vars: REPLACE (explicit user override)
//!
//! Note: These tests pass explicit variable maps instead of mutating the
//! process environment, so they can run in parallel.

use std::collections::HashMap;

use rstest::rstest;
use rust_decimal_macros::dec;

use treasure_chest::{ApplicationError, Settings};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================
// Settings::load_from_env() override tests
// ============================================================

#[rstest]
#[case("0", dec!(0))]
#[case("1426.90", dec!(1426.90))]
#[case("  31.5 ", dec!(31.5))]
#[case("10000000000000000000", dec!(10000000000000000000))]
fn given_price_var_when_load_then_replaces_default(
    #[case] raw: &str,
    #[case] expected: rust_decimal::Decimal,
) {
    let settings = Settings::load_from_env(env(&[("TREASURE_GOLD_PRICE", raw)]))
        .expect("load settings");

    assert_eq!(settings.gold_price.value(), expected);
}

#[rstest]
#[case("")]
#[case("a lot")]
#[case("1.2.3")]
fn given_malformed_price_var_when_load_then_config_error(#[case] raw: &str) {
    let result = Settings::load_from_env(env(&[("TREASURE_GOLD_PRICE", raw)]));

    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(!message.is_empty(), "config error should carry a message");
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

// ============================================================
// TOML display round trip
// ============================================================

#[test]
fn given_partial_toml_when_parsed_then_missing_keys_default() {
    let settings = Settings::from_toml("").expect("empty config");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_toml_price_when_parsed_then_initial_price_validated() {
    let settings = Settings::from_toml(r#"gold_price = "999.99""#).unwrap();

    assert_eq!(settings.initial_price().value(), dec!(999.99));
}

#[rstest]
#[case(r#"gold_price = "-1""#)]
#[case(r#"gold_price = "-0.01""#)]
#[case(r#"gold_price = "1.0000000000000000000000000001""#)]
fn given_invalid_toml_price_when_parsed_then_config_error(#[case] content: &str) {
    let result = Settings::from_toml(content);

    assert!(
        matches!(result, Err(ApplicationError::Config { .. })),
        "got: {result:?}"
    );
}

#[test]
fn given_effective_settings_when_rendered_then_shows_price_as_string() {
    let settings = Settings::default();

    let text = settings.to_toml().unwrap();

    assert!(text.contains(r#"gold_price = "1426.90""#), "got: {text}");
}
