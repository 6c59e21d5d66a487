use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = AppConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.default_currency, "USD");
    assert_eq!(cfg.narrow_viewport_px, 800.0);
    assert_eq!(cfg.quote_validity_days, Some(30));
    assert_eq!(cfg.sectors.len(), DEFAULT_SECTORS.len());
}

#[test]
fn from_json_empty_object_keeps_defaults() {
    assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
}

#[test]
fn from_json_overrides_only_given_keys() {
    let cfg = AppConfig::from_json(r#"{ "currencies": ["GTQ", "USD"], "default_currency": "GTQ" }"#).unwrap();
    assert_eq!(cfg.currencies, vec!["GTQ", "USD"]);
    assert_eq!(cfg.default_currency, "GTQ");
    assert_eq!(cfg.brand, DEFAULT_BRAND);
    assert_eq!(cfg.sectors.len(), DEFAULT_SECTORS.len());
}

#[test]
fn from_json_null_validity_disables_footer() {
    let cfg = AppConfig::from_json(r#"{ "quote_validity_days": null }"#).unwrap();
    assert_eq!(cfg.quote_validity_days, None);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(AppConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_empty_lists() {
    assert!(matches!(AppConfig::from_json(r#"{ "sectors": [] }"#), Err(ConfigError::NoSectors)));
    assert!(matches!(AppConfig::from_json(r#"{ "currencies": [] }"#), Err(ConfigError::NoCurrencies)));
}

#[test]
fn from_json_rejects_unknown_default_currency() {
    let err = AppConfig::from_json(r#"{ "default_currency": "JPY" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDefaultCurrency(ref c) if c == "JPY"));
    assert_eq!(err.to_string(), "default currency JPY is not among the configured currencies");
}

#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(AppConfig::load(), AppConfig::default());
}
