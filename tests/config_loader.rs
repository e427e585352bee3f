mod common;

use common::temp_config;
use loan_intake::config::{Config, ConfigError};
use loan_intake::format::DEFAULT_MAX_AMOUNT;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.lender.bind_addr, "127.0.0.1:3002");
    assert_eq!(config.portal.bind_addr, "127.0.0.1:3001");
    assert_eq!(config.client.lender_url, "http://localhost:3002");
    assert!(config.form.allow_cents);
    assert_eq!(config.form.max_amount, DEFAULT_MAX_AMOUNT);
    assert_eq!(config.bank_link.base_url, "https://sandbox.plaid.com");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[lender]
bind_addr = "0.0.0.0:4000"
data_dir = "/var/lib/loans"

[form]
allow_cents = false
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.lender.bind_addr, "0.0.0.0:4000");
    assert_eq!(
        config.lender.data_dir.as_deref(),
        Some(std::path::Path::new("/var/lib/loans"))
    );
    assert!(!config.form.allow_cents);
    assert_eq!(config.form.max_amount, DEFAULT_MAX_AMOUNT);
    assert_eq!(config.client.timeout_seconds, 30);
}

#[test]
fn currency_mask_follows_form_config() {
    use loan_intake::format::Mask;

    let (_dir, path) = temp_config("[form]\nallow_cents = false\nmax_amount = 5000.0\n");
    let mask = Config::load_from(&path).unwrap().form.currency_mask();
    assert_eq!(mask.format("1234").unwrap(), "$1,234");
    assert!(mask.format("6000").is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[lender\nbind_addr = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn bad_values_fail_validation() {
    let (_dir, path) = temp_config("[client]\nlender_url = \"localhost:3002\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));

    let (_dir, path) = temp_config("[portal]\nbind_addr = \"not an address\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));

    let (_dir, path) = temp_config("[client]\ntimeout_seconds = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn config_path_is_namespaced() {
    assert!(Config::config_path().ends_with("loan-intake/config.toml"));
}
