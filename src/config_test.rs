use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
    assert_eq!(config.pkg_dir, PathBuf::from(DEFAULT_PKG_DIR));
}

#[test]
fn explicit_values_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("SITE_DIR", "/srv/site"), ("PKG_DIR", " dist/pkg ")]))
        .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
    assert_eq!(config.pkg_dir, PathBuf::from("dist/pkg"));
}

#[test]
fn port_tolerates_surrounding_whitespace() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 4000\n")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "eighty".into() });
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn empty_directory_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("SITE_DIR", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyPath { var: "SITE_DIR" });
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { var: "PORT", value: "x".into() };
    assert!(err.to_string().contains("PORT"));
    assert_eq!(ConfigError::EmptyPath { var: "PKG_DIR" }.to_string(), "PKG_DIR must not be empty");
}
