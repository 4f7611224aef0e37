use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn site_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

#[test]
fn defaults_apply_when_only_site_dir_is_set() {
    let dir = site_dir();
    let path = dir.path().to_string_lossy().into_owned();
    let config = HostConfig::from_lookup(lookup_from(&[("SITE_DIR", path.as_str())])).expect("valid config");
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.base.is_root());
    assert_eq!(config.site_dir, dir.path());
}

#[test]
fn base_path_is_normalized() {
    let dir = site_dir();
    let path = dir.path().to_string_lossy().into_owned();
    let config = HostConfig::from_lookup(lookup_from(&[("SITE_DIR", path.as_str()), ("PORTFOLIO_BASE_PATH", "portfolio")]))
        .expect("valid config");
    assert_eq!(config.base.as_str(), "/portfolio/");
}

#[test]
fn port_is_parsed() {
    let dir = site_dir();
    let path = dir.path().to_string_lossy().into_owned();
    let config =
        HostConfig::from_lookup(lookup_from(&[("SITE_DIR", path.as_str()), ("PORT", " 8080 ")])).expect("valid config");
    assert_eq!(config.port, 8080);
}

#[test]
fn invalid_port_is_rejected() {
    let dir = site_dir();
    let path = dir.path().to_string_lossy().into_owned();
    let err = HostConfig::from_lookup(lookup_from(&[("SITE_DIR", path.as_str()), ("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { raw } if raw == "eighty"));
}

#[test]
fn invalid_base_path_is_rejected() {
    let dir = site_dir();
    let path = dir.path().to_string_lossy().into_owned();
    let err =
        HostConfig::from_lookup(lookup_from(&[("SITE_DIR", path.as_str()), ("PORTFOLIO_BASE_PATH", "/a/../b")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBasePath(_)));
    assert!(err.to_string().contains("PORTFOLIO_BASE_PATH"));
}

#[test]
fn missing_site_dir_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("SITE_DIR", "/definitely/not/here/site")])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSiteDir { .. }));
}
