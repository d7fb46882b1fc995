#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use test_case::test_case;

fn config_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("config.toml")
}

#[test]
fn first_load_creates_default_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);

    let config = AppConfig::load_from(&path, None).unwrap();
    assert_eq!(config.profile_name, "default");
    assert_eq!(config.api_endpoint, PAPERRAG_API_ENDPOINT);
    assert_eq!(config.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
    assert!(path.exists());
}

#[test]
fn unknown_profile_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);

    let err = AppConfig::load_from(&path, Some("staging")).unwrap_err();
    assert!(err.to_string().contains("staging"));
}

#[test]
fn profile_inherits_from_all() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);
    std::fs::write(
        &path,
        r#"
[profiles.all]
poll_interval_secs = 30
request_timeout_secs = 15

[profiles.office]
api_endpoint = "http://paperless.lan:3000"
poll_interval_secs = 5

[settings]
default_profile = "office"
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path, None).unwrap();
    assert_eq!(config.profile_name, "office");
    assert_eq!(config.api_endpoint, "http://paperless.lan:3000");
    // Own value wins over "all"; missing value falls back to "all".
    assert_eq!(config.poll_interval_secs, 5);
    assert_eq!(config.request_timeout_secs, 15);
}

#[test]
fn save_roundtrips_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);

    let mut config = AppConfig::load_from(&path, None).unwrap();
    config.api_endpoint = "http://other:3000".to_string();
    config.save().unwrap();

    let reloaded = AppConfig::load_from(&path, Some("default")).unwrap();
    assert_eq!(reloaded.api_endpoint, "http://other:3000");
}

#[test_case(None, "default" ; "falls back to default profile")]
#[test_case(Some("default"), "default" ; "explicit default")]
fn profile_selection(arg: Option<&str>, expected: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);
    let config = AppConfig::load_from(&path, arg).unwrap();
    assert_eq!(config.profile_name, expected);
}
