use std::path::PathBuf;
use tourbot_core::config::{expand_path, Config};

#[test]
fn expand_path_substitutes_env_vars() {
    std::env::set_var("TOURBOT_TEST_DIR", "/srv/tourbot");
    assert_eq!(expand_path("${TOURBOT_TEST_DIR}/index"), PathBuf::from("/srv/tourbot/index"));
}

#[test]
fn expand_path_leaves_plain_paths_alone() {
    assert_eq!(expand_path("data/index"), PathBuf::from("data/index"));
}

#[test]
fn load_succeeds_without_config_files() {
    // Missing config.toml is not an error; lookups fall back to caller defaults
    let config = Config::load().expect("load");
    let missing: anyhow::Result<String> = config.get("data.no_such_key");
    assert!(missing.is_err());
}
