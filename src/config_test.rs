use super::*;

// =============================================================
// Surface contract
// =============================================================

#[test]
fn canvas_surface_matches_game_module_contract() {
    assert_eq!(CANVAS_SURFACE.id, "game-canvas");
    assert_eq!(CANVAS_SURFACE.size(), (512, 512));
    assert_eq!(CANVAS_SURFACE.selector(), "#game-canvas");
}

// =============================================================
// ShellConfig::from_query
// =============================================================

#[test]
fn empty_query_yields_defaults() {
    assert_eq!(ShellConfig::from_query(""), Ok(ShellConfig::default()));
    assert_eq!(ShellConfig::from_query("?"), Ok(ShellConfig::default()));
}

#[test]
fn defaults_use_root_container_and_info_logging() {
    let config = ShellConfig::default();
    assert_eq!(config.root_id, "root");
    assert_eq!(config.log_level, log::Level::Info);
    assert!(config.verify_surface);
}

#[test]
fn log_level_is_parsed_case_insensitively() {
    let config = ShellConfig::from_query("?log=DEBUG").unwrap();
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn verify_surface_accepts_numeric_flags() {
    let config = ShellConfig::from_query("verify_surface=0&log=warn").unwrap();
    assert!(!config.verify_surface);
    assert_eq!(config.log_level, log::Level::Warn);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = ShellConfig::from_query("?seed=42&mode").unwrap();
    assert_eq!(config, ShellConfig::default());
}

#[test]
fn invalid_log_level_is_rejected() {
    let err = ShellConfig::from_query("?log=loud").unwrap_err();
    assert_eq!(err, ConfigError::InvalidLogLevel { value: "loud".into() });
    assert_eq!(err.to_string(), "invalid log level: loud");
}

#[test]
fn invalid_flag_names_the_key() {
    let err = ShellConfig::from_query("?verify_surface=maybe").unwrap_err();
    assert_eq!(err, ConfigError::InvalidFlag { key: "verify_surface".into(), value: "maybe".into() });
}
