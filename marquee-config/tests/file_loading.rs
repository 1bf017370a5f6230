use std::fs;

use marquee_config::{ConfigLoader, ConfigSource};
use marquee_model::ThemeMode;
use tempfile::tempdir;

#[test]
fn falls_back_to_defaults_without_files() {
    let dir = tempdir().unwrap();
    let load = ConfigLoader::with_env(Vec::<(String, String)>::new())
        .base_dir(dir.path())
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config.settings.speed, 24.0);
}

#[test]
fn picks_up_well_known_file() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/marquee.toml");
    fs::write(
        &path,
        "[carousel]\ngap = 16.0\n\n[appearance]\ntheme = \"light\"\n",
    )
    .unwrap();

    let load = ConfigLoader::with_env(Vec::<(String, String)>::new())
        .base_dir(dir.path())
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.settings.gap, 16.0);
    assert_eq!(load.config.appearance.theme, ThemeMode::Light);
}

#[test]
fn explicit_path_beats_inline_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{"carousel":{"visible_cards":2}}"#).unwrap();

    let load = ConfigLoader::with_env([
        ("MARQUEE_CONFIG", path.to_string_lossy().into_owned()),
        (
            "MARQUEE_CONFIG_JSON",
            r#"{"carousel":{"visible_cards":4}}"#.to_string(),
        ),
    ])
    .load()
    .unwrap();
    assert_eq!(load.source, ConfigSource::EnvPath(path));
    assert_eq!(load.config.settings.visible_cards, 2);
}

#[test]
fn inline_json_with_env_override() {
    let load = ConfigLoader::with_env([
        ("MARQUEE_CONFIG_JSON", r#"{"appearance":{"reduced_motion":true}}"#),
        ("MARQUEE_SPEED", "30"),
    ])
    .base_dir("/nonexistent")
    .load()
    .unwrap();
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert!(load.config.appearance.reduced_motion);
    assert_eq!(load.config.settings.speed, 30.0);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.toml");
    let err = ConfigLoader::with_env([(
        "MARQUEE_CONFIG",
        missing.to_string_lossy().into_owned(),
    )])
    .load()
    .unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config file"));
}

#[test]
fn guard_rails_reject_file_values() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("marquee.toml"),
        "[carousel]\nmin_card_width = 500.0\n",
    )
    .unwrap();
    let err = ConfigLoader::with_env(Vec::<(String, String)>::new())
        .base_dir(dir.path())
        .load()
        .unwrap_err();
    assert!(format!("{err:#}").contains("larger than"));
}
