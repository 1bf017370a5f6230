//! Layered config resolution.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use marquee_model::ThemeMode;

use crate::error::ConfigLoadError;
use crate::models::Config;
use crate::validation::{ValidatedConfig, apply_guard_rails};

pub const ENV_CONFIG_PATH: &str = "MARQUEE_CONFIG";
pub const ENV_CONFIG_JSON: &str = "MARQUEE_CONFIG_JSON";
pub const ENV_THEME: &str = "MARQUEE_THEME";
pub const ENV_REDUCED_MOTION: &str = "MARQUEE_REDUCED_MOTION";
pub const ENV_SPEED: &str = "MARQUEE_SPEED";

const DEFAULT_CANDIDATES: &[&str] =
    &["marquee.toml", "marquee.json", "config/marquee.toml"];

/// Where the base document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File named by `MARQUEE_CONFIG`.
    EnvPath(PathBuf),
    /// JSON in `MARQUEE_CONFIG_JSON`.
    EnvInline,
    /// One of the well-known file names.
    File(PathBuf),
    Default,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ValidatedConfig,
    pub source: ConfigSource,
}

/// Resolves configuration against a snapshot of the environment and a base
/// directory for the default file names.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env: HashMap<String, String>,
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Snapshot `MARQUEE_*` variables from the process, after reading `.env`
    /// if one exists.
    pub fn from_process() -> Self {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            log::warn!("ignoring unreadable .env file: {err}");
        }
        let env = std::env::vars()
            .filter(|(key, _)| key.starts_with("MARQUEE_"))
            .collect();
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { env, base_dir }
    }

    pub fn with_env<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            env: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            base_dir: PathBuf::from("."),
        }
    }

    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    fn var(&self, key: &str) -> Option<&str> {
        self.env
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Resolve, apply environment overrides and guard-rail.
    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        let (mut config, source) = self.resolve_base()?;
        self.apply_env_overrides(&mut config)
            .context("invalid MARQUEE_* override")?;
        let validated = apply_guard_rails(&config)
            .map_err(ConfigLoadError::from)
            .with_context(|| format!("config from {source:?} failed validation"))?;

        for warning in &validated.warnings.items {
            match &warning.hint {
                Some(hint) => log::warn!("{} ({hint})", warning.message),
                None => log::warn!("{}", warning.message),
            }
        }
        log::debug!("loaded carousel config from {source:?}");

        Ok(ConfigLoad {
            config: validated,
            source,
        })
    }

    fn resolve_base(&self) -> anyhow::Result<(Config, ConfigSource)> {
        if let Some(path) = self.var(ENV_CONFIG_PATH) {
            let path = PathBuf::from(path);
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = self.var(ENV_CONFIG_JSON) {
            let parsed = parse_json(raw, ENV_CONFIG_JSON)
                .with_context(|| format!("failed to parse {ENV_CONFIG_JSON}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Config::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|name| self.base_dir.join(name))
            .find(|path| path.exists())
    }

    /// Layer `MARQUEE_THEME`, `MARQUEE_REDUCED_MOTION` and `MARQUEE_SPEED`
    /// over `config`.
    pub fn apply_env_overrides(
        &self,
        config: &mut Config,
    ) -> Result<(), ConfigLoadError> {
        if let Some(raw) = self.var(ENV_THEME) {
            config.appearance.theme =
                raw.parse::<ThemeMode>().map_err(|err| {
                    ConfigLoadError::InvalidEnv {
                        key: ENV_THEME,
                        value: raw.to_string(),
                        reason: err.to_string(),
                    }
                })?;
        }

        if let Some(raw) = self.var(ENV_REDUCED_MOTION) {
            config.appearance.reduced_motion = parse_flag(raw).ok_or_else(|| {
                ConfigLoadError::InvalidEnv {
                    key: ENV_REDUCED_MOTION,
                    value: raw.to_string(),
                    reason: "expected 1/0, true/false or yes/no".into(),
                }
            })?;
        }

        if let Some(raw) = self.var(ENV_SPEED) {
            config.carousel.speed = raw.trim().parse::<f32>().map_err(|err| {
                ConfigLoadError::InvalidEnv {
                    key: ENV_SPEED,
                    value: raw.to_string(),
                    reason: err.to_string(),
                }
            })?;
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn load_from_file(path: &Path) -> Result<Config, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Toml {
                origin,
                source,
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<Config, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Unrecognized {
                origin: origin.to_string(),
                toml: toml_err.to_string(),
                json: json_err.to_string(),
            }
        })
    })
}

pub fn parse_json(raw: &str, origin: &str) -> Result<Config, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("YES"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = parse_from_str("[carousel]\nspeed = 48.0\n", "inline").unwrap();
        assert_eq!(config.carousel.speed, 48.0);
        assert_eq!(config.carousel.gap, 24.0);
        assert_eq!(config.appearance.theme, ThemeMode::Dark);
    }

    #[test]
    fn json_is_accepted_as_fallback() {
        let config =
            parse_from_str(r#"{"appearance":{"theme":"light"}}"#, "inline").unwrap();
        assert_eq!(config.appearance.theme, ThemeMode::Light);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = parse_from_str("{{ nope", "inline").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Unrecognized { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(parse_from_str("[carousel]\nspeeed = 1.0\n", "inline").is_err());
    }

    #[test]
    fn env_overrides_win() {
        let loader = ConfigLoader::with_env([
            (ENV_THEME, "light"),
            (ENV_REDUCED_MOTION, "true"),
            (ENV_SPEED, "12.5"),
        ]);
        let mut config = Config::default();
        loader.apply_env_overrides(&mut config).unwrap();
        assert_eq!(config.appearance.theme, ThemeMode::Light);
        assert!(config.appearance.reduced_motion);
        assert_eq!(config.carousel.speed, 12.5);
    }

    #[test]
    fn bad_override_names_the_key() {
        let loader = ConfigLoader::with_env([(ENV_SPEED, "fast")]);
        let err = loader
            .apply_env_overrides(&mut Config::default())
            .unwrap_err();
        assert!(err.to_string().contains(ENV_SPEED));
    }

    #[test]
    fn blank_values_are_ignored() {
        let loader = ConfigLoader::with_env([(ENV_THEME, "  ")]);
        let mut config = Config::default();
        loader.apply_env_overrides(&mut config).unwrap();
        assert_eq!(config.appearance.theme, ThemeMode::Dark);
    }
}
