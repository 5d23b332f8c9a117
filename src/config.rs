use anyhow::{Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::fixture::FixtureFormat;

pub const DEFAULT_FIXTURE_FORMAT: FixtureFormat = FixtureFormat::Prompt;
pub const FIXTURE_FORMAT_ENV_VAR: &str = "PROMPTPACK_FIXTURE_FORMAT";

const CONFIG_DIR_NAME: &str = "promptpack";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub fixture_format: FixtureFormat,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFileConfig {
    fixture_format: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path = discover_config_path()?;
        let file_config = load_file_config(&config_path)?;
        Self::resolve(file_config, &config_path)
    }

    /// Load from an explicit file path instead of the discovery path. Unlike
    /// discovery, the file must exist.
    pub fn load_with_path(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            bail!(
                "Failed to load config {}: file not found",
                config_path.display()
            );
        }
        let file_config = load_file_config(config_path)?;
        Self::resolve(file_config, config_path)
    }

    fn resolve(file_config: Option<RawFileConfig>, config_path: &Path) -> Result<Self> {
        let file_format = file_config
            .as_ref()
            .and_then(|cfg| cfg.fixture_format.as_deref())
            .map(|value| {
                FixtureFormat::from_str(value.trim())
                    .map_err(|reason| config_error(config_path, "fixture_format", &reason))
            })
            .transpose()?;

        let env_format = env_non_empty(FIXTURE_FORMAT_ENV_VAR)
            .map(|value| {
                FixtureFormat::from_str(&value)
                    .map_err(|reason| anyhow!("Failed to read {FIXTURE_FORMAT_ENV_VAR}: {reason}"))
            })
            .transpose()?;

        Ok(Self {
            fixture_format: env_format.or(file_format).unwrap_or(DEFAULT_FIXTURE_FORMAT),
        })
    }
}

fn discover_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg.trim();
        if trimmed.is_empty() {
            bail!("Failed to resolve config path: XDG_CONFIG_HOME is set but empty");
        }

        return Ok(PathBuf::from(trimmed)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| anyhow!("Failed to resolve config path: HOME directory is unavailable"))?;

    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

fn load_file_config(config_path: &Path) -> Result<Option<RawFileConfig>> {
    if !config_path.is_file() {
        return Ok(None);
    }

    let config_text = fs::read_to_string(config_path).map_err(|err| {
        anyhow!(
            "Failed to load config {}: unable to read file: {err}",
            config_path.display()
        )
    })?;

    toml::from_str(&config_text)
        .map(Some)
        .map_err(|err| anyhow!("Failed to load config {}: {err}", config_path.display()))
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn config_error(config_path: &Path, key_path: &str, reason: &str) -> anyhow::Error {
    anyhow!(
        "Failed to load config {}: {key_path}: {reason}",
        config_path.display()
    )
}
