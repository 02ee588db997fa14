// src/config/app.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

use crate::consts::{CONFIG_PATH_ENV, DEFAULT_KEY_ENV, NO_PAUSE_ENV};
use crate::error::Result;
use crate::input::parse_key;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherSettings,
    pub prompt: PromptSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CipherSettings {
    pub default_key: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    pub pause_on_exit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: crate::enums::OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins over it
    pub filter: String,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Where the active config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The path was checked but nothing was there
    Missing(PathBuf),
    /// No `$ROTARY_CONFIG` and no platform config directory
    NoConfigDir,
}

impl ConfigSource {
    /// Report the outcome; call once a subscriber is installed
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!(path = %path.display(), "loaded config"),
            ConfigSource::Missing(path) => {
                info!(path = %path.display(), "config not found, using built-in defaults")
            }
            ConfigSource::NoConfigDir => info!("no config directory, using built-in defaults"),
        }
    }
}

static CONFIG: OnceLock<(Config, ConfigSource)> = OnceLock::new();

/// `$ROTARY_CONFIG`, else `<config dir>/rotary-cipher/config.toml`
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|dir| dir.join("rotary-cipher").join("config.toml")),
    }
}

/// Read `path`, falling back to built-in defaults if it does not exist
pub fn load_from(path: &Path) -> Result<(Config, ConfigSource)> {
    if !path.exists() {
        return Ok((Config::default(), ConfigSource::Missing(path.to_path_buf())));
    }
    let content = std::fs::read_to_string(path)?;
    let conf = Config::from_toml_str(&content)?;
    Ok((conf, ConfigSource::File(path.to_path_buf())))
}

/// Env overrides, applied after the file is read
///
/// `lookup` stands in for `std::env::var` so tests need not touch the
/// process environment.
pub fn apply_overrides<F>(mut conf: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(DEFAULT_KEY_ENV) {
        conf.cipher.default_key = parse_key(key.trim())?;
    }
    if lookup(NO_PAUSE_ENV).is_some() {
        conf.prompt.pause_on_exit = false;
    }
    Ok(conf)
}

/// Load config once per process — later calls return the cached value
///
/// Nothing is logged here since this normally runs before tracing is set
/// up; pass the returned [`ConfigSource`] to [`ConfigSource::log`] after.
pub fn load() -> Result<(&'static Config, &'static ConfigSource)> {
    if let Some((conf, source)) = CONFIG.get() {
        return Ok((conf, source));
    }

    let (conf, source) = match config_path() {
        Some(path) => load_from(&path)?,
        None => (Config::default(), ConfigSource::NoConfigDir),
    };
    let conf = apply_overrides(conf, |name| std::env::var(name).ok())?;

    let (conf, source) = CONFIG.get_or_init(|| (conf, source));
    Ok((conf, source))
}
