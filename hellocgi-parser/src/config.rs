use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

pub const CONFIG_ENV: &str = "HELLOCGI_CONFIG";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub greeting: GreetingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GreetingConfig {
    pub default_name: String,
    pub title: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            default_name: "World".to_string(),
            title: "CGI Hello".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads the config file, or the defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        Self::from_toml_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    /// Like [`Config::load`], but never fails. The load error, if any, is
    /// handed back so the caller can report it once logging is set up.
    #[must_use]
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn get_config_path() -> PathBuf {
        Self::resolve_config_path(env::var_os(CONFIG_ENV))
    }

    fn resolve_config_path(path_override: Option<OsString>) -> PathBuf {
        if let Some(path) = path_override {
            return PathBuf::from(path);
        }
        if cfg!(windows) {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("C:\\ProgramData"))
                .join("hellocgi")
                .join("config.toml")
        } else {
            PathBuf::from("/etc/hellocgi.toml")
        }
    }

    #[must_use]
    pub fn config_file_path() -> PathBuf { Self::get_config_path() }
}
