use anyhow::{Context, Result, anyhow};
use chrono::Locale;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::format::time::parse_locale;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "CLIMA_API_KEY";

/// Connection details the OpenWeather source needs.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_key: String,
    pub base_url: String,
    pub lang: String,
    pub timeout: Duration,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// lang = "pt_br"
/// locale = "pt-BR"
/// units = "metric"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Response language sent with every request.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Locale used for month and weekday names.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Unit system used when the caller does not pick one.
    #[serde(default = "default_units")]
    pub units: String,

    #[serde(default = "default_icon_base")]
    pub icon_base: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5/".to_string()
}

fn default_lang() -> String {
    "pt_br".to_string()
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_icon_base() -> String {
    "./src/assets/icons".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            lang: default_lang(),
            locale: default_locale(),
            units: default_units(),
            icon_base: default_icon_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults on first run), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env_key(std::env::var(API_KEY_ENV).ok());
        Ok(cfg)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "clima", "clima")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// A non-empty key from the environment wins over the stored one.
    pub fn apply_env_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn api_settings(&self) -> Result<ApiSettings> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: run `clima configure` or set {API_KEY_ENV}."
                )
            })?;

        Ok(ApiSettings {
            api_key: api_key.to_owned(),
            base_url: self.base_url.clone(),
            lang: self.lang.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }

    pub fn locale(&self) -> Result<Locale> {
        parse_locale(&self.locale)
            .with_context(|| format!("Invalid locale '{}' in configuration", self.locale))
    }
}
