use std::path::{Path, PathBuf};

use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::presentation::config::{keybindings::KeyBindings, styles::Styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const JUDGE_URL_ENV: &str = "CODRUSH_JUDGE_URL";
pub const JUDGE_HOST_ENV: &str = "CODRUSH_JUDGE_HOST";
pub const JUDGE_KEY_ENV: &str = "CODRUSH_JUDGE_KEY";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Connection and polling settings for the judge backend
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    pub base_url: String,
    pub host: String,
    pub api_key: SecretString,
    pub poll_interval_ms: u64,
    pub max_polls: u32,
    pub request_timeout_secs: u64,
}

/// Mirrors the `judge` section of the embedded defaults
impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://judge0-ce.p.rapidapi.com/submissions".to_string(),
            host: "judge0-ce.p.rapidapi.com".to_string(),
            api_key: SecretString::from(String::new()),
            poll_interval_ms: 2000,
            max_polls: 60,
            request_timeout_secs: 30,
        }
    }
}

/// Initial editor selections; both accept the same selectors as the CLI
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub judge: JudgeConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Layer the embedded defaults, any config file in `config_dir`, and the
    /// judge environment variables looked up through `env`.
    pub fn load(
        config_dir: &Path,
        data_dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        // Embedded defaults sit below every user file
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        cfg.apply_env(env);

        if cfg.judge.base_url.trim().is_empty() {
            return Err(ConfigError::NotFound(String::from("judge.base_url")));
        }
        if cfg.judge.api_key.expose_secret().is_empty() {
            log::warn!("No judge API key configured; requests are sent without credentials");
        }

        Ok(cfg)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(JUDGE_URL_ENV) {
            self.judge.base_url = url;
        }
        if let Some(host) = non_empty(JUDGE_HOST_ENV) {
            self.judge.host = host;
        }
        if let Some(key) = non_empty(JUDGE_KEY_ENV) {
            self.judge.api_key = SecretString::from(key);
        }
    }
}
