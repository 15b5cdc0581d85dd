//! Handles settings for the application. Configuration is read from
//! `settings.toml` when present and can be overridden with `DOLLARBOT_`
//! environment variables (`DOLLARBOT_SERVER__PORT=8080`).
//!
//! See `settings.example.toml` for the configuration.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    Memory,
    Json(String),
}

impl Default for Storage {
    fn default() -> Self {
        Storage::Json("expense_record.json".to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Format {
    pub date: String,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            date: engine::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub storage: Storage,
    pub format: Format,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 5000,
            storage: Storage::default(),
            format: Format::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("DOLLARBOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
