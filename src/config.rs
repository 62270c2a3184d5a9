use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::gallery::urls::DEFAULT_BASE_URL;
use crate::gallery::VideoItem;
use crate::pricing::Tariff;

pub const DEFAULT_CONFIG_FILE: &str = "studiofolio.toml";
pub const ENV_PREFIX: &str = "STUDIOFOLIO";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Overrides the standard tariff when present
    #[serde(default)]
    pub pricing: Option<Tariff>,
    /// Shown when a video folder is unavailable or empty
    #[serde(default)]
    pub fallback_videos: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CloudinaryConfig {
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_folder")]
    pub default_folder: String,
    #[serde(default = "default_featured_folder")]
    pub featured_folder: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: default_cloud_name(),
            base_url: default_base_url(),
            default_folder: default_folder(),
            featured_folder: default_featured_folder(),
            timeout_seconds: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl RelayConfig {
    /// True when every identifier the relay needs is filled in
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_cloud_name() -> String {
    "dujg9rmfh".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_folder() -> String {
    "album library".to_string()
}

fn default_featured_folder() -> String {
    "featured".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_relay_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Load configuration from `path` (or `studiofolio.toml` if present) and
/// `STUDIOFOLIO__SECTION__KEY` environment variables.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.cloudinary.cloud_name.trim().is_empty() {
        anyhow::bail!("cloudinary.cloud_name cannot be empty");
    }

    if cfg.cloudinary.cloud_name.contains('/') {
        anyhow::bail!("cloudinary.cloud_name cannot contain '/'");
    }

    if cfg.cloudinary.default_folder.trim().is_empty() {
        anyhow::bail!("cloudinary.default_folder cannot be empty");
    }

    if cfg.cloudinary.timeout_seconds == 0 {
        anyhow::bail!("cloudinary.timeout_seconds must be greater than zero");
    }

    if cfg.relay.timeout_seconds == 0 {
        anyhow::bail!("relay.timeout_seconds must be greater than zero");
    }

    match cfg.logging.format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}', expected 'text' or 'json'", other),
    }

    if let Some(tariff) = &cfg.pricing {
        tariff.validate()?;
    }

    Ok(())
}
