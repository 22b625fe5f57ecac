use serde::Deserialize;
use std::fs;

pub const PAGE_TITLE: &str = "House Price Prediction";

/// Settings read from the environment at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_app_version")]
    pub app_version: String,
    /// Base address of the prediction service; `/predict` is appended.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Directory served read-only under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default = "default_ip_address")]
    pub ip_address: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector; span export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_api_url() -> String {
    "http://localhost:8000/latest".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_ip_address() -> String {
    "127.0.0.1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        service_core::config::load()
    }
}

/// Read-only page metadata shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
    pub title: String,
    pub version: String,
    pub hostname: String,
    pub ip_address: String,
}

impl AppMetadata {
    pub fn from_settings(settings: &Settings) -> Self {
        let hostname = settings
            .hostname
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(system_hostname);

        Self {
            title: PAGE_TITLE.to_string(),
            version: settings.app_version.clone(),
            hostname,
            ip_address: settings.ip_address.clone(),
        }
    }
}

fn system_hostname() -> String {
    fs::read_to_string("/etc/hostname")
        .ok()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
