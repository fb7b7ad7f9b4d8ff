//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stress-detector/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ApiEndpoint;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DetectorConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub samples: Vec<SampleEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<ApiEndpoint>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub sample_delay_ms: Option<u64>,
    pub notification_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SampleEntry {
    pub text: String,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "https://stress-detector-backend.onrender.com";
pub const DEFAULT_SAMPLE_DELAY_MS: u64 = 500;
pub const DEFAULT_NOTIFICATION_SECS: u64 = 5;

pub const DEFAULT_SAMPLES: &[&str] = &[
    "I have three exams tomorrow and I haven't slept in two days. I don't know how I'm going to get through this.",
    "Just got back from a relaxing hike with friends, the weather was perfect today!",
    "My boss keeps piling on work and I feel like I'm drowning. I can't stop worrying about losing my job.",
    "Enjoying a quiet Sunday morning with coffee and a good book.",
    "Rent is due, my car broke down and I can't afford either. Everything is falling apart.",
];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub endpoint: ApiEndpoint,
    pub sample_delay: Duration,
    pub notification_ttl: Duration,
    pub samples: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&DetectorConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub endpoint: Option<ApiEndpoint>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stress-detector/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stress-detector").join("config.toml"))
}

/// Load config from `~/.stress-detector/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DetectorConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DetectorConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DetectorConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DetectorConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DetectorConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DetectorConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Stress Detector Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://stress-detector-backend.onrender.com"   # Or set STRESS_API_BASE_URL
# endpoint = "predict"               # "predict" (/predict) or "api-predict" (/api/predict)

# [ui]
# sample_delay_ms = 500              # Pause between picking a sample and analyzing it
# notification_secs = 5              # How long alerts stay on screen

# [[samples]]
# text = "I have three exams tomorrow and I haven't slept in two days."

# [[samples]]
# text = "Enjoying a quiet Sunday morning with coffee and a good book."
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Environment variable that overrides the configured base URL.
pub const API_BASE_URL_ENV: &str = "STRESS_API_BASE_URL";

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DetectorConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var(API_BASE_URL_ENV).ok())
}

fn resolve_with_env(
    config: &DetectorConfig,
    cli: &CliOverrides,
    env_base_url: Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli
        .api_url
        .clone()
        .or(env_base_url)
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // Endpoint: CLI → config → default
    let endpoint = cli.endpoint.or(config.api.endpoint).unwrap_or_default();

    let samples = if config.samples.is_empty() {
        DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect()
    } else {
        config.samples.iter().map(|s| s.text.clone()).collect()
    };

    ResolvedConfig {
        api_base_url,
        endpoint,
        sample_delay: Duration::from_millis(
            config.ui.sample_delay_ms.unwrap_or(DEFAULT_SAMPLE_DELAY_MS),
        ),
        notification_ttl: Duration::from_secs(
            config
                .ui
                .notification_secs
                .unwrap_or(DEFAULT_NOTIFICATION_SECS),
        ),
        samples,
    }
}
