use renalog_core::maintenance::MaintenanceSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Backend API connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL (e.g. "https://api.renalog.example")
    pub base_url: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Returns true if the backend is reachable in principle (has both
    /// base_url and api_key)
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.api_key.is_some()
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory holding the local record snapshot and saved reports
    pub data_dir: ConfigValue<PathBuf>,
    /// Directory exports are written into
    pub export_dir: ConfigValue<PathBuf>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    /// Backend API settings
    pub api: ApiConfig,
    /// Maintenance gate settings (global flag, message, per-page map)
    pub maintenance: MaintenanceSettings,
}

/// Internal struct for deserializing the config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    export_dir: Option<PathBuf>,
    api: Option<ApiConfig>,
    maintenance: Option<MaintenanceSettings>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut data_dir = ConfigValue::new(Self::default_data_dir(), ConfigSource::Default);
        let mut export_dir = ConfigValue::new(
            Self::default_data_dir().join("exports"),
            ConfigSource::Default,
        );
        let mut config_file = None;
        let mut api = ApiConfig::default();
        let mut maintenance = MaintenanceSettings::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(dir) = file_config.data_dir {
                data_dir = ConfigValue::new(resolve_relative(&path, dir), ConfigSource::File);
            }
            if let Some(dir) = file_config.export_dir {
                export_dir = ConfigValue::new(resolve_relative(&path, dir), ConfigSource::File);
            }
            if let Some(api_config) = file_config.api {
                api = api_config;
            }
            if let Some(settings) = file_config.maintenance {
                maintenance = settings;
            }
        }

        // Apply environment variable overrides
        if let Ok(dir) = std::env::var("RENA_DATA_DIR") {
            data_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(dir) = std::env::var("RENA_EXPORT_DIR") {
            export_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(url) = std::env::var("RENA_API_URL") {
            api.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("RENA_API_KEY") {
            api.api_key = Some(key);
        }
        if let Ok(flag) = std::env::var("RENA_MAINTENANCE_MODE") {
            maintenance.enabled = parse_bool_flag(&flag);
        }
        if let Ok(message) = std::env::var("RENA_MAINTENANCE_MESSAGE") {
            maintenance.message = Some(message);
        }

        Ok(Self {
            data_dir,
            export_dir,
            config_file,
            api,
            maintenance,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/rena/
    /// - macOS: ~/Library/Application Support/rena/
    /// - Windows: %APPDATA%/rena/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rena")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/rena/
    /// - macOS: ~/Library/Application Support/rena/
    /// - Windows: %APPDATA%/rena/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rena")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

/// Resolve relative paths against the config file's directory
fn resolve_relative(config_path: &std::path::Path, dir: PathBuf) -> PathBuf {
    if dir.is_relative() {
        config_path.parent().map(|p| p.join(&dir)).unwrap_or(dir)
    } else {
        dir
    }
}

fn parse_bool_flag(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
