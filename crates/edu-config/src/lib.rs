//! Configuration management for the study portal.
//!
//! Parses `edu.toml` with serde and discovers it in the current directory
//! or any parent. Without a file, defaults apply.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `genai.api_key`, `genai.model` and `genai.base_url` support
//! `${VAR}` (error if unset) and `${VAR:-default}`. The API key defaults to
//! `${GEMINI_API_KEY:-}`, so an exported key works without any config file.

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "edu.toml";

/// Name of the resources file inside the data directory.
const RESOURCES_FILENAME: &str = "resources.json";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override API key.
    pub api_key: Option<String>,
    /// Override model name.
    pub model: Option<String>,
    /// Override data directory.
    pub data_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative API configuration.
    pub genai: GenAiConfig,
    /// Storage configuration as written in TOML.
    storage: StorageConfigRaw,
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Resolved storage configuration (set after loading).
    #[serde(skip)]
    pub storage_resolved: StorageConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Generative API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    /// API key; empty means generation is disabled.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// API base URL.
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: "${GEMINI_API_KEY:-}".to_owned(),
            model: "gemini-2.5-flash".to_owned(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

impl GenAiConfig {
    /// API key, if one is configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }

    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StorageConfigRaw {
    data_dir: Option<String>,
    persist: Option<bool>,
}

/// Resolved storage configuration.
#[derive(Debug, Default)]
pub struct StorageConfig {
    /// Directory holding persisted data.
    pub data_dir: PathBuf,
    /// Whether uploads are written to disk.
    pub persist: bool,
}

impl StorageConfig {
    /// Resources file path (`<data_dir>/resources.json`).
    #[must_use]
    pub fn resources_path(&self) -> PathBuf {
        self.data_dir.join(RESOURCES_FILENAME)
    }
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// CSS class of the wrapping `<div>` for rendered documents.
    pub wrapper_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wrapper_class: "markdown-body".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`genai.api_key`").
        field: String,
        /// Error message (e.g., "${`GEMINI_API_KEY`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `edu.toml` in the current directory and its parents, falling back
    /// to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or a value is out of range.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            let mut config = Self::default_with_cwd();
            config.expand_env_vars()?;
            config
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_key) = &settings.api_key {
            self.genai.api_key.clone_from(api_key);
        }
        if let Some(model) = &settings.model {
            self.genai.model.clone_from(model);
        }
        if let Some(data_dir) = &settings.data_dir {
            self.storage_resolved.data_dir.clone_from(data_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            genai: GenAiConfig::default(),
            storage: StorageConfigRaw::default(),
            render: RenderConfig::default(),
            storage_resolved: StorageConfig {
                data_dir: base.join(".edu"),
                persist: true,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_genai()?;
        require_non_empty(&self.render.wrapper_class, "render.wrapper_class")?;
        Ok(())
    }

    fn validate_genai(&self) -> Result<(), ConfigError> {
        const MAX_TEMPERATURE: f64 = 2.0;

        require_non_empty(&self.genai.model, "genai.model")?;
        require_non_empty(&self.genai.base_url, "genai.base_url")?;
        require_http_url(&self.genai.base_url, "genai.base_url")?;

        if !(0.0..=MAX_TEMPERATURE).contains(&self.genai.temperature) {
            return Err(ConfigError::Validation(format!(
                "genai.temperature must be between 0.0 and {MAX_TEMPERATURE:.1}"
            )));
        }
        if self.genai.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "genai.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.genai.api_key = expand::expand_env(&self.genai.api_key, "genai.api_key")?;
        self.genai.model = expand::expand_env(&self.genai.model, "genai.model")?;
        self.genai.base_url = expand::expand_env(&self.genai.base_url, "genai.base_url")?;
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.storage_resolved = StorageConfig {
            data_dir: config_dir.join(self.storage.data_dir.as_deref().unwrap_or(".edu")),
            persist: self.storage.persist.unwrap_or(true),
        };
    }
}
