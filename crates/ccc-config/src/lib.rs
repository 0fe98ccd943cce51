//! Configuration management for the CCC reader.
//!
//! Parses `ccc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `store.path`
//! - `routes.page_prefix`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override store file path.
    pub store_path: Option<PathBuf>,
    /// Override page route prefix.
    pub page_prefix: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ccc.toml";

/// Default store file, relative to the config directory.
const DEFAULT_STORE_PATH: &str = "ccc.json";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store configuration (path is a relative string from TOML).
    store: StoreConfigRaw,
    /// Route configuration.
    pub routes: RoutesConfig,
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Resolved store configuration (set after loading).
    #[serde(skip)]
    pub store_resolved: StoreConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw store configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StoreConfigRaw {
    path: Option<String>,
}

/// Resolved store configuration with an absolute path.
#[derive(Debug, Default)]
pub struct StoreConfig {
    /// JSON document store file.
    pub path: PathBuf,
}

/// Route configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Prefix of page paths (`<prefix>/<slug>`), without trailing slash.
    pub page_prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            page_prefix: "/p".to_owned(),
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Text shown inside cross-reference links.
    pub anchor_text: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            anchor_text: "⇒".to_owned(),
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
        /// Config field path (e.g., "`store.path`").
        field: String,
        /// Error message (e.g., "${`CCC_DATA`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ccc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
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
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(store_path) = &settings.store_path {
            self.store_resolved.path.clone_from(store_path);
        }
        if let Some(page_prefix) = &settings.page_prefix {
            self.routes.page_prefix.clone_from(page_prefix);
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            store: StoreConfigRaw::default(),
            routes: RoutesConfig::default(),
            render: RenderConfig::default(),
            store_resolved: StoreConfig {
                path: base.join(DEFAULT_STORE_PATH),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
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
        if self.store_resolved.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "store.path cannot be empty".to_owned(),
            ));
        }
        self.validate_routes()?;
        require_non_empty(&self.render.anchor_text, "render.anchor_text")?;
        Ok(())
    }

    /// Validate route configuration.
    ///
    /// An empty prefix is allowed and puts pages at the root (`/<slug>`).
    fn validate_routes(&self) -> Result<(), ConfigError> {
        let prefix = &self.routes.page_prefix;
        if prefix.is_empty() {
            return Ok(());
        }
        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "routes.page_prefix must start with /".to_owned(),
            ));
        }
        if prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "routes.page_prefix must not end with /".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.store.path {
            self.store.path = Some(expand::expand_env(path, "store.path")?);
        }
        self.routes.page_prefix =
            expand::expand_env(&self.routes.page_prefix, "routes.page_prefix")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.store_resolved = StoreConfig {
            path: config_dir.join(self.store.path.as_deref().unwrap_or(DEFAULT_STORE_PATH)),
        };
    }
}
