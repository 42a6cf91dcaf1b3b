use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Remote schedule endpoint
    pub endpoint: EndpointConfig,

    /// Calendar display settings
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// URL of the sheet web app that stores schedule entries.
    ///
    /// Can also be set via the ROSTER_ENDPOINT_URL environment variable,
    /// which takes precedence over the config file.
    pub url: String,

    /// Allow invalid/self-signed certificates (DEVELOPMENT ONLY)
    ///
    /// WARNING: This is a security risk. Only enable for local development
    /// with self-signed certificates. Never enable in production.
    ///
    /// This setting only takes effect in debug builds.
    #[serde(default)]
    pub allow_invalid_certs: bool,
}

impl EndpointConfig {
    /// Check if an endpoint URL is configured (not the placeholder)
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.url.starts_with("YOUR_")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Day-of-week names, Sunday first.
    ///
    /// Overridable for localization; must contain exactly 7 entries.
    #[serde(default = "default_day_names")]
    pub day_names: Vec<String>,
}

fn default_day_names() -> Vec<String> {
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            day_names: default_day_names(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roster");

        Self {
            config_dir,
            endpoint: EndpointConfig {
                url: std::env::var("ROSTER_ENDPOINT_URL")
                    .unwrap_or_else(|_| "YOUR_WEB_APP_URL".to_string()),
                allow_invalid_certs: false, // Safe default
            },
            calendar: CalendarConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;

        // Environment takes precedence over the file
        if let Ok(url) = std::env::var("ROSTER_ENDPOINT_URL") {
            config.endpoint.url = url;
        }

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !self.endpoint.is_configured() {
            result.add_error(
                "endpoint.url",
                "No endpoint URL configured. Set it in config.toml or via ROSTER_ENDPOINT_URL.",
            );
        } else {
            self.validate_url(&self.endpoint.url, "endpoint.url", &mut result);
        }

        if self.endpoint.allow_invalid_certs {
            result.add_warning(
                "endpoint.allow_invalid_certs",
                "Certificate validation is disabled - development only",
            );
        }

        if self.calendar.day_names.len() != 7 {
            result.add_error(
                "calendar.day_names",
                format!(
                    "Day name table must have exactly 7 entries, got {}",
                    self.calendar.day_names.len()
                ),
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("roster");
        Ok(config_dir.join("config.toml"))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }
}
