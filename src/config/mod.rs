//! Configuration management for Spindel.
//!
//! Configuration is read from `~/.config/spindel/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Missing fields in the config file use default values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::scraper::ScraperConfig;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub scraper: ScraperConfig,
}

/// Settings for the HTTP serving layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server binds to (default: 0.0.0.0:8000)
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/spindel/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("spindel").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Spindel Configuration

[server]
# Address the web server binds to
bind = "0.0.0.0:8000"

[scraper]
# Run browser in headless mode (no visible window)
headless = true

# Page load timeout in seconds
page_timeout_secs = 30

# Budget for one whole scrape operation in seconds
scrape_timeout_secs = 120

# Wait time after page load for dynamic content (milliseconds)
settle_ms = 2000

# Submitted product URLs must start with this prefix
allowed_url_prefix = "https://www.blutsgeschwister.de/de"

# Placeholder size labels dropped during extraction
size_stoplist = ["Größe wählen", "Select size"]

# Breadcrumb root labels excluded from the category path
breadcrumb_roots = ["Home", "Start"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert_eq!(config.scraper.page_timeout_secs, 30);
        assert_eq!(
            config.scraper.allowed_url_prefix,
            "https://www.blutsgeschwister.de/de"
        );
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[scraper]
headless = false
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert!(!config.scraper.headless);
        // Default values
        assert_eq!(config.scraper.scrape_timeout_secs, 120);
        assert_eq!(config.server.bind, "0.0.0.0:8000");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.scraper.settle_ms, 2000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbind = \"127.0.0.1:9000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:9000");
    }

    #[test]
    fn test_load_from_invalid_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server = not toml").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
