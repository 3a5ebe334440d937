use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the product scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Page load timeout in seconds (default: 30)
    pub page_timeout_secs: u64,

    /// Budget for one whole scrape operation in seconds (default: 120)
    pub scrape_timeout_secs: u64,

    /// Wait time after page load for dynamic content in milliseconds (default: 2000)
    pub settle_ms: u64,

    /// Accepted prefix for submitted product URLs
    pub allowed_url_prefix: String,

    /// Placeholder size labels dropped during extraction
    pub size_stoplist: Vec<String>,

    /// Breadcrumb root labels excluded from the category path
    pub breadcrumb_roots: Vec<String>,

    /// User agent string to use
    pub user_agent: Option<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            headless: true,
            page_timeout_secs: 30,
            scrape_timeout_secs: 120,
            settle_ms: 2000,
            allowed_url_prefix: "https://www.blutsgeschwister.de/de".to_string(),
            size_stoplist: vec!["Größe wählen".to_string(), "Select size".to_string()],
            breadcrumb_roots: vec!["Home".to_string(), "Start".to_string()],
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl ScraperConfig {
    /// Get the page load timeout as a Duration
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    /// Get the whole-operation budget as a Duration
    pub fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(self.scrape_timeout_secs)
    }

    /// Get the settle delay after page load as a Duration
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ScraperConfig::default();
        assert!(config.headless);
        assert_eq!(config.page_timeout_secs, 30);
        assert_eq!(config.scrape_timeout_secs, 120);
        assert_eq!(config.settle_ms, 2000);
        assert!(config
            .allowed_url_prefix
            .starts_with("https://www.blutsgeschwister.de"));
        assert!(config.size_stoplist.contains(&"Größe wählen".to_string()));
        assert_eq!(config.breadcrumb_roots, vec!["Home", "Start"]);
    }

    #[test]
    fn test_timeout_durations() {
        let config = ScraperConfig::default();
        assert_eq!(config.page_timeout(), Duration::from_secs(30));
        assert_eq!(config.scrape_timeout(), Duration::from_secs(120));
        assert_eq!(config.settle_delay(), Duration::from_millis(2000));
    }
}
