use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::app::{Result, SpindelError};
use crate::scraper::config::ScraperConfig;
use crate::scraper::provider::{DomProvider, Extract, ProviderError};

/// One headless-Chrome session, scoped to a single scrape call.
///
/// Launched at call start and closed on every path; there is no pooling or
/// cross-request reuse.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    page_timeout: Duration,
    settle: Duration,
}

impl ChromeSession {
    /// Launch a browser and open a blank page, ready for navigation.
    pub async fn launch(config: &ScraperConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer");

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| SpindelError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            SpindelError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        // Drain browser events for the lifetime of the session
        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| SpindelError::Browser(format!("Failed to create page: {}", e)))?;

        if let Some(ref ua) = config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| SpindelError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        Ok(Self {
            browser,
            page,
            handler_task,
            page_timeout: config.page_timeout(),
            settle: config.settle_delay(),
        })
    }

    /// Close the browser. Must be called on every scrape path; errors during
    /// shutdown are logged, not surfaced.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            debug!("browser close failed: {}", e);
        }
        self.handler_task.abort();
    }
}

#[async_trait]
impl DomProvider for ChromeSession {
    async fn navigate(&self, url: &str) -> std::result::Result<(), ProviderError> {
        let load = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| ProviderError::Page(format!("Navigation failed: {}", e)))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| ProviderError::Page(format!("Navigation failed: {}", e)))?;
            Ok::<_, ProviderError>(())
        };

        tokio::time::timeout(self.page_timeout, load)
            .await
            .map_err(|_| ProviderError::Timeout)??;

        // Give client-side rendering time to fill the product blocks
        tokio::time::sleep(self.settle).await;
        Ok(())
    }

    async fn query(&self, selector: &str, extract: Extract) -> std::result::Result<Vec<String>, ProviderError> {
        let script = query_script(selector, extract);
        let values: Vec<String> = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| ProviderError::Page(format!("Script execution failed: {}", e)))?
            .into_value()
            .map_err(|e| ProviderError::Page(format!("Failed to parse result: {:?}", e)))?;
        Ok(values)
    }
}

/// Build the in-page JavaScript for one selector query.
///
/// Runs `querySelectorAll` in the browser context and maps each node through
/// the extraction rule, returning a JSON array of strings.
fn query_script(selector: &str, extract: Extract) -> String {
    let sel = escape_js(selector);

    let mapper = match extract {
        Extract::Text => "els.map(el => (el.textContent || '').trim())".to_string(),
        Extract::Html => "els.slice(0, 1).map(el => (el.innerHTML || '').trim())".to_string(),
        Extract::Prop(prop) => format!(
            "els.map(el => el['{}'] ? String(el['{}']) : '')",
            escape_js(prop),
            escape_js(prop)
        ),
        Extract::AttrOrText(attrs) => {
            let attr_chain = attrs
                .iter()
                .map(|attr| format!("el.getAttribute('{}')", escape_js(attr)))
                .collect::<Vec<_>>()
                .join(" || ");
            format!("els.map(el => {} || (el.textContent || '').trim())", attr_chain)
        }
        // A matched container without links still reports one (empty) value,
        // so the fallback chain stops at it; the extractor drops empties.
        Extract::LinkTexts => "els.slice(0, 1).flatMap(el => { \
             const texts = Array.from(el.querySelectorAll('a')).map(a => (a.textContent || '').trim()); \
             return texts.length ? texts : ['']; \
         })"
            .to_string(),
    };

    format!(
        r#"
        (() => {{
            const els = Array.from(document.querySelectorAll('{sel}'));
            return {mapper};
        }})()
        "#
    )
}

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_script_text() {
        let script = query_script("h1.product-title", Extract::Text);
        assert!(script.contains("querySelectorAll('h1.product-title')"));
        assert!(script.contains("textContent"));
    }

    #[test]
    fn test_query_script_escapes_quotes() {
        let script = query_script("[itemprop='sku']", Extract::Text);
        assert!(script.contains(r"[itemprop=\'sku\']"));
    }

    #[test]
    fn test_query_script_attr_preference_chain() {
        let script = query_script(
            "[data-product-id]",
            Extract::AttrOrText(&["data-product-id", "data-article-number"]),
        );
        assert!(script.contains("el.getAttribute('data-product-id')"));
        assert!(script.contains("el.getAttribute('data-article-number')"));
        // Text content is the final fallback
        assert!(script.contains("(el.textContent || '').trim()"));
    }

    #[test]
    fn test_query_script_prop_uses_property_access() {
        let script = query_script("img[src]", Extract::Prop("src"));
        assert!(script.contains("el['src']"));
        assert!(!script.contains("getAttribute('src')"));
    }

    #[test]
    fn test_query_script_link_texts_walks_descendants() {
        let script = query_script(".breadcrumb", Extract::LinkTexts);
        assert!(script.contains("querySelectorAll('a')"));
        assert!(script.contains("slice(0, 1)"));
    }
}
