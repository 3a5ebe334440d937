//! Product page scraping pipeline.
//!
//! # Architecture
//!
//! ```text
//! URL → ChromeSession (DomProvider) → FieldExtractor → Sanitizer
//!     → marketplace metafields → ProductRecord
//! ```
//!
//! One scrape call owns one browser session: the session is launched at call
//! start, the whole operation is bounded by a single timeout, and the session
//! is closed on every path. Individual field extractions are best effort and
//! degrade to empty values; only navigation failures, a missing product page
//! and missing mandatory fields abort the scrape.

mod chrome;
mod config;
mod extractor;
pub mod provider;
mod sanitize;
mod selectors;

pub use chrome::ChromeSession;
pub use config::ScraperConfig;
pub use extractor::FieldExtractor;
pub use provider::DomProvider;
pub use sanitize::Sanitizer;

use tracing::info;
use url::Url;

use crate::app::{Result, SpindelError};
use crate::domain::ProductRecord;
use crate::marketplace;
use crate::scraper::provider::ProviderError;

/// Check a submitted URL: must parse and carry the configured shop prefix.
pub fn validate_product_url(url: &str, allowed_prefix: &str) -> Result<()> {
    if Url::parse(url).is_err() || !url.starts_with(allowed_prefix) {
        return Err(SpindelError::InvalidUrl(url.to_string()));
    }
    Ok(())
}

/// Scrape one product page end to end.
///
/// Launches a fresh browser session, runs assembly under the configured
/// operation timeout and closes the session before returning.
pub async fn scrape_product(config: &ScraperConfig, url: &str) -> Result<ProductRecord> {
    let session = ChromeSession::launch(config).await?;

    let outcome = tokio::time::timeout(config.scrape_timeout(), assemble(&session, config, url)).await;

    // The session must be released even when assembly timed out mid-flight.
    session.close().await;

    match outcome {
        Ok(result) => result,
        Err(_) => Err(SpindelError::Timeout),
    }
}

/// Navigate and assemble a [`ProductRecord`] from a rendered page.
pub(crate) async fn assemble(
    provider: &dyn DomProvider,
    config: &ScraperConfig,
    url: &str,
) -> Result<ProductRecord> {
    info!("scraping {}", url);

    provider.navigate(url).await.map_err(|e| match e {
        ProviderError::Timeout => SpindelError::Timeout,
        ProviderError::Page(msg) => SpindelError::Browser(msg),
    })?;

    let extractor = FieldExtractor::new(provider, config);

    let is_product = extractor
        .is_product_page()
        .await
        .map_err(|e| SpindelError::Browser(e.to_string()))?;
    if !is_product {
        return Err(SpindelError::NotProductPage);
    }

    let article_number = extractor.article_number().await;
    let name = extractor.name().await;
    let sizes = extractor.sizes().await;
    let images = extractor.images().await;
    let fit_description = extractor.fit_description().await;
    let details_html = Sanitizer::new().sanitize(&extractor.details_html().await);
    let category = extractor.category().await;

    if article_number.is_empty() {
        return Err(SpindelError::NoArticleNumber);
    }
    if name.is_empty() {
        return Err(SpindelError::NoProductName);
    }

    let metafields = marketplace::metafields(&category, &sizes);

    info!(
        %article_number,
        %name,
        sizes = sizes.len(),
        images = images.len(),
        "product extracted"
    );

    Ok(ProductRecord {
        article_number,
        name,
        sizes,
        images,
        fit_description,
        details_html,
        category,
        metafields,
    })
}
