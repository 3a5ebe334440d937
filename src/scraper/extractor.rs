use tracing::warn;

use crate::scraper::config::ScraperConfig;
use crate::scraper::provider::{DomProvider, Extract, FieldQuery, ProviderError};
use crate::scraper::selectors;

/// Pulls individual product attributes out of a rendered page.
///
/// Every attribute is resolved through one generic fallback routine over its
/// [`FieldQuery`] chain. Extraction is best effort: a provider error inside a
/// field degrades that field to its empty value and is only logged. Absence
/// of mandatory fields is judged later, at the record level.
pub struct FieldExtractor<'a> {
    provider: &'a dyn DomProvider,
    config: &'a ScraperConfig,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(provider: &'a dyn DomProvider, config: &'a ScraperConfig) -> Self {
        Self { provider, config }
    }

    /// Whether the page carries any of the known product markers.
    ///
    /// Unlike field extraction this is a hard check: a provider error here
    /// aborts the scrape.
    pub async fn is_product_page(&self) -> Result<bool, ProviderError> {
        for selector in selectors::PRODUCT_MARKERS {
            if !self.provider.query(selector, Extract::Text).await?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub async fn article_number(&self) -> String {
        self.first_match(&selectors::ARTICLE_NUMBER)
            .await
            .into_iter()
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    pub async fn name(&self) -> String {
        self.first_match(&selectors::NAME)
            .await
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// All size labels in DOM order, minus stoplisted placeholders.
    /// Duplicates are kept.
    pub async fn sizes(&self) -> Vec<String> {
        self.first_match(&selectors::SIZES)
            .await
            .into_iter()
            .filter(|size| !size.is_empty() && !self.config.size_stoplist.contains(size))
            .collect()
    }

    /// Image URLs in DOM order, restricted to absolute http(s) sources.
    pub async fn images(&self) -> Vec<String> {
        self.first_match(&selectors::IMAGES)
            .await
            .into_iter()
            .filter(|src| src.starts_with("http://") || src.starts_with("https://"))
            .collect()
    }

    pub async fn fit_description(&self) -> String {
        self.first_match(&selectors::FIT_DESCRIPTION)
            .await
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// Raw inner HTML of the details block; sanitized by the assembler.
    pub async fn details_html(&self) -> String {
        self.first_match(&selectors::DETAILS)
            .await
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// Breadcrumb path joined with `" > "`, root labels excluded.
    pub async fn category(&self) -> String {
        self.first_match(&selectors::CATEGORY)
            .await
            .into_iter()
            .filter(|segment| {
                !segment.is_empty() && !self.config.breadcrumb_roots.contains(segment)
            })
            .collect::<Vec<_>>()
            .join(" > ")
    }

    /// Evaluate a fallback chain: the first selector that matches at least
    /// one node wins. With `skip_empty`, a selector whose matches all
    /// extract to empty strings does not stop the chain.
    async fn first_match(&self, query: &FieldQuery) -> Vec<String> {
        for selector in query.selectors {
            match self.provider.query(selector, query.extract).await {
                Ok(values) => {
                    if values.is_empty() {
                        continue;
                    }
                    if query.skip_empty && values.iter().all(|v| v.is_empty()) {
                        continue;
                    }
                    return values;
                }
                Err(e) => {
                    warn!(
                        field = query.field,
                        selector, error = %e,
                        "field extraction failed, degrading to empty"
                    );
                    return Vec::new();
                }
            }
        }
        Vec::new()
    }
}
