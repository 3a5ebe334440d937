use async_trait::async_trait;

/// How to pull a value out of the nodes a selector matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Trimmed text content of every matched node.
    Text,
    /// Inner HTML of the first matched node.
    Html,
    /// DOM property value of every matched node. Property access (rather
    /// than `getAttribute`) makes `src`/`href` come back as absolute URLs.
    Prop(&'static str),
    /// First present attribute from the list, else trimmed text, per node.
    AttrOrText(&'static [&'static str]),
    /// Trimmed texts of the descendant links of the first matched node.
    LinkTexts,
}

/// An ordered selector-fallback chain for one product attribute.
#[derive(Debug, Clone, Copy)]
pub struct FieldQuery {
    /// Attribute name, for logs only.
    pub field: &'static str,
    /// Candidate selectors, tried in order.
    pub selectors: &'static [&'static str],
    /// Per-node extraction rule.
    pub extract: Extract,
    /// When set, a selector whose matches all extract to empty strings does
    /// not stop the chain.
    pub skip_empty: bool,
}

/// Errors reported by the underlying page session.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The page failed to load or settle within the configured budget.
    #[error("page load timed out")]
    Timeout,

    /// Anything else the browser reported.
    #[error("{0}")]
    Page(String),
}

/// Capability interface over a rendered product page.
///
/// The extraction pipeline only ever talks to this trait, so it can be
/// exercised against a fake DOM in tests without a browser. Query errors are
/// absorbed field-by-field by the extractor; navigation errors abort the
/// scrape.
#[async_trait]
pub trait DomProvider: Send + Sync {
    /// Navigate to a URL and wait until the page is loaded and settled.
    async fn navigate(&self, url: &str) -> Result<(), ProviderError>;

    /// Evaluate a selector and return one extracted string per matched node
    /// (empty vec when nothing matches).
    async fn query(&self, selector: &str, extract: Extract) -> Result<Vec<String>, ProviderError>;
}
