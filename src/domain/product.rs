use serde::Serialize;

/// A single scraped product.
///
/// Missing data is represented by empty strings / empty vectors, never by
/// `Option` — the exporters rely on every field being present. Order of
/// `sizes` and `images` is DOM order; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductRecord {
    pub article_number: String,
    pub name: String,
    pub sizes: Vec<String>,
    pub images: Vec<String>,
    pub fit_description: String,
    /// Sanitized HTML fragment: no scripts, styles or comments, whitespace
    /// collapsed to single spaces.
    pub details_html: String,
    /// Breadcrumb segments joined with `" > "`, root labels excluded.
    pub category: String,
    pub metafields: Metafields,
}

/// Google-Shopping metafields attached to a record.
///
/// The key set is fixed; [`pairs`](Metafields::pairs) yields the prefixed
/// keys in the order the XML feed expects them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metafields {
    pub age_group: String,
    pub brand: String,
    pub condition: String,
    pub gender: String,
    pub google_product_category: String,
    pub size: String,
    pub google_product_type: String,
    pub tags: String,
}

impl Metafields {
    pub fn pairs(&self) -> [(&'static str, &str); 8] {
        [
            ("meta_google:age_group", self.age_group.as_str()),
            ("meta_google:brand", self.brand.as_str()),
            ("meta_google:condition", self.condition.as_str()),
            ("meta_google:gender", self.gender.as_str()),
            (
                "meta_google:google_product_category",
                self.google_product_category.as_str(),
            ),
            ("meta_google:size", self.size.as_str()),
            (
                "meta_google:google_product_type",
                self.google_product_type.as_str(),
            ),
            ("meta_google:tags", self.tags.as_str()),
        ]
    }
}
