//! Selector chains for the storefront's product markup.
//!
//! Each attribute has an ordered candidate list; the first selector that
//! matches at least one node wins. Later entries cover older generations of
//! the shop markup.

use crate::scraper::provider::{Extract, FieldQuery};

/// At least one of these must match for a page to count as a product page.
pub const PRODUCT_MARKERS: &[&str] = &[
    ".product-detail",
    ".product-information",
    ".product-gallery",
    "h1.product-title",
    "[data-product-id]",
];

/// A matched node with an empty id does not stop the chain (`skip_empty`):
/// some layouts carry the marker attribute on a wrapper without a value.
pub const ARTICLE_NUMBER: FieldQuery = FieldQuery {
    field: "article_number",
    selectors: &[
        "[data-product-id]",
        "[data-article-number]",
        ".product-number",
        ".sku",
        "[itemprop=\"sku\"]",
    ],
    extract: Extract::AttrOrText(&["data-product-id", "data-article-number"]),
    skip_empty: true,
};

pub const NAME: FieldQuery = FieldQuery {
    field: "name",
    selectors: &[
        "h1.product-title",
        "h1.product-name",
        ".product-detail h1",
        "[itemprop=\"name\"]",
        ".product-name",
    ],
    extract: Extract::Text,
    skip_empty: false,
};

pub const SIZES: FieldQuery = FieldQuery {
    field: "sizes",
    selectors: &[
        ".size-selector option:not([disabled])",
        ".size-options .available",
        "[data-size]",
        ".variant-size",
        ".size-variant",
    ],
    extract: Extract::Text,
    skip_empty: false,
};

pub const IMAGES: FieldQuery = FieldQuery {
    field: "images",
    selectors: &[
        ".product-gallery img[src]",
        ".product-images img[src]",
        ".gallery-image[src]",
        "[data-image-role=\"product\"] img[src]",
        ".product-detail img[src]",
    ],
    extract: Extract::Prop("src"),
    skip_empty: false,
};

pub const FIT_DESCRIPTION: FieldQuery = FieldQuery {
    field: "fit_description",
    selectors: &[
        ".product-fit-description",
        ".product-description",
        ".description",
        "[data-description]",
        ".fit-info",
    ],
    extract: Extract::Text,
    skip_empty: false,
};

pub const DETAILS: FieldQuery = FieldQuery {
    field: "details",
    selectors: &[
        ".product-details",
        ".product-information",
        ".details",
        "[data-details]",
        ".product-attributes",
    ],
    extract: Extract::Html,
    skip_empty: false,
};

pub const CATEGORY: FieldQuery = FieldQuery {
    field: "category",
    selectors: &[
        ".breadcrumb",
        ".breadcrumbs",
        "[data-breadcrumbs]",
        ".product-category",
    ],
    extract: Extract::LinkTexts,
    skip_empty: false,
};
