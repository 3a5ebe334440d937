//! Marketplace metadata derivation.
//!
//! Maps the storefront's breadcrumb categories onto the Google Shopping
//! taxonomy and assembles the fixed metafield set that the XML feed carries
//! under the `g:` namespace.

use crate::domain::Metafields;

/// Brand constant, also used for the merchant columns of the CSV export.
pub const BRAND: &str = "Blutsgeschwister";

const DEFAULT_TAXONOMY: &str = "Apparel & Accessories > Clothing";

/// Ordered substring rules; the first match wins.
const TAXONOMY_RULES: &[(&str, &str)] = &[
    ("kleider", "Apparel & Accessories > Clothing > Dresses"),
    ("hosen", "Apparel & Accessories > Clothing > Pants"),
    ("jacken", "Apparel & Accessories > Clothing > Jackets"),
];

/// Map a breadcrumb category onto the Google product taxonomy.
///
/// Case-insensitive substring match; falls back to the generic clothing
/// category, so this never fails.
pub fn map_to_taxonomy(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    TAXONOMY_RULES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, taxonomy)| *taxonomy)
        .unwrap_or(DEFAULT_TAXONOMY)
}

/// Assemble the fixed metafield set for a scraped product.
pub fn metafields(category: &str, sizes: &[String]) -> Metafields {
    Metafields {
        age_group: "Erwachsener".into(),
        brand: BRAND.into(),
        condition: "New".into(),
        gender: "Female".into(),
        google_product_category: map_to_taxonomy(category).into(),
        size: sizes.join(", "),
        google_product_type: category.split(" > ").last().unwrap_or("").into(),
        tags: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_known_categories() {
        assert_eq!(
            map_to_taxonomy("Mode > Kleider"),
            "Apparel & Accessories > Clothing > Dresses"
        );
        assert_eq!(
            map_to_taxonomy("Mode > Hosen"),
            "Apparel & Accessories > Clothing > Pants"
        );
        assert_eq!(
            map_to_taxonomy("Mode > Jacken"),
            "Apparel & Accessories > Clothing > Jackets"
        );
    }

    #[test]
    fn test_taxonomy_is_case_insensitive() {
        assert_eq!(
            map_to_taxonomy("KLEIDER"),
            "Apparel & Accessories > Clothing > Dresses"
        );
    }

    #[test]
    fn test_taxonomy_first_rule_wins() {
        // A path mentioning both dresses and pants maps to dresses.
        assert_eq!(
            map_to_taxonomy("Kleider > Hosen"),
            "Apparel & Accessories > Clothing > Dresses"
        );
    }

    #[test]
    fn test_taxonomy_default_for_unknown_and_empty() {
        assert_eq!(map_to_taxonomy("Accessoires"), DEFAULT_TAXONOMY);
        assert_eq!(map_to_taxonomy(""), DEFAULT_TAXONOMY);
    }

    #[test]
    fn test_metafields_static_values() {
        let meta = metafields("Mode > Kleider", &[]);
        assert_eq!(meta.age_group, "Erwachsener");
        assert_eq!(meta.brand, "Blutsgeschwister");
        assert_eq!(meta.condition, "New");
        assert_eq!(meta.gender, "Female");
        assert_eq!(meta.tags, "");
    }

    #[test]
    fn test_metafields_size_join() {
        let sizes = vec!["S".to_string(), "M".to_string(), "L".to_string()];
        assert_eq!(metafields("", &sizes).size, "S, M, L");
        assert_eq!(metafields("", &[]).size, "");
    }

    #[test]
    fn test_metafields_product_type_is_last_segment() {
        let meta = metafields("Mode > Röcke & Kleider > Sommerkleider", &[]);
        assert_eq!(meta.google_product_type, "Sommerkleider");

        let meta = metafields("", &[]);
        assert_eq!(meta.google_product_type, "");
    }
}
