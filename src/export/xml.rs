use html_escape::encode_text;

use crate::domain::ProductRecord;

const GOOGLE_NS: &str = "http://base.google.com/ns/1.0";
const META_PREFIX: &str = "meta_google:";

/// Render a record as a pretty-printed `<produkt>` document.
///
/// Child order is fixed; `kategorie` is omitted entirely when the category is
/// empty; metafield keys have their `meta_google:` prefix rewritten to the
/// `g:` namespace. Non-empty details are wrapped in a literal
/// `<![CDATA[...]]>` marker that ends up escaped into element text rather
/// than as a real CDATA section — downstream consumers parse that escaped
/// form, so it stays (see DESIGN.md).
pub fn to_xml(record: &ProductRecord) -> String {
    let mut w = XmlWriter::new();

    w.open_with("produkt", &[("xmlns:g", GOOGLE_NS)]);
    w.leaf("artikelnummer", &record.article_number);
    w.leaf("name", &record.name);
    w.leaf("groessen", &record.sizes.join(", "));

    if record.images.is_empty() {
        w.leaf("bilder", "");
    } else {
        w.open("bilder");
        for image in &record.images {
            w.leaf("bild", image);
        }
        w.close("bilder");
    }

    let details = if record.details_html.is_empty() {
        String::new()
    } else {
        format!("<![CDATA[{}]]>", record.details_html)
    };
    w.leaf("details", &details);

    w.leaf("passform", &record.fit_description);

    if !record.category.is_empty() {
        w.leaf("kategorie", &record.category);
    }

    w.open("metafields");
    for (key, value) in record.metafields.pairs() {
        let tag = key.replacen(META_PREFIX, "g:", 1);
        w.leaf(&tag, value);
    }
    w.close("metafields");
    w.close("produkt");

    w.finish()
}

/// Minimal pretty-printing XML writer: two-space indentation, self-closing
/// empty elements, no blank lines.
struct XmlWriter {
    buf: String,
    depth: usize,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            buf: String::from("<?xml version=\"1.0\" ?>\n"),
            depth: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    fn open(&mut self, tag: &str) {
        self.open_with(tag, &[]);
    }

    fn open_with(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(value);
            self.buf.push('"');
        }
        self.buf.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth -= 1;
        self.indent();
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn leaf(&mut self, tag: &str, text: &str) {
        self.indent();
        if text.is_empty() {
            self.buf.push('<');
            self.buf.push_str(tag);
            self.buf.push_str("/>\n");
        } else {
            self.buf.push('<');
            self.buf.push_str(tag);
            self.buf.push('>');
            self.buf.push_str(&encode_text(text));
            self.buf.push_str("</");
            self.buf.push_str(tag);
            self.buf.push_str(">\n");
        }
    }

    fn finish(self) -> String {
        self.buf.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace;

    fn record() -> ProductRecord {
        let sizes = vec!["S".to_string(), "M".to_string()];
        let category = "Mode > Kleider".to_string();
        let metafields = marketplace::metafields(&category, &sizes);
        ProductRecord {
            article_number: "12345".to_string(),
            name: "Test Kleid".to_string(),
            sizes,
            images: vec![
                "https://cdn.example.com/front.jpg".to_string(),
                "https://cdn.example.com/back.jpg".to_string(),
            ],
            fit_description: "Feminin geschnitten".to_string(),
            details_html: "<p>100% Baumwolle</p>".to_string(),
            category,
            metafields,
        }
    }

    #[test]
    fn test_root_declares_google_namespace() {
        let xml = to_xml(&record());
        assert!(xml.starts_with("<?xml version=\"1.0\" ?>"));
        assert!(xml.contains("<produkt xmlns:g=\"http://base.google.com/ns/1.0\">"));
        assert!(xml.ends_with("</produkt>"));
    }

    #[test]
    fn test_one_bild_per_image_in_order() {
        let xml = to_xml(&record());
        let first = xml.find("front.jpg").unwrap();
        let second = xml.find("back.jpg").unwrap();
        assert!(first < second);
        assert_eq!(xml.matches("<bild>").count(), 2);
    }

    #[test]
    fn test_empty_images_self_close_bilder() {
        let mut rec = record();
        rec.images.clear();
        let xml = to_xml(&rec);
        assert!(xml.contains("<bilder/>"));
        assert!(!xml.contains("<bild>"));
    }

    #[test]
    fn test_kategorie_omitted_when_empty() {
        let mut rec = record();
        rec.category.clear();
        let xml = to_xml(&rec);
        assert!(!xml.contains("kategorie"));

        let xml = to_xml(&record());
        assert!(xml.contains("<kategorie>Mode &gt; Kleider</kategorie>"));
    }

    #[test]
    fn test_details_cdata_marker_is_escaped_text() {
        // The CDATA wrapper is element text, not a CDATA section: everything
        // is entity-escaped on the wire.
        let xml = to_xml(&record());
        assert!(xml.contains(
            "<details>&lt;![CDATA[&lt;p&gt;100% Baumwolle&lt;/p&gt;]]&gt;</details>"
        ));
        assert!(!xml.contains("<![CDATA["));
    }

    #[test]
    fn test_empty_details_self_close() {
        let mut rec = record();
        rec.details_html.clear();
        assert!(to_xml(&rec).contains("<details/>"));
    }

    #[test]
    fn test_metafields_use_g_prefix_in_feed_order() {
        let xml = to_xml(&record());
        assert!(xml.contains("<g:age_group>Erwachsener</g:age_group>"));
        assert!(xml.contains("<g:brand>Blutsgeschwister</g:brand>"));
        assert!(xml.contains(
            "<g:google_product_category>Apparel &amp; Accessories &gt; Clothing &gt; Dresses</g:google_product_category>"
        ));
        assert!(xml.contains("<g:size>S, M</g:size>"));
        assert!(xml.contains("<g:google_product_type>Kleider</g:google_product_type>"));
        // tags is reserved and always empty
        assert!(xml.contains("<g:tags/>"));
        assert!(!xml.contains("meta_google"));

        // size precedes google_product_type, matching the feed order
        assert!(xml.find("<g:size>").unwrap() < xml.find("<g:google_product_type>").unwrap());
    }

    #[test]
    fn test_pretty_printed_without_blank_lines() {
        let xml = to_xml(&record());
        assert!(xml.lines().all(|line| !line.trim().is_empty()));
        assert!(xml.contains("\n  <artikelnummer>12345</artikelnummer>"));
        assert!(xml.contains("\n    <bild>"));
    }
}
