use regex::Regex;

/// Cleans extracted rich-text HTML fragments.
///
/// Removes `<script>`/`<style>` blocks and HTML comments, then collapses all
/// whitespace runs to a single space and trims. This is a plain text
/// transform over the markup string, not a DOM pass: nested or malformed
/// tags can defeat the patterns. That is a known limitation, acceptable for
/// the storefront's product-details fragments.
pub struct Sanitizer {
    script: Regex,
    style: Regex,
    comment: Regex,
    whitespace: Regex,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            script: Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("static regex"),
            style: Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("static regex"),
            comment: Regex::new(r"(?s)<!--.*?-->").expect("static regex"),
            whitespace: Regex::new(r"\s+").expect("static regex"),
        }
    }

    /// Sanitize an HTML fragment. Empty input yields empty output.
    pub fn sanitize(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }
        let cleaned = self.script.replace_all(html, "");
        let cleaned = self.style.replace_all(&cleaned, "");
        let cleaned = self.comment.replace_all(&cleaned, "");
        self.whitespace.replace_all(&cleaned, " ").trim().to_string()
    }
}
