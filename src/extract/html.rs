use crate::extract::extract_css_references;
use crate::url::normalize_url;
use scraper::{Html, Selector};
use url::Url;

/// Tag/attribute pairs that carry followable references
const LINK_SOURCES: &[(&str, &str)] = &[
    ("a[href]", "href"),
    ("link[href]", "href"),
    ("img[src]", "src"),
    ("script[src]", "src"),
];

/// Extracts every followable reference from an HTML document.
///
/// Collects `a@href`, `link@href`, `img@src`, and `script@src`, then runs the
/// CSS extractor over the text of every inline `<style>` block. Each raw
/// reference is normalized against the source origin before being returned.
pub fn extract_html_references(body: &str, source: &Url) -> Vec<Url> {
    let document = Html::parse_document(body);
    let mut references = Vec::new();

    for (selector, attr) in LINK_SOURCES {
        if let Ok(selector) = Selector::parse(selector) {
            for element in document.select(&selector) {
                if let Some(raw) = element.value().attr(attr) {
                    match normalize_url(raw, source) {
                        Ok(url) => references.push(url),
                        Err(e) => tracing::debug!("Dropping unresolvable reference: {}", e),
                    }
                }
            }
        }
    }

    if let Ok(selector) = Selector::parse("style") {
        for element in document.select(&selector) {
            let css = element.text().collect::<String>();
            references.extend(extract_css_references(&css, source));
        }
    }

    references
}
