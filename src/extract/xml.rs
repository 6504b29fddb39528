use crate::url::normalize_url;
use scraper::{Html, Selector};
use url::Url;

/// Extracts every `loc` entry from a sitemap-style feed.
///
/// The document is parsed with the same lenient HTML parser used for pages;
/// sitemap elements come through as unknown tags whose text content is the
/// referenced URL. Each entry is normalized against the source origin.
pub fn extract_xml_references(body: &str, source: &Url) -> Vec<Url> {
    let document = Html::parse_document(body);
    let mut references = Vec::new();

    if let Ok(selector) = Selector::parse("loc") {
        for element in document.select(&selector) {
            let raw = element.text().collect::<String>();
            match normalize_url(raw.trim(), source) {
                Ok(url) => references.push(url),
                Err(e) => tracing::debug!("Dropping unresolvable loc entry: {}", e),
            }
        }
    }

    references
}
