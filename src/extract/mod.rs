//! Reference extraction from fetched documents
//!
//! One operation over three format-specific extractors, dispatched by the
//! content classifier's verdict. Every extractor returns references already
//! normalized against the source origin; references that fail normalization
//! are dropped with a debug log.

mod css;
mod html;
mod xml;

pub use css::extract_css_references;
pub use html::extract_html_references;
pub use xml::extract_xml_references;

use crate::classify::DocumentKind;
use url::Url;

/// Extracts the outbound references of a document according to its kind.
///
/// `Other` documents carry no extractable references. Order of discovery is
/// document order; traversal correctness does not depend on it.
pub fn extract_references(kind: DocumentKind, body: &str, source: &Url) -> Vec<Url> {
    match kind {
        DocumentKind::Html => extract_html_references(body, source),
        DocumentKind::Xml => extract_xml_references(body, source),
        DocumentKind::Css => extract_css_references(body, source),
        DocumentKind::Other => Vec::new(),
    }
}
