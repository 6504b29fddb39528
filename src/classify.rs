//! Content classification for fetched documents
//!
//! Maps a fetched response (declared media type plus normalized URL suffix) to
//! the document kind that decides which extractor runs and whether the payload
//! is rewritten before being written to disk.

use url::Url;

/// The format verdict for one fetched document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// HTML page - extract a@href, link@href, img@src, script@src, inline styles
    Html,
    /// Sitemap-style XML feed - extract `loc` elements
    Xml,
    /// Stylesheet - extract url() tokens
    Css,
    /// Anything else - written verbatim, no extraction
    Other,
}

impl DocumentKind {
    /// Classifies a response, first match wins: HTML, then XML, then CSS.
    ///
    /// The individual predicates are not mutually exclusive by construction;
    /// a response with an ambiguous media type whose URL ends in `/` is
    /// classified HTML by the trailing-slash rule alone. That heuristic
    /// governs what gets named `index.html` and is deliberate.
    pub fn classify(media_type: &str, url: &Url) -> Self {
        if is_html(media_type, url) {
            Self::Html
        } else if is_xml(media_type, url) {
            Self::Xml
        } else if is_css(media_type, url) {
            Self::Css
        } else {
            Self::Other
        }
    }

    /// Returns true if documents of this kind carry extractable references
    pub fn is_textual(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// HTML predicate: declared media type, or an `.html`/`.htm`/`/` URL suffix
pub fn is_html(media_type: &str, url: &Url) -> bool {
    let s = url.as_str();
    media_type == "text/html" || s.ends_with(".html") || s.ends_with(".htm") || s.ends_with('/')
}

/// XML predicate: declared media type, or an `.xml` URL suffix
pub fn is_xml(media_type: &str, url: &Url) -> bool {
    let s = url.as_str();
    media_type == "text/xml" || media_type == "application/xml" || s.ends_with(".xml")
}

/// CSS predicate: declared media type, or a `.css` URL suffix
pub fn is_css(media_type: &str, url: &Url) -> bool {
    media_type == "text/css" || url.as_str().ends_with(".css")
}

/// Returns true when the payload must pass through the rewriter before being
/// written: any textual kind, plus `robots.txt` regardless of its media type.
pub fn needs_rewrite(kind: DocumentKind, url: &Url) -> bool {
    kind.is_textual() || url.path() == "/robots.txt"
}

/// Reduces a Content-Type header value to its media-type essence:
/// parameters such as `charset` stripped, lowercased.
pub fn media_type_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
