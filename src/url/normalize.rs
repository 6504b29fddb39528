use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a raw reference into the canonical absolute URL used as the
/// traversal dedup key.
///
/// # Normalization Steps
///
/// 1. Resolve the reference against the source origin (standard relative-URL
///    resolution)
/// 2. Empty path becomes `/` (guaranteed by the `url` crate for http(s) URLs)
/// 3. Path exactly `/rss` becomes `/rss/`
///
/// Two references that denote the same resource normalize identically, and
/// normalization is idempotent. References that fail even relative resolution
/// return an error; callers skip those links rather than aborting traversal.
///
/// # Examples
///
/// ```
/// use petrify::url::normalize_url;
/// use url::Url;
///
/// let source = Url::parse("http://internal.example/").unwrap();
/// let url = normalize_url("about", &source).unwrap();
/// assert_eq!(url.as_str(), "http://internal.example/about");
/// ```
pub fn normalize_url(raw: &str, source: &Url) -> UrlResult<Url> {
    let mut url = source
        .join(raw)
        .map_err(|e| UrlError::Parse(format!("'{}': {}", raw, e)))?;

    if url.path() == "/rss" {
        url.set_path("/rss/");
    }

    Ok(url)
}
