use url::Url;

/// Returns true when `url` is on the same origin as `source`.
///
/// Scheme, host, and effective port must all match; default ports (80 for
/// http, 443 for https) are treated as equivalent to an absent port, so
/// `http://host/` and `http://host:80/` scope identically. Off-origin URLs
/// are excluded from both traversal and rewriting.
pub fn is_same_origin(url: &Url, source: &Url) -> bool {
    url.scheme() == source.scheme()
        && url.host_str() == source.host_str()
        && url.port_or_known_default() == source.port_or_known_default()
}
