//! Reference rewriting for mirrored payloads
//!
//! A pure textual substitution pass over UTF-8 documents, applied before the
//! bytes reach the writer. Covers the scheme-qualified origin, its
//! trailing-slash-stripped form, the protocol-relative form, and the feed
//! self-link variants a CMS emits for its RSS endpoint.

use crate::url::Origins;
use regex::{NoExpand, Regex};
use url::Url;

/// Rewrites source-origin references to the target origin.
///
/// Built once per run from the origin pair; the feed self-link pattern is
/// compiled at construction.
#[derive(Debug)]
pub struct Rewriter {
    source: String,
    target: String,
    source_stripped: String,
    target_stripped: String,
    source_protocol_relative: String,
    target_protocol_relative: String,
    feed_link: Regex,
    feed_replacement: String,
    rss_override: Option<String>,
}

impl Rewriter {
    /// Builds the rewriter for an origin pair and an optional private-mode
    /// RSS override URL (already slash-terminated).
    pub fn new(origins: &Origins, rss_override: Option<&Url>) -> Result<Self, regex::Error> {
        let source = origins.source().to_string();
        let target = origins.target().to_string();

        // Matches the origin's rss path in quoted or parenthesized contexts;
        // the delimiter is part of the match and is consumed by the
        // substitution, matching the feed-link normalization of the CMS
        // exporters this tool replaces.
        let feed_link = Regex::new(&format!(r#"{}rss/?['")]"#, regex::escape(&source)))?;
        let feed_replacement = format!("{}rss.xml", source);

        Ok(Self {
            source_stripped: source.trim_end_matches('/').to_string(),
            target_stripped: target.trim_end_matches('/').to_string(),
            source_protocol_relative: protocol_relative(&source),
            target_protocol_relative: protocol_relative(&target),
            feed_link,
            feed_replacement,
            rss_override: rss_override.map(|u| u.to_string()),
            source,
            target,
        })
    }

    /// Applies the substitution passes in order:
    ///
    /// 1. RSS override URL -> `source + "rss/"` (private mode only)
    /// 2. Feed self-links (`...rss`, `...rss/` followed by `'`, `"` or `)`)
    ///    -> `source + "rss.xml"`
    /// 3. Full source origin -> full target origin
    /// 4. Trailing-slash-stripped origin -> stripped target
    /// 5. Protocol-relative origin -> protocol-relative target
    pub fn rewrite(&self, doc: &str) -> String {
        let mut doc = doc.to_string();

        if let Some(override_url) = &self.rss_override {
            doc = doc.replace(override_url, &format!("{}rss/", self.source));
        }

        doc = self
            .feed_link
            .replace_all(&doc, NoExpand(&self.feed_replacement))
            .into_owned();
        doc = doc.replace(&self.source, &self.target);
        doc = doc.replace(&self.source_stripped, &self.target_stripped);
        doc = doc.replace(
            &self.source_protocol_relative,
            &self.target_protocol_relative,
        );

        doc
    }
}

/// The `//host[:port]/...` form of a scheme-qualified URL
fn protocol_relative(url: &str) -> String {
    match url.find("://") {
        Some(idx) => format!("//{}", &url[idx + 3..]),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> Rewriter {
        let origins = Origins::new("http://internal.example/", "https://public.example/").unwrap();
        Rewriter::new(&origins, None).unwrap()
    }

    #[test]
    fn test_full_origin_replaced() {
        let out = rewriter().rewrite(r#"<a href="http://internal.example/posts/">post</a>"#);
        assert_eq!(out, r#"<a href="https://public.example/posts/">post</a>"#);
    }

    #[test]
    fn test_stripped_origin_replaced() {
        let out = rewriter().rewrite(r#"<a href="http://internal.example">home</a>"#);
        assert_eq!(out, r#"<a href="https://public.example">home</a>"#);
    }

    #[test]
    fn test_protocol_relative_replaced() {
        let out = rewriter().rewrite(r#"<img src="//internal.example/cat.png">"#);
        assert_eq!(out, r#"<img src="//public.example/cat.png">"#);
    }

    #[test]
    fn test_round_trip_counts() {
        let doc = r#"
            <a href="http://internal.example/">one</a>
            <a href="http://internal.example/two/">two</a>
            <link href="//internal.example/three.css">
            <script src="http://internal.example"></script>
        "#;
        let out = rewriter().rewrite(doc);
        assert_eq!(out.matches("public.example").count(), 4);
        assert_eq!(out.matches("internal.example").count(), 0);
    }

    #[test]
    fn test_feed_self_link_single_quoted() {
        let out = rewriter().rewrite("href='http://internal.example/rss'");
        // The delimiter is consumed along with the match
        assert_eq!(out, "href='https://public.example/rss.xml");
    }

    #[test]
    fn test_feed_self_link_double_quoted_with_slash() {
        let out = rewriter().rewrite(r#"href="http://internal.example/rss/""#);
        assert_eq!(out, r#"href="https://public.example/rss.xml"#);
    }

    #[test]
    fn test_feed_self_link_in_css_context() {
        let out = rewriter().rewrite("url(http://internal.example/rss)");
        assert_eq!(out, "url(https://public.example/rss.xml");
    }

    #[test]
    fn test_rss_without_delimiter_untouched_by_feed_pass() {
        // No delimiter after rss: only the plain origin substitution applies
        let out = rewriter().rewrite("http://internal.example/rss is the feed");
        assert_eq!(out, "https://public.example/rss is the feed");
    }

    #[test]
    fn test_rss_override_replaced_first() {
        let origins = Origins::new("http://internal.example/", "https://public.example/").unwrap();
        let override_url = Url::parse("http://internal.example/acbacbacb/rss/").unwrap();
        let rewriter = Rewriter::new(&origins, Some(&override_url)).unwrap();

        // Override collapses to the canonical rss path, then the feed pass and
        // origin pass take it the rest of the way
        let out = rewriter.rewrite(r#"href="http://internal.example/acbacbacb/rss/""#);
        assert_eq!(out, r#"href="https://public.example/rss.xml"#);
    }

    #[test]
    fn test_port_qualified_origins() {
        let origins =
            Origins::new("http://internal.example:2368/", "https://public.example/").unwrap();
        let rewriter = Rewriter::new(&origins, None).unwrap();
        let out = rewriter.rewrite(r#"src="//internal.example:2368/app.js""#);
        assert_eq!(out, r#"src="//public.example/app.js""#);
    }

    #[test]
    fn test_unrelated_content_untouched() {
        let doc = "<p>Nothing about any origin here.</p>";
        assert_eq!(rewriter().rewrite(doc), doc);
    }

    #[test]
    fn test_xml_loc_rewritten() {
        let out = rewriter()
            .rewrite("<urlset><url><loc>http://internal.example/post-1</loc></url></urlset>");
        assert_eq!(
            out,
            "<urlset><url><loc>https://public.example/post-1</loc></url></urlset>"
        );
    }
}
