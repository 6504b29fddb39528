use crate::url::normalize_url;
use cssparser::{ParseError, Parser, ParserInput, Token};
use url::Url;

/// Extracts every `url()` reference from a stylesheet.
///
/// Walks the raw token stream, descending into every nested block (function
/// arguments, parenthesis/bracket/curly blocks) so references inside `@media`
/// and other nested constructs are covered. `data:` URIs are skipped. Each
/// reference is normalized against the source origin.
pub fn extract_css_references(body: &str, source: &Url) -> Vec<Url> {
    let mut input = ParserInput::new(body);
    let mut parser = Parser::new(&mut input);
    let mut references = Vec::new();
    collect_urls(&mut parser, source, &mut references);
    references
}

/// Recursive token walk. `url(bare)` arrives as a single token; `url("quoted")`
/// arrives as a `url` function whose block holds the quoted string.
fn collect_urls<'i>(parser: &mut Parser<'i, '_>, source: &Url, out: &mut Vec<Url>) {
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::UnquotedUrl(raw) => push_reference(&raw, source, out),
            Token::Function(ref name) if name.eq_ignore_ascii_case("url") => {
                let _ = parser.parse_nested_block(|block| -> Result<(), ParseError<'i, ()>> {
                    while let Ok(token) = block.next() {
                        if let Token::QuotedString(raw) = token {
                            push_reference(raw, source, out);
                        }
                    }
                    Ok(())
                });
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                let _ = parser.parse_nested_block(|block| -> Result<(), ParseError<'i, ()>> {
                    collect_urls(block, source, out);
                    Ok(())
                });
            }
            _ => {}
        }
    }
}

fn push_reference(raw: &str, source: &Url, out: &mut Vec<Url>) {
    if raw.starts_with("data:") {
        return;
    }
    match normalize_url(raw, source) {
        Ok(url) => out.push(url),
        Err(e) => tracing::debug!("Dropping unresolvable url() token: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Url {
        Url::parse("http://internal.example/").unwrap()
    }

    fn extract(css: &str) -> Vec<String> {
        extract_css_references(css, &source())
            .into_iter()
            .map(|u| u.to_string())
            .collect()
    }

    #[test]
    fn test_bare_url() {
        let refs = extract("body { background: url(/images/bg.jpg); }");
        assert_eq!(refs, vec!["http://internal.example/images/bg.jpg"]);
    }

    #[test]
    fn test_quoted_url() {
        let refs = extract(r#"body { background: url("/images/bg.jpg"); }"#);
        assert_eq!(refs, vec!["http://internal.example/images/bg.jpg"]);
    }

    #[test]
    fn test_single_quoted_url() {
        let refs = extract("@font-face { src: url('/fonts/a.woff2') format('woff2'); }");
        assert_eq!(refs, vec!["http://internal.example/fonts/a.woff2"]);
    }

    #[test]
    fn test_data_uri_skipped() {
        let refs = extract("body { background: url(data:image/png;base64,AAAA); }");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_quoted_data_uri_skipped() {
        let refs = extract(r#"body { background: url("data:image/png;base64,AAAA"); }"#);
        assert!(refs.is_empty());
    }

    #[test]
    fn test_url_inside_media_block() {
        let css = r#"
            @media (max-width: 600px) {
                .hero { background-image: url(/images/small.jpg); }
            }
        "#;
        let refs = extract(css);
        assert_eq!(refs, vec!["http://internal.example/images/small.jpg"]);
    }

    #[test]
    fn test_multiple_urls_in_order() {
        let css = r#"
            .a { background: url(/one.png); }
            .b { background: url("/two.png"); }
        "#;
        let refs = extract(css);
        assert_eq!(
            refs,
            vec![
                "http://internal.example/one.png",
                "http://internal.example/two.png",
            ]
        );
    }

    #[test]
    fn test_relative_url_resolves() {
        let refs = extract(".logo { background: url(images/logo.svg); }");
        assert_eq!(refs, vec!["http://internal.example/images/logo.svg"]);
    }

    #[test]
    fn test_absolute_url_kept() {
        let refs = extract(".cdn { background: url(https://cdn.example/x.png); }");
        assert_eq!(refs, vec!["https://cdn.example/x.png"]);
    }

    #[test]
    fn test_plain_string_is_not_a_reference() {
        let refs = extract(r#".q::before { content: "http://internal.example/nope"; }"#);
        assert!(refs.is_empty());
    }

    #[test]
    fn test_comments_ignored() {
        let refs = extract("/* url(/commented.png) */ .a { color: red; }");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_empty_stylesheet() {
        assert!(extract("").is_empty());
    }
}
