//! Crawl coordinator - main traversal logic
//!
//! Drives the visited-set-guarded work list: origin scoping, fetching,
//! classification, rewriting, persistence, and extraction of new references.
//! The graph being traversed is inherently cyclic, so the work list is an
//! explicit stack rather than call-stack recursion.

use crate::classify::{needs_rewrite, DocumentKind};
use crate::config::Config;
use crate::crawler::Fetcher;
use crate::extract::extract_references;
use crate::output::SiteWriter;
use crate::rewrite::Rewriter;
use crate::url::{is_same_origin, normalize_url, Origins};
use crate::{PetrifyError, UrlError};
use std::collections::HashSet;
use std::path::PathBuf;
use url::Url;

/// Seed paths fetched for every run, in dispatch order
const SEEDS: &[&str] = &["sitemap.xml", "robots.txt", "favicon.ico"];

/// Main coordinator for one mirror run
pub struct Coordinator {
    origins: Origins,
    fetcher: Fetcher,
    rewriter: Rewriter,
    writer: SiteWriter,
    private_password: Option<String>,
    visited: HashSet<String>,
}

impl Coordinator {
    /// Creates a coordinator from a validated configuration.
    ///
    /// Fails fast on a malformed origin pair or RSS override URL, before any
    /// network traffic.
    pub fn new(config: Config) -> Result<Self, PetrifyError> {
        let origins = Origins::new(&config.site.source, &config.site.target)?;

        let rss_override = match &config.private {
            Some(private) => Some(parse_rss_override(&private.rss_url)?),
            None => None,
        };

        let basic_auth = config
            .basic_auth
            .as_ref()
            .map(|auth| (auth.username.clone(), auth.password.clone()));

        let fetcher = Fetcher::new(origins.source().clone(), basic_auth, rss_override.clone())?;
        let rewriter = Rewriter::new(&origins, rss_override.as_ref())?;
        let writer = SiteWriter::new(PathBuf::from(&config.output.directory));

        Ok(Self {
            origins,
            fetcher,
            rewriter,
            writer,
            private_password: config.private.map(|p| p.password),
            visited: HashSet::new(),
        })
    }

    /// The output root files are written under
    pub fn output_root(&self) -> &std::path::Path {
        self.writer.root()
    }

    /// Runs the mirror: authenticates if needed, then traverses from the
    /// seed URLs until the work list is empty.
    pub async fn run(&mut self) -> Result<(), PetrifyError> {
        if let Some(password) = self.private_password.clone() {
            tracing::info!("Private mode: authenticating against {}", self.origins.source());
            self.fetcher.login(&password).await?;
        }

        let mut stack: Vec<Url> = Vec::new();
        // Reversed so the first seed is popped (and fully traversed) first
        for seed in SEEDS.iter().rev() {
            match normalize_url(seed, self.origins.source()) {
                Ok(url) => stack.push(url),
                Err(e) => tracing::debug!("Dropping seed '{}': {}", seed, e),
            }
        }

        let mut written = 0usize;
        let mut skipped = 0usize;

        while let Some(url) = stack.pop() {
            if self.visited.contains(url.as_str()) {
                continue;
            }
            if !is_same_origin(&url, self.origins.source()) {
                continue;
            }

            tracing::info!("{}", url);
            self.visited.insert(url.as_str().to_string());

            let (content_type, body) = match self.fetcher.fetch(&url).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    tracing::warn!("Unable to download '{}': {}", url, e);
                    skipped += 1;
                    continue;
                }
            };

            let kind = DocumentKind::classify(&content_type, &url);

            if needs_rewrite(kind, &url) {
                let text = match std::str::from_utf8(&body) {
                    Ok(text) => text,
                    Err(_) => {
                        tracing::warn!("Skipping '{}': rewritable payload is not UTF-8", url);
                        skipped += 1;
                        continue;
                    }
                };

                let rewritten = self.rewriter.rewrite(text);
                self.writer.write(&url, rewritten.as_bytes())?;
                written += 1;

                // Extraction runs over the original text; references pushed in
                // reverse keep depth-first source order on the stack
                for reference in extract_references(kind, text, self.origins.source())
                    .into_iter()
                    .rev()
                {
                    stack.push(reference);
                }
            } else {
                self.writer.write(&url, &body)?;
                written += 1;
            }
        }

        tracing::info!(
            "Mirror complete: {} files written, {} fetches skipped",
            written,
            skipped
        );

        Ok(())
    }
}

/// The override URL is slash-terminated like the origins, so its textual
/// occurrences line up for the rewriter.
fn parse_rss_override(raw: &str) -> Result<Url, UrlError> {
    let slashed = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&slashed).map_err(|e| UrlError::Parse(format!("'{}': {}", raw, e)))
}
