use crate::WriteError;
use std::fs;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Writes mirrored documents under a fixed output root.
///
/// The root itself is never deleted by the engine; parent directories are
/// created lazily per written file.
#[derive(Debug)]
pub struct SiteWriter {
    root: PathBuf,
}

impl SiteWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The output root all writes stay under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persists one document at the path derived from its normalized URL.
    ///
    /// Verifies containment before touching the filesystem; an escaping path
    /// is a fatal `PathEscape`, never a silent truncation. Existing files are
    /// overwritten.
    pub fn write(&self, url: &Url, data: &[u8]) -> Result<PathBuf, WriteError> {
        let rel = derive_rel_path(url.path());
        let target = resolve_under_root(&self.root, &rel)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| WriteError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(&target, data).map_err(|e| WriteError::Io {
            path: target.clone(),
            source: e,
        })?;

        Ok(target)
    }
}

/// Derives the on-disk relative path for a normalized URL path.
///
/// Strips the leading slash; an empty or trailing-slash path gets
/// `index.html` appended; the `rss/` endpoint is persisted as `rss.xml` so
/// static hosts serve it with a feed extension.
pub fn derive_rel_path(url_path: &str) -> String {
    let mut path = url_path.trim_start_matches('/').to_string();
    if path.is_empty() || path.ends_with('/') {
        path.push_str("index.html");
    }
    if path == "rss/index.html" {
        path = "rss.xml".to_string();
    }
    path
}

/// Resolves `rel` against `root`, rejecting any form of escape.
///
/// Walks the components: `..` may never climb above the root, and absolute
/// or prefixed components are rejected outright. The check is lexical, so it
/// holds before any directory exists.
pub fn resolve_under_root(root: &Path, rel: &str) -> Result<PathBuf, WriteError> {
    let mut resolved = root.to_path_buf();
    let mut depth: usize = 0;

    for component in Path::new(rel).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(WriteError::PathEscape {
                        root: root.to_path_buf(),
                        path: rel.to_string(),
                    });
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(WriteError::PathEscape {
                    root: root.to_path_buf(),
                    path: rel.to_string(),
                });
            }
        }
    }

    Ok(resolved)
}
