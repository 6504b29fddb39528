//! Petrify: a static-site mirroring engine
//!
//! This crate crawls a live content-managed website and writes a self-contained
//! static copy to disk, rewriting every absolute reference from the source origin
//! to a target origin so the mirror is fully relocatable.

pub mod classify;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod rewrite;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Petrify operations
#[derive(Debug, Error)]
pub enum PetrifyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Private mode authentication failed: expected HTTP 302, got {status}")]
    Auth { status: u16 },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),
}

/// Errors raised while fetching a single resource.
///
/// These are recovered by the orchestrator: the URL is skipped with a warning
/// and traversal continues elsewhere.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },
}

/// Errors raised while persisting a document under the output root.
///
/// `PathEscape` is fatal by contract: a derived path resolving outside the
/// output root must never be silently truncated or sanitized.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Derived path '{path}' escapes the output root '{root}'")]
    PathEscape { root: PathBuf, path: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for Petrify operations
pub type Result<T> = std::result::Result<T, PetrifyError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use classify::DocumentKind;
pub use config::Config;
pub use crawler::{mirror, Coordinator};
pub use url::{is_same_origin, normalize_url, Origins};
