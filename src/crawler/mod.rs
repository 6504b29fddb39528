//! Crawler module for mirroring a site
//!
//! This module contains the traversal logic, including:
//! - HTTP fetching with a shared cookie store and optional basic auth
//! - The private-mode authentication bootstrap
//! - Visited-set-guarded work-list traversal over discovered references

mod coordinator;
mod fetcher;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, Fetcher};

use crate::config::Config;
use crate::PetrifyError;

/// Runs a complete mirror operation
///
/// This is the main entry point. It will:
/// 1. Validate the origin pair and build the HTTP session
/// 2. Authenticate if private mode is configured
/// 3. Crawl from the seed URLs, rewriting and persisting every on-origin
///    resource
///
/// # Arguments
///
/// * `config` - The mirror configuration
///
/// # Returns
///
/// * `Ok(())` - Mirror completed
/// * `Err(PetrifyError)` - Configuration, authentication, or write failure
pub async fn mirror(config: Config) -> Result<(), PetrifyError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
