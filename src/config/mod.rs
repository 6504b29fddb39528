//! Configuration module for Petrify
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use petrify::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Mirroring {} to {}", config.site.source, config.site.target);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BasicAuthConfig, Config, OutputConfig, PrivateConfig, SiteConfig};

// Re-export parser functions
pub use parser::load_config;
