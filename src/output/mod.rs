//! Output module for Petrify
//!
//! Persists fetched (and possibly rewritten) documents under a fixed output
//! root, refusing any write whose resolved path would escape it.

mod writer;

pub use writer::{derive_rel_path, resolve_under_root, SiteWriter};
