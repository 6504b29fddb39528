//! URL handling module for Petrify
//!
//! This module provides the validated origin pair, reference normalization
//! against the source origin, and same-origin scoping for traversal decisions.

mod normalize;
mod origins;
mod scope;

pub use normalize::normalize_url;
pub use origins::Origins;
pub use scope::is_same_origin;
