//! URL processing utilities.
//!
//! This module contains URL-related functionality:
//! - URL normalization and raw component splitting
//! - Public Suffix List (PSL) domain decomposition

pub mod normalizer;
pub mod psl;

// Re-export main functionality
pub use normalizer::{has_authority_prefix, host_from_netloc, normalize_url, urlparse, ParsedUrl, UrlSplit};
pub use psl::{split_host_with_psl, DomainParts};
