//! Individual feature extractors.
//!
//! Every extractor is a pure function of a [`crate::url::ParsedUrl`] (plus
//! configuration lists) or of an [`dom::HtmlDocument`]:
//! - lexical: lengths and character counts
//! - structural: subdomain length and length ratios
//! - reputation: TLD allow-list, raw IP, TLS and typosquatting checks
//! - similarity: fuzzy string scoring
//! - dom: form and anchor inspection

pub mod dom;
pub mod lexical;
pub mod reputation;
pub mod similarity;
pub mod structural;

pub use dom::{asks_for_pii, bad_action, has_bad_form, nil_anchor_ratio, HtmlDocument};
pub use lexical::{count_char, netloc_length, pathcomp_length, url_length, SuspiciousChar};
pub use reputation::{
    bad_tld, bad_tld_location, brand_labels, is_typosquatting, raw_ip_as_url, tls_status,
    typosquatting_score,
};
pub use similarity::{best_match, ratio};
pub use structural::{
    netloc_length_ratio, pathcomp_length_ratio, subdomain_length, subdomain_length_ratio,
};
