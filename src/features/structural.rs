//! Structural ratios between subdomain, netloc and path lengths.
//!
//! Each ratio uses its own denominator and the three are not complementary.
//! A zero denominator yields 0.0.

use crate::features::lexical::{netloc_length, pathcomp_length};
use crate::url::ParsedUrl;

fn guarded_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Character count of the public-suffix subdomain.
pub fn subdomain_length(url: &ParsedUrl) -> usize {
    url.domain.subdomain.chars().count()
}

/// Subdomain length over the length of the rebuilt `subdomain.domain.suffix` host.
pub fn subdomain_length_ratio(url: &ParsedUrl) -> f64 {
    let rebuilt = url.domain.rebuilt_host();
    guarded_ratio(subdomain_length(url), rebuilt.chars().count())
}

/// Netloc length over netloc plus path component length.
pub fn netloc_length_ratio(url: &ParsedUrl) -> f64 {
    let netloc = netloc_length(url);
    guarded_ratio(netloc, netloc + pathcomp_length(url))
}

/// Path component length over netloc plus path component length.
pub fn pathcomp_length_ratio(url: &ParsedUrl) -> f64 {
    let pathcomp = pathcomp_length(url);
    guarded_ratio(pathcomp, netloc_length(url) + pathcomp)
}
