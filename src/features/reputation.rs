//! Reputation heuristics: TLD placement, raw IP hosts, TLS and typosquatting.

use crate::features::similarity::best_match;
use crate::url::{normalize_url, urlparse, ParsedUrl};
use std::net::Ipv4Addr;
use tracing::trace;

/// Check if the last netloc label is missing from the TLD allow-list.
///
/// The netloc is split on `.` as written, so a port or uppercase label in the
/// last position also counts as non-standard.
pub fn bad_tld(url: &ParsedUrl, allowlist: &[String]) -> bool {
    let last = url.netloc.rsplit('.').next().unwrap_or("");
    !allowlist.iter().any(|tld| tld == last)
}

/// Check if an allow-listed TLD appears anywhere except the last two labels.
///
/// `com.example-evil.biz` is flagged; `example.co.uk` is not.
pub fn bad_tld_location(url: &ParsedUrl, allowlist: &[String]) -> bool {
    let labels: Vec<&str> = url.netloc.split('.').collect();
    let count = labels.len();
    labels
        .iter()
        .enumerate()
        .any(|(index, label)| index + 2 < count && allowlist.iter().any(|tld| tld == label))
}

/// Check if the whole netloc is a dotted-quad IPv4 address.
pub fn raw_ip_as_url(url: &ParsedUrl) -> bool {
    url.netloc.parse::<Ipv4Addr>().is_ok()
}

/// Check if the URL as given uses the `https` scheme, in any letter case.
///
/// The raw string is split on its own, since normalization treats an
/// uppercase `HTTPS://` prefix as part of the netloc.
pub fn tls_status(url: &ParsedUrl) -> bool {
    urlparse(&url.raw).scheme == "https"
}

/// Reduce brand URLs to their registrable domain labels.
///
/// Entries without a domain label are skipped and duplicates removed, keeping
/// first-seen order.
pub fn brand_labels(brands: &[String]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::with_capacity(brands.len());
    for brand in brands {
        let label = normalize_url(brand).domain.domain;
        if !label.is_empty() && !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Highest similarity (0-100) between the URL's domain label and any brand label.
pub fn typosquatting_score(url: &ParsedUrl, brand_labels: &[String]) -> u8 {
    let label = url.domain.domain.as_str();
    match best_match(label, brand_labels.iter().map(String::as_str)) {
        Some((brand, score)) => {
            trace!(domain = label, brand, score, "closest brand");
            score
        }
        None => 0,
    }
}

/// Check if the domain label is a near miss of a brand: above `threshold` but not identical.
pub fn is_typosquatting(url: &ParsedUrl, brand_labels: &[String], threshold: u8) -> bool {
    let score = typosquatting_score(url, brand_labels);
    score > threshold && score < 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExtractorConfig, DEFAULT_BRANDS};

    fn tlds() -> Vec<String> {
        ExtractorConfig::default().tld_allowlist
    }

    fn brands() -> Vec<String> {
        let urls: Vec<String> = DEFAULT_BRANDS.iter().map(|s| s.to_string()).collect();
        brand_labels(&urls)
    }

    #[test]
    fn test_bad_tld() {
        let test_cases = vec![
            ("https://example.com/", false),
            ("https://example.xyz123/", true),
            ("example.co.uk/login", false),
            ("https://example.com:8080/", true),
            ("https://EXAMPLE.COM/", true),
            ("", true),
        ];

        for (input, expected) in test_cases {
            assert_eq!(bad_tld(&normalize_url(input), &tlds()), expected, "bad_tld({})", input);
        }
    }

    #[test]
    fn test_bad_tld_location() {
        let test_cases = vec![
            ("https://com.example-evil.biz/", true),
            ("https://paypal.com.secure-login.net/", true),
            ("https://www.example.co.uk/", false),
            ("https://example.com/", false),
            ("https://a.b.c.org/", false),
        ];

        for (input, expected) in test_cases {
            assert_eq!(
                bad_tld_location(&normalize_url(input), &tlds()),
                expected,
                "bad_tld_location({})",
                input
            );
        }
    }

    #[test]
    fn test_raw_ip_as_url() {
        assert!(raw_ip_as_url(&normalize_url("http://192.168.1.1/login")));
        assert!(raw_ip_as_url(&normalize_url("10.0.0.1/admin")));
        assert!(!raw_ip_as_url(&normalize_url("http://example.com/login")));
        assert!(!raw_ip_as_url(&normalize_url("http://192.168.1.1:8080/")));
        assert!(!raw_ip_as_url(&normalize_url("http://999.1.1.1/")));
    }

    #[test]
    fn test_tls_status() {
        assert!(tls_status(&normalize_url("https://example.com")));
        assert!(!tls_status(&normalize_url("http://example.com")));
        assert!(!tls_status(&normalize_url("example.com")));
        assert!(tls_status(&normalize_url("HTTPS://EXAMPLE.COM/")));
        assert!(tls_status(&normalize_url("Https://example.com")));
        assert!(!tls_status(&normalize_url("HTTP://EXAMPLE.COM/")));
    }

    #[test]
    fn test_brand_labels() {
        let labels = brands();
        assert!(labels.contains(&"paypal".to_string()));
        assert!(labels.contains(&"steampowered".to_string()));
        // google.com and google.co.uk share a label
        assert_eq!(labels.iter().filter(|l| l.as_str() == "google").count(), 1);
    }

    #[test]
    fn test_typosquatting() {
        let brands = brands();
        let test_cases = vec![
            ("https://www.paypal.com/", false),
            ("https://www.microsofft.com/", true),
            ("wellsfarg0.com/login", true),
            ("https://www.example.org/", false),
            ("", false),
        ];

        for (input, expected) in test_cases {
            assert_eq!(
                is_typosquatting(&normalize_url(input), &brands, 85),
                expected,
                "is_typosquatting({})",
                input
            );
        }
    }

    #[test]
    fn test_typosquatting_score() {
        let brands = brands();
        assert_eq!(typosquatting_score(&normalize_url("https://www.paypal.com/"), &brands), 100);
        assert_eq!(typosquatting_score(&normalize_url(""), &brands), 0);
        assert_eq!(typosquatting_score(&normalize_url("https://paypal.com"), &[]), 0);
    }
}
