//! Tests for URL normalization and public-suffix decomposition.

use phishfeat::url::{host_from_netloc, urlparse};
use phishfeat::*;

#[test]
fn test_normalization_prepends_authority() {
    let test_cases = vec![
        ("example.com/path", "", "example.com", "/path"),
        ("//example.com/path", "", "example.com", "/path"),
        ("http://example.com/path", "http", "example.com", "/path"),
        ("https://example.com", "https", "example.com", ""),
        ("ftp.example.com/file", "", "ftp.example.com", "/file"),
    ];

    for (input, scheme, netloc, path) in test_cases {
        let parsed = normalize_url(input);
        assert_eq!(parsed.scheme, scheme, "scheme of {}", input);
        assert_eq!(parsed.netloc, netloc, "netloc of {}", input);
        assert_eq!(parsed.path, path, "path of {}", input);
        assert_eq!(parsed.raw, input);
    }
}

#[test]
fn test_malformed_input_never_fails() {
    let test_cases = vec!["", "   ", "://", "http://", "#", "?a=b", "%%%", "[::1"];

    for input in test_cases {
        let parsed = normalize_url(input);
        assert_eq!(parsed.raw, input);
        // Every component is a plain string, possibly empty
        let _ = parsed.without_scheme();
    }
    assert_eq!(normalize_url("http://").netloc, "");
}

#[test]
fn test_query_and_fragment() {
    let parsed = normalize_url("https://shop.example.com/cart?id=7&x=1#top");
    assert_eq!(parsed.query, "id=7&x=1");
    assert_eq!(parsed.fragment, "top");
    assert_eq!(parsed.pathcomp(), "/cart?id=7&x=1#top");
    assert_eq!(parsed.without_scheme(), "shop.example.com/cart?id=7&x=1#top");
}

#[test]
fn test_fragment_before_query() {
    let split = urlparse("http://example.com/a#frag?notquery");
    assert_eq!(split.path, "/a");
    assert_eq!(split.query, "");
    assert_eq!(split.fragment, "frag?notquery");
}

#[test]
fn test_psl_decomposition() {
    let test_cases = vec![
        ("https://www.example.com/", "www", "example", "com"),
        ("https://api.example.co.uk/", "api", "example", "co.uk"),
        ("https://loja.exemplo.com.br/", "loja", "exemplo", "com.br"),
        ("http://secure.login.paypal.com.verify-account.info/", "secure.login.paypal.com", "verify-account", "info"),
        ("https://paypal-login.github.io/", "paypal-login", "github", "io"),
        ("http://192.168.1.1/login", "", "192.168.1.1", ""),
        ("https://intranet/", "", "intranet", ""),
    ];

    for (input, subdomain, domain, suffix) in test_cases {
        let parts = normalize_url(input).domain;
        assert_eq!(parts.subdomain, subdomain, "subdomain of {}", input);
        assert_eq!(parts.domain, domain, "domain of {}", input);
        assert_eq!(parts.suffix, suffix, "suffix of {}", input);
    }
}

#[test]
fn test_host_is_lowercased_for_psl() {
    let parsed = normalize_url("https://WWW.Example.CO.UK:443/");
    assert_eq!(parsed.netloc, "WWW.Example.CO.UK:443");
    assert_eq!(parsed.host, "www.example.co.uk");
    assert_eq!(parsed.domain.suffix, "co.uk");
}

#[test]
fn test_userinfo_is_not_host() {
    let parsed = normalize_url("http://www.paypal.com@evil.example.net/login");
    assert_eq!(parsed.host, "evil.example.net");
    assert_eq!(parsed.domain.domain, "example");
    assert_eq!(host_from_netloc("a@b@c.com"), "c.com");
}

#[test]
fn test_split_host_directly() {
    let parts = split_host_with_psl("a.b.example.com");
    assert_eq!(parts.rebuilt_host(), "a.b.example.com");
    assert!(parts.has_subdomain());
    assert!(!split_host_with_psl("example.com").has_subdomain());
}
