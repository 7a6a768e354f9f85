//! HTML DOM features: PII-seeking forms, form actions and nil anchors.
//!
//! Keyword matching is a brute-force scan over forms x inputs x attributes x
//! keywords that stops at the first hit. An attribute value matches a keyword
//! when the lowercased value scores above the similarity threshold against it,
//! or when the value as written contains the keyword.

use crate::features::similarity::ratio;
use crate::url::{normalize_url, ParsedUrl};
use scraper::{ElementRef, Html};
use tracing::trace;

/// `href` values that navigate nowhere.
const NIL_HREFS: &[&str] = &["#", "", "javascript:void(0)"];

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse an HTML document. Parsing is lenient and never fails.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Parse raw page bytes, replacing invalid UTF-8 sequences.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// All elements with the given lowercase tag name, in document order.
    fn elements<'a>(&'a self, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        descendants_named(self.html.root_element(), name)
    }
}

fn descendants_named<'a>(
    root: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == name)
}

fn attribute_matches(value: &str, lowered: &str, keyword: &str, threshold: u8) -> bool {
    ratio(keyword, lowered) > threshold || value.contains(keyword)
}

/// Find the first keyword matched by any `<input>` attribute inside a `<form>`.
fn first_keyword_match<'k>(
    doc: &HtmlDocument,
    keywords: &'k [String],
    threshold: u8,
) -> Option<&'k str> {
    for form in doc.elements("form") {
        for input in descendants_named(form, "input") {
            for (attribute, value) in input.value().attrs() {
                let lowered = value.to_lowercase();
                for keyword in keywords.iter().filter(|k| !k.is_empty()) {
                    if attribute_matches(value, &lowered, keyword, threshold) {
                        trace!(attribute, value, keyword = keyword.as_str(), "PII keyword matched");
                        return Some(keyword.as_str());
                    }
                }
            }
        }
    }
    None
}

/// Check if any form input matches the full PII blacklist.
pub fn has_bad_form(doc: &HtmlDocument, blacklist: &[String], threshold: u8) -> bool {
    first_keyword_match(doc, blacklist, threshold).is_some()
}

/// Check if any form input matches one PII keyword category.
///
/// Same matching as [`has_bad_form`], restricted to `keywords`.
pub fn asks_for_pii(doc: &HtmlDocument, keywords: &[String], threshold: u8) -> bool {
    first_keyword_match(doc, keywords, threshold).is_some()
}

/// Check if any form submits nowhere visible or to another domain.
///
/// A missing, empty or `#` action is flagged. Any other action is split like a
/// URL and its domain label compared with the page's. Relative actions such as
/// `/login` have no host, so their empty label differs from any named page.
pub fn bad_action(doc: &HtmlDocument, page: &ParsedUrl) -> bool {
    let page_label = page.domain.domain.as_str();
    for form in doc.elements("form") {
        let action = form.value().attr("action");
        let flagged = match action {
            None | Some("") | Some("#") => true,
            Some(action) => normalize_url(action).domain.domain != page_label,
        };
        if flagged {
            trace!(action = ?action, page = page_label, "suspicious form action");
            return true;
        }
    }
    false
}

/// Fraction of `<a>` elements whose `href` is `#`, empty or `javascript:void(0)`.
///
/// Anchors without an `href` count toward the total only. No anchors yields 0.0.
pub fn nil_anchor_ratio(doc: &HtmlDocument) -> f64 {
    let mut total = 0usize;
    let mut nil = 0usize;
    for anchor in doc.elements("a") {
        total += 1;
        if let Some(href) = anchor.value().attr("href") {
            if NIL_HREFS.contains(&href) {
                nil += 1;
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        nil as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PiiKeywords;

    fn blacklist() -> Vec<String> {
        PiiKeywords::default().blacklist()
    }

    #[test]
    fn test_password_input_is_bad_form() {
        let doc = HtmlDocument::parse(
            r#"<html><body><form action="/login"><input name="password" type="password"></form></body></html>"#,
        );
        assert!(has_bad_form(&doc, &blacklist(), 85));
    }

    #[test]
    fn test_submit_only_form_is_clean() {
        let doc = HtmlDocument::parse(r#"<form action="/go"><input type="submit" value="Go"></form>"#);
        assert!(!has_bad_form(&doc, &blacklist(), 85));
    }

    #[test]
    fn test_inputs_outside_forms_are_ignored() {
        let doc = HtmlDocument::parse(r#"<div><input name="password"></div><form><p>hi</p></form>"#);
        assert!(!has_bad_form(&doc, &blacklist(), 85));
    }

    #[test]
    fn test_fuzzy_match_on_lowercased_value() {
        // "E-Mail" lowercases to an exact keyword
        let doc = HtmlDocument::parse(r#"<form><input placeholder="E-Mail"></form>"#);
        let identity = PiiKeywords::default().identity_email;
        assert!(asks_for_pii(&doc, &identity, 85));
    }

    #[test]
    fn test_substring_match_is_case_sensitive() {
        let keywords = vec!["ssn".to_string()];
        let lower = HtmlDocument::parse(r#"<form><input id="user_ssn_field"></form>"#);
        let upper = HtmlDocument::parse(r#"<form><input id="USER_SSN_FIELD"></form>"#);
        assert!(asks_for_pii(&lower, &keywords, 85));
        assert!(!asks_for_pii(&upper, &keywords, 85));
    }

    #[test]
    fn test_category_restriction() {
        let pii = PiiKeywords::default();
        let doc = HtmlDocument::parse(r#"<form><input name="cvv"></form><form></form>"#);
        assert!(asks_for_pii(&doc, &pii.payment_card, 85));
        assert!(!asks_for_pii(&doc, &pii.phone, 85));
    }

    #[test]
    fn test_bad_action() {
        let page = normalize_url("https://www.example.com/login");
        let test_cases = vec![
            (r#"<form><input></form>"#, true),
            (r##"<form action="#"></form>"##, true),
            (r#"<form action=""></form>"#, true),
            (r#"<form action="/session"></form>"#, true),
            (r#"<form action="session.php"></form>"#, true),
            (r#"<form action="https://auth.example.com/post"></form>"#, false),
            (r#"<form action="//www.example.com/post"></form>"#, false),
            (r#"<form action="https://collector.evil.biz/post"></form>"#, true),
            (r#"<form action="javascript:void(0)"></form>"#, true),
            (r#"<p>no forms</p>"#, false),
        ];

        for (html, expected) in test_cases {
            let doc = HtmlDocument::parse(html);
            assert_eq!(bad_action(&doc, &page), expected, "bad_action for {}", html);
        }
    }

    #[test]
    fn test_bad_action_any_form() {
        let page = normalize_url("example.com/");
        let doc = HtmlDocument::parse(
            r#"<form action="https://example.com/ok"></form><form action="https://other.net/x"></form>"#,
        );
        assert!(bad_action(&doc, &page));

        let doc = HtmlDocument::parse(r#"<form action="https://example.com/ok"></form>"#);
        assert!(!bad_action(&doc, &page));
    }

    #[test]
    fn test_fuzzy_only_keyword_hits() {
        let pii = PiiKeywords::default();
        let password = HtmlDocument::parse(r#"<form><input name="passwd"></form>"#);
        let email = HtmlDocument::parse(r#"<form><input placeholder="Emai"></form>"#);
        assert!(asks_for_pii(&password, &pii.password_pin, 85));
        assert!(asks_for_pii(&email, &pii.identity_email, 85));
    }

    #[test]
    fn test_nil_anchor_ratio() {
        let doc = HtmlDocument::parse(
            r##"<a href="#">a</a><a href="/x">b</a><a href="https://example.com">c</a><a>d</a>"##,
        );
        assert_eq!(nil_anchor_ratio(&doc), 0.25);

        let doc = HtmlDocument::parse(r#"<a href="">a</a><a href="javascript:void(0)">b</a>"#);
        assert_eq!(nil_anchor_ratio(&doc), 1.0);
    }

    #[test]
    fn test_nil_anchor_ratio_without_anchors() {
        let doc = HtmlDocument::parse("<p>plain</p>");
        assert_eq!(nil_anchor_ratio(&doc), 0.0);
    }

    #[test]
    fn test_from_bytes_lossy() {
        let doc = HtmlDocument::from_bytes(b"<form><input name=\"pin\"></form>\xff");
        assert!(has_bad_form(&doc, &blacklist(), 85));
    }
}
