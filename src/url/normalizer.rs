//! URL normalization and component splitting for feature extraction.
//!
//! Splitting follows the generic `scheme://netloc/path;params?query#fragment`
//! grammar without any validation or re-encoding, so every character of the
//! input stays countable. Malformed input never fails: missing components are
//! simply empty strings.

use crate::url::psl::{split_host_with_psl, DomainParts};

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// A URL split into its raw components plus its public-suffix decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// The caller's string, untouched
    pub raw: String,
    /// Lowercased scheme, empty when the input had none
    pub scheme: String,
    /// Authority exactly as written (userinfo and port included)
    pub netloc: String,
    /// Path without params
    pub path: String,
    /// `;params` of the last path segment, without the ';'
    pub params: String,
    /// Query string without the '?'
    pub query: String,
    /// Fragment without the '#'
    pub fragment: String,
    /// Lowercased host: netloc minus userinfo, port and IPv6 brackets
    pub host: String,
    /// Subdomain / domain / suffix split of `host`
    pub domain: DomainParts,
}

impl ParsedUrl {
    /// Path, params, query and fragment re-joined with their delimiters.
    ///
    /// Empty params, query or fragment contribute nothing, delimiter included.
    pub fn pathcomp(&self) -> String {
        let mut result = self.path.clone();
        if !self.params.is_empty() {
            result.push(';');
            result.push_str(&self.params);
        }
        if !self.query.is_empty() {
            result.push('?');
            result.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            result.push('#');
            result.push_str(&self.fragment);
        }
        result
    }

    /// The whole URL minus its scheme: netloc followed by the path component.
    pub fn without_scheme(&self) -> String {
        let mut result = self.netloc.clone();
        result.push_str(&self.pathcomp());
        result
    }
}

/// Check whether a raw URL already carries a recognized authority prefix.
pub fn has_authority_prefix(raw: &str) -> bool {
    raw.starts_with("//") || raw.starts_with("http://") || raw.starts_with("https://")
}

/// Normalize a raw URL string into its components.
///
/// Inputs that do not start with `//`, `http://` or `https://` get `//`
/// prepended so that a scheme-less `example.com/path` is read as authority
/// plus path instead of a bare path.
pub fn normalize_url(raw: &str) -> ParsedUrl {
    let prepared = if has_authority_prefix(raw) {
        raw.to_string()
    } else {
        format!("//{}", raw)
    };

    let split = urlparse(&prepared);
    let host = host_from_netloc(&split.netloc);
    let domain = split_host_with_psl(&host);

    ParsedUrl {
        raw: raw.to_string(),
        scheme: split.scheme,
        netloc: split.netloc,
        path: split.path,
        params: split.params,
        query: split.query,
        fragment: split.fragment,
        host,
        domain,
    }
}

/// Raw components of a split URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSplit {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

/// Split a URL string into scheme, netloc, path, params, query and fragment.
///
/// Leading control characters and spaces are stripped and embedded tabs and
/// newlines removed before splitting. No percent-decoding or case folding is
/// applied except to the scheme.
pub fn urlparse(url: &str) -> UrlSplit {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let mut rest = cleaned.as_str();

    let mut scheme = String::new();
    if let Some(colon) = rest.find(':') {
        let candidate = &rest[..colon];
        let valid = candidate.starts_with(|c: char| c.is_ascii_alphabetic())
            && candidate.chars().all(is_scheme_char);
        if valid {
            scheme = candidate.to_ascii_lowercase();
            rest = &rest[colon + 1..];
        }
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let (path, params) = if USES_PARAMS.contains(&scheme.as_str()) {
        split_params(path)
    } else {
        (path, "")
    };

    UrlSplit {
        scheme,
        netloc: netloc.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Split `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    if !path.contains(';') {
        return (path, "");
    }
    let split_at = match path.rfind('/') {
        Some(slash) => match path[slash..].find(';') {
            Some(offset) => slash + offset,
            None => return (path, ""),
        },
        None => match path.find(';') {
            Some(index) => index,
            None => return (path, ""),
        },
    };
    (&path[..split_at], &path[split_at + 1..])
}

/// Reduce a netloc to its lowercased host.
pub fn host_from_netloc(netloc: &str) -> String {
    let hostport = netloc.rsplit_once('@').map_or(netloc, |(_, host)| host);
    let host = match hostport.strip_prefix('[') {
        Some(bracketed) => bracketed.split_once(']').map_or(bracketed, |(host, _)| host),
        None => hostport.split(':').next().unwrap_or(""),
    };
    host.trim_end_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_less_input_gets_authority() {
        let parsed = normalize_url("example.com/path");
        assert_eq!(parsed.scheme, "");
        assert_eq!(parsed.netloc, "example.com");
        assert_eq!(parsed.path, "/path");
        assert_eq!(parsed.raw, "example.com/path");
    }

    #[test]
    fn test_full_url_components() {
        let parsed = normalize_url("https://user@api.example.co.uk:8443/a/b;v=1?q=test#results");
        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.netloc, "user@api.example.co.uk:8443");
        assert_eq!(parsed.host, "api.example.co.uk");
        assert_eq!(parsed.path, "/a/b");
        assert_eq!(parsed.params, "v=1");
        assert_eq!(parsed.query, "q=test");
        assert_eq!(parsed.fragment, "results");
        assert_eq!(parsed.domain.subdomain, "api");
        assert_eq!(parsed.domain.domain, "example");
        assert_eq!(parsed.domain.suffix, "co.uk");
    }

    #[test]
    fn test_pathcomp_drops_empty_delimiters() {
        let parsed = normalize_url("https://example.com/a;?#");
        assert_eq!(parsed.pathcomp(), "/a");
        assert_eq!(parsed.without_scheme(), "example.com/a");
    }

    #[test]
    fn test_params_only_from_last_segment() {
        let split = urlparse("http://example.com/a;x/b");
        assert_eq!(split.path, "/a;x/b");
        assert_eq!(split.params, "");

        let split = urlparse("http://example.com/a/b;x;y");
        assert_eq!(split.path, "/a/b");
        assert_eq!(split.params, "x;y");
    }

    #[test]
    fn test_empty_input() {
        let parsed = normalize_url("");
        assert_eq!(parsed.netloc, "");
        assert_eq!(parsed.path, "");
        assert_eq!(parsed.host, "");
        assert_eq!(parsed.pathcomp(), "");
        assert_eq!(parsed.domain, DomainParts::default());
    }

    #[test]
    fn test_uppercase_scheme_is_not_an_authority_prefix() {
        // Only the exact lowercase prefixes are recognized
        let parsed = normalize_url("HTTPS://EXAMPLE.COM/");
        assert_eq!(parsed.scheme, "");
        assert_eq!(parsed.netloc, "HTTPS:");
        assert_eq!(parsed.path, "//EXAMPLE.COM/");
    }

    #[test]
    fn test_tabs_and_newlines_removed() {
        let split = urlparse("http://exa\tmple.com/pa\nth");
        assert_eq!(split.netloc, "example.com");
        assert_eq!(split.path, "/path");
    }

    #[test]
    fn test_host_from_netloc() {
        assert_eq!(host_from_netloc("User:pw@WWW.Example.com:80"), "www.example.com");
        assert_eq!(host_from_netloc("[::1]:8080"), "::1");
        assert_eq!(host_from_netloc("example.com."), "example.com");
        assert_eq!(host_from_netloc(""), "");
    }
}
