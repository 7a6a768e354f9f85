//! Public Suffix List integration for proper domain splitting.

use psl::{List, Psl, Type};
use std::net::IpAddr;

/// A hostname split into subdomain, registrable domain label and public suffix.
///
/// For `api.example.co.uk` this is `("api", "example", "co.uk")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    /// Everything left of the registrable domain, joined with dots (may be empty)
    pub subdomain: String,
    /// Registrable label immediately left of the suffix (e.g., "example")
    pub domain: String,
    /// Public suffix, possibly multi-label (e.g., "co.uk"); empty when unknown
    pub suffix: String,
}

impl DomainParts {
    /// Check if a subdomain is present.
    pub fn has_subdomain(&self) -> bool {
        !self.subdomain.is_empty()
    }

    /// Rebuild the dotted host from its parts.
    ///
    /// The separator before the suffix is always emitted, so a host with an
    /// unknown suffix rebuilds as `"domain."`.
    pub fn rebuilt_host(&self) -> String {
        if self.subdomain.is_empty() {
            format!("{}.{}", self.domain, self.suffix)
        } else {
            format!("{}.{}.{}", self.subdomain, self.domain, self.suffix)
        }
    }
}

/// Split a hostname into subdomain, domain and suffix using the Public Suffix List.
///
/// Only the ICANN section of the list counts as a suffix; private registrations
/// such as `github.io` are treated as ordinary domains. Rules:
/// - an empty host yields empty parts
/// - an IP address host yields the address as `domain`
/// - an unknown suffix yields an empty `suffix` and the rightmost label as `domain`
/// - a bare suffix (`co.uk`) yields an empty `domain`
pub fn split_host_with_psl(host: &str) -> DomainParts {
    if host.is_empty() {
        return DomainParts::default();
    }

    if host.parse::<IpAddr>().is_ok() {
        return DomainParts {
            domain: host.to_string(),
            ..DomainParts::default()
        };
    }

    let suffix = icann_suffix(host).unwrap_or("");
    let remainder = if suffix.is_empty() {
        host
    } else {
        host.strip_suffix(suffix)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or("")
    };

    let (subdomain, domain) = match remainder.rsplit_once('.') {
        Some((subdomain, domain)) => (subdomain, domain),
        None => ("", remainder),
    };

    DomainParts {
        subdomain: subdomain.to_string(),
        domain: domain.to_string(),
        suffix: suffix.to_string(),
    }
}

/// Find the longest ICANN public suffix of `host`.
///
/// Private-section matches are peeled one label at a time until an ICANN rule
/// applies (`foo.blogspot.com` -> `com`).
fn icann_suffix(host: &str) -> Option<&str> {
    let mut candidate = host;
    loop {
        let suffix = List.suffix(candidate.as_bytes())?;
        let len = suffix.as_bytes().len();
        match suffix.typ() {
            Some(Type::Icann) => return host.get(host.len() - len..),
            Some(Type::Private) => {
                let matched = candidate.get(candidate.len() - len..)?;
                candidate = matched.split_once('.')?.1;
            }
            None => return None,
        }
    }
}
