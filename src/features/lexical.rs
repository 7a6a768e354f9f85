//! Length and character-frequency features.
//!
//! Length features exclude the scheme. Character counts run over the caller's
//! original string, scheme included.

use crate::url::ParsedUrl;

/// Characters whose frequency is counted in the raw URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuspiciousChar {
    Period,
    Slash,
    Percent,
    Dash,
    Question,
    Exclamation,
    AtSign,
    Comma,
    Ampersand,
    HashSign,
    Equal,
    Underscore,
    Plus,
    Colon,
    Semicolon,
    Tilde,
    Dollar,
}

impl SuspiciousChar {
    /// The full alphabet.
    pub const ALL: [SuspiciousChar; 17] = [
        SuspiciousChar::Period,
        SuspiciousChar::Slash,
        SuspiciousChar::Percent,
        SuspiciousChar::Dash,
        SuspiciousChar::Question,
        SuspiciousChar::Exclamation,
        SuspiciousChar::AtSign,
        SuspiciousChar::Comma,
        SuspiciousChar::Ampersand,
        SuspiciousChar::HashSign,
        SuspiciousChar::Equal,
        SuspiciousChar::Underscore,
        SuspiciousChar::Plus,
        SuspiciousChar::Colon,
        SuspiciousChar::Semicolon,
        SuspiciousChar::Tilde,
        SuspiciousChar::Dollar,
    ];

    /// The literal character counted.
    pub fn as_char(self) -> char {
        match self {
            SuspiciousChar::Period => '.',
            SuspiciousChar::Slash => '/',
            SuspiciousChar::Percent => '%',
            SuspiciousChar::Dash => '-',
            SuspiciousChar::Question => '?',
            SuspiciousChar::Exclamation => '!',
            SuspiciousChar::AtSign => '@',
            SuspiciousChar::Comma => ',',
            SuspiciousChar::Ampersand => '&',
            SuspiciousChar::HashSign => '#',
            SuspiciousChar::Equal => '=',
            SuspiciousChar::Underscore => '_',
            SuspiciousChar::Plus => '+',
            SuspiciousChar::Colon => ':',
            SuspiciousChar::Semicolon => ';',
            SuspiciousChar::Tilde => '~',
            SuspiciousChar::Dollar => '$',
        }
    }
}

/// Character count of the whole URL minus its scheme.
pub fn url_length(url: &ParsedUrl) -> usize {
    url.netloc.chars().count() + pathcomp_length(url)
}

/// Character count of the authority.
pub fn netloc_length(url: &ParsedUrl) -> usize {
    url.netloc.chars().count()
}

/// Character count of path, params, query and fragment with their delimiters.
pub fn pathcomp_length(url: &ParsedUrl) -> usize {
    url.pathcomp().chars().count()
}

/// Count occurrences of `c` in the original, unnormalized URL string.
pub fn count_char(raw: &str, c: char) -> usize {
    raw.chars().filter(|&ch| ch == c).count()
}
