//! Extractor configuration: allow-lists and PII keyword categories.
//!
//! All lists are plain data bound once into a [`crate::FeatureEngine`]. The
//! defaults reproduce the lists the published models were trained with.

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// TLDs considered reputable when they appear in the final netloc label.
pub const DEFAULT_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "co", "uk", "eu", "ca", "de", "br", "jp",
];

/// Frequently impersonated brands, as landing-page URLs.
pub const DEFAULT_BRANDS: &[&str] = &[
    "https://www.att.com/",
    "https://www.paypal.com/",
    "https://www.microsoft.com/",
    "https://www.dhl.com/",
    "https://www.facebook.com/",
    "https://www.irs.gov/",
    "https://www.verizon.com/",
    "https://www.mitsubishi.com/",
    "https://www.adobe.com/",
    "https://www.amazon.com/",
    "https://www.apple.com/",
    "https://www.costco.com/",
    "https://www.wellsfargo.com/",
    "https://www.ebay.com/",
    "https://www.post.ch/",
    "https://www.naver.com/",
    "https://www.instagram.com/",
    "https://www.whatsapp.com/",
    "https://www.rakuten.com/",
    "https://www.americanexpress.com/",
    "https://www.office.com/",
    "https://outlook.office365.com/",
    "https://login.microsoftonline.com/",
    "https://www.chase.com/",
    "https://www.coinbase.com/",
    "https://www.netflix.com/",
    "https://www.fedex.com/",
    "https://www.usps.com/",
    "https://www.ups.com/",
    "https://www.linkedin.com/",
    "https://www.google.com/",
    "https://www.google.co.uk/",
    "https://www.bankofamerica.com/",
    "https://store.steampowered.com/",
    "https://steamcommunity.com/",
    "https://discord.com/",
    "https://www.roblox.com/",
    "https://www.homedepot.com/",
    "https://www.youtube.com/",
];

/// Similarity score a near-miss must exceed to count as a match.
pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 85;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The six kinds of personal data a form may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Login name or email address
    IdentityEmail,
    /// Password, passphrase or PIN
    PasswordPin,
    Phone,
    Birthday,
    /// Credit/debit card number, CVV, expiry
    PaymentCard,
    /// Social security number
    GovernmentId,
}

impl PiiCategory {
    /// Every category, in feature order.
    pub const ALL: [PiiCategory; 6] = [
        PiiCategory::IdentityEmail,
        PiiCategory::PasswordPin,
        PiiCategory::Phone,
        PiiCategory::Birthday,
        PiiCategory::PaymentCard,
        PiiCategory::GovernmentId,
    ];
}

/// Keyword lists used for fuzzy matching against `<input>` attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiiKeywords {
    pub identity_email: Vec<String>,
    pub password_pin: Vec<String>,
    pub phone: Vec<String>,
    pub birthday: Vec<String>,
    pub payment_card: Vec<String>,
    pub government_id: Vec<String>,
    /// Blacklisted keywords that belong to no category.
    pub extra_blacklist: Vec<String>,
}

impl Default for PiiKeywords {
    fn default() -> Self {
        Self {
            identity_email: strings(&[
                "login",
                "username",
                "email",
                "email address",
                "e-mail",
                "e-mail address",
            ]),
            password_pin: strings(&["password", "passphrase", "passcode", "pin", "pin number"]),
            phone: strings(&[
                "phone number",
                "telephone number",
                "mobile number",
                "cell phone number",
            ]),
            birthday: strings(&[
                "birthday",
                "birth day",
                "birth date",
                "date of birth",
                "dob",
                "bday",
            ]),
            payment_card: strings(&[
                "credit card",
                "credit card number",
                "debit card",
                "debit card number",
                "card number",
                "card verification",
                "card verification value",
                "cvv",
                "expiration date",
                "expiry date",
            ]),
            government_id: strings(&[
                "social security number",
                "social security",
                "ssn",
                "ssn id",
                "ssn digits",
            ]),
            extra_blacklist: strings(&["bank account number", "mother's maiden name"]),
        }
    }
}

impl PiiKeywords {
    /// Keywords of a single category.
    pub fn category(&self, category: PiiCategory) -> &[String] {
        match category {
            PiiCategory::IdentityEmail => &self.identity_email,
            PiiCategory::PasswordPin => &self.password_pin,
            PiiCategory::Phone => &self.phone,
            PiiCategory::Birthday => &self.birthday,
            PiiCategory::PaymentCard => &self.payment_card,
            PiiCategory::GovernmentId => &self.government_id,
        }
    }

    /// Union of every category plus the extra blacklist, without duplicates.
    pub fn blacklist(&self) -> Vec<String> {
        let mut all: Vec<String> = Vec::new();
        let sources = PiiCategory::ALL
            .iter()
            .map(|category| self.category(*category))
            .chain(std::iter::once(self.extra_blacklist.as_slice()));
        for keyword in sources.flatten() {
            if !all.contains(keyword) {
                all.push(keyword.clone());
            }
        }
        all
    }
}

/// Static data consumed by the reputation and DOM extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Reputable TLD labels (exact, case-sensitive match)
    pub tld_allowlist: Vec<String>,
    /// Legitimate brand URLs; only their registrable domain label is compared
    pub brand_allowlist: Vec<String>,
    /// PII keyword categories
    pub pii: PiiKeywords,
    /// Fuzzy matches must score strictly above this (0-100)
    pub similarity_threshold: u8,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            tld_allowlist: strings(DEFAULT_TLDS),
            brand_allowlist: strings(DEFAULT_BRANDS),
            pii: PiiKeywords::default(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl ExtractorConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, FeatureError> {
        let config: ExtractorConfig = toml::from_str(text)?;
        config.warn_on_empty_lists();
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeatureError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    fn warn_on_empty_lists(&self) {
        if self.tld_allowlist.is_empty() {
            warn!("tld_allowlist is empty; every URL will report has_bad_tld");
        }
        if self.brand_allowlist.is_empty() {
            warn!("brand_allowlist is empty; typosquatting will never fire");
        }
        if self.pii.blacklist().is_empty() {
            warn!("PII keyword lists are empty; form features will never fire");
        }
    }
}
