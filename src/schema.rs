//! Versioned schema registry.
//!
//! A [`Schema`] is a named, ordered list of [`Field`]s. Each field pairs the
//! column name a consumer expects with the [`Feature`] that computes it, so the
//! same extractor can appear under different names in different schemas
//! (`period_count` in `url_all`, `period` in the per-model subsets).

use crate::config::PiiCategory;
use crate::error::FeatureError;
use crate::features::lexical::SuspiciousChar;
use crate::types::ValueKind;
use std::fmt;
use std::str::FromStr;

/// One computable feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    UrlLength,
    NetlocLength,
    PathcompLength,
    SubdomainLength,
    SubdomainLengthRatio,
    NetlocLengthRatio,
    PathcompLengthRatio,
    /// Occurrences of one character in the raw URL
    CharCount(SuspiciousChar),
    BadTld,
    BadTldLocation,
    RawIp,
    Tls,
    Typosquatting,
    /// Any form input matches the PII blacklist
    BadForm,
    /// Any form input matches one PII category
    AsksPii(PiiCategory),
    BadAction,
    NilAnchors,
}

impl Feature {
    /// The value type this feature produces.
    pub fn kind(self) -> ValueKind {
        match self {
            Feature::UrlLength
            | Feature::NetlocLength
            | Feature::PathcompLength
            | Feature::SubdomainLength
            | Feature::CharCount(_) => ValueKind::Count,
            Feature::SubdomainLengthRatio
            | Feature::NetlocLengthRatio
            | Feature::PathcompLengthRatio
            | Feature::NilAnchors => ValueKind::Ratio,
            Feature::BadTld
            | Feature::BadTldLocation
            | Feature::RawIp
            | Feature::Tls
            | Feature::Typosquatting
            | Feature::BadForm
            | Feature::AsksPii(_)
            | Feature::BadAction => ValueKind::Flag,
        }
    }

    /// Check if computing this feature needs the page HTML.
    pub fn requires_html(self) -> bool {
        matches!(
            self,
            Feature::BadForm | Feature::AsksPii(_) | Feature::BadAction | Feature::NilAnchors
        )
    }
}

/// A named column of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: &'static str,
    pub feature: Feature,
}

const fn field(name: &'static str, feature: Feature) -> Field {
    Field { name, feature }
}

const fn count(name: &'static str, c: SuspiciousChar) -> Field {
    Field {
        name,
        feature: Feature::CharCount(c),
    }
}

use Feature::*;
use SuspiciousChar as C;

const URL_BASIC: &[Field] = &[
    field("url_length", UrlLength),
    field("netloc_length", NetlocLength),
    count("period_count", C::Period),
    count("slash_count", C::Slash),
    count("percent_count", C::Percent),
    count("dash_count", C::Dash),
    count("underscore_count", C::Underscore),
    count("question_count", C::Question),
    count("ampersand_count", C::Ampersand),
    count("hashsign_count", C::HashSign),
    count("exclamation_count", C::Exclamation),
    count("atsign_count", C::AtSign),
    count("comma_count", C::Comma),
    count("equal_count", C::Equal),
    count("plus_count", C::Plus),
    count("colon_count", C::Colon),
    count("semicolon_count", C::Semicolon),
    count("tilde_count", C::Tilde),
    count("dollar_count", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_raw_ip", RawIp),
    field("has_tls", Tls),
];

const URL_SELECTED: &[Field] = &[
    field("url_length", UrlLength),
    field("subdomain_len_ratio", SubdomainLengthRatio),
    field("pathcomp_len_ratio", PathcompLengthRatio),
    count("period_count", C::Period),
    count("percent_count", C::Percent),
    count("dash_count", C::Dash),
    count("atsign_count", C::AtSign),
    count("ampersand_count", C::Ampersand),
    count("equal_count", C::Equal),
    count("hashsign_count", C::HashSign),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_raw_ip", RawIp),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
];

const OFFLINE: &[Field] = &[
    field("url_length", UrlLength),
    field("netloc_length", NetlocLength),
    field("pathcomp_length", PathcompLength),
    count("period_count", C::Period),
    count("slash_count", C::Slash),
    count("percent_count", C::Percent),
    count("dash_count", C::Dash),
    count("underscore_count", C::Underscore),
    count("question_count", C::Question),
    count("ampersand_count", C::Ampersand),
    count("hashsign_count", C::HashSign),
    count("exclamation_count", C::Exclamation),
    count("atsign_count", C::AtSign),
    count("comma_count", C::Comma),
    count("equal_count", C::Equal),
    count("plus_count", C::Plus),
    count("colon_count", C::Colon),
    count("semicolon_count", C::Semicolon),
    count("tilde_count", C::Tilde),
    count("dollar_count", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_raw_ip", RawIp),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
];

const URL_ALL: &[Field] = &[
    field("url_length", UrlLength),
    field("subdomain_len", SubdomainLength),
    field("subdomain_len_ratio", SubdomainLengthRatio),
    field("netloc_len", NetlocLength),
    field("netloc_len_ratio", NetlocLengthRatio),
    field("pathcomp_len", PathcompLength),
    field("pathcomp_len_ratio", PathcompLengthRatio),
    count("period_count", C::Period),
    count("slash_count", C::Slash),
    count("percent_count", C::Percent),
    count("dash_count", C::Dash),
    count("question_count", C::Question),
    count("atsign_count", C::AtSign),
    count("ampersand_count", C::Ampersand),
    count("hashsign_count", C::HashSign),
    count("equal_count", C::Equal),
    count("underscore_count", C::Underscore),
    count("plus_count", C::Plus),
    count("colon_count", C::Colon),
    count("semicolon_count", C::Semicolon),
    count("comma_count", C::Comma),
    count("exclamation_count", C::Exclamation),
    count("tilde_count", C::Tilde),
    count("dollar_count", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_raw_ip", RawIp),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
];

const URL_ALL_LR: &[Field] = &[
    field("url_length", UrlLength),
    field("subdomain_len_ratio", SubdomainLengthRatio),
    field("netloc_len", NetlocLength),
    field("netloc_len_ratio", NetlocLengthRatio),
    field("pathcomp_len", PathcompLength),
    field("pathcomp_len_ratio", PathcompLengthRatio),
    count("period", C::Period),
    count("slash", C::Slash),
    count("percent", C::Percent),
    count("dash", C::Dash),
    count("question", C::Question),
    count("atsign", C::AtSign),
    count("ampersand", C::Ampersand),
    count("hashsign", C::HashSign),
    count("equal", C::Equal),
    count("underscore", C::Underscore),
    count("plus", C::Plus),
    count("colon", C::Colon),
    count("comma", C::Comma),
    count("exclamation", C::Exclamation),
    count("tilde", C::Tilde),
    count("dollar", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
];

const URL_ALL_SVM: &[Field] = &[
    field("url_length", UrlLength),
    field("subdomain_len_ratio", SubdomainLengthRatio),
    field("netloc_len", NetlocLength),
    field("netloc_len_ratio", NetlocLengthRatio),
    field("pathcomp_len", PathcompLength),
    field("pathcomp_len_ratio", PathcompLengthRatio),
    count("period", C::Period),
    count("slash", C::Slash),
    count("percent", C::Percent),
    count("dash", C::Dash),
    count("atsign", C::AtSign),
    count("ampersand", C::Ampersand),
    count("hashsign", C::HashSign),
    count("equal", C::Equal),
    count("underscore", C::Underscore),
    count("plus", C::Plus),
    count("colon", C::Colon),
    count("comma", C::Comma),
    count("exclamation", C::Exclamation),
    count("dollar", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
];

const URL_ALL_KNN: &[Field] = &[
    field("subdomain_len", SubdomainLength),
    field("subdomain_len_ratio", SubdomainLengthRatio),
    field("pathcomp_len_ratio", PathcompLengthRatio),
    count("period", C::Period),
    count("question", C::Question),
    count("atsign", C::AtSign),
    count("colon", C::Colon),
    count("comma", C::Comma),
    count("exclamation", C::Exclamation),
    count("tilde", C::Tilde),
    count("dollar", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_raw_ip", RawIp),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
];

const URL_ALL_RF: &[Field] = &[
    field("url_length", UrlLength),
    field("subdomain_len", SubdomainLength),
    field("subdomain_len_ratio", SubdomainLengthRatio),
    field("netloc_len", NetlocLength),
    field("netloc_len_ratio", NetlocLengthRatio),
    field("pathcomp_len_ratio", PathcompLengthRatio),
    count("period", C::Period),
    count("slash", C::Slash),
    count("percent", C::Percent),
    count("dash", C::Dash),
    count("question", C::Question),
    count("atsign", C::AtSign),
    count("ampersand", C::Ampersand),
    count("hashsign", C::HashSign),
    count("equal", C::Equal),
    count("underscore", C::Underscore),
    count("plus", C::Plus),
    count("colon", C::Colon),
    count("semicolon", C::Semicolon),
    count("comma", C::Comma),
    count("exclamation", C::Exclamation),
    count("tilde", C::Tilde),
    count("dollar", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_raw_ip", RawIp),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
];

const HTML_DOM: &[Field] = &[
    field("has_bad_form", BadForm),
    field("asks_username_email", AsksPii(PiiCategory::IdentityEmail)),
    field("asks_password", AsksPii(PiiCategory::PasswordPin)),
    field("asks_phone", AsksPii(PiiCategory::Phone)),
    field("asks_birthday", AsksPii(PiiCategory::Birthday)),
    field("asks_card_info", AsksPii(PiiCategory::PaymentCard)),
    field("asks_ssn", AsksPii(PiiCategory::GovernmentId)),
    field("has_bad_action", BadAction),
    field("nil_anchors", NilAnchors),
];

const ONLINE: &[Field] = &[
    field("url_length", UrlLength),
    field("netloc_length", NetlocLength),
    field("pathcomp_length", PathcompLength),
    count("period_count", C::Period),
    count("slash_count", C::Slash),
    count("percent_count", C::Percent),
    count("dash_count", C::Dash),
    count("underscore_count", C::Underscore),
    count("question_count", C::Question),
    count("ampersand_count", C::Ampersand),
    count("hashsign_count", C::HashSign),
    count("exclamation_count", C::Exclamation),
    count("atsign_count", C::AtSign),
    count("comma_count", C::Comma),
    count("equal_count", C::Equal),
    count("plus_count", C::Plus),
    count("colon_count", C::Colon),
    count("semicolon_count", C::Semicolon),
    count("tilde_count", C::Tilde),
    count("dollar_count", C::Dollar),
    field("has_bad_tld", BadTld),
    field("has_bad_tld_location", BadTldLocation),
    field("has_raw_ip", RawIp),
    field("has_tls", Tls),
    field("typosquatting", Typosquatting),
    field("has_bad_form", BadForm),
    field("asks_username_email", AsksPii(PiiCategory::IdentityEmail)),
    field("asks_password", AsksPii(PiiCategory::PasswordPin)),
    field("asks_phone", AsksPii(PiiCategory::Phone)),
    field("asks_birthday", AsksPii(PiiCategory::Birthday)),
    field("asks_card_info", AsksPii(PiiCategory::PaymentCard)),
    field("asks_ssn", AsksPii(PiiCategory::GovernmentId)),
    field("has_bad_action", BadAction),
];

/// A named feature set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    /// Lengths, character counts and reputation flags without typosquatting
    UrlBasic,
    /// Reduced URL set chosen by feature selection
    UrlSelected,
    /// URL features consumed by the offline model
    Offline,
    /// Every URL feature; default for URL-only extraction
    UrlAll,
    UrlAllLr,
    UrlAllSvm,
    UrlAllKnn,
    UrlAllRf,
    /// DOM features only
    HtmlDom,
    /// `offline` plus DOM features; default for URL+HTML extraction
    Online,
}

impl Schema {
    /// Every registered schema.
    pub const ALL: [Schema; 10] = [
        Schema::UrlBasic,
        Schema::UrlSelected,
        Schema::Offline,
        Schema::UrlAll,
        Schema::UrlAllLr,
        Schema::UrlAllSvm,
        Schema::UrlAllKnn,
        Schema::UrlAllRf,
        Schema::HtmlDom,
        Schema::Online,
    ];

    /// Registry name of the schema.
    pub fn name(self) -> &'static str {
        match self {
            Schema::UrlBasic => "url_basic",
            Schema::UrlSelected => "url_selected",
            Schema::Offline => "offline",
            Schema::UrlAll => "url_all",
            Schema::UrlAllLr => "url_all_lr",
            Schema::UrlAllSvm => "url_all_svm",
            Schema::UrlAllKnn => "url_all_knn",
            Schema::UrlAllRf => "url_all_rf",
            Schema::HtmlDom => "html_dom",
            Schema::Online => "online",
        }
    }

    /// Ordered fields of the schema.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Schema::UrlBasic => URL_BASIC,
            Schema::UrlSelected => URL_SELECTED,
            Schema::Offline => OFFLINE,
            Schema::UrlAll => URL_ALL,
            Schema::UrlAllLr => URL_ALL_LR,
            Schema::UrlAllSvm => URL_ALL_SVM,
            Schema::UrlAllKnn => URL_ALL_KNN,
            Schema::UrlAllRf => URL_ALL_RF,
            Schema::HtmlDom => HTML_DOM,
            Schema::Online => ONLINE,
        }
    }

    /// Column names in order.
    pub fn field_names(self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().map(|field| field.name)
    }

    /// Check if any field of the schema needs the page HTML.
    pub fn requires_html(self) -> bool {
        self.fields().iter().any(|field| field.feature.requires_html())
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Schema {
    type Err = FeatureError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Schema::ALL
            .iter()
            .copied()
            .find(|schema| schema.name() == name)
            .ok_or_else(|| FeatureError::UnknownSchema(name.to_string()))
    }
}

/// Classifier families, each trained on its own subset of `url_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    LogisticRegression,
    Svm,
    Knn,
    RandomForest,
}

impl ModelKind {
    /// Map a numeric model selector (0-3) to a model.
    pub fn from_selector(selector: i64) -> Result<Self, FeatureError> {
        match selector {
            0 => Ok(ModelKind::LogisticRegression),
            1 => Ok(ModelKind::Svm),
            2 => Ok(ModelKind::Knn),
            3 => Ok(ModelKind::RandomForest),
            other => Err(FeatureError::UnknownModel(other)),
        }
    }

    /// Input schema expected by the model.
    pub fn schema(self) -> Schema {
        match self {
            ModelKind::LogisticRegression => Schema::UrlAllLr,
            ModelKind::Svm => Schema::UrlAllSvm,
            ModelKind::Knn => Schema::UrlAllKnn,
            ModelKind::RandomForest => Schema::UrlAllRf,
        }
    }
}
