//! Feature vector assembly.
//!
//! [`FeatureEngine`] binds an [`ExtractorConfig`] once and evaluates schema
//! fields in order against a parsed URL and, for DOM schemas, a parsed page.
//! The engine holds no mutable state and is shared freely across threads.

use crate::config::ExtractorConfig;
use crate::error::FeatureError;
use crate::features::dom::{self, HtmlDocument};
use crate::features::{lexical, reputation, structural};
use crate::schema::{Feature, ModelKind, Schema};
use crate::types::{FeatureValue, FeatureVector};
use crate::url::{normalize_url, ParsedUrl};
use rayon::prelude::*;
use std::sync::OnceLock;
use tracing::debug;

/// Assembles feature vectors under an immutable configuration.
#[derive(Debug, Clone)]
pub struct FeatureEngine {
    config: ExtractorConfig,
    brand_labels: Vec<String>,
    blacklist: Vec<String>,
}

impl Default for FeatureEngine {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl FeatureEngine {
    /// Create an engine, precomputing brand labels and the PII blacklist.
    pub fn new(config: ExtractorConfig) -> Self {
        let brand_labels = reputation::brand_labels(&config.brand_allowlist);
        let blacklist = config.pii.blacklist();
        Self {
            config,
            brand_labels,
            blacklist,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Registrable domain labels of the brand allow-list.
    pub fn brand_labels(&self) -> &[String] {
        &self.brand_labels
    }

    /// Assemble a vector for `schema` from a URL and optional page HTML.
    ///
    /// # Errors
    ///
    /// [`FeatureError::MissingHtml`] when the schema has DOM fields and `html`
    /// is `None`.
    pub fn assemble(
        &self,
        url: &str,
        html: Option<&str>,
        schema: Schema,
    ) -> Result<FeatureVector, FeatureError> {
        let document = html.map(HtmlDocument::parse);
        self.assemble_document(url, document.as_ref(), schema)
    }

    /// Assemble a vector for a schema looked up by name.
    pub fn assemble_named(
        &self,
        url: &str,
        html: Option<&str>,
        schema: &str,
    ) -> Result<FeatureVector, FeatureError> {
        self.assemble(url, html, schema.parse()?)
    }

    /// Assemble the URL-only input vector of a model selected by number.
    pub fn assemble_for_model(&self, url: &str, selector: i64) -> Result<FeatureVector, FeatureError> {
        let model = ModelKind::from_selector(selector)?;
        self.assemble(url, None, model.schema())
    }

    /// Assemble a vector from an already parsed page.
    pub fn assemble_document(
        &self,
        url: &str,
        document: Option<&HtmlDocument>,
        schema: Schema,
    ) -> Result<FeatureVector, FeatureError> {
        if schema.requires_html() && document.is_none() {
            return Err(FeatureError::MissingHtml(schema.name().to_string()));
        }

        let parsed = normalize_url(url);
        let mut entries = Vec::with_capacity(schema.fields().len());
        for field in schema.fields() {
            let value = self
                .evaluate(field.feature, &parsed, document)
                .ok_or_else(|| FeatureError::MissingHtml(schema.name().to_string()))?;
            entries.push((*field, value));
        }

        debug!(url, schema = schema.name(), fields = entries.len(), "assembled feature vector");
        Ok(FeatureVector::new(schema, entries))
    }

    /// URL-only features under the `url_all` schema.
    pub fn extract_url_features(&self, url: &str) -> Result<FeatureVector, FeatureError> {
        self.assemble(url, None, Schema::UrlAll)
    }

    /// URL and DOM features under the `online` schema.
    ///
    /// `html` is the raw page; invalid UTF-8 is replaced, never rejected.
    pub fn extract_full_features(
        &self,
        url: &str,
        html: impl AsRef<[u8]>,
    ) -> Result<FeatureVector, FeatureError> {
        let document = HtmlDocument::from_bytes(html.as_ref());
        self.assemble_document(url, Some(&document), Schema::Online)
    }

    /// Assemble many `(url, html)` pairs in parallel.
    ///
    /// Results are returned in input order; a failing item does not affect the others.
    pub fn extract_batch<U, H>(
        &self,
        items: &[(U, Option<H>)],
        schema: Schema,
    ) -> Vec<Result<FeatureVector, FeatureError>>
    where
        U: AsRef<str> + Sync,
        H: AsRef<str> + Sync,
    {
        debug!(items = items.len(), schema = schema.name(), "extracting batch");
        items
            .par_iter()
            .map(|(url, html)| self.assemble(url.as_ref(), html.as_ref().map(|h| h.as_ref()), schema))
            .collect()
    }

    /// Compute one feature. `None` only for a DOM feature without a document.
    fn evaluate(
        &self,
        feature: Feature,
        url: &ParsedUrl,
        document: Option<&HtmlDocument>,
    ) -> Option<FeatureValue> {
        let threshold = self.config.similarity_threshold;
        let value = match feature {
            Feature::UrlLength => count(lexical::url_length(url)),
            Feature::NetlocLength => count(lexical::netloc_length(url)),
            Feature::PathcompLength => count(lexical::pathcomp_length(url)),
            Feature::SubdomainLength => count(structural::subdomain_length(url)),
            Feature::CharCount(c) => count(lexical::count_char(&url.raw, c.as_char())),
            Feature::SubdomainLengthRatio => {
                FeatureValue::Ratio(structural::subdomain_length_ratio(url))
            }
            Feature::NetlocLengthRatio => FeatureValue::Ratio(structural::netloc_length_ratio(url)),
            Feature::PathcompLengthRatio => {
                FeatureValue::Ratio(structural::pathcomp_length_ratio(url))
            }
            Feature::BadTld => {
                FeatureValue::Flag(reputation::bad_tld(url, &self.config.tld_allowlist))
            }
            Feature::BadTldLocation => {
                FeatureValue::Flag(reputation::bad_tld_location(url, &self.config.tld_allowlist))
            }
            Feature::RawIp => FeatureValue::Flag(reputation::raw_ip_as_url(url)),
            Feature::Tls => FeatureValue::Flag(reputation::tls_status(url)),
            Feature::Typosquatting => FeatureValue::Flag(reputation::is_typosquatting(
                url,
                &self.brand_labels,
                threshold,
            )),
            Feature::BadForm => {
                FeatureValue::Flag(dom::has_bad_form(document?, &self.blacklist, threshold))
            }
            Feature::AsksPii(category) => FeatureValue::Flag(dom::asks_for_pii(
                document?,
                self.config.pii.category(category),
                threshold,
            )),
            Feature::BadAction => FeatureValue::Flag(dom::bad_action(document?, url)),
            Feature::NilAnchors => FeatureValue::Ratio(dom::nil_anchor_ratio(document?)),
        };
        Some(value)
    }
}

fn count(n: usize) -> FeatureValue {
    FeatureValue::Count(n as u64)
}

fn default_engine() -> &'static FeatureEngine {
    static ENGINE: OnceLock<FeatureEngine> = OnceLock::new();
    ENGINE.get_or_init(FeatureEngine::default)
}

/// URL-only features under the default configuration.
///
/// # Examples
///
/// ```
/// use phishfeat::extract_url_features;
///
/// let features = extract_url_features("https://www.paypal.com/signin")?;
/// assert_eq!(features.len(), 29);
/// assert_eq!(features.names().next(), Some("url_length"));
/// # Ok::<(), phishfeat::FeatureError>(())
/// ```
pub fn extract_url_features(url: &str) -> Result<FeatureVector, FeatureError> {
    default_engine().extract_url_features(url)
}

/// URL and DOM features under the default configuration.
pub fn extract_full_features(url: &str, html: impl AsRef<[u8]>) -> Result<FeatureVector, FeatureError> {
    default_engine().extract_full_features(url, html)
}

/// Assemble any schema under the default configuration.
pub fn assemble(url: &str, html: Option<&str>, schema: Schema) -> Result<FeatureVector, FeatureError> {
    default_engine().assemble(url, html, schema)
}
