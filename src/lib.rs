//! phishfeat - Phishing URL and HTML feature extraction
//!
//! This crate turns a URL (and optionally the HTML of the page it serves) into
//! an ordered vector of lexical, structural, reputation and DOM features for
//! phishing classifiers.
//!
//! # Features
//!
//! - **Scheme-insensitive lengths**: length features exclude the scheme; character counts do not
//! - **Public-suffix aware**: `co.uk` and `com.br` are suffixes, never domains
//! - **Deterministic**: same input always produces the same vector
//! - **Versioned schemas**: every historical feature set is a named, ordered schema
//! - **Parallel batches**: independent inputs are extracted with rayon
//!
//! # Quick Start
//!
//! ```
//! use phishfeat::{extract_full_features, extract_url_features, FeatureValue};
//!
//! // URL-only features (`url_all` schema)
//! let features = extract_url_features("http://192.168.1.1/paypal.com/login")?;
//! assert_eq!(features.get("has_raw_ip"), Some(FeatureValue::Flag(true)));
//! assert_eq!(features.get("has_tls"), Some(FeatureValue::Flag(false)));
//!
//! // URL + DOM features (`online` schema)
//! let html = r#"<form action="https://collector.example.net/"><input name="password"></form>"#;
//! let features = extract_full_features("https://www.paypal.com/signin", html)?;
//! assert_eq!(features.get("asks_password"), Some(FeatureValue::Flag(true)));
//! assert_eq!(features.get("has_bad_action"), Some(FeatureValue::Flag(true)));
//!
//! // Positional model input
//! let input: Vec<f64> = features.to_numeric();
//! assert_eq!(input.len(), 33);
//! # Ok::<(), phishfeat::FeatureError>(())
//! ```
//!
//! # Schemas
//!
//! | Name           | Fields | HTML | Description |
//! |----------------|--------|------|-------------|
//! | `url_basic`    | 23     | no   | Lengths, character counts, TLD/IP/TLS flags |
//! | `url_selected` | 15     | no   | Feature-selected URL subset |
//! | `offline`      | 25     | no   | URL features of the offline model |
//! | `url_all`      | 29     | no   | Every URL feature (default URL-only schema) |
//! | `url_all_lr`   | 26     | no   | Logistic regression input |
//! | `url_all_svm`  | 24     | no   | SVM input |
//! | `url_all_knn`  | 16     | no   | KNN input |
//! | `url_all_rf`   | 28     | no   | Random forest input |
//! | `html_dom`     | 9      | yes  | Form, PII and anchor features |
//! | `online`       | 33     | yes  | `offline` plus DOM features (default URL+HTML schema) |
//!
//! # Error Handling
//!
//! Extractors never fail on malformed input. Assembly returns
//! `Result<FeatureVector, FeatureError>` for caller errors:
//!
//! - A DOM schema requested without HTML
//! - An unknown schema name or model selector
//! - An unreadable or invalid configuration file

// Re-export main extraction entry points
pub use engine::{assemble, extract_full_features, extract_url_features, FeatureEngine};

// Re-export public types
pub use config::{ExtractorConfig, PiiCategory, PiiKeywords};
pub use dataset::{csv_header, DatasetRow, Label};
pub use error::FeatureError;
pub use features::HtmlDocument;
pub use schema::{Feature, Field, ModelKind, Schema};
pub use types::{BoolEncoding, EncodedVector, FeatureValue, FeatureVector, ValueKind};
pub use crate::url::{normalize_url, split_host_with_psl, DomainParts, ParsedUrl};

// Module declarations
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod features;
pub mod schema;
pub mod types;
pub mod url;
