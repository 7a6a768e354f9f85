//! Error types for feature assembly, schema lookup and configuration.

use thiserror::Error;

/// Errors that can occur while assembling feature vectors or loading configuration.
///
/// Individual extractors never fail: malformed URLs produce empty components and
/// ratios are guarded against zero denominators. Everything here is a caller
/// contract violation or a configuration problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// The requested schema name is not registered.
    #[error("Unknown feature schema: {0}")]
    UnknownSchema(String),

    /// The model selector does not name a known classifier.
    #[error("Unknown model selector: {0}")]
    UnknownModel(i64),

    /// A DOM-dependent schema was requested without an HTML document.
    #[error("Schema '{0}' requires an HTML document but none was supplied")]
    MissingHtml(String),

    /// A dataset label is outside the accepted vocabulary.
    #[error("Invalid dataset label: {0}")]
    InvalidLabel(String),

    /// The configuration file could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for FeatureError {
    fn from(err: toml::de::Error) -> Self {
        FeatureError::ConfigParse(err.to_string())
    }
}

impl From<std::io::Error> for FeatureError {
    fn from(err: std::io::Error) -> Self {
        FeatureError::Config(err.to_string())
    }
}
