//! Dataset row contract: one CSV row per URL, schema columns then a label.
//!
//! This module only renders text; reading and writing files belongs to the
//! training pipeline.

use crate::error::FeatureError;
use crate::schema::Schema;
use crate::types::{BoolEncoding, FeatureValue, FeatureVector};
use std::fmt;
use std::str::FromStr;

/// Name of the final label column.
pub const LABEL_COLUMN: &str = "result";

/// Ground-truth class of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Benign,
    Phishing,
}

impl Label {
    /// Normalize a raw label from a source list.
    ///
    /// Accepts `benign`, and `phishing`, `malicious` or `yes` for phishing,
    /// ignoring case and surrounding whitespace.
    pub fn from_raw(raw: &str) -> Result<Self, FeatureError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "benign" => Ok(Label::Benign),
            "phishing" | "malicious" | "yes" => Ok(Label::Phishing),
            _ => Err(FeatureError::InvalidLabel(raw.to_string())),
        }
    }

    /// Canonical label text written to datasets.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Benign => "benign",
            Label::Phishing => "phishing",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = FeatureError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Label::from_raw(raw)
    }
}

/// Header row for a dataset of `schema` vectors.
pub fn csv_header(schema: Schema) -> String {
    schema
        .field_names()
        .chain(std::iter::once(LABEL_COLUMN))
        .collect::<Vec<_>>()
        .join(",")
}

/// A labelled feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    pub features: FeatureVector,
    pub label: Label,
}

impl DatasetRow {
    pub fn new(features: FeatureVector, label: Label) -> Self {
        Self { features, label }
    }

    /// Render the row as one CSV line matching [`csv_header`] for its schema.
    ///
    /// Logical flags are written `True`/`False`, numeric flags `1`/`0`.
    pub fn to_csv_line(&self, encoding: BoolEncoding) -> String {
        self.features
            .iter()
            .map(|(_, value)| render_value(value, encoding))
            .chain(std::iter::once(self.label.as_str().to_string()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn render_value(value: FeatureValue, encoding: BoolEncoding) -> String {
    match (value, encoding) {
        (FeatureValue::Count(n), _) => n.to_string(),
        (FeatureValue::Ratio(r), _) => format!("{:?}", r),
        (FeatureValue::Flag(true), BoolEncoding::Logical) => "True".to_string(),
        (FeatureValue::Flag(false), BoolEncoding::Logical) => "False".to_string(),
        (FeatureValue::Flag(b), BoolEncoding::Numeric) => u8::from(b).to_string(),
    }
}
