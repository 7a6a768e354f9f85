//! Feature values and ordered feature vectors.
//!
//! Extractors produce typed values: counts, ratios and flags. Flags are kept as
//! `bool` inside a [`FeatureVector`]; consumers that need model input call
//! [`FeatureVector::to_numeric`] or choose [`BoolEncoding::Numeric`], which
//! renders `true`/`false` as `1`/`0`. [`FeatureValue::from_numeric`] reverses
//! that encoding, so the two representations convert without loss.

use crate::schema::{Feature, Field, Schema};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// The value type of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Non-negative integer (lengths, character counts)
    Count,
    /// Floating point ratio in `[0, 1]`
    Ratio,
    /// Boolean flag
    Flag,
}

/// How flags are rendered when a vector leaves the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolEncoding {
    /// `true` / `false`
    #[default]
    Logical,
    /// `1` / `0`
    Numeric,
}

/// A single computed feature value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Count(u64),
    Ratio(f64),
    Flag(bool),
}

impl FeatureValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FeatureValue::Count(_) => ValueKind::Count,
            FeatureValue::Ratio(_) => ValueKind::Ratio,
            FeatureValue::Flag(_) => ValueKind::Flag,
        }
    }

    /// Numeric form of the value; flags become 1.0 or 0.0.
    pub fn as_f64(&self) -> f64 {
        match *self {
            FeatureValue::Count(n) => n as f64,
            FeatureValue::Ratio(r) => r,
            FeatureValue::Flag(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// The flag, if this value is one.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FeatureValue::Flag(b) => Some(b),
            _ => None,
        }
    }

    /// Rebuild a typed value from its numeric form.
    ///
    /// Returns `None` when `number` is not a valid encoding for `kind`: flags
    /// accept only 0 and 1, counts only non-negative integers.
    pub fn from_numeric(kind: ValueKind, number: f64) -> Option<Self> {
        match kind {
            ValueKind::Flag if number == 0.0 => Some(FeatureValue::Flag(false)),
            ValueKind::Flag if number == 1.0 => Some(FeatureValue::Flag(true)),
            ValueKind::Flag => None,
            ValueKind::Count if number >= 0.0 && number.fract() == 0.0 && number <= u64::MAX as f64 => {
                Some(FeatureValue::Count(number as u64))
            }
            ValueKind::Count => None,
            ValueKind::Ratio if number.is_finite() => Some(FeatureValue::Ratio(number)),
            ValueKind::Ratio => None,
        }
    }

    /// JSON form of the value under the given flag encoding.
    pub fn to_json(&self, encoding: BoolEncoding) -> Value {
        match (*self, encoding) {
            (FeatureValue::Count(n), _) => Value::from(n),
            (FeatureValue::Ratio(r), _) => Value::from(r),
            (FeatureValue::Flag(b), BoolEncoding::Logical) => Value::Bool(b),
            (FeatureValue::Flag(b), BoolEncoding::Numeric) => Value::from(u8::from(b)),
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FeatureValue::Count(n) => serializer.serialize_u64(n),
            FeatureValue::Ratio(r) => serializer.serialize_f64(r),
            FeatureValue::Flag(b) => serializer.serialize_bool(b),
        }
    }
}

/// An ordered set of named feature values for one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: Schema,
    entries: Vec<(Field, FeatureValue)>,
}

impl FeatureVector {
    pub(crate) fn new(schema: Schema, entries: Vec<(Field, FeatureValue)>) -> Self {
        Self { schema, entries }
    }

    /// The schema this vector was assembled for.
    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by column name.
    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.entries
            .iter()
            .find(|(field, _)| field.name == name)
            .map(|(_, value)| *value)
    }

    /// Look up a value by feature.
    pub fn get_feature(&self, feature: Feature) -> Option<FeatureValue> {
        self.entries
            .iter()
            .find(|(field, _)| field.feature == feature)
            .map(|(_, value)| *value)
    }

    /// Column names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(field, _)| field.name)
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> + '_ {
        self.entries.iter().map(|(field, value)| (field.name, *value))
    }

    /// Positional model input with flags as 1.0 / 0.0.
    pub fn to_numeric(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| value.as_f64()).collect()
    }

    /// `(name, json value)` pairs in schema order.
    pub fn to_map(&self, encoding: BoolEncoding) -> Vec<(&'static str, Value)> {
        self.entries
            .iter()
            .map(|(field, value)| (field.name, value.to_json(encoding)))
            .collect()
    }

    /// A serializable view rendering flags with `encoding`.
    pub fn encoded(&self, encoding: BoolEncoding) -> EncodedVector<'_> {
        EncodedVector {
            vector: self,
            encoding,
        }
    }
}

/// Serializes a [`FeatureVector`] as a JSON object whose keys keep schema order.
pub struct EncodedVector<'a> {
    vector: &'a FeatureVector,
    encoding: BoolEncoding,
}

impl Serialize for EncodedVector<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.vector.len()))?;
        for (field, value) in &self.vector.entries {
            map.serialize_entry(field.name, &value.to_json(self.encoding))?;
        }
        map.end()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encoded(BoolEncoding::Logical).serialize(serializer)
    }
}
