//! Annotation records and their feature maps.

use crate::Span;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feature key carrying the hierarchical major sub-type of an annotation.
pub const MAJOR_TYPE: &str = "majorType";
/// Feature key carrying the hierarchical minor sub-type of an annotation.
pub const MINOR_TYPE: &str = "minorType";

/// A single feature value.
///
/// Producers attach loosely-typed features to annotations. Rather than an
/// open-ended dynamic value, the closed set below covers everything the
/// engine reads: string sub-types, numeric node references, and sequences
/// of either. A feature that is absent is simply a missing key in the
/// [`FeatureMap`]; there is no null value, and equality against a missing
/// key is always false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// String value, e.g. `"location"` under `majorType`.
    Str(String),
    /// Integer value, e.g. a node reference.
    Int(i64),
    /// Sequence of values, e.g. a pair of match offsets.
    List(Vec<FeatureValue>),
}

impl FeatureValue {
    /// The string content, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FeatureValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The elements, if this is a sequence value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[FeatureValue]> {
        match self {
            FeatureValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Str(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Str(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Int(value)
    }
}

impl From<Vec<FeatureValue>> for FeatureValue {
    fn from(value: Vec<FeatureValue>) -> Self {
        FeatureValue::List(value)
    }
}

/// String-keyed feature map attached to an annotation or document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureMap(BTreeMap<String, FeatureValue>);

impl FeatureMap {
    /// Create an empty feature map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a feature, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a feature value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.0.get(key)
    }

    /// Look up a feature and narrow it to a string value.
    ///
    /// Returns `None` for a missing key and for a non-string value, so
    /// string-equality filters treat both the same way.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(FeatureValue::as_str)
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate features in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A typed, offset-bounded span over a document's text.
///
/// Annotations are produced by an external extraction pipeline and owned by
/// the [`Document`](crate::Document); the engine only ever reads them.
/// Offsets are in working-text coordinates, the text the pipeline actually
/// scanned, and satisfy `start <= end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Producer-assigned ID, unique within one document.
    pub id: u32,
    /// Type tag, e.g. `"Location"` or `"Person"`.
    pub annotation_type: String,
    /// Start offset in working-text coordinates (inclusive).
    pub start: usize,
    /// End offset in working-text coordinates (exclusive).
    pub end: usize,
    /// Features attached by the producer.
    pub features: FeatureMap,
}

impl Annotation {
    /// Create an annotation with an empty feature map.
    #[must_use]
    pub fn new(id: u32, annotation_type: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            id,
            annotation_type: annotation_type.into(),
            start,
            end,
            features: FeatureMap::new(),
        }
    }

    /// Attach a feature, builder style.
    ///
    /// # Example
    /// ```
    /// use respan::Annotation;
    ///
    /// let annotation = Annotation::new(4, "Lookup", 12, 17)
    ///     .with_feature("majorType", "location")
    ///     .with_feature("minorType", "city");
    /// assert_eq!(annotation.major_type(), Some("location"));
    /// ```
    #[must_use]
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.features.insert(key, value);
        self
    }

    /// The covered span, in working-text coordinates.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Check if this annotation's span overlaps another's.
    #[must_use]
    pub fn overlaps(&self, other: &Annotation) -> bool {
        self.span().overlaps(&other.span())
    }

    /// The `majorType` feature, when present as a string.
    #[must_use]
    pub fn major_type(&self) -> Option<&str> {
        self.features.get_str(MAJOR_TYPE)
    }

    /// The `minorType` feature, when present as a string.
    #[must_use]
    pub fn minor_type(&self) -> Option<&str> {
        self.features.get_str(MINOR_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_lookup() {
        let annotation = Annotation::new(7, "Lookup", 0, 4)
            .with_feature("majorType", "organization")
            .with_feature("matches", vec![FeatureValue::Int(3), FeatureValue::Int(9)]);

        assert_eq!(annotation.major_type(), Some("organization"));
        assert_eq!(annotation.minor_type(), None);

        let matches = annotation.features.get("matches").unwrap().as_list().unwrap();
        assert_eq!(matches[0].as_int(), Some(3));
        assert_eq!(matches[1].as_int(), Some(9));
    }

    #[test]
    fn test_non_string_feature_is_not_a_sub_type() {
        let annotation = Annotation::new(1, "Lookup", 0, 4).with_feature(MAJOR_TYPE, 42i64);
        assert_eq!(annotation.major_type(), None);
    }

    #[test]
    fn test_overlap_delegates_to_span() {
        let a = Annotation::new(1, "Location", 10, 20);
        let b = Annotation::new(2, "Location", 15, 25);
        let c = Annotation::new(3, "Location", 20, 30);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_serde_roundtrip() {
        let annotation = Annotation::new(11, "Person", 5, 12).with_feature("gender", "female");
        let json = serde_json::to_string(&annotation).unwrap();
        let back: Annotation = serde_json::from_str(&json).unwrap();
        assert_eq!(annotation, back);
    }
}
