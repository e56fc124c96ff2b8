//! Documents and their annotation collections.

use crate::{Annotation, Error, RepositioningMap, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered collection of annotations.
///
/// Iteration order is the producer's insertion order; no offset sorting
/// happens here. Collections handed to the engine are treated as read-only
/// snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    annotations: Vec<Annotation>,
}

impl AnnotationSet {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation, preserving insertion order.
    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Iterate all annotations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.annotations.iter()
    }

    /// Iterate annotations of one type, in insertion order.
    pub fn of_type<'a>(
        &'a self,
        annotation_type: &'a str,
    ) -> impl Iterator<Item = &'a Annotation> + 'a {
        self.annotations
            .iter()
            .filter(move |a| a.annotation_type == annotation_type)
    }

    /// Number of annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

impl FromIterator<Annotation> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self {
            annotations: iter.into_iter().collect(),
        }
    }
}

/// A processed document: the working text the pipeline scanned, plus whatever
/// the producer was configured to preserve alongside it.
///
/// `original_content` and the repositioning map are optional features; they
/// are present only when the producer collected them. The engine never writes
/// back to a document, so shared read access from concurrent callers is safe.
///
/// # Example
/// ```
/// use respan::{Annotation, Document};
///
/// let mut doc = Document::new("Hepburn was born in Brussels.");
/// doc.push_annotation(Annotation::new(1, "Person", 0, 7));
/// doc.push_annotation(Annotation::new(2, "Location", 20, 28));
/// assert_eq!(doc.annotations().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    content: Option<String>,
    original_content: Option<String>,
    repositioning: Option<RepositioningMap>,
    default_set: AnnotationSet,
    named_sets: BTreeMap<String, AnnotationSet>,
}

impl Document {
    /// Create a document around its working content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Create a document that exposes no content at all.
    ///
    /// Extraction against such a document fails with
    /// [`Error::MissingContent`]; this models a producer that discarded the
    /// text after annotating.
    #[must_use]
    pub fn without_content() -> Self {
        Self::default()
    }

    /// Attach the preserved pre-transformation text, builder style.
    #[must_use]
    pub fn with_original_content(mut self, original: impl Into<String>) -> Self {
        self.original_content = Some(original.into());
        self
    }

    /// Attach the offset repositioning map, builder style.
    #[must_use]
    pub fn with_repositioning(mut self, map: RepositioningMap) -> Self {
        self.repositioning = Some(map);
        self
    }

    /// Append an annotation to the default collection.
    pub fn push_annotation(&mut self, annotation: Annotation) {
        self.default_set.push(annotation);
    }

    /// Append an annotation to a named collection, creating it on first use.
    pub fn push_named_annotation(&mut self, set_name: impl Into<String>, annotation: Annotation) {
        self.named_sets
            .entry(set_name.into())
            .or_default()
            .push(annotation);
    }

    /// The working text, if the producer kept any content at all.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// The preserved original text, when the producer was configured to
    /// collect it.
    #[must_use]
    pub fn original_content(&self) -> Option<&str> {
        self.original_content.as_deref()
    }

    /// The repositioning map, when the producer was configured to collect it.
    #[must_use]
    pub fn repositioning(&self) -> Option<&RepositioningMap> {
        self.repositioning.as_ref()
    }

    /// The default annotation collection.
    #[must_use]
    pub fn annotations(&self) -> &AnnotationSet {
        &self.default_set
    }

    /// A named annotation collection, if it exists.
    #[must_use]
    pub fn named_annotations(&self, name: &str) -> Option<&AnnotationSet> {
        self.named_sets.get(name)
    }

    /// Iterate the named collections in name order.
    pub fn named_sets(&self) -> impl Iterator<Item = (&str, &AnnotationSet)> {
        self.named_sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Index every annotation in the document by ID.
    ///
    /// Scans the default collection, then every named collection in name
    /// order. IDs are assigned by the producer and must be unique across the
    /// whole document; finding the same ID twice fails with
    /// [`Error::DuplicateId`] and points at a producer defect, typically a
    /// save/reload cycle that re-numbered annotations inconsistently.
    pub fn build_id_index(&self) -> Result<BTreeMap<u32, &Annotation>> {
        let mut index = BTreeMap::new();
        let named = self.named_sets.values().flat_map(|set| set.iter());
        for annotation in self.default_set.iter().chain(named) {
            if index.insert(annotation.id, annotation).is_some() {
                return Err(Error::DuplicateId {
                    id: annotation.id,
                    annotation_type: annotation.annotation_type.clone(),
                });
            }
        }
        Ok(index)
    }
}
