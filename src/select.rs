//! Annotation selection and sub-type filtering.
//!
//! Selection resolves a collection and filters by type tag; the optional
//! sub-type pass narrows further by the hierarchical `majorType`/`minorType`
//! features. Neither step sorts: matches keep the producer's iteration
//! order, and any ordering is the caller's concern.

use crate::annotation::{MAJOR_TYPE, MINOR_TYPE};
use crate::{Annotation, Document, Error, Result};

/// Select annotations of one type from a document collection.
///
/// Resolves the default collection when `collection` is `None`, otherwise
/// the named collection, failing with [`Error::CollectionNotFound`] when no
/// collection of that name exists. Matches are returned in the producer's
/// iteration order.
///
/// # Example
/// ```
/// use respan::{select_by_type, Annotation, Document};
///
/// let mut doc = Document::new("Hepburn was born in Brussels.");
/// doc.push_annotation(Annotation::new(1, "Person", 0, 7));
/// doc.push_annotation(Annotation::new(2, "Location", 20, 28));
///
/// let locations = select_by_type(&doc, None, "Location").unwrap();
/// assert_eq!(locations.len(), 1);
/// assert_eq!(locations[0].id, 2);
/// ```
pub fn select_by_type<'d>(
    doc: &'d Document,
    collection: Option<&str>,
    annotation_type: &'d str,
) -> Result<Vec<&'d Annotation>> {
    let set = match collection {
        None => doc.annotations(),
        Some(name) => doc
            .named_annotations(name)
            .ok_or_else(|| Error::collection_not_found(name))?,
    };
    Ok(set.of_type(annotation_type).collect())
}

/// Narrow a selection by hierarchical sub-type features.
///
/// Keeps annotations whose `majorType` feature equals `major_type` and, when
/// `minor_type` is given, whose `minorType` feature equals it too. Equality
/// is exact string equality; an absent feature key or a non-string feature
/// value never matches any filter.
#[must_use]
pub fn filter_by_sub_type<'d>(
    annotations: &[&'d Annotation],
    major_type: &str,
    minor_type: Option<&str>,
) -> Vec<&'d Annotation> {
    annotations
        .iter()
        .copied()
        .filter(|a| a.features.get_str(MAJOR_TYPE) == Some(major_type))
        .filter(|a| minor_type.is_none_or(|minor| a.features.get_str(MINOR_TYPE) == Some(minor)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(id: u32, major: Option<&str>, minor: Option<&str>) -> Annotation {
        let mut annotation = Annotation::new(id, "Lookup", 0, 4);
        if let Some(major) = major {
            annotation = annotation.with_feature(MAJOR_TYPE, major);
        }
        if let Some(minor) = minor {
            annotation = annotation.with_feature(MINOR_TYPE, minor);
        }
        annotation
    }

    #[test]
    fn test_named_collection_resolution() {
        let mut doc = Document::new("text");
        doc.push_named_annotation("ner", Annotation::new(1, "Location", 0, 4));

        assert_eq!(select_by_type(&doc, Some("ner"), "Location").unwrap().len(), 1);
        assert!(matches!(
            select_by_type(&doc, Some("missing"), "Location"),
            Err(Error::CollectionNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_default_collection_when_unnamed() {
        let mut doc = Document::new("text");
        doc.push_annotation(Annotation::new(1, "Location", 0, 4));
        doc.push_named_annotation("ner", Annotation::new(2, "Location", 0, 4));

        let selected = select_by_type(&doc, None, "Location").unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, 1);
    }

    #[test]
    fn test_major_type_filter() {
        let a = lookup(1, Some("location"), None);
        let b = lookup(2, Some("person"), None);
        let c = lookup(3, None, None);
        let selection = vec![&a, &b, &c];

        let filtered = filter_by_sub_type(&selection, "location", None);
        let ids: Vec<u32> = filtered.iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_minor_type_narrows_further() {
        let a = lookup(1, Some("location"), Some("city"));
        let b = lookup(2, Some("location"), Some("country"));
        let c = lookup(3, Some("location"), None);
        let selection = vec![&a, &b, &c];

        let filtered = filter_by_sub_type(&selection, "location", Some("city"));
        let ids: Vec<u32> = filtered.iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_absent_feature_never_matches() {
        let bare = lookup(1, None, None);
        let selection = vec![&bare];
        assert!(filter_by_sub_type(&selection, "location", None).is_empty());
    }
}
