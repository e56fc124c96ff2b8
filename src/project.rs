//! Content projection: from working-text annotations to original-text
//! substrings.
//!
//! [`extract`] is the orchestration point of the crate. It selects matching
//! annotations, orders them, maps each span back through the document's
//! repositioning map, and slices the covered substring out of the original
//! content. Structural problems (an unknown collection, a document with no
//! text) abort the call; a single span with no original-text counterpart is
//! dropped and only shrinks the result.

use crate::{select, Annotation, Document, Error, ExclusiveSpanSet, Result, Span};
use serde::Serialize;

/// Parameters of one extraction call, builder style.
///
/// # Example
/// ```
/// use respan::Query;
///
/// let query = Query::new("Lookup")
///     .with_major_type("location")
///     .with_minor_type("city")
///     .exclusive();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Query<'q> {
    annotation_type: &'q str,
    collection: Option<&'q str>,
    major_type: Option<&'q str>,
    minor_type: Option<&'q str>,
    exclusive: bool,
}

impl<'q> Query<'q> {
    /// Query for annotations of one type from the default collection.
    #[must_use]
    pub fn new(annotation_type: &'q str) -> Self {
        Self {
            annotation_type,
            collection: None,
            major_type: None,
            minor_type: None,
            exclusive: false,
        }
    }

    /// Select from a named collection instead of the default one.
    #[must_use]
    pub fn in_collection(mut self, name: &'q str) -> Self {
        self.collection = Some(name);
        self
    }

    /// Keep only annotations whose `majorType` feature equals `major_type`.
    #[must_use]
    pub fn with_major_type(mut self, major_type: &'q str) -> Self {
        self.major_type = Some(major_type);
        self
    }

    /// Keep only annotations whose `minorType` feature equals `minor_type`.
    ///
    /// Only applied together with [`with_major_type`](Self::with_major_type);
    /// a minor type alone does not filter.
    #[must_use]
    pub fn with_minor_type(mut self, minor_type: &'q str) -> Self {
        self.minor_type = Some(minor_type);
        self
    }

    /// Reduce matches to a maximal set of pairwise non-overlapping spans.
    ///
    /// Matches are offered in producer order to an [`ExclusiveSpanSet`], so
    /// on overlap the earlier-produced annotation wins. Without this, all
    /// matches are kept and stable-sorted by working start offset.
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

/// One annotation paired with the substring of the document it covers.
///
/// `marked_text` and `span` are in original-text coordinates when the
/// document carries a repositioning map, and in working-text coordinates
/// otherwise. Views borrow from the document and are constructed fresh on
/// every call; nothing is cached or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentAnnotation<'d> {
    /// The source annotation, in working-text coordinates.
    pub annotation: &'d Annotation,
    /// The covered substring of the projected content.
    pub marked_text: &'d str,
    /// The mapped span locating `marked_text` in the projected content.
    pub span: Span,
}

/// Extract the covered substrings for every annotation matching a query.
///
/// Steps, in order:
///
/// 1. Select by type from the default or a named collection, then apply the
///    sub-type filters if the query carries any.
/// 2. Order the matches: exclusive mode feeds them in producer order through
///    an [`ExclusiveSpanSet`]; otherwise they are stable-sorted ascending by
///    *working* start offset, ties keeping producer order. A non-monotonic
///    repositioning map may therefore yield results whose mapped offsets are
///    out of order; the working-offset order is the contract.
/// 3. Map each span's bounds through the repositioning map. A document
///    without a map uses working offsets as original offsets directly.
/// 4. Slice the original content (falling back to working content when no
///    original was preserved) and pair it with the annotation.
///
/// An annotation whose bounds cannot be mapped, or whose mapped range does
/// not lie on character boundaries of the content, is dropped; callers
/// observe this only as a smaller result count.
///
/// # Errors
///
/// [`Error::CollectionNotFound`] when the query names an absent collection,
/// [`Error::MissingContent`] when the document has neither original nor
/// working content.
///
/// # Example
/// ```
/// use respan::{extract, Annotation, Document, Query};
///
/// let mut doc = Document::new("Hepburn was born in Brussels.");
/// doc.push_annotation(Annotation::new(1, "Location", 20, 28));
///
/// let records = extract(&doc, &Query::new("Location")).unwrap();
/// assert_eq!(records[0].marked_text, "Brussels");
/// assert_eq!(records[0].span.start, 20);
/// ```
pub fn extract<'d>(doc: &'d Document, query: &Query<'d>) -> Result<Vec<ContentAnnotation<'d>>> {
    let content = doc
        .original_content()
        .or_else(|| doc.content())
        .ok_or_else(|| {
            Error::missing_content("neither original nor working content is available")
        })?;

    let mut matches = select::select_by_type(doc, query.collection, query.annotation_type)?;
    if let Some(major_type) = query.major_type {
        matches = select::filter_by_sub_type(&matches, major_type, query.minor_type);
    }
    log::debug!(
        "extracting {} '{}' annotation(s) (exclusive: {})",
        matches.len(),
        query.annotation_type,
        query.exclusive
    );

    let ordered: Vec<&'d Annotation> = if query.exclusive {
        let mut set = ExclusiveSpanSet::new();
        for &annotation in &matches {
            set.try_insert(annotation);
        }
        set.iter().collect()
    } else {
        matches.sort_by(|a, b| a.span().cmp_by_start(&b.span()));
        matches
    };

    let mut records = Vec::with_capacity(ordered.len());
    for annotation in ordered {
        let span = match doc.repositioning() {
            Some(map) => {
                let bounds = (map.map_start(annotation.start), map.map_end(annotation.end));
                let (Some(start), Some(end)) = bounds else {
                    log::debug!(
                        "dropping annotation {} ({}): working span [{}, {}) has no original-text counterpart",
                        annotation.id,
                        annotation.annotation_type,
                        annotation.start,
                        annotation.end
                    );
                    continue;
                };
                Span::new(start, end)
            }
            None => annotation.span(),
        };
        let Some(marked_text) = content.get(span.range()) else {
            log::warn!(
                "dropping annotation {} ({}): mapped span [{}, {}) does not slice the content",
                annotation.id,
                annotation.annotation_type,
                span.start,
                span.end
            );
            continue;
        };
        records.push(ContentAnnotation {
            annotation,
            marked_text,
            span,
        });
    }
    Ok(records)
}
