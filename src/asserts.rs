//! Assertion helpers and deterministic assertion-clause generation.
//!
//! Expected-value literals for extraction tests are tedious to author by
//! hand: dozens of substrings with their mapped offsets per fixture
//! document. The intended workflow is to run an extraction once, render its
//! result with [`render_asserts`], review the clauses, and paste them
//! verbatim into the test body. The runtime
//! helpers the clauses call live in this module too, so a generated clause
//! compiles as-is inside any test that binds `annotations` and the
//! placeholder variables.
//!
//! Rendering is pure and byte-for-byte reproducible: one fixed-format clause
//! per record, in input order, each carrying its own trailing separator.

use crate::{ContentAnnotation, Error, Result};

/// Which placeholder variables the generated clauses reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertFields {
    /// Clauses reference `annotation_type` only.
    Type,
    /// Clauses reference `annotation_type` and `major_type`.
    MajorType,
    /// Clauses reference `annotation_type`, `major_type` and `minor_type`.
    MinorType,
}

/// Render one assertion clause per record, concatenated in input order.
///
/// Marked text is escaped for embedding in a Rust string literal; the start
/// offset is the record's mapped start. No separator is added beyond the
/// `"; "` each clause ends with.
///
/// # Errors
///
/// [`Error::InvalidInput`] on an empty input list; there is no meaningful
/// empty rendering, and an empty fixture would silently assert nothing.
///
/// # Example
/// ```
/// use respan::{extract, render_asserts, Annotation, AssertFields, Document, Query};
///
/// let mut doc = Document::new("High Court of Justice");
/// doc.push_annotation(Annotation::new(1, "Organization", 5, 10));
///
/// let records = extract(&doc, &Query::new("Organization")).unwrap();
/// let rendered = render_asserts(&records, AssertFields::Type).unwrap();
/// assert_eq!(
///     rendered,
///     "assert_annotation(&annotations, annotation_type, \"Court\", 5); "
/// );
/// ```
pub fn render_asserts(
    annotations: &[ContentAnnotation<'_>],
    fields: AssertFields,
) -> Result<String> {
    if annotations.is_empty() {
        return Err(Error::invalid_input(
            "cannot render assertion clauses for an empty annotation list",
        ));
    }
    let mut rendered = String::new();
    for record in annotations {
        let text: String = record.marked_text.escape_default().collect();
        let start = record.span.start;
        let clause = match fields {
            AssertFields::Type => format!(
                "assert_annotation(&annotations, annotation_type, \"{text}\", {start}); "
            ),
            AssertFields::MajorType => format!(
                "assert_annotation_with_major_type(&annotations, annotation_type, major_type, \"{text}\", {start}); "
            ),
            AssertFields::MinorType => format!(
                "assert_annotation_with_minor_type(&annotations, annotation_type, major_type, minor_type, \"{text}\", {start}); "
            ),
        };
        rendered.push_str(&clause);
    }
    Ok(rendered)
}

/// Assert that some record matches the expected marked text at the expected
/// mapped start offset.
///
/// A matching record must also end exactly `expected_text.len()` bytes after
/// its start. `annotation_type` only labels the failure message; the records
/// were already selected by type.
///
/// # Panics
///
/// Panics when no record matches, or when a matching record's end offset is
/// inconsistent with the text length.
pub fn assert_annotation(
    annotations: &[ContentAnnotation<'_>],
    annotation_type: &str,
    expected_text: &str,
    start: usize,
) {
    let mut matched = false;
    for record in annotations {
        if record.marked_text == expected_text && record.span.start == start {
            assert_eq!(
                record.span.end,
                start + expected_text.len(),
                "end offset should match for annotation {}",
                record.annotation.id
            );
            matched = true;
        }
    }
    assert!(
        matched,
        "failed to match by type '{annotation_type}' expected value '{expected_text}' start offset={start}"
    );
}

/// [`assert_annotation`], additionally requiring the record's `majorType`
/// feature to equal `major_type`.
///
/// # Panics
///
/// Panics when no record matches.
pub fn assert_annotation_with_major_type(
    annotations: &[ContentAnnotation<'_>],
    annotation_type: &str,
    major_type: &str,
    expected_text: &str,
    start: usize,
) {
    let mut matched = false;
    for record in annotations {
        if record.marked_text == expected_text
            && record.annotation.major_type() == Some(major_type)
            && record.span.start == start
        {
            assert_eq!(
                record.span.end,
                start + expected_text.len(),
                "end offset should match for annotation {}",
                record.annotation.id
            );
            matched = true;
        }
    }
    assert!(
        matched,
        "failed to match by type '{annotation_type}' expected value '{expected_text}' start offset={start}"
    );
}

/// [`assert_annotation`], additionally requiring both `majorType` and
/// `minorType` features to match.
///
/// # Panics
///
/// Panics when no record matches.
pub fn assert_annotation_with_minor_type(
    annotations: &[ContentAnnotation<'_>],
    annotation_type: &str,
    major_type: &str,
    minor_type: &str,
    expected_text: &str,
    start: usize,
) {
    let mut matched = false;
    for record in annotations {
        if record.marked_text == expected_text
            && record.annotation.major_type() == Some(major_type)
            && record.annotation.minor_type() == Some(minor_type)
            && record.span.start == start
        {
            assert_eq!(
                record.span.end,
                start + expected_text.len(),
                "end offset should match for annotation {}",
                record.annotation.id
            );
            matched = true;
        }
    }
    assert!(
        matched,
        "failed to match by type '{annotation_type}' expected value '{expected_text}' start offset={start}"
    );
}
