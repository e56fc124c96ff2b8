//! # respan
//!
//! Annotation projection and offset repositioning for text extraction
//! pipelines.
//!
//! An extraction pipeline annotates spans of text (Person, Location, Lookup)
//! over a *working* copy of a document, typically one with markup stripped
//! and entities decoded. The offsets it reports therefore disagree with the
//! original text. This crate recovers, for each annotation, the exact
//! substring of the original document the annotation covers:
//!
//! - select annotations by type (and optionally by hierarchical
//!   `majorType`/`minorType` sub-type features) from a document's default or
//!   named collections,
//! - order them deterministically, optionally reducing to a maximal set of
//!   pairwise non-overlapping spans,
//! - translate each span from working-text back to original-text coordinates
//!   through the producer's repositioning map,
//! - slice the covered substring and pair it with its annotation.
//!
//! ## Quick start
//!
//! ```rust
//! use respan::{extract, Annotation, Document, Query, RepositioningMap};
//!
//! // What a pipeline run hands over: working text, preserved original text,
//! // a repositioning map, and annotations in working-text coordinates.
//! let original = "<b>Hepburn</b> was born in Brussels.";
//! let working = "Hepburn was born in Brussels.";
//! let mut map = RepositioningMap::new();
//! map.add_record(3, 7, 0, 7);    // "Hepburn"
//! map.add_record(14, 22, 7, 22); // " was born in Brussels."
//!
//! let mut doc = Document::new(working)
//!     .with_original_content(original)
//!     .with_repositioning(map);
//! doc.push_annotation(Annotation::new(1, "Location", 20, 28));
//!
//! let records = extract(&doc, &Query::new("Location"))?;
//! assert_eq!(records[0].marked_text, "Brussels");
//! assert_eq!(records[0].span.start, 27);
//! # Ok::<(), respan::Error>(())
//! ```
//!
//! ## Design notes
//!
//! - **Read-only documents**: collections handed to the engine are immutable
//!   snapshot views; extraction never writes back, so concurrent read access
//!   is safe.
//! - **Explicit unmappability**: offsets with no original-text counterpart
//!   (inside stripped markup) come back as `None`, never as a sentinel
//!   offset value. The affected annotation is dropped from the result;
//!   structural problems abort the whole call instead.
//! - **Synchronous core**: every operation is a bounded computation over an
//!   already-materialized annotation collection. Long-running work lives
//!   upstream, in the pipeline that produced the document.

#![warn(missing_docs)]

mod annotation;
mod asserts;
mod document;
mod error;
mod exclusive;
mod project;
mod reposition;
mod select;
mod span;

pub use annotation::{Annotation, FeatureMap, FeatureValue, MAJOR_TYPE, MINOR_TYPE};
pub use asserts::{
    assert_annotation, assert_annotation_with_major_type, assert_annotation_with_minor_type,
    render_asserts, AssertFields,
};
pub use document::{AnnotationSet, Document};
pub use error::{Error, Result};
pub use exclusive::ExclusiveSpanSet;
pub use project::{extract, ContentAnnotation, Query};
pub use reposition::{PositionRecord, RepositioningMap};
pub use select::{filter_by_sub_type, select_by_type};
pub use span::Span;
