//! Half-open text spans and their ordering.
//!
//! Every offset-bounded value in this crate is a half-open interval
//! `[start, end)`: the character at `start` is covered, the character at
//! `end` is not. Two spans where one ends exactly where the other starts
//! share no offset and therefore do not overlap.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Range;

/// A half-open span `[start, end)` over a text, in byte offsets.
///
/// Construction does not validate `start <= end`; producers are expected to
/// uphold it, and all downstream arithmetic saturates rather than panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a span from start and end offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span covers no offsets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True iff the two half-open spans share at least one offset.
    ///
    /// Touching is not overlapping: `[0, 5)` and `[5, 8)` are disjoint.
    ///
    /// # Example
    /// ```
    /// use respan::Span;
    ///
    /// assert!(Span::new(10, 20).overlaps(&Span::new(15, 25)));
    /// assert!(!Span::new(0, 5).overlaps(&Span::new(5, 8)));
    /// ```
    #[must_use]
    pub const fn overlaps(&self, other: &Span) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Compare by start offset only.
    ///
    /// Spans with equal starts compare equal; a stable sort keyed on this
    /// preserves the original order of same-start spans, which is the
    /// ordering contract of extraction results.
    #[must_use]
    pub fn cmp_by_start(&self, other: &Span) -> Ordering {
        self.start.cmp(&other.start)
    }

    /// The covered range, for slicing.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_cases() {
        let base = Span::new(10, 20);

        assert!(base.overlaps(&Span::new(15, 25)), "partial overlap");
        assert!(base.overlaps(&Span::new(12, 18)), "containment");
        assert!(base.overlaps(&Span::new(0, 30)), "contained by");
        assert!(base.overlaps(&Span::new(19, 21)), "single shared offset");

        assert!(!base.overlaps(&Span::new(20, 30)), "touching at end");
        assert!(!base.overlaps(&Span::new(0, 10)), "touching at start");
        assert!(!base.overlaps(&Span::new(25, 30)), "disjoint");
    }

    #[test]
    fn test_cmp_by_start_ignores_end() {
        assert_eq!(
            Span::new(5, 100).cmp_by_start(&Span::new(5, 6)),
            Ordering::Equal
        );
        assert_eq!(
            Span::new(4, 5).cmp_by_start(&Span::new(5, 6)),
            Ordering::Less
        );
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        assert!(!Span::new(4, 5).is_empty());
    }

    #[test]
    fn test_range_slices() {
        let text = "Hepburn was born";
        let span = Span::new(0, 7);
        assert_eq!(&text[span.range()], "Hepburn");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            s1 in 0usize..100,
            len1 in 0usize..50,
            s2 in 0usize..100,
            len2 in 0usize..50,
        ) {
            let a = Span::new(s1, s1 + len1);
            let b = Span::new(s2, s2 + len2);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn touching_never_overlaps(s in 0usize..100, len in 0usize..50, tail in 0usize..50) {
            let a = Span::new(s, s + len);
            let b = Span::new(s + len, s + len + tail);
            prop_assert!(!a.overlaps(&b));
        }

        #[test]
        fn nonempty_span_overlaps_itself(s in 0usize..100, len in 1usize..50) {
            let a = Span::new(s, s + len);
            prop_assert!(a.overlaps(&a));
        }
    }
}
