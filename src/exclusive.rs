//! Sorted, pairwise-non-overlapping annotation collections.

use crate::Annotation;

/// An ordered set of mutually non-overlapping annotations.
///
/// Built by feeding candidates through [`try_insert`](Self::try_insert) in
/// producer order: a candidate overlapping any already-accepted member is
/// rejected, so the first-inserted span wins every conflict. Accepted members
/// are kept sorted ascending by start offset, with equal starts preserving
/// insertion order. Once built, the set is iterated read-only.
///
/// Rendering non-overlapping highlight regions is the typical consumer; the
/// default extraction path sorts all matches without exclusion instead, and
/// the two orderings are not interchangeable.
///
/// Insertion does a linear overlap scan followed by a linear position scan,
/// so building the set is quadratic in the number of candidates. Per-document
/// annotation counts are bounded in the hundreds, where this beats the
/// constant factors of an interval tree; revisit the backing structure only
/// if that assumption breaks.
///
/// # Example
/// ```
/// use respan::{Annotation, ExclusiveSpanSet};
///
/// let first = Annotation::new(1, "Location", 10, 20);
/// let second = Annotation::new(2, "Location", 15, 25);
///
/// let mut set = ExclusiveSpanSet::new();
/// assert!(set.try_insert(&first));
/// assert!(!set.try_insert(&second)); // overlaps the accepted [10, 20)
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ExclusiveSpanSet<'a> {
    items: Vec<&'a Annotation>,
}

impl<'a> ExclusiveSpanSet<'a> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the candidate overlaps an accepted member.
    ///
    /// Returns `false` and leaves the set untouched on overlap; otherwise
    /// places the candidate before the first member whose start offset
    /// exceeds the candidate's and returns `true`.
    pub fn try_insert(&mut self, annotation: &'a Annotation) -> bool {
        if self.items.iter().any(|member| annotation.overlaps(member)) {
            return false;
        }
        let at = self
            .items
            .iter()
            .position(|member| annotation.start < member.start)
            .unwrap_or(self.items.len());
        self.items.insert(at, annotation);
        true
    }

    /// Iterate accepted annotations in ascending start order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Annotation> + '_ {
        self.items.iter().copied()
    }

    /// Accepted annotations as a slice, in ascending start order.
    #[must_use]
    pub fn as_slice(&self) -> &[&'a Annotation] {
        &self.items
    }

    /// Number of accepted annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &ExclusiveSpanSet<'a> {
    type Item = &'a Annotation;
    type IntoIter = std::vec::IntoIter<&'a Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.clone().into_iter()
    }
}
