//! Working-to-original offset repositioning.
//!
//! Extraction pipelines often scan a *working* text that was derived from the
//! original document by stripping markup, decoding entities, or normalizing
//! whitespace. Annotation offsets then refer to the working text, while the
//! caller wants substrings of the original. The repositioning map records,
//! run by run, how the two coordinate systems line up:
//!
//! ```text
//! original:  <p>Hepburn &amp; Tracy</p>
//!            0        9         19
//! working:   Hepburn & Tracy
//!            0       8
//!
//! runs:      original [3, 10)  <-> working [0, 7)    "Hepburn"
//!            original [11, 16) <-> working [8, 9)    "&"  (entity collapsed)
//!            original [16, 22) <-> working [9, 15)   " Tracy"
//! ```
//!
//! Offsets inside stripped markup (`<p>`, `</p>`) have no working-side run at
//! all, and a working offset can fall in a gap between runs when the pipeline
//! injected text of its own. Both cases are *unmappable* and reported as
//! `None` rather than a sentinel offset, so they cannot be confused with a
//! legitimate position near zero.
//!
//! # Boundary rounding
//!
//! Start and end bounds of a half-open span round differently at run edges:
//!
//! - [`map_start`](RepositioningMap::map_start) resolves against the run
//!   containing the offset, or the run ending exactly at it.
//! - [`map_end`](RepositioningMap::map_end) resolves against the run whose
//!   last covered offset precedes the bound, or the run starting exactly
//!   at it.
//!
//! With touching runs `A = working [0, 5)` and `B = working [5, 8)`, offset 5
//! maps through B as a start bound and through A as an end bound, which is
//! exactly what exclusive-end arithmetic requires.

use serde::{Deserialize, Serialize};

/// One contiguous run of text present in both coordinate systems.
///
/// Within a run, working offset `working_pos + k` corresponds to original
/// offset `original_pos + k`. The lengths may differ when the pipeline
/// collapsed a multi-character sequence (an entity reference, say) into a
/// shorter working form; mapped offsets are then clamped into the original
/// run. A zero-length side models a single-point insertion or deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Start of the run in the original text.
    pub original_pos: usize,
    /// Length of the run in the original text.
    pub original_len: usize,
    /// Start of the run in the working text.
    pub working_pos: usize,
    /// Length of the run in the working text.
    pub working_len: usize,
}

impl PositionRecord {
    /// Exclusive end of the run on the working side.
    #[must_use]
    pub const fn working_end(&self) -> usize {
        self.working_pos + self.working_len
    }

    /// Map a working offset known to land on this run.
    ///
    /// The run-end boundary resolves to the original run-end boundary even
    /// when the two sides differ in length; interior offsets map by delta,
    /// clamped into the original run.
    const fn project(&self, offset: usize) -> usize {
        let delta = offset - self.working_pos;
        let clamped = if delta >= self.working_len || delta > self.original_len {
            self.original_len
        } else {
            delta
        };
        self.original_pos + clamped
    }
}

/// Translation table from working-text offsets to original-text offsets.
///
/// Records are kept sorted by working position and must not overlap on the
/// working side; producers emit them in scan order.
///
/// # Example
/// ```
/// use respan::RepositioningMap;
///
/// let mut map = RepositioningMap::new();
/// map.add_record(3, 7, 0, 7);    // original [3, 10) <-> working [0, 7)
/// map.add_record(14, 5, 7, 5);   // original [14, 19) <-> working [7, 12)
///
/// assert_eq!(map.map_start(2), Some(5));
/// assert_eq!(map.map_start(8), Some(15));
/// assert_eq!(map.map_end(12), Some(19));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositioningMap {
    records: Vec<PositionRecord>,
}

impl RepositioningMap {
    /// Create an empty map. Every offset is unmappable until runs are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A map where working and original coordinates coincide over `[0, len)`.
    ///
    /// This is what a pipeline that performed no transformation would
    /// produce.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        let mut map = Self::new();
        map.add_record(0, len, 0, len);
        map
    }

    /// Record a run, keeping the table sorted by working position.
    pub fn add_record(
        &mut self,
        original_pos: usize,
        original_len: usize,
        working_pos: usize,
        working_len: usize,
    ) {
        let record = PositionRecord {
            original_pos,
            original_len,
            working_pos,
            working_len,
        };
        let at = self
            .records
            .partition_point(|r| r.working_pos <= record.working_pos);
        self.records.insert(at, record);
    }

    /// The recorded runs, sorted by working position.
    #[must_use]
    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    /// Number of recorded runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no runs are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Map a working offset used as the *start* bound of a half-open span.
    ///
    /// Resolves against the run containing the offset; failing that, against
    /// the run ending exactly at it. Returns `None` when the offset falls
    /// strictly inside a gap between runs, or before the first run.
    #[must_use]
    pub fn map_start(&self, offset: usize) -> Option<usize> {
        let idx = self
            .records
            .partition_point(|r| r.working_pos <= offset)
            .checked_sub(1)?;
        let record = &self.records[idx];
        if offset - record.working_pos <= record.working_len {
            Some(record.project(offset))
        } else {
            None
        }
    }

    /// Map a working offset used as the *end* bound of a half-open span.
    ///
    /// Resolves against the run covering the offset as an exclusive end (its
    /// last covered offset is `offset - 1`); failing that, against the run
    /// starting exactly at it. Returns `None` when the offset falls strictly
    /// inside a gap between runs, or past the last run.
    #[must_use]
    pub fn map_end(&self, offset: usize) -> Option<usize> {
        let idx = self.records.partition_point(|r| r.working_end() < offset);
        let record = self.records.get(idx)?;
        if offset >= record.working_pos {
            Some(record.project(offset))
        } else {
            None
        }
    }
}
