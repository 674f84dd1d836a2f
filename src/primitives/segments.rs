//! Utilities for segmented series.
//!
//! ## Purpose
//!
//! This module provides the helpers the subsampler (and its callers) use to
//! inspect an ordered collection of ordered sub-sequences: first/last
//! lookups, emptiness and size queries, and the global range of a series.
//!
//! ## Design notes
//!
//! * **Borrowing**: Every helper works on borrowed slices and returns
//!   borrowed elements; nothing here allocates.
//! * **Tolerance**: Empty segments are legal anywhere in a series and are
//!   skipped; an all-empty series simply yields `None`.
//! * **Genericity**: Segments are anything `AsRef<[E]>`, so `&[Vec<E>]` and
//!   `&[&[E]]` both work without conversion.
//!
//! ## Key concepts
//!
//! * **Range**: the pair (global first element, global last element), found
//!   by scanning from the front for the first non-empty segment and from
//!   the back for the last non-empty segment.
//!
//! ## Invariants
//!
//! * All helpers are O(segment count) or better; the element scans stop at
//!   the first non-empty segment from either end.
//!
//! ## Non-goals
//!
//! * This module does not verify x-ordering of elements.
//! * This module does not mutate or own series data.

// ============================================================================
// Single-Segment Helpers
// ============================================================================

/// First element of a segment, if any.
pub fn first<E>(segment: &[E]) -> Option<&E> {
    segment.first()
}

/// Last element of a segment, if any.
pub fn last<E>(segment: &[E]) -> Option<&E> {
    segment.last()
}

// ============================================================================
// Series Helpers
// ============================================================================

/// First element of the first non-empty segment.
pub fn first_first<E, S: AsRef<[E]>>(series: &[S]) -> Option<&E> {
    series.iter().find_map(|segment| first(segment.as_ref()))
}

/// Whether the series contains at least one element.
pub fn has_points<E, S: AsRef<[E]>>(series: &[S]) -> bool {
    series.iter().any(|segment| !segment.as_ref().is_empty())
}

/// Total element count across all segments.
pub fn total_points<E, S: AsRef<[E]>>(series: &[S]) -> usize {
    series.iter().map(|segment| segment.as_ref().len()).sum()
}

/// Global first and global last element of a series.
///
/// Scans from the front for the first non-empty segment and from the back
/// for the last non-empty segment. Returns `None` when every segment is
/// empty.
pub fn range<E, S: AsRef<[E]>>(series: &[S]) -> Option<(&E, &E)> {
    let first_segment = series
        .iter()
        .map(AsRef::as_ref)
        .find(|segment| !segment.is_empty())?;
    let last_segment = series
        .iter()
        .map(AsRef::as_ref)
        .rfind(|segment| !segment.is_empty())?;

    Some((first(first_segment)?, last(last_segment)?))
}
