//! Bucket assignment and sizing rules.
//!
//! ## Purpose
//!
//! This module maps x-coordinates to bucket ids, decides when a gap between
//! input segments forces an output segment boundary, and derives a bucket
//! size from a requested output point count.
//!
//! ## Design notes
//!
//! * **Float ids**: Bucket ids are floats (`floor` of the scaled offset),
//!   with `-1` as the "no bucketing" sentinel, a value no real id can take
//!   while x ascends from the origin.
//! * **Heuristic constants**: [`BUCKET_JUMP_TOLERANCE`] and
//!   [`FULL_RESOLUTION_FACTOR`] are empirically chosen and part of the
//!   observable output contract; do not re-derive them.
//!
//! ## Key concepts
//!
//! * **Bucket**: contiguous range of x-values collapsed into at most one
//!   (min, max) pair. Implicit: ids are computed, never materialized.
//! * **Segment split**: two input segments separated by at least one bucket
//!   width stay separate in the output, preventing visual interpolation
//!   across the gap.
//!
//! ## Invariants
//!
//! * `bucket_size <= 0` maps every point to [`NO_BUCKET`].
//! * For ascending x and positive bucket size, ids are non-negative and
//!   non-decreasing.
//!
//! ## Non-goals
//!
//! * This module does not track per-bucket state (see `selection`).
//! * This module does not iterate the series (see `engine::executor`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Sentinel bucket id meaning "no bucketing": each point is its own bucket.
pub const NO_BUCKET: f64 = -1.0;

/// Bucket-id jump that forces a candidate flush.
///
/// Deliberately above 1.0 so floating-point jitter at bucket boundaries does
/// not spuriously split adjacent buckets. Anything > 1.0 works; 1.25 is the
/// tuned value and changing it changes observable output.
pub const BUCKET_JUMP_TOLERANCE: f64 = 1.25;

/// Requested-count multiplier above which bucketing is skipped entirely.
///
/// When `1.5 * points_count` reaches the input size, bucketing could emit
/// more buckets than there are points; echoing the input is better.
pub const FULL_RESOLUTION_FACTOR: f64 = 1.5;

// ============================================================================
// Bucket Assignment
// ============================================================================

/// Bucket id of an x-coordinate relative to the series origin.
///
/// Returns [`NO_BUCKET`] when `bucket_size <= 0`.
#[inline]
pub fn bucket_of<S: Float>(x: S, origin: S, bucket_size: S) -> S {
    if bucket_size <= S::zero() {
        S::from(NO_BUCKET).unwrap()
    } else {
        ((x - origin) / bucket_size).floor()
    }
}

/// Whether the gap between two consecutive x-values forces a new output
/// segment.
///
/// Only meaningful at the first point of an input segment; within a segment
/// the caller never evaluates it.
#[inline]
pub fn splits_segment<S: Float>(x_current: S, x_last: S, bucket_size: S) -> bool {
    x_current - x_last >= bucket_size
}

// ============================================================================
// Count-Based Sizing
// ============================================================================

/// Derive a bucket size from a requested output point count.
///
/// Returns zero (full resolution) when the request is zero or close enough
/// to the input size that bucketing would not pay off; otherwise divides
/// the x-range evenly among the requested points.
pub fn bucket_size_for_count<S: Float>(points_count: usize, x_range: S, total_points: usize) -> S {
    let requested = S::from(points_count).unwrap();
    let available = S::from(total_points).unwrap();
    let factor = S::from(FULL_RESOLUTION_FACTOR).unwrap();

    if points_count == 0 || factor * requested >= available {
        S::zero()
    } else {
        x_range / requested
    }
}
