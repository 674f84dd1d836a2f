//! Per-bucket min/max candidate tracking and ordered pair emission.
//!
//! ## Purpose
//!
//! This module holds the scratch state accumulated while streaming through
//! one bucket (the running minimum and maximum candidates) and emits the
//! finished pair into an output segment in x order.
//!
//! ## Design notes
//!
//! * **Index identity**: A [`Candidate`] carries the flattened global index
//!   of its point. "Is this the same point" is decided by comparing
//!   indices, never coordinates, so two distinct points with equal
//!   coordinates are never conflated.
//! * **Tie asymmetry**: The minimum is replaced only on strictly smaller y
//!   (ties keep the earliest index); the maximum is replaced on
//!   greater-or-equal y (ties move to the latest index). An all-equal-y
//!   bucket therefore reports its leftmost element as min and its rightmost
//!   as max instead of collapsing to one point.
//! * **Scratch lifetime**: State is local to one pass; nothing here
//!   outlives the call that created it.
//!
//! ## Invariants
//!
//! * `min` and `max` are always both present or both absent.
//! * Emitted pairs are x-ascending; equal-x pairs are emitted in input
//!   order (smaller global index first).
//!
//! ## Non-goals
//!
//! * This module does not decide bucket boundaries (see `bucketing`).
//! * This module does not apply the first/last correction (see
//!   `engine::executor`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Candidate
// ============================================================================

/// A point under consideration, with its flattened position and cached
/// coordinates.
#[derive(Debug)]
pub struct Candidate<'a, P, S> {
    /// Position of the point when all input segments are flattened in order.
    pub index: usize,

    /// The borrowed input point.
    pub point: &'a P,

    /// Cached x-coordinate.
    pub x: S,

    /// Cached y-coordinate.
    pub y: S,
}

// Manual impls: the point is held by reference, so copying a candidate must
// not require `P: Copy`.
impl<'a, P, S: Copy> Clone for Candidate<'a, P, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P, S: Copy> Copy for Candidate<'a, P, S> {}

// ============================================================================
// Bucket Candidate State
// ============================================================================

/// Running (min, max) candidates for the bucket currently being accumulated.
#[derive(Debug)]
pub struct BucketCandidates<'a, P, S> {
    min: Option<Candidate<'a, P, S>>,
    max: Option<Candidate<'a, P, S>>,
}

impl<'a, P, S: Float> BucketCandidates<'a, P, S> {
    /// Empty candidate state.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Drop any accumulated candidates.
    pub fn clear(&mut self) {
        self.min = None;
        self.max = None;
    }

    /// Start a fresh bucket with `candidate` as both min and max.
    pub fn seed(&mut self, candidate: Candidate<'a, P, S>) {
        self.min = Some(candidate);
        self.max = Some(candidate);
    }

    /// Fold one point into the running candidates.
    pub fn observe(&mut self, candidate: Candidate<'a, P, S>) {
        match self.min {
            Some(min) if candidate.y >= min.y => {}
            _ => self.min = Some(candidate),
        }

        // Prefer the rightmost element as max when y ties, so an
        // all-equal-y run keeps both of its endpoints.
        match self.max {
            Some(max) if candidate.y < max.y => {}
            _ => self.max = Some(candidate),
        }
    }

    /// Emit the accumulated pair into `segment` and reset the state.
    pub fn flush_into(&mut self, segment: &mut Vec<Candidate<'a, P, S>>) {
        emit_pair(segment, self.min, self.max);
        self.clear();
    }
}

impl<'a, P, S: Float> Default for BucketCandidates<'a, P, S> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Pair Emission
// ============================================================================

/// Append a finished (min, max) pair to an output segment in x order.
///
/// Emits nothing when either side is absent, a single point when min and
/// max are the same point (by index), and otherwise two points ordered by
/// ascending x — equal x resolved by ascending global index.
pub fn emit_pair<'a, P, S: Float>(
    segment: &mut Vec<Candidate<'a, P, S>>,
    min: Option<Candidate<'a, P, S>>,
    max: Option<Candidate<'a, P, S>>,
) {
    let (Some(min), Some(max)) = (min, max) else {
        return;
    };

    if min.index == max.index {
        segment.push(min);
        return;
    }

    match min.x.partial_cmp(&max.x) {
        Some(Ordering::Less) => {
            segment.push(min);
            segment.push(max);
        }
        Some(Ordering::Greater) => {
            segment.push(max);
            segment.push(min);
        }
        _ => {
            // Same x: preserve original input order.
            if min.index <= max.index {
                segment.push(min);
                segment.push(max);
            } else {
                segment.push(max);
                segment.push(min);
            }
        }
    }
}
