//! Execution engine for the min/max subsample pass.
//!
//! ## Purpose
//!
//! This module runs the single forward pass over a segmented series: it
//! flattens the input segments in order, assigns each point to a bucket,
//! flushes finished (min, max) pairs into growing output segments, splits
//! the output where input segments are separated by at least one bucket
//! width, and finally corrects the output so its global first and last
//! points match the input's.
//!
//! ## Design notes
//!
//! * **Single pass**: Every input point is visited exactly once; total work
//!   is O(n) plus O(segment count) for the correction scan.
//! * **Local state**: All scratch (candidates, previous point, previous
//!   bucket id) lives in locals threaded through the loop; the engine has
//!   no state of its own and calls are freely concurrent.
//! * **Borrow, then clone**: The pass works entirely on [`Candidate`]
//!   borrows; points are cloned only once, when the finished candidate
//!   segments are materialized into owned output.
//!
//! ## Key concepts
//!
//! * **Flush**: a bucket-id jump beyond [`BUCKET_JUMP_TOLERANCE`] (or a
//!   forced segment split) ends the current bucket and emits its pair.
//! * **Correction**: bucketing keeps only extremes, so the true first/last
//!   input points may be dropped mid-pass; the post-pass re-attaches them
//!   by comparing global indices.
//!
//! ## Invariants
//!
//! * Input x-values are assumed ascending across the flattened series
//!   (caller contract, not re-validated).
//! * Every output segment is non-empty and x-ascending.
//! * At most two points are emitted per bucket, plus the two correction
//!   points.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (see `validator`).
//! * This module does not expose a public API surface (see `api`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem;
use num_traits::{Float, NumCast, One, Zero};

// Internal dependencies
use crate::algorithms::bucketing::{
    bucket_of, bucket_size_for_count, splits_segment, BUCKET_JUMP_TOLERANCE,
};
use crate::algorithms::selection::{emit_pair, BucketCandidates, Candidate};
use crate::primitives::accessor::PointAccessor;
use crate::primitives::segments;

// ============================================================================
// Strategy
// ============================================================================

/// How the effective bucket size is chosen for a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy<S> {
    /// Fixed bucket width in x units; `<= 0` means full resolution.
    BucketSize(S),

    /// Derive the bucket width from a target output point count.
    PointsCount {
        /// Requested number of output points.
        count: usize,
        /// X-range to divide; computed from the input when absent.
        x_range: Option<S>,
    },
}

impl<S: Float> Strategy<S> {
    /// Resolve the strategy to an effective bucket size for `series`.
    pub fn bucket_size<P, Seg, A>(&self, series: &[Seg], accessor: &A) -> S
    where
        Seg: AsRef<[P]>,
        A: PointAccessor<P, Scalar = S>,
    {
        match *self {
            Self::BucketSize(size) => size,
            Self::PointsCount { count, x_range } => {
                let range = x_range.unwrap_or_else(|| {
                    segments::range(series)
                        .map(|(first, last)| accessor.x(last) - accessor.x(first))
                        .unwrap_or_else(S::zero)
                });
                bucket_size_for_count(count, range, segments::total_points(series))
            }
        }
    }
}

// ============================================================================
// Subsample Pass
// ============================================================================

/// Run the min/max subsample pass over a segmented series.
///
/// Returns candidate segments (borrowed points plus their global indices);
/// use [`materialize`] to clone them into owned output.
pub fn subsample_series<'a, P, Seg, A>(
    series: &'a [Seg],
    accessor: &A,
    bucket_size: A::Scalar,
) -> Vec<Vec<Candidate<'a, P, A::Scalar>>>
where
    Seg: AsRef<[P]>,
    A: PointAccessor<P>,
{
    let mut output: Vec<Vec<Candidate<'a, P, A::Scalar>>> = Vec::new();

    // Anchor for bucket-id computation; absent means an all-empty input.
    let Some(first_first) = segments::first_first(series) else {
        return output;
    };
    let origin = accessor.x(first_first);
    let tolerance = <A::Scalar as NumCast>::from(BUCKET_JUMP_TOLERANCE).unwrap();

    let mut candidates = BucketCandidates::new();
    let mut last: Option<Candidate<'a, P, A::Scalar>> = None;
    let mut last_bucket = -A::Scalar::one();
    let mut segment: Vec<Candidate<'a, P, A::Scalar>> = Vec::new();
    let mut global_index = 0usize;

    for input_segment in series {
        for (local_index, point) in input_segment.as_ref().iter().enumerate() {
            let current = Candidate {
                index: global_index,
                point,
                x: accessor.x(point),
                y: accessor.y(point),
            };
            global_index += 1;

            let bucket = bucket_of(current.x, origin, bucket_size);

            // Gap check happens only where input segments meet, never
            // mid-segment.
            let starts_new_segment = local_index == 0
                && last.is_some_and(|last| splits_segment(current.x, last.x, bucket_size));

            if (bucket - last_bucket).abs() > tolerance || starts_new_segment {
                candidates.flush_into(&mut segment);

                if starts_new_segment && !segment.is_empty() {
                    output.push(mem::take(&mut segment));
                }

                emit_pair(&mut segment, Some(current), Some(current));

                last_bucket = bucket;
                last = Some(current);
                continue;
            }

            if last.is_none() || last_bucket != bucket || bucket < A::Scalar::zero() {
                if last.is_some() {
                    candidates.flush_into(&mut segment);
                }
                candidates.seed(current);
            }

            last_bucket = bucket;
            last = Some(current);

            candidates.observe(current);
        }
    }

    candidates.flush_into(&mut segment);
    if !segment.is_empty() {
        output.push(segment);
    }

    correct_endpoints(series, accessor, &mut output);

    output
}

/// Clone candidate segments into caller-owned point segments.
pub fn materialize<P: Clone, S>(segments: Vec<Vec<Candidate<'_, P, S>>>) -> Vec<Vec<P>> {
    segments
        .into_iter()
        .map(|segment| {
            segment
                .into_iter()
                .map(|candidate| candidate.point)
                .cloned()
                .collect()
        })
        .collect()
}

// ============================================================================
// First/Last Correction
// ============================================================================

/// Re-attach the input's global first/last points when bucketing dropped
/// them.
///
/// The input's global first always sits at flattened index 0 and its global
/// last at `total - 1`; comparing those indices against the output's
/// endpoints is the identity check.
fn correct_endpoints<'a, P, Seg, A>(
    series: &'a [Seg],
    accessor: &A,
    output: &mut [Vec<Candidate<'a, P, A::Scalar>>],
) where
    Seg: AsRef<[P]>,
    A: PointAccessor<P>,
{
    if output.is_empty() {
        return;
    }

    let Some((input_first, input_last)) = segments::range(series) else {
        return;
    };
    let Some((output_first, output_last)) = segments::range(output) else {
        return;
    };

    let first_index = output_first.index;
    let last_index = output_last.index;
    let last_input_index = segments::total_points(series) - 1;

    if first_index != 0 {
        if let Some(first_segment) = output.first_mut() {
            first_segment.insert(
                0,
                Candidate {
                    index: 0,
                    point: input_first,
                    x: accessor.x(input_first),
                    y: accessor.y(input_first),
                },
            );
        }
    }

    if last_index != last_input_index {
        if let Some(last_segment) = output.last_mut() {
            last_segment.push(Candidate {
                index: last_input_index,
                point: input_last,
                x: accessor.x(input_last),
                y: accessor.y(input_last),
            });
        }
    }
}
