//! Behavioral tests for the subsample pass, driven through the public API.
//!
//! Covers the bucketing/min-max contract: extremes preservation, segment
//! merge/split policy, full-resolution echo, tie-break asymmetry, and pair
//! ordering.

use minmax_rs::prelude::*;

type Point = (f64, f64);

fn subsample(series: &[Vec<Point>], bucket_size: f64) -> SubsampleResult<Point> {
    let model = MinMax::new().bucket_size(bucket_size).build().unwrap();
    model.subsample(series, &TupleAccessor)
}

// ============================================================================
// Core Scenarios
// ============================================================================

/// Single bucket: min, max (tie toward the latest index), corrected last.
#[test]
fn test_single_bucket_scenario() {
    let series = vec![vec![
        (0.0, 0.0),
        (1.0, 5.0),
        (2.0, 1.0),
        (3.0, 5.0),
        (4.0, 0.0),
    ]];

    let result = subsample(&series, 5.0);

    // y = 5.0 appears twice; the max tie moves to the rightmost element,
    // then the correction re-attaches the true last point.
    assert_eq!(
        result.segments,
        vec![vec![(0.0, 0.0), (3.0, 5.0), (4.0, 0.0)]]
    );
}

/// A gap of one bucket width or more between input segments splits the
/// output.
#[test]
fn test_gap_forces_output_split() {
    let series = vec![
        vec![(0.0, 0.0), (1.0, 1.0)],
        vec![(100.0, 5.0), (101.0, 6.0)],
    ];

    let result = subsample(&series, 1.0);

    assert_eq!(result.segment_count(), 2);
    assert_eq!(
        result.segments,
        vec![
            vec![(0.0, 0.0), (1.0, 1.0)],
            vec![(100.0, 5.0), (101.0, 6.0)],
        ]
    );
}

/// Two input segments closer than one bucket width merge in the output.
#[test]
fn test_close_segments_merge() {
    let series = vec![vec![(0.0, 0.0), (1.0, 1.0)], vec![(2.0, 2.0), (3.0, 3.0)]];

    let result = subsample(&series, 10.0);

    assert_eq!(result.segments, vec![vec![(0.0, 0.0), (3.0, 3.0)]]);
}

/// A large x-jump inside one input segment never splits the output; the
/// gap rule is an inter-segment check only.
#[test]
fn test_gap_within_segment_does_not_split() {
    let series = vec![vec![(0.0, 0.0), (10.0, 1.0), (20.0, 2.0)]];

    let result = subsample(&series, 1.0);

    assert_eq!(result.segment_count(), 1);
    assert_eq!(
        result.segments,
        vec![vec![(0.0, 0.0), (10.0, 1.0), (20.0, 2.0)]]
    );
}

// ============================================================================
// Full Resolution
// ============================================================================

/// Zero bucket size echoes the input point-for-point, dropping only empty
/// segments.
#[test]
fn test_zero_bucket_size_echoes_input() {
    let series = vec![
        vec![(0.0, 1.0), (1.0, 2.0)],
        vec![],
        vec![(2.0, 3.0), (3.0, 1.0)],
    ];

    let result = subsample(&series, 0.0);

    assert_eq!(
        result.segments,
        vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(2.0, 3.0), (3.0, 1.0)]]
    );
    assert_eq!(result.input_points, 4);
    assert_eq!(result.output_points, 4);
}

/// Negative bucket size behaves like zero.
#[test]
fn test_negative_bucket_size_echoes_input() {
    let series = vec![vec![(0.0, 1.0), (1.0, 2.0), (2.0, 0.5)]];

    let result = subsample(&series, -1.0);

    assert_eq!(result.segments, series);
}

// ============================================================================
// Extremes Preservation
// ============================================================================

/// The input's first/last points survive even when they are neither min
/// nor max of their buckets.
#[test]
fn test_first_and_last_points_reattached() {
    let series = vec![vec![(0.0, 5.0), (1.0, 0.0), (2.0, 9.0), (3.0, 4.0)]];

    let result = subsample(&series, 100.0);

    assert_eq!(
        result.segments,
        vec![vec![(0.0, 5.0), (1.0, 0.0), (2.0, 9.0), (3.0, 4.0)]]
    );
}

/// First/last preservation holds across segment boundaries and empties.
#[test]
fn test_extremes_preserved_across_segments() {
    let series = vec![
        vec![],
        vec![(0.0, 2.0), (1.0, 7.0)],
        vec![(2.0, -1.0), (3.0, 4.0)],
        vec![],
    ];

    let result = subsample(&series, 1000.0);

    let flat = result.clone().flatten();
    assert_eq!(flat.first(), Some(&(0.0, 2.0)));
    assert_eq!(flat.last(), Some(&(3.0, 4.0)));
}

/// A single-point series passes through untouched.
#[test]
fn test_single_point() {
    let series = vec![vec![(42.0, 7.0)]];

    let result = subsample(&series, 5.0);

    assert_eq!(result.segments, vec![vec![(42.0, 7.0)]]);
}

// ============================================================================
// Min/Max Selection
// ============================================================================

/// Per-bucket min has the smallest y (ties toward the earliest index) and
/// max the largest.
#[test]
fn test_min_max_selection_with_min_tie() {
    // y = 1.0 appears at indices 1 and 3; the earlier one is the min.
    let series = vec![vec![
        (0.0, 3.0),
        (1.0, 1.0),
        (2.0, 4.0),
        (3.0, 1.0),
        (4.0, 5.0),
    ]];

    let result = subsample(&series, 10.0);

    assert_eq!(
        result.segments,
        vec![vec![(0.0, 3.0), (1.0, 1.0), (4.0, 5.0)]]
    );
}

/// An all-equal-y bucket reports its leftmost element as min and its
/// rightmost as max instead of collapsing to one point.
#[test]
fn test_all_equal_y_keeps_both_endpoints() {
    let series = vec![vec![(0.0, 2.0), (1.0, 2.0), (2.0, 2.0), (3.0, 2.0)]];

    let result = subsample(&series, 100.0);

    assert_eq!(result.segments, vec![vec![(0.0, 2.0), (3.0, 2.0)]]);
}

/// Pairs are emitted in ascending x; equal x resolves to input order.
#[test]
fn test_equal_x_pair_keeps_input_order() {
    let series = vec![vec![(1.0, 5.0), (1.0, -5.0)]];

    let result = subsample(&series, 100.0);

    assert_eq!(result.segments, vec![vec![(1.0, 5.0), (1.0, -5.0)]]);
}

/// Identical coordinates at different positions are still distinct points;
/// the correction must not mistake one for the other.
#[test]
fn test_duplicate_coordinates_are_distinct_points() {
    let series = vec![vec![(0.0, 1.0), (1.0, 9.0), (2.0, 1.0)]];

    let result = subsample(&series, 100.0);

    // Min is the first (0.0-indexed) point by the strict tie rule, max is
    // (1.0, 9.0); the trailing duplicate-valued point is re-attached.
    assert_eq!(
        result.segments,
        vec![vec![(0.0, 1.0), (1.0, 9.0), (2.0, 1.0)]]
    );
}

// ============================================================================
// Bucket Boundaries
// ============================================================================

/// Adjacent buckets each contribute their own pair.
#[test]
fn test_multiple_buckets() {
    let series = vec![vec![
        (0.0, 1.0),
        (1.0, 4.0),
        (2.0, 2.0),
        (10.0, 8.0),
        (11.0, 3.0),
        (12.0, 6.0),
    ]];

    let result = subsample(&series, 5.0);

    // Bucket 0 emits its (min, max) pair when the id jumps 0 -> 2; the
    // jump point (10,8) lands as a singleton and the rest of bucket 2
    // accumulates into a fresh pair.
    let flat = result.flatten();
    assert_eq!(flat.first(), Some(&(0.0, 1.0)));
    assert_eq!(flat.last(), Some(&(12.0, 6.0)));
    assert!(flat.contains(&(10.0, 8.0)));
    assert!(flat.contains(&(11.0, 3.0)));
}

/// Output size is bounded by two points per bucket plus the corrections.
#[test]
fn test_output_size_bound() {
    let series = vec![(0..1000)
        .map(|i| (i as f64, ((i * 7919) % 101) as f64))
        .collect::<Vec<Point>>()];

    let bucket_size = 10.0;
    let result = subsample(&series, bucket_size);

    let buckets = (999.0 / bucket_size).floor() as usize + 1;
    assert!(result.output_points <= 2 * buckets + 2);
    assert!(result.output_points < result.input_points);
}

/// Every output segment is non-empty and ascending in x.
#[test]
fn test_output_segments_sorted_and_non_empty() {
    let series = vec![
        (0..500).map(|i| (i as f64, (i % 17) as f64)).collect(),
        (600..900)
            .map(|i| (i as f64, (i % 23) as f64))
            .collect::<Vec<Point>>(),
    ];

    let result = subsample(&series, 7.0);

    assert!(result.segment_count() >= 2);
    for segment in &result.segments {
        assert!(!segment.is_empty());
        for pair in segment.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
        }
    }
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

/// An empty series yields an empty result.
#[test]
fn test_empty_series() {
    let series: Vec<Vec<Point>> = vec![];

    let result = subsample(&series, 5.0);

    assert!(result.is_empty());
    assert_eq!(result.output_points, 0);
}

/// A series of only empty segments yields an empty result.
#[test]
fn test_all_empty_segments() {
    let series: Vec<Vec<Point>> = vec![vec![], vec![], vec![]];

    let result = subsample(&series, 5.0);

    assert!(result.is_empty());
}

/// Borrowed slice segments work the same as owned vectors.
#[test]
fn test_slice_segments() {
    let a = [(0.0, 0.0), (1.0, 5.0)];
    let b = [(2.0, 1.0), (3.0, 2.0)];
    let series: Vec<&[Point]> = vec![&a, &b];

    let model = MinMax::new().bucket_size(10.0).build().unwrap();
    let result = model.subsample(&series, &TupleAccessor);

    assert_eq!(result.segments, vec![vec![(0.0, 0.0), (1.0, 5.0), (3.0, 2.0)]]);
}
