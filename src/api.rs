//! High-level API for min/max subsampling.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a subsampler (fixed bucket size or target point
//! count) and the [`MinMaxSubsampler`] it produces.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a safe default (full resolution).
//! * **Validated**: Configuration is checked once, when `build()` runs;
//!   the resulting subsampler is infallible.
//! * **Type-Safe**: Generic over `Float` scalar types, `f64` by default.
//!
//! ## Key concepts
//!
//! * **Strategy**: exactly one of `bucket_size` / `points_count` may be
//!   configured; with neither, the pass echoes the input.
//! * **Deferred errors**: builder misuse (duplicate setters) is recorded
//!   during configuration and reported by `build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MinMaxBuilder`] via `MinMax::new()`.
//! 2. Chain configuration methods (`.bucket_size()` or `.points_count()`).
//! 3. Call `.build()` to obtain a validated [`MinMaxSubsampler`].
//! 4. Call `.subsample(&series, &accessor)` as often as needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{materialize, subsample_series, Strategy};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::SubsampleResult;
pub use crate::primitives::accessor::{FnAccessor, PointAccessor, TupleAccessor};
pub use crate::primitives::errors::MinMaxError;
pub use crate::primitives::segments;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a min/max subsampler.
#[derive(Debug, Clone)]
pub struct MinMaxBuilder<S: Float = f64> {
    /// Fixed bucket width in x units; `<= 0` returns all points.
    pub bucket_size: Option<S>,

    /// Target output point count.
    pub points_count: Option<usize>,

    /// X-range for count-based sizing; derived from the input when unset.
    pub x_range: Option<S>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<S: Float> MinMaxBuilder<S> {
    /// Create a new builder with default settings (full resolution).
    pub fn new() -> Self {
        Self {
            bucket_size: None,
            points_count: None,
            x_range: None,
            duplicate_param: None,
        }
    }

    /// Set the bucket width by which the input is divided.
    ///
    /// Elements from one bucket collapse into at most a (min, max) pair.
    /// Smaller values mean more output points; `0` or a negative value
    /// returns all points. When driving a chart, a good value is the ratio
    /// `(input window width) / (chart window width)`.
    pub fn bucket_size(mut self, bucket_size: S) -> Self {
        if self.bucket_size.is_some() {
            self.duplicate_param = Some("bucket_size");
        }
        self.bucket_size = Some(bucket_size);
        self
    }

    /// Set the desired number of output points.
    ///
    /// The bucket width is derived as `x_range / points_count`, unless the
    /// request is zero or close enough to the input size that bucketing
    /// would not pay off, in which case all points are returned.
    pub fn points_count(mut self, points_count: usize) -> Self {
        if self.points_count.is_some() {
            self.duplicate_param = Some("points_count");
        }
        self.points_count = Some(points_count);
        self
    }

    /// Set the x-range used for count-based sizing.
    ///
    /// Only meaningful together with [`points_count`](Self::points_count);
    /// when unset, the range is computed from the input as
    /// `x(global last) - x(global first)` (see [`segments::range`]).
    pub fn x_range(mut self, x_range: S) -> Self {
        if self.x_range.is_some() {
            self.duplicate_param = Some("x_range");
        }
        self.x_range = Some(x_range);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the subsampler, validating the configuration.
    pub fn build(self) -> Result<MinMaxSubsampler<S>, MinMaxError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_strategy(self.bucket_size, self.points_count)?;

        if let Some(bucket_size) = self.bucket_size {
            Validator::validate_bucket_size(bucket_size)?;
        }
        if let Some(x_range) = self.x_range {
            Validator::validate_x_range(x_range)?;
        }

        let strategy = match (self.bucket_size, self.points_count) {
            (Some(size), _) => Strategy::BucketSize(size),
            (None, Some(count)) => Strategy::PointsCount {
                count,
                x_range: self.x_range,
            },
            // No strategy configured: echo the input at full resolution.
            (None, None) => Strategy::BucketSize(S::zero()),
        };

        Ok(MinMaxSubsampler { strategy })
    }
}

impl<S: Float> Default for MinMaxBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Subsampler
// ============================================================================

/// Validated min/max subsampler.
///
/// Holds only configuration; every call borrows the input read-only and
/// returns freshly allocated output, so one subsampler may be shared across
/// threads for logically independent series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxSubsampler<S: Float> {
    strategy: Strategy<S>,
}

impl<S: Float> MinMaxSubsampler<S> {
    /// Downsample a segmented series.
    ///
    /// The series is an ordered sequence of segments, each sorted ascending
    /// by x; empty segments are tolerated and skipped. The output always
    /// has the same global first and last points as the input.
    pub fn subsample<P, Seg, A>(&self, series: &[Seg], accessor: &A) -> SubsampleResult<P>
    where
        P: Clone,
        Seg: AsRef<[P]>,
        A: PointAccessor<P, Scalar = S>,
    {
        let bucket_size = self.strategy.bucket_size(series, accessor);
        let candidates = subsample_series(series, accessor, bucket_size);

        let input_points = segments::total_points(series);
        let output_points = segments::total_points(&candidates);

        SubsampleResult {
            segments: materialize(candidates),
            input_points,
            output_points,
            bucket_size: bucket_size.to_f64().unwrap_or(f64::NAN),
        }
    }
}
