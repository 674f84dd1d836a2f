//! # minmax-rs: Min/Max Subsampling for Charts
//!
//! Fast and simple "min/max" subsampling of a (possibly segmented) series
//! coercible to a two-dimensional X/Y chart.
//!
//! ## What is min/max subsampling?
//!
//! Rendering a large series on a narrow display wastes work: a chart column
//! one pixel wide can only show the extremes of the data behind it. Min/max
//! subsampling walks the input once, divides it into buckets by x-value,
//! and keeps only the minimum and maximum element of each bucket, emitted
//! in their original x-order. The result draws the same envelope as the
//! full series at a fraction of the point count.
//!
//! **Key properties:**
//! - Complexity is **O(n)**: one forward pass, no sorting, no search
//! - The output always has the same first and last points as the input
//! - Visual extremes survive: every bucket's min and max are kept
//! - Segmented inputs are respected: two input segments merge in the
//!   output unless they are separated by more than one bucket width
//!
//! **Common applications:**
//! - Chart rendering of large time series (sensor logs, telemetry, audio)
//! - Level-of-detail previews that must not lose spikes
//! - Transferring plot data to a UI layer at display resolution
//!
//! ## Quick Start
//!
//! ### By bucket size
//!
//! ```rust
//! use minmax_rs::prelude::*;
//!
//! // One segment, sorted ascending by x.
//! let series = vec![vec![
//!     (0.0, 0.0),
//!     (1.0, 5.0),
//!     (2.0, 1.0),
//!     (3.0, 5.0),
//!     (4.0, 0.0),
//! ]];
//!
//! // Collapse everything into buckets five x-units wide.
//! let model = MinMax::new().bucket_size(5.0).build()?;
//! let result = model.subsample(&series, &TupleAccessor);
//!
//! // One bucket: its min, its max, and the corrected last point.
//! assert_eq!(result.segments, vec![vec![(0.0, 0.0), (3.0, 5.0), (4.0, 0.0)]]);
//! # Result::<(), MinMaxError>::Ok(())
//! ```
//!
//! ### By target point count
//!
//! ```rust
//! use minmax_rs::prelude::*;
//!
//! let series = vec![(0..10_000)
//!     .map(|i| (i as f64, (i as f64 * 0.01).sin()))
//!     .collect::<Vec<_>>()];
//!
//! // Ask for roughly 800 output points; the bucket width is derived from
//! // the series' x-range.
//! let model = MinMax::new().points_count(800).build()?;
//! let result = model.subsample(&series, &TupleAccessor);
//!
//! // At most two points per bucket survive, far fewer than went in.
//! assert!(result.output_points < result.input_points / 4);
//! assert_eq!(result.segments[0].first(), Some(&(0.0, 0.0)));
//! assert_eq!(result.segments[0].last(), Some(&(9999.0, (9999.0f64 * 0.01).sin())));
//! # Result::<(), MinMaxError>::Ok(())
//! ```
//!
//! ### Custom point types
//!
//! Points are opaque to the algorithm; coordinates are read through a
//! [`PointAccessor`](prelude::PointAccessor) capability. Use
//! [`FnAccessor`](prelude::FnAccessor) to adapt a domain type in place:
//!
//! ```rust
//! use minmax_rs::prelude::*;
//!
//! #[derive(Clone)]
//! struct Reading { timestamp: f64, celsius: f64 }
//!
//! let series = vec![vec![
//!     Reading { timestamp: 0.0, celsius: 21.5 },
//!     Reading { timestamp: 60.0, celsius: 21.7 },
//!     Reading { timestamp: 120.0, celsius: 21.4 },
//! ]];
//!
//! let accessor = FnAccessor::new(|r: &Reading| r.timestamp, |r: &Reading| r.celsius);
//! let model = MinMax::new().bucket_size(300.0).build()?;
//! let result = model.subsample(&series, &accessor);
//! assert_eq!(result.output_points, 3);
//! # Result::<(), MinMaxError>::Ok(())
//! ```
//!
//! ## Input contract
//!
//! - Segments are sorted by x in ascending order, and so is the series as a
//!   whole (concatenated, skipping empty segments). This is **not**
//!   re-validated; unsorted input yields unspecified (but non-panicking)
//!   output.
//! - Coordinates are expected to be finite.
//! - Empty segments anywhere in the series are fine and are skipped.
//!
//! ## Parameters
//!
//! | Parameter        | Default          | Meaning                                          |
//! |------------------|------------------|--------------------------------------------------|
//! | `bucket_size`    | none             | Bucket width in x units; `<= 0` returns all points |
//! | `points_count`   | none             | Target output size; bucket width is derived      |
//! | `x_range`        | derived          | Range divided by `points_count`                  |
//!
//! `bucket_size` and `points_count` are mutually exclusive. With neither,
//! the pass echoes the input (still through the same code path, so counts
//! and edge cases behave uniformly).
//!
//! If used with a charting library, a good `bucket_size` is the ratio
//! `(input window width) / (chart window width)`.
//!
//! ## Result and error handling
//!
//! `build()` returns `Result<MinMaxSubsampler, MinMaxError>`; all
//! fallibility lives in configuration. Subsampling itself never fails:
//!
//! ```rust
//! use minmax_rs::prelude::*;
//!
//! let err = MinMax::new().bucket_size(f64::NAN).build().unwrap_err();
//! assert!(matches!(err, MinMaxError::InvalidBucketSize(_)));
//! ```
//!
//! ## Minimal usage (no_std / embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! drop the standard-library dependency (`alloc` is still required for the
//! output segments):
//!
//! ```toml
//! [dependencies]
//! minmax-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## About the algorithm
//!
//! Going through the input data once, elements are divided into buckets by
//! x-value: `floor((x - x_first) / bucket_size)`. For each bucket the
//! minimum and maximum elements by y-value are found and appended to the
//! output in their original x-order, at most two points per bucket. A
//! bucket-id jump greater than 1.25 flushes the running pair (the slack
//! above 1.0 absorbs floating-point jitter at bucket boundaries). Two input
//! segments merge in the output unless they are separated by at least one
//! bucket width, in which case the output splits so the gap is not drawn as
//! an interpolated line. A final correction guarantees the output keeps the
//! input's exact first and last points.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - coordinate access, segment helpers, errors.
//
// Contains the `PointAccessor` capability trait, null-tolerant segmented
// series utilities, and the shared error type.
mod primitives;

// Layer 2: Algorithms - bucketing and selection rules.
//
// Contains bucket-id assignment (with the no-bucketing sentinel), the
// segment-split rule, count-based bucket sizing, and the per-bucket
// min/max candidate state with ordered pair emission.
mod algorithms;

// Layer 3: Engine - the subsample pass.
//
// Contains the single forward pass over the flattened series, the
// first/last correction, configuration validation, and result assembly.
mod engine;

// High-level fluent API for min/max subsampling.
//
// Provides the `MinMax` builder for configuring and running subsampling.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard subsampling prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use minmax_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        segments, FnAccessor, MinMaxBuilder as MinMax, MinMaxError, MinMaxSubsampler,
        PointAccessor, SubsampleResult, TupleAccessor,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal bucketing and selection algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
