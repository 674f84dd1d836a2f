//! Error types for subsampling configuration.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can arise while configuring
//! a min/max subsampler through the builder. The subsample pass itself is
//! infallible; every variant here describes a configuration problem caught
//! at `build()` time.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value where one exists.
//! * **Deferred**: Builder misuse is recorded during configuration and
//!   surfaced when `build()` runs, never mid-chain.
//! * **No-std**: Variants hold only `Copy` data, so no allocation is needed
//!   to construct or format them.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Scalar validation**: NaN bucket sizes and x-ranges are rejected.
//! 2. **Strategy selection**: A model subsamples either by bucket size or by
//!    target point count, never both.
//! 3. **Builder hygiene**: Setting the same parameter twice is an error.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Zero, negative, and infinite bucket sizes are *not* errors; they are
//!   meaningful configurations (full resolution and single-bucket collapse).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not report data problems; unsorted or non-finite
//!   input is a documented caller contract, not a checked condition.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for subsampler configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinMaxError {
    /// Bucket size must be a number (NaN is rejected; `<= 0` and infinity
    /// are valid configurations).
    InvalidBucketSize(f64),

    /// Explicit x-range must be a number.
    InvalidRange(f64),

    /// `bucket_size` and `points_count` are mutually exclusive strategies.
    ConflictingStrategies,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MinMaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidBucketSize(size) => {
                write!(f, "Invalid bucket size: {size} (must not be NaN)")
            }
            Self::InvalidRange(range) => {
                write!(f, "Invalid x-range: {range} (must not be NaN)")
            }
            Self::ConflictingStrategies => {
                write!(
                    f,
                    "Conflicting strategies: bucket_size and points_count cannot both be set"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MinMaxError {}
