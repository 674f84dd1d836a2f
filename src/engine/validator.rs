//! Configuration validation for the subsampler builder.
//!
//! ## Purpose
//!
//! This module provides the fail-fast checks run when a builder is turned
//! into a subsampler. Data is never validated (unsorted or non-finite
//! input is a documented caller contract), so everything here concerns
//! configuration only.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Permissive on purpose**: Zero, negative, and infinite bucket sizes
//!   are meaningful configurations and pass; only NaN is rejected.
//! * **Generics**: Checks are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not inspect series data.
//! * This module does not correct invalid configurations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MinMaxError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for subsampler configuration.
///
/// Provides static methods returning `Result<(), MinMaxError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a fixed bucket size.
    pub fn validate_bucket_size<S: Float>(bucket_size: S) -> Result<(), MinMaxError> {
        if bucket_size.is_nan() {
            return Err(MinMaxError::InvalidBucketSize(
                bucket_size.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate an explicit x-range.
    pub fn validate_x_range<S: Float>(x_range: S) -> Result<(), MinMaxError> {
        if x_range.is_nan() {
            return Err(MinMaxError::InvalidRange(
                x_range.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that at most one subsampling strategy was configured.
    pub fn validate_strategy<S>(
        bucket_size: Option<S>,
        points_count: Option<usize>,
    ) -> Result<(), MinMaxError> {
        if bucket_size.is_some() && points_count.is_some() {
            return Err(MinMaxError::ConflictingStrategies);
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MinMaxError> {
        if let Some(parameter) = duplicate_param {
            return Err(MinMaxError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
