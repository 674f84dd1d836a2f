//! Coordinate access for opaque point types.
//!
//! ## Purpose
//!
//! This module defines the [`PointAccessor`] capability trait through which
//! the subsampler reads x/y coordinates from caller-owned points, plus two
//! ready-made accessors: one for plain coordinate tuples and one built from
//! a pair of closures.
//!
//! ## Design notes
//!
//! * **Capability, not hierarchy**: The algorithm needs exactly one bounded
//!   capability, reading two scalars, so it takes a small trait object
//!   parameter rather than requiring points to implement anything.
//! * **Pure**: Accessor methods must be side-effect-free and total; they are
//!   called once per point per pass.
//! * **Generics**: The scalar type is an associated `Float`, so the same
//!   accessor definition serves `f32` and `f64` pipelines.
//!
//! ## Invariants
//!
//! * `x` must be consistent with the ascending ordering of the input; the
//!   subsampler does not re-validate sortedness.
//! * Returned coordinates are expected to be finite; non-finite values
//!   produce unspecified (but non-panicking) output.
//!
//! ## Non-goals
//!
//! * This module does not construct or own points.
//! * This module does not validate coordinates.

// External dependencies
use num_traits::Float;

// ============================================================================
// Accessor Trait
// ============================================================================

/// Capability to read chart coordinates from an opaque point type.
pub trait PointAccessor<P> {
    /// Scalar type of the coordinates.
    type Scalar: Float;

    /// The x-coordinate (ordering axis) of a point.
    fn x(&self, point: &P) -> Self::Scalar;

    /// The y-coordinate (value axis) of a point.
    fn y(&self, point: &P) -> Self::Scalar;
}

impl<P, A: PointAccessor<P>> PointAccessor<P> for &A {
    type Scalar = A::Scalar;

    fn x(&self, point: &P) -> Self::Scalar {
        (**self).x(point)
    }

    fn y(&self, point: &P) -> Self::Scalar {
        (**self).y(point)
    }
}

// ============================================================================
// Provided Accessors
// ============================================================================

/// Accessor for plain `(x, y)` coordinate tuples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TupleAccessor;

impl<S: Float> PointAccessor<(S, S)> for TupleAccessor {
    type Scalar = S;

    fn x(&self, point: &(S, S)) -> S {
        point.0
    }

    fn y(&self, point: &(S, S)) -> S {
        point.1
    }
}

/// Accessor built from a pair of closures.
///
/// Adapts arbitrary domain types without an intermediate conversion:
///
/// ```
/// use minmax_rs::prelude::*;
///
/// #[derive(Clone)]
/// struct Sample { at: f64, value: f64 }
///
/// let accessor = FnAccessor::new(|s: &Sample| s.at, |s: &Sample| s.value);
/// let series = vec![vec![Sample { at: 0.0, value: 1.0 }]];
///
/// let model = MinMax::new().bucket_size(1.0).build()?;
/// let result = model.subsample(&series, &accessor);
/// assert_eq!(result.output_points, 1);
/// # Result::<(), MinMaxError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnAccessor<FX, FY> {
    x_fn: FX,
    y_fn: FY,
}

impl<FX, FY> FnAccessor<FX, FY> {
    /// Create an accessor from an x-projection and a y-projection.
    pub fn new(x_fn: FX, y_fn: FY) -> Self {
        Self { x_fn, y_fn }
    }
}

impl<P, S, FX, FY> PointAccessor<P> for FnAccessor<FX, FY>
where
    S: Float,
    FX: Fn(&P) -> S,
    FY: Fn(&P) -> S,
{
    type Scalar = S;

    fn x(&self, point: &P) -> S {
        (self.x_fn)(point)
    }

    fn y(&self, point: &P) -> S {
        (self.y_fn)(point)
    }
}
