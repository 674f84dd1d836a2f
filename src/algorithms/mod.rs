//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer contains the decision rules of min/max subsampling: bucket
//! assignment, segment-split detection, count-based bucket sizing, and the
//! per-bucket min/max selection with ordered pair emission.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bucket assignment and sizing rules.
pub mod bucketing;

/// Min/max candidate tracking and pair emission.
pub mod selection;
