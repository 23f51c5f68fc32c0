//! Placeholder confidence values for extracted key points
//!
//! The model reports no certainty for the points it lists. The pipeline
//! stamps each point with a value in [0.85, 1.0) so downstream displays have
//! something in the agreed range; the number means nothing beyond that.

use rand::Rng;

/// Lowest confidence a key point can carry
pub const CONFIDENCE_FLOOR: f64 = 0.85;

/// Exclusive upper bound on confidence
pub const CONFIDENCE_CEILING: f64 = 1.0;

/// Supplies confidence values for new key points
pub trait ConfidenceSource: Send + Sync {
    /// Next value, in [`CONFIDENCE_FLOOR`], [`CONFIDENCE_CEILING`])
    fn sample(&self) -> f64;
}

/// Uniform draw over [0.85, 1.0)
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformConfidence;

impl ConfidenceSource for UniformConfidence {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(CONFIDENCE_FLOOR..CONFIDENCE_CEILING)
    }
}

/// Always the same value, clamped into range
#[derive(Debug, Clone, Copy)]
pub struct FixedConfidence(f64);

impl FixedConfidence {
    /// Create a fixed source; out-of-range values are clamped
    pub fn new(value: f64) -> Self {
        let max = CONFIDENCE_CEILING - f64::EPSILON;
        Self(value.clamp(CONFIDENCE_FLOOR, max))
    }
}

impl ConfidenceSource for FixedConfidence {
    fn sample(&self) -> f64 {
        self.0
    }
}
