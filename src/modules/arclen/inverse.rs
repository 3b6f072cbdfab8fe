//! Length to parameter inversion
//!
//! Finds `t` in `[0, 1]` with `L(t) = pos` for a non-decreasing arc length function `L`.
//! The search keeps a bracket `[lo, hi]` around the root and takes Newton steps using the
//! speed `|B'(t)|` as the slope of `L`. Whenever the slope vanishes or the Newton step
//! leaves the bracket it bisects instead, so flat stretches at stationary points shrink the
//! bracket without diverging.

use crate::constants::{
    DEFAULT_LENGTH_TOLERANCE, DEFAULT_MAX_ITERATIONS, DEFAULT_PARAMETER_TOLERANCE,
};
use crate::error::{BezierError, BezierResult};
use log::trace;
use serde::{Deserialize, Serialize};

/// Stopping criteria of the length to parameter search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InversionSettings {
    /// Accepted residual `|L(t) - pos|`, relative to `total_length`
    pub length_tolerance: f64,
    /// The search stops once the bracket around the root is narrower than this
    pub parameter_tolerance: f64,
    /// Hard cap on search steps; the best `t` seen so far is returned when reached
    pub max_iterations: usize,
}

impl Default for InversionSettings {
    fn default() -> Self {
        Self {
            length_tolerance: DEFAULT_LENGTH_TOLERANCE,
            parameter_tolerance: DEFAULT_PARAMETER_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl InversionSettings {
    pub fn validate(&self) -> BezierResult<()> {
        if !(self.length_tolerance.is_finite() && self.length_tolerance > 0.0) {
            return Err(BezierError::InvalidSettings(format!(
                "length tolerance must be positive, got {}",
                self.length_tolerance
            )));
        }
        if !(self.parameter_tolerance.is_finite() && self.parameter_tolerance > 0.0) {
            return Err(BezierError::InvalidSettings(format!(
                "parameter tolerance must be positive, got {}",
                self.parameter_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(BezierError::InvalidSettings(
                "at least one iteration is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Find the parameter `t` at which the arc length reaches `pos`.
///
/// `length_at` must be the non-decreasing arc length function of the curve with
/// `length_at(1) == total_length`, and `speed_at` its derivative. Out of range targets are
/// clamped: `pos <= 0` gives 0 and `pos >= total_length` gives 1. A zero length curve
/// maps every target to 0.
pub fn t_at_length<L, S>(
    pos: f64,
    total_length: f64,
    length_at: L,
    speed_at: S,
    settings: &InversionSettings,
) -> f64
where
    L: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
{
    if pos.is_nan() || pos <= 0.0 || total_length <= 0.0 {
        return 0.0;
    }
    if pos >= total_length {
        return 1.0;
    }

    let tolerance = settings.length_tolerance * total_length;
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut t = pos / total_length;
    let mut best_t = t;
    let mut best_residual = f64::INFINITY;

    for _ in 0..settings.max_iterations {
        let residual = length_at(t) - pos;
        if residual.abs() < best_residual {
            best_t = t;
            best_residual = residual.abs();
        }
        if residual.abs() <= tolerance {
            return t;
        }

        if residual > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        if hi - lo <= settings.parameter_tolerance {
            return best_t;
        }

        // a zero speed sends the step to infinity, outside the bracket
        let newton = t - residual / speed_at(t);
        t = if newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };
    }

    trace!(
        "arc length inversion hit {} iterations for pos {} of {}, residual {}",
        settings.max_iterations,
        pos,
        total_length,
        best_residual
    );
    best_t
}
