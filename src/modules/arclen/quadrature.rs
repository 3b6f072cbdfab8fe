//! Arc length of a bezier segment by Gauss-Legendre quadrature
//!
//! The rule is mapped from `[-1, 1]` onto `[0, t]`:
//!
//! ```text
//! L(t) = t/2 * sum_i w_i * |B'(t/2 * x_i + t/2)|
//! ```
//!
//! Speed is smooth away from cusps, so a single 24-node panel is accurate well below
//! rendering tolerance for ordinary segments. Cusps only make the speed touch zero,
//! which the rule handles like any other sample.
//!
//! # Example
//!
//! ```rust
//! use bezier_arclen::modules::arclen::segment_arc_length;
//! use bezier_arclen::quad;
//!
//! // a straight quadratic moving at constant speed
//! let segment = quad!([(0, 0), (5, 0), (10, 0)]);
//! let length = segment_arc_length(&segment, 1.0);
//!
//! assert!((length - 10.0).abs() < 1e-9);
//! ```

use crate::constants::{GAUSS_LEGENDRE_ABSCISSAE, GAUSS_LEGENDRE_WEIGHTS};
use crate::data::segment::{
    cubic_derivative, cubic_stationary_params, quadratic_derivative, quadratic_stationary_params,
};
use crate::data::{BezierSegment, Point};

/// Gauss-Legendre estimate of the integral of `|derivative|` over `[a, b]`
pub fn gauss_legendre<F>(derivative: &F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> Point,
{
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let sum: f64 = GAUSS_LEGENDRE_ABSCISSAE
        .iter()
        .zip(GAUSS_LEGENDRE_WEIGHTS.iter())
        .map(|(&x, &w)| {
            // each abscissa stands for the pair of symmetric nodes +x and -x
            let right = derivative(mid + half * x).norm();
            let left = derivative(mid - half * x).norm();
            w * (right + left)
        })
        .sum();

    half * sum
}

/// Integrate the speed of `derivative` over `[0, t]`.
///
/// `stationary` lists, in increasing order, the parameters where the velocity vanishes.
/// The speed has a kink there, so the integral is split at each of them below `t` and
/// every panel sees a smooth integrand. Returns 0 for `t <= 0`.
pub fn arc_length<F>(derivative: F, stationary: &[f64], t: f64) -> f64
where
    F: Fn(f64) -> Point,
{
    if t <= 0.0 {
        return 0.0;
    }

    let mut length = 0.0;
    let mut start = 0.0;
    for &split in stationary.iter().take_while(|&&split| split < t) {
        length += gauss_legendre(&derivative, start, split);
        start = split;
    }

    length + gauss_legendre(&derivative, start, t)
}

/// Arc length of a cubic from its start to parameter `t`.
///
/// Locates the stationary parameters again on every call; for repeated queries on one
/// curve use [`BezierCurve::length_at`](crate::BezierCurve::length_at), which caches them.
pub fn cubic_arc_length(points: &[Point; 4], t: f64) -> f64 {
    let stationary = cubic_stationary_params(points);
    arc_length(|u| cubic_derivative(points, u), &stationary, t)
}

/// Quadratic counterpart of [`cubic_arc_length`], with the same per call cost.
pub fn quadratic_arc_length(points: &[Point; 3], t: f64) -> f64 {
    let stationary = quadratic_stationary_params(points);
    arc_length(|u| quadratic_derivative(points, u), &stationary, t)
}

/// Arc length of `segment` from its start to parameter `t`, without caching
pub fn segment_arc_length(segment: &BezierSegment, t: f64) -> f64 {
    match segment {
        BezierSegment::Cubic { points } => cubic_arc_length(points, t),
        BezierSegment::Quadratic { points } => quadratic_arc_length(points, t),
    }
}
