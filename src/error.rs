//! Errors raised while building curves.
//!
//! Queries on a constructed curve never fail; only malformed construction
//! input is reported.

use crate::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BezierError {
    /// A curve needs 3 (quadratic) or 4 (cubic) control points
    #[error("expected 3 or 4 control points, got {0}")]
    InvalidPointCount(usize),

    #[error("control point {index} has a non-finite coordinate: ({}, {})", .point.x, .point.y)]
    NonFiniteControlPoint { index: usize, point: Point },

    /// Finite control points so large that the length integral overflows
    #[error("curve length is not finite: {0}")]
    NonFiniteLength(f64),

    #[error("invalid inversion settings: {0}")]
    InvalidSettings(String),
}

pub type BezierResult<T> = Result<T, BezierError>;
