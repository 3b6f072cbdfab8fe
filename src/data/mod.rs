//! Core value types: points, bezier segments, and the arc length parameterized curve.

pub mod curve;
pub mod macros;
pub mod point;
pub mod segment;

pub use curve::BezierCurve;
pub use point::{Point, PointProperties};
pub use segment::BezierSegment;
