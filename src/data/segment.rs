//! Bezier segment: quadratic or cubic bezier curve segment

use crate::constants::STATIONARY_SPEED_TOLERANCE;
use crate::data::point::Point;

/// Position of a cubic bezier at parameter t
///
/// B(t) = (1-t)^3 * p0 + 3(1-t)^2 * t * p1 + 3(1-t) * t^2 * p2 + t^3 * p3
pub fn cubic_point(points: &[Point; 4], t: f64) -> Point {
    let [p0, p1, p2, p3] = *points;
    let t1 = 1.0 - t;

    let x = t1.powi(3) * p0.x
        + 3.0 * t1.powi(2) * t * p1.x
        + 3.0 * t1 * t.powi(2) * p2.x
        + t.powi(3) * p3.x;

    let y = t1.powi(3) * p0.y
        + 3.0 * t1.powi(2) * t * p1.y
        + 3.0 * t1 * t.powi(2) * p2.y
        + t.powi(3) * p3.y;

    Point::new(x, y)
}

/// Velocity of a cubic bezier at parameter t (not normalized)
///
/// B'(t) = 3(1-t)^2 * (p1 - p0) + 6(1-t) * t * (p2 - p1) + 3t^2 * (p3 - p2)
pub fn cubic_derivative(points: &[Point; 4], t: f64) -> Point {
    let [p0, p1, p2, p3] = *points;
    let t1 = 1.0 - t;

    (3.0 * t1.powi(2)) * (p1 - p0) + (6.0 * t1 * t) * (p2 - p1) + (3.0 * t.powi(2)) * (p3 - p2)
}

/// Position of a quadratic bezier at parameter t
///
/// B(t) = (1-t)^2 * p0 + 2(1-t) * t * p1 + t^2 * p2
pub fn quadratic_point(points: &[Point; 3], t: f64) -> Point {
    let [p0, p1, p2] = *points;
    let t1 = 1.0 - t;

    let x = t1.powi(2) * p0.x + 2.0 * t1 * t * p1.x + t.powi(2) * p2.x;
    let y = t1.powi(2) * p0.y + 2.0 * t1 * t * p1.y + t.powi(2) * p2.y;

    Point::new(x, y)
}

/// Velocity of a quadratic bezier at parameter t (not normalized)
///
/// B'(t) = 2(1-t) * (p1 - p0) + 2t * (p2 - p1)
pub fn quadratic_derivative(points: &[Point; 3], t: f64) -> Point {
    let [p0, p1, p2] = *points;

    (2.0 * (1.0 - t)) * (p1 - p0) + (2.0 * t) * (p2 - p1)
}

/// Roots of `c0 + c1 * t + c2 * t^2` strictly inside (0, 1)
fn unit_interval_roots(c0: f64, c1: f64, c2: f64) -> Vec<f64> {
    let roots = if c2 == 0.0 {
        if c1 == 0.0 {
            vec![]
        } else {
            vec![-c0 / c1]
        }
    } else {
        let disc = c1 * c1 - 4.0 * c2 * c0;
        if disc < 0.0 {
            return vec![];
        }
        // citardauq form, avoids cancelling c1 against the square root
        let q = -0.5 * (c1 + disc.sqrt().copysign(c1));
        if q == 0.0 {
            vec![q / c2]
        } else {
            vec![q / c2, c0 / q]
        }
    };
    roots.into_iter().filter(|t| *t > 0.0 && *t < 1.0).collect()
}

/// Keep the candidates where the velocity really vanishes, sorted and deduplicated
fn stationary_params<F>(candidates: Vec<f64>, derivative: F, scale: f64) -> Vec<f64>
where
    F: Fn(f64) -> Point,
{
    let mut params: Vec<f64> = candidates
        .into_iter()
        .filter(|&t| derivative(t).norm() <= STATIONARY_SPEED_TOLERANCE * scale)
        .collect();
    params.sort_by(|a, b| a.total_cmp(b));
    params.dedup();
    params
}

/// Parameters in (0, 1) where the velocity of a cubic vanishes (cusps and reversals)
///
/// B'(t) / 3 = a + 2(b - a) t + (a - 2b + c) t^2 with a = p1 - p0, b = p2 - p1, c = p3 - p2
pub fn cubic_stationary_params(points: &[Point; 4]) -> Vec<f64> {
    let [p0, p1, p2, p3] = *points;
    let (a, b, c) = (p1 - p0, p2 - p1, p3 - p2);
    let (c1, c2) = ((b - a) * 2.0, a - b * 2.0 + c);

    let mut candidates = unit_interval_roots(a.x, c1.x, c2.x);
    candidates.extend(unit_interval_roots(a.y, c1.y, c2.y));

    let scale = 3.0 * (a.norm() + b.norm() + c.norm());
    stationary_params(candidates, |t| cubic_derivative(points, t), scale)
}

/// Parameters in (0, 1) where the velocity of a quadratic vanishes
///
/// B'(t) / 2 = a + (b - a) t with a = p1 - p0, b = p2 - p1
pub fn quadratic_stationary_params(points: &[Point; 3]) -> Vec<f64> {
    let [p0, p1, p2] = *points;
    let (a, b) = (p1 - p0, p2 - p1);
    let c1 = b - a;

    let mut candidates = unit_interval_roots(a.x, c1.x, 0.0);
    candidates.extend(unit_interval_roots(a.y, c1.y, 0.0));

    let scale = 2.0 * (a.norm() + b.norm());
    stationary_params(candidates, |t| quadratic_derivative(points, t), scale)
}

/// A bezier segment, either cubic or quadratic
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierSegment {
    /// Cubic bezier with 4 control points
    Cubic {
        /// Control points: start point, control1, control2, end point
        points: [Point; 4],
    },
    /// Quadratic bezier with 3 control points
    Quadratic {
        /// Control points: start point, control point, end point
        points: [Point; 3],
    },
}

impl BezierSegment {
    /// Create a cubic segment with 4 control points
    pub fn cubic(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self::Cubic {
            points: [p1, p2, p3, p4],
        }
    }

    /// Create a quadratic segment with 3 control points
    pub fn quadratic(p1: Point, p2: Point, p3: Point) -> Self {
        Self::Quadratic {
            points: [p1, p2, p3],
        }
    }

    /// Polynomial degree: 3 for cubic, 2 for quadratic
    pub fn degree(&self) -> usize {
        match self {
            Self::Cubic { .. } => 3,
            Self::Quadratic { .. } => 2,
        }
    }

    /// Get all control points for this segment
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Cubic { points } => points.to_vec(),
            Self::Quadratic { points } => points.to_vec(),
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Self::Cubic { points } => points[0],
            Self::Quadratic { points } => points[0],
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Cubic { points } => points[3],
            Self::Quadratic { points } => points[2],
        }
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    ///
    /// Values of t outside the unit interval extrapolate the polynomial.
    pub fn point_at(&self, t: f64) -> Point {
        match self {
            Self::Cubic { points } => cubic_point(points, t),
            Self::Quadratic { points } => quadratic_point(points, t),
        }
    }

    /// Get the derivative (velocity vector) of the curve at parameter t
    pub fn derivative_at(&self, t: f64) -> Point {
        match self {
            Self::Cubic { points } => cubic_derivative(points, t),
            Self::Quadratic { points } => quadratic_derivative(points, t),
        }
    }

    /// Parameters in (0, 1) where the velocity vanishes, in increasing order
    pub fn stationary_params(&self) -> Vec<f64> {
        match self {
            Self::Cubic { points } => cubic_stationary_params(points),
            Self::Quadratic { points } => quadratic_stationary_params(points),
        }
    }

    /// Generate a series of points along the bezier curve, evenly spaced in t
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => vec![],
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }
}
