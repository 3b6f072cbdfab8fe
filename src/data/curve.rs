//! A bezier segment parameterized by arc length.
//!
//! [`BezierCurve`] answers "where is the point at distance `s` along the curve" and
//! "which way does the curve head there". The total length is integrated once when the
//! curve is built; the curve is immutable afterwards, so it can be shared across threads
//! freely.
//!
//! # Example
//!
//! ```rust
//! use bezier_arclen::{curve, Point};
//!
//! let curve = curve!([(0, 0), (50, 100), (100, 0)]).unwrap();
//!
//! // the parabola is symmetric, so half its length lands on the axis x = 50
//! let mid = curve.position_at_length(curve.total_length() / 2.0);
//! assert!((mid.x - 50.0).abs() < 1e-6);
//!
//! // out of range lengths are clamped to the endpoints
//! assert_eq!(curve.position_at_length(-5.0), Point::new(0.0, 0.0));
//! ```

use crate::data::point::{Point, PointProperties};
use crate::data::segment::{cubic_derivative, quadratic_derivative, BezierSegment};
use crate::error::{BezierError, BezierResult};
use crate::modules::arclen::inverse::{t_at_length, InversionSettings};
use crate::modules::arclen::quadrature::arc_length;
use log::debug;

/// A single cubic or quadratic bezier segment with its cached total length
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    segment: BezierSegment,
    /// Where the velocity vanishes; the length integral is split there
    stationary: Vec<f64>,
    total_length: f64,
    settings: InversionSettings,
}

impl BezierCurve {
    /// Build a cubic curve when `p3` is given, a quadratic one otherwise
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Option<Point>) -> BezierResult<Self> {
        let segment = match p3 {
            Some(p3) => BezierSegment::cubic(p0, p1, p2, p3),
            None => BezierSegment::quadratic(p0, p1, p2),
        };
        Self::from_segment(segment)
    }

    /// Build from 3 (quadratic) or 4 (cubic) control points
    pub fn from_points(points: &[Point]) -> BezierResult<Self> {
        match *points {
            [p0, p1, p2] => Self::new(p0, p1, p2, None),
            [p0, p1, p2, p3] => Self::new(p0, p1, p2, Some(p3)),
            _ => Err(BezierError::InvalidPointCount(points.len())),
        }
    }

    pub fn from_segment(segment: BezierSegment) -> BezierResult<Self> {
        if let Some((index, &point)) = segment
            .points()
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite())
        {
            return Err(BezierError::NonFiniteControlPoint { index, point });
        }

        let mut curve = Self {
            stationary: segment.stationary_params(),
            segment,
            total_length: 0.0,
            settings: InversionSettings::default(),
        };
        curve.total_length = curve.length_at(1.0);
        if !curve.total_length.is_finite() {
            return Err(BezierError::NonFiniteLength(curve.total_length));
        }
        debug!(
            "built degree {} bezier curve, total length {}, {} stationary points",
            curve.segment.degree(),
            curve.total_length,
            curve.stationary.len()
        );

        Ok(curve)
    }

    /// Replace the stopping criteria used by the length queries
    pub fn with_settings(self, settings: InversionSettings) -> BezierResult<Self> {
        settings.validate()?;
        Ok(Self { settings, ..self })
    }

    pub fn segment(&self) -> &BezierSegment {
        &self.segment
    }

    pub fn settings(&self) -> &InversionSettings {
        &self.settings
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn position_at(&self, t: f64) -> Point {
        self.segment.point_at(t)
    }

    pub fn derivative_at(&self, t: f64) -> Point {
        self.segment.derivative_at(t)
    }

    /// Parameters in (0, 1) where the curve stops, such as cusps
    pub fn stationary_params(&self) -> &[f64] {
        &self.stationary
    }

    /// Arc length from the start of the curve to parameter `t`
    pub fn length_at(&self, t: f64) -> f64 {
        match &self.segment {
            BezierSegment::Cubic { points } => {
                arc_length(|u| cubic_derivative(points, u), &self.stationary, t)
            }
            BezierSegment::Quadratic { points } => {
                arc_length(|u| quadratic_derivative(points, u), &self.stationary, t)
            }
        }
    }

    /// Parameter `t` at which the arc length reaches `pos`, clamped to `[0, 1]`
    pub fn t_at_length(&self, pos: f64) -> f64 {
        match &self.segment {
            BezierSegment::Cubic { points } => t_at_length(
                pos,
                self.total_length,
                |t| arc_length(|u| cubic_derivative(points, u), &self.stationary, t),
                |t| cubic_derivative(points, t).norm(),
                &self.settings,
            ),
            BezierSegment::Quadratic { points } => t_at_length(
                pos,
                self.total_length,
                |t| arc_length(|u| quadratic_derivative(points, u), &self.stationary, t),
                |t| quadratic_derivative(points, t).norm(),
                &self.settings,
            ),
        }
    }

    pub fn position_at_length(&self, pos: f64) -> Point {
        self.position_at(self.t_at_length(pos))
    }

    /// Unit tangent at arc length `pos`; zero where the curve is stationary
    pub fn tangent_at_length(&self, pos: f64) -> Point {
        self.derivative_at(self.t_at_length(pos)).normalize()
    }

    /// Position and unit tangent at arc length `pos`, from a single inversion
    pub fn properties_at_length(&self, pos: f64) -> PointProperties {
        let t = self.t_at_length(pos);
        PointProperties::new(self.position_at(t), self.derivative_at(t).normalize())
    }

    /// `num_points` points evenly spaced by arc length, both endpoints included
    pub fn points_at_lengths(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => vec![],
            1 => vec![self.segment.start()],
            _ => (0..num_points)
                .map(|i| {
                    let pos = self.total_length * i as f64 / (num_points - 1) as f64;
                    self.position_at_length(pos)
                })
                .collect(),
        }
    }
}

impl TryFrom<BezierSegment> for BezierCurve {
    type Error = BezierError;

    fn try_from(segment: BezierSegment) -> BezierResult<Self> {
        Self::from_segment(segment)
    }
}
