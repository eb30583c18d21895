mod bezier;
mod ellipse;
mod line;

pub use bezier::{CubicBezier, QuadraticBezier};
pub use ellipse::EllipseArc;
pub use line::LineSegment;

use crate::math::Point2;

/// Trait for planar parametric curves over the unit interval.
pub trait Curve2d {
    /// Evaluates the curve at `t` in `[0, 1]`.
    fn point_at(&self, t: f64) -> Point2;

    /// Number of line segments used to approximate the curve at the given
    /// resolution.
    fn divisions(&self, resolution: usize) -> usize;

    /// Samples `divisions(resolution) + 1` evenly spaced points, including
    /// both endpoints.
    #[allow(clippy::cast_precision_loss)]
    fn points(&self, resolution: usize) -> Vec<Point2> {
        let n = self.divisions(resolution).max(1);
        (0..=n)
            .map(|i| self.point_at(i as f64 / n as f64))
            .collect()
    }
}

/// A single segment of a [`Path`](crate::geometry::Path).
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Line(LineSegment),
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
    Arc(EllipseArc),
}

impl Curve2d for PathSegment {
    fn point_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line(c) => c.point_at(t),
            Self::Quadratic(c) => c.point_at(t),
            Self::Cubic(c) => c.point_at(t),
            Self::Arc(c) => c.point_at(t),
        }
    }

    fn divisions(&self, resolution: usize) -> usize {
        match self {
            Self::Line(c) => c.divisions(resolution),
            Self::Quadratic(c) => c.divisions(resolution),
            Self::Cubic(c) => c.divisions(resolution),
            Self::Arc(c) => c.divisions(resolution),
        }
    }
}
