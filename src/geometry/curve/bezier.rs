use crate::math::Point2;

use super::Curve2d;

/// A quadratic Bézier curve with one control point.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticBezier {
    start: Point2,
    control: Point2,
    end: Point2,
}

impl QuadraticBezier {
    /// Creates a new quadratic Bézier curve.
    #[must_use]
    pub fn new(start: Point2, control: Point2, end: Point2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }
}

impl Curve2d for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let s = 1.0 - t;
        let (b0, b1, b2) = (s * s, 2.0 * s * t, t * t);
        Point2::new(
            b0 * self.start.x + b1 * self.control.x + b2 * self.end.x,
            b0 * self.start.y + b1 * self.control.y + b2 * self.end.y,
        )
    }

    fn divisions(&self, resolution: usize) -> usize {
        resolution
    }
}

/// A cubic Bézier curve with two control points.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    start: Point2,
    control1: Point2,
    control2: Point2,
    end: Point2,
}

impl CubicBezier {
    /// Creates a new cubic Bézier curve.
    #[must_use]
    pub fn new(start: Point2, control1: Point2, control2: Point2, end: Point2) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }
}

impl Curve2d for CubicBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let s = 1.0 - t;
        let b0 = s * s * s;
        let b1 = 3.0 * s * s * t;
        let b2 = 3.0 * s * t * t;
        let b3 = t * t * t;
        Point2::new(
            b0 * self.start.x + b1 * self.control1.x + b2 * self.control2.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.control1.y + b2 * self.control2.y + b3 * self.end.y,
        )
    }

    fn divisions(&self, resolution: usize) -> usize {
        resolution
    }
}
