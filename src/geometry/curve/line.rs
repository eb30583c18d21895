use crate::math::Point2;

use super::Curve2d;

/// A straight segment between two points.
///
/// Always sampled with a single division: only its endpoints matter.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve2d for LineSegment {
    fn point_at(&self, t: f64) -> Point2 {
        // Exact endpoint so consecutive segments share bit-identical points.
        if t >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * t
    }

    fn divisions(&self, _resolution: usize) -> usize {
        1
    }
}
