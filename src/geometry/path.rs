use crate::error::Result;
use crate::math::polygon_2d::points_coincide;
use crate::math::Point2;

use super::curve::{CubicBezier, Curve2d, EllipseArc, LineSegment, PathSegment, QuadraticBezier};

/// A planar outline built from connected line and curve segments.
///
/// The path keeps a pen position. Each drawing command starts at the pen
/// and leaves it at the segment's end point. The outline is treated as
/// closed when sampled: the last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
    current: Point2,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            current: Point2::origin(),
        }
    }
}

impl Path {
    /// Creates an empty path with the pen at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path of straight segments through `points`.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(first.x, first.y);
            for p in rest {
                path.line_to(p.x, p.y);
            }
        }
        path
    }

    /// Moves the pen without drawing.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.current = Point2::new(x, y);
        self
    }

    /// Draws a straight segment from the pen to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let end = Point2::new(x, y);
        self.segments
            .push(PathSegment::Line(LineSegment::new(self.current, end)));
        self.current = end;
        self
    }

    /// Draws a quadratic Bézier from the pen to `(x, y)` with control `(cx, cy)`.
    pub fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        let end = Point2::new(x, y);
        self.segments.push(PathSegment::Quadratic(QuadraticBezier::new(
            self.current,
            Point2::new(cx, cy),
            end,
        )));
        self.current = end;
        self
    }

    /// Draws a cubic Bézier from the pen to `(x, y)` with controls
    /// `(c1x, c1y)` and `(c2x, c2y)`.
    pub fn bezier_curve_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        let end = Point2::new(x, y);
        self.segments.push(PathSegment::Cubic(CubicBezier::new(
            self.current,
            Point2::new(c1x, c1y),
            Point2::new(c2x, c2y),
            end,
        )));
        self.current = end;
        self
    }

    /// Draws a circular arc whose center is given relative to the pen.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or any value is non-finite.
    pub fn arc(
        &mut self,
        dx: f64,
        dy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<&mut Self> {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        self.absarc(x, y, radius, start_angle, end_angle, clockwise)
    }

    /// Draws a circular arc around the absolute center `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or any value is non-finite.
    pub fn absarc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<&mut Self> {
        let arc = EllipseArc::circular(Point2::new(x, y), radius, start_angle, end_angle, clockwise)?;
        Ok(self.push_arc(arc))
    }

    /// Draws an elliptical arc whose center is given relative to the pen.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is not positive or any value is non-finite.
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        dx: f64,
        dy: f64,
        x_radius: f64,
        y_radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> Result<&mut Self> {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        self.absellipse(x, y, x_radius, y_radius, start_angle, end_angle, clockwise, rotation)
    }

    /// Draws an elliptical arc around the absolute center `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is not positive or any value is non-finite.
    #[allow(clippy::too_many_arguments)]
    pub fn absellipse(
        &mut self,
        x: f64,
        y: f64,
        x_radius: f64,
        y_radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> Result<&mut Self> {
        let arc = EllipseArc::new(
            Point2::new(x, y),
            x_radius,
            y_radius,
            start_angle,
            end_angle,
            clockwise,
            rotation,
        )?;
        Ok(self.push_arc(arc))
    }

    /// Closes the outline with a straight segment back to the first point,
    /// if the pen is not already there.
    pub fn close(&mut self) -> &mut Self {
        if let Some(first) = self.segments.first().map(|s| s.point_at(0.0)) {
            if !points_coincide(&first, &self.current) {
                self.line_to(first.x, first.y);
            }
        }
        self
    }

    /// Returns the pen position.
    #[must_use]
    pub fn current_point(&self) -> &Point2 {
        &self.current
    }

    /// Returns the drawn segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Samples the outline into a discrete contour.
    ///
    /// Line segments contribute their endpoints only; curves are divided
    /// according to `resolution`. Consecutive coincident samples are
    /// collapsed, and a final point equal to the first is dropped so the
    /// contour is returned open.
    #[must_use]
    pub fn sample(&self, resolution: usize) -> Vec<Point2> {
        let mut points: Vec<Point2> = Vec::new();
        for segment in &self.segments {
            for p in segment.points(resolution) {
                if points.last().is_some_and(|last| points_coincide(last, &p)) {
                    continue;
                }
                points.push(p);
            }
        }
        if points.len() > 1 && points_coincide(&points[0], &points[points.len() - 1]) {
            points.pop();
        }
        points
    }

    /// Appends an arc, bridging from the pen to the arc start with a line
    /// when the two do not meet.
    fn push_arc(&mut self, arc: EllipseArc) -> &mut Self {
        let start = arc.point_at(0.0);
        if !self.segments.is_empty() && !points_coincide(&start, &self.current) {
            self.line_to(start.x, start.y);
        }
        self.current = arc.point_at(1.0);
        self.segments.push(PathSegment::Arc(arc));
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use approx::assert_relative_eq;

    use super::*;

    fn unit_square() -> Path {
        Path::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn empty_path_samples_nothing() {
        assert!(Path::new().sample(12).is_empty());
    }

    #[test]
    fn polygon_samples_each_corner_once() {
        let pts = unit_square().sample(12);
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0], Point2::new(0.0, 0.0));
        assert_eq!(pts[3], Point2::new(0.0, 1.0));
    }

    #[test]
    fn explicit_close_does_not_duplicate_first_point() {
        let mut path = unit_square();
        path.close();
        assert_eq!(path.segments().len(), 4);
        assert_eq!(path.sample(4).len(), 4);
        path.close();
        assert_eq!(path.segments().len(), 4);
    }

    #[test]
    fn full_circle_drops_closing_sample() {
        let mut path = Path::new();
        path.absarc(0.0, 0.0, 1.0, 0.0, TAU, false).unwrap();
        let pts = path.sample(12);
        assert_eq!(pts.len(), 24);
        for p in &pts {
            assert_relative_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn arc_after_line_bridges_gap() {
        let mut path = Path::new();
        path.move_to(-2.0, 0.0).line_to(-1.0, 0.0);
        path.absarc(0.0, 0.0, 1.0, 0.0, PI, false).unwrap();
        // Pen was at (-1, 0) but the arc starts at (1, 0).
        assert_eq!(path.segments().len(), 3);
        assert!(matches!(path.segments()[1], PathSegment::Line(_)));
        assert_relative_eq!(path.current_point().x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn relative_arc_is_offset_from_pen() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0);
        path.arc(1.0, 0.0, 1.0, PI, TAU, false).unwrap();
        let start = path.segments()[0].point_at(0.0);
        assert_relative_eq!(start.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(start.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(path.current_point().x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn curves_follow_resolution() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0)
            .quadratic_curve_to(1.0, 2.0, 2.0, 0.0)
            .bezier_curve_to(2.0, -1.0, 0.0, -1.0, 0.0, 0.0);
        // 5 + 5 divisions, shared joint and closing point collapsed.
        assert_eq!(path.sample(5).len(), 10);
    }

    #[test]
    fn invalid_arc_is_rejected() {
        let mut path = Path::new();
        assert!(path.absarc(0.0, 0.0, -1.0, 0.0, PI, false).is_err());
        assert!(path.segments().is_empty());
    }
}
