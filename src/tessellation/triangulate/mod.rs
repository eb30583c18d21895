mod delaunay;
mod ear_clipping;

pub use delaunay::ConstrainedDelaunay;
pub use ear_clipping::EarClipping;

use std::ops::Range;

use crate::math::polygon_2d::{is_collinear, triangle_signed_area};
use crate::math::Point2;

/// Indices of one triangle into a point list.
pub type Triangle = [usize; 3];

/// Triangulates a polygon with holes given as one flat point list.
///
/// `points` holds the outer contour followed by every hole contour, and
/// `hole_starts` (ascending) marks where each hole begins. Implementations
/// return counter-clockwise triangles whose indices address `points`. They
/// never fail: degenerate or self-intersecting input produces an empty or
/// partial triangle list.
pub trait Triangulate {
    /// Triangulates the polygon.
    fn triangulate(&self, points: &[Point2], hole_starts: &[usize]) -> Vec<Triangle>;
}

/// Selects the triangulation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriangulatorKind {
    /// Ear clipping with hole bridging.
    #[default]
    EarClipping,
    /// Constrained Delaunay triangulation with parity classification.
    ConstrainedDelaunay,
}

impl Triangulate for TriangulatorKind {
    fn triangulate(&self, points: &[Point2], hole_starts: &[usize]) -> Vec<Triangle> {
        match self {
            Self::EarClipping => EarClipping.triangulate(points, hole_starts),
            Self::ConstrainedDelaunay => ConstrainedDelaunay.triangulate(points, hole_starts),
        }
    }
}

/// Splits `0..len` into the outer contour range followed by one range per hole.
///
/// Starts are clamped to `len` and to the previous start, so the ranges never
/// overlap even when `hole_starts` is out of range or not ascending.
pub(super) fn contour_ranges(len: usize, hole_starts: &[usize]) -> Vec<Range<usize>> {
    let mut bounds = Vec::with_capacity(hole_starts.len() + 2);
    bounds.push(0);
    let mut prev = 0;
    for &start in hole_starts {
        prev = start.min(len).max(prev);
        bounds.push(prev);
    }
    bounds.push(len);
    bounds.windows(2).map(|w| w[0]..w[1]).collect()
}

/// Orders `triangle` counter-clockwise, or returns `None` if its vertices
/// are collinear.
fn counter_clockwise(points: &[Point2], triangle: Triangle) -> Option<Triangle> {
    let [a, b, c] = triangle;
    let (pa, pb, pc) = (&points[a], &points[b], &points[c]);
    if is_collinear(pa, pb, pc) {
        return None;
    }
    if triangle_signed_area(pa, pb, pc) < 0.0 {
        Some([a, c, b])
    } else {
        Some(triangle)
    }
}

fn all_finite(points: &[Point2]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::f64::consts::TAU;

    use crate::math::polygon_2d::triangle_signed_area;
    use crate::math::Point2;

    use super::Triangle;

    /// Regular `n`-gon of the given radius, counter-clockwise.
    #[allow(clippy::cast_precision_loss)]
    pub fn regular_polygon(n: usize, radius: f64) -> Vec<Point2> {
        (0..n)
            .map(|i| {
                let a = TAU * i as f64 / n as f64;
                Point2::new(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    /// Axis-aligned square, counter-clockwise.
    pub fn square(min: f64, max: f64) -> Vec<Point2> {
        vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ]
    }

    /// Sum of the signed areas of the triangles.
    pub fn covered_area(points: &[Point2], triangles: &[Triangle]) -> f64 {
        triangles
            .iter()
            .map(|&[a, b, c]| triangle_signed_area(&points[a], &points[b], &points[c]))
            .sum()
    }

    /// Asserts every index is in range and every triangle is counter-clockwise.
    pub fn assert_valid(points: &[Point2], triangles: &[Triangle]) {
        for t in triangles {
            for &i in t {
                assert!(i < points.len(), "index {i} out of range {}", points.len());
            }
            let area = triangle_signed_area(&points[t[0]], &points[t[1]], &points[t[2]]);
            assert!(area > 0.0, "triangle {t:?} is not counter-clockwise");
        }
    }
}
