use crate::math::Point2;

use super::Path;

/// A planar region: one outer outline with zero or more holes.
///
/// Holes are expected to lie strictly inside the outline and not to
/// intersect each other. Violations are not detected; they only make the
/// triangulation undefined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    outline: Path,
    holes: Vec<Path>,
}

/// Discrete contours sampled from a [`Shape`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePoints {
    /// Outer contour.
    pub outer: Vec<Point2>,
    /// Hole contours, in the order the holes were added.
    pub holes: Vec<Vec<Point2>>,
}

impl Shape {
    /// Creates a shape with the given outline and no holes.
    #[must_use]
    pub fn new(outline: Path) -> Self {
        Self {
            outline,
            holes: Vec::new(),
        }
    }

    /// Creates a polygonal shape from outline points.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        Self::new(Path::from_points(points))
    }

    /// Adds a hole to the shape.
    #[must_use]
    pub fn with_hole(mut self, hole: Path) -> Self {
        self.holes.push(hole);
        self
    }

    /// Adds a hole to the shape in place.
    pub fn add_hole(&mut self, hole: Path) -> &mut Self {
        self.holes.push(hole);
        self
    }

    /// Returns the outer outline.
    #[must_use]
    pub fn outline(&self) -> &Path {
        &self.outline
    }

    /// Returns the holes.
    #[must_use]
    pub fn holes(&self) -> &[Path] {
        &self.holes
    }

    /// Samples the outline and every hole at `resolution`.
    #[must_use]
    pub fn extract_points(&self, resolution: usize) -> ShapePoints {
        ShapePoints {
            outer: self.outline.sample(resolution),
            holes: self.holes.iter().map(|h| h.sample(resolution)).collect(),
        }
    }
}

impl From<Path> for Shape {
    fn from(outline: Path) -> Self {
        Self::new(outline)
    }
}
