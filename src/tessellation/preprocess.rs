use crate::math::polygon_2d::{is_clockwise, points_coincide};
use crate::math::Point2;

use super::triangulate::contour_ranges;

/// An outline and its holes flattened into a single point list.
///
/// `points` holds the clockwise outer contour followed by each
/// counter-clockwise hole contour. `hole_starts[i]` is the index in
/// `points` where hole `i` begins; the hole runs until the next start or
/// the end of the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedPolygon {
    pub points: Vec<Point2>,
    pub hole_starts: Vec<usize>,
}

impl PreparedPolygon {
    /// Number of points belonging to the outer contour.
    #[must_use]
    pub fn outer_len(&self) -> usize {
        self.outer().len()
    }

    /// Returns the outer contour.
    #[must_use]
    pub fn outer(&self) -> &[Point2] {
        self.contour(0).unwrap_or_default()
    }

    /// Returns the contour of hole `i`, if it exists.
    ///
    /// Starts past the end or below an earlier start yield an empty hole.
    #[must_use]
    pub fn hole(&self, i: usize) -> Option<&[Point2]> {
        self.contour(i + 1)
    }

    fn contour(&self, i: usize) -> Option<&[Point2]> {
        let range = contour_ranges(self.points.len(), &self.hole_starts)
            .into_iter()
            .nth(i)?;
        Some(&self.points[range])
    }
}

/// Normalizes winding and concatenates an outline with its holes.
///
/// The outer contour is made clockwise and every hole counter-clockwise.
/// A closing point that repeats the first point of a contour is dropped.
/// Contours too small to enclose area are passed through untouched.
#[must_use]
pub fn prepare_polygon(outer: &[Point2], holes: &[Vec<Point2>]) -> PreparedPolygon {
    let total = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
    let mut points = Vec::with_capacity(total);
    let mut hole_starts = Vec::with_capacity(holes.len());

    let mut contour = open_contour(outer);
    if contour.len() >= 3 && !is_clockwise(&contour) {
        contour.reverse();
    }
    points.extend(contour);

    for hole in holes {
        let mut contour = open_contour(hole);
        if contour.len() >= 3 && is_clockwise(&contour) {
            contour.reverse();
        }
        hole_starts.push(points.len());
        points.extend(contour);
    }

    PreparedPolygon {
        points,
        hole_starts,
    }
}

/// Copies a contour, dropping a duplicated closing point.
fn open_contour(points: &[Point2]) -> Vec<Point2> {
    match points {
        [first, .., last] if points_coincide(first, last) => {
            points[..points.len() - 1].to_vec()
        }
        _ => points.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area;

    fn square(min: f64, max: f64) -> Vec<Point2> {
        vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ]
    }

    #[test]
    fn counter_clockwise_outer_is_reversed() {
        let outer = square(0.0, 1.0);
        let prepared = prepare_polygon(&outer, &[]);
        assert!(is_clockwise(&prepared.points));
        let expected: Vec<_> = outer.iter().rev().copied().collect();
        assert_eq!(prepared.points, expected);
        assert!(prepared.hole_starts.is_empty());
    }

    #[test]
    fn clockwise_outer_is_kept() {
        let mut outer = square(0.0, 1.0);
        outer.reverse();
        let prepared = prepare_polygon(&outer, &[]);
        assert_eq!(prepared.points, outer);
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = prepare_polygon(&square(0.0, 1.0), &[square(0.25, 0.75)]);
        let second = prepare_polygon(first.outer(), &[first.hole(0).unwrap_or_default().to_vec()]);
        assert_eq!(first, second);
    }

    #[test]
    fn holes_end_opposite_to_outer() {
        let mut cw_hole = square(2.0, 3.0);
        cw_hole.reverse();
        let ccw_hole = square(5.0, 6.0);
        let prepared = prepare_polygon(&square(0.0, 10.0), &[cw_hole, ccw_hole]);

        assert!(signed_area(prepared.outer()) < 0.0);
        for i in 0..2 {
            let hole = prepared.hole(i).unwrap_or_default();
            assert!(signed_area(hole) > 0.0, "hole {i} should be counter-clockwise");
        }
    }

    #[test]
    fn hole_starts_follow_concatenation() {
        let triangle = vec![
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 2.0),
        ];
        let prepared = prepare_polygon(&square(0.0, 10.0), &[square(4.0, 5.0), triangle]);
        assert_eq!(prepared.points.len(), 11);
        assert_eq!(prepared.hole_starts, vec![4, 8]);
        assert_eq!(prepared.outer_len(), 4);
        assert_eq!(prepared.hole(1).map(<[Point2]>::len), Some(3));
        assert!(prepared.hole(2).is_none());
    }

    #[test]
    fn malformed_hole_starts_are_clamped() {
        let prepared = PreparedPolygon {
            points: square(0.0, 1.0),
            hole_starts: vec![9, 2],
        };
        assert_eq!(prepared.outer_len(), 4);
        assert_eq!(prepared.hole(0).map(<[Point2]>::len), Some(0));
        assert_eq!(prepared.hole(1).map(<[Point2]>::len), Some(0));
        assert!(prepared.hole(2).is_none());
    }

    #[test]
    fn closing_duplicate_is_dropped() {
        let mut outer = square(0.0, 1.0);
        outer.push(outer[0]);
        let prepared = prepare_polygon(&outer, &[]);
        assert_eq!(prepared.points.len(), 4);
    }

    #[test]
    fn degenerate_contours_pass_through() {
        let outer = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let prepared = prepare_polygon(&outer, &[vec![]]);
        assert_eq!(prepared.points, outer);
        assert_eq!(prepared.hole_starts, vec![2]);
        assert!(prepare_polygon(&[], &[]).points.is_empty());
    }
}
