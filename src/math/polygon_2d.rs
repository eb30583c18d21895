use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon winds clockwise.
///
/// Degenerate contours (see [`is_degenerate`]) are not clockwise.
#[must_use]
pub fn is_clockwise(points: &[Point2]) -> bool {
    signed_area(points) < -TOLERANCE
}

/// Returns `true` if the contour encloses no usable area: fewer than 3
/// points, or an absolute signed area below [`TOLERANCE`].
#[must_use]
pub fn is_degenerate(points: &[Point2]) -> bool {
    points.len() < 3 || signed_area(points).abs() < TOLERANCE
}

/// Signed area of the triangle `(a, b, c)`. Positive when counter-clockwise.
#[must_use]
pub fn triangle_signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
}

/// Returns `true` if `a`, `b`, `c` are collinear within [`TOLERANCE`].
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    triangle_signed_area(a, b, c).abs() < TOLERANCE
}

/// Returns `true` if two points coincide within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_ccw() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area(&square_ccw());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square_ccw();
        pts.reverse();
        let area = signed_area(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn clockwise_detection() {
        let mut pts = square_ccw();
        assert!(!is_clockwise(&pts));
        pts.reverse();
        assert!(is_clockwise(&pts));
    }

    #[test]
    fn zero_area_is_not_clockwise() {
        let line = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert!(!is_clockwise(&line));
        assert!(is_collinear(&line[0], &line[1], &line[2]));
    }

    #[test]
    fn sliver_is_degenerate() {
        let mut sliver = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1e-13),
            Point2::new(2.0, 0.0),
        ];
        assert!(is_degenerate(&sliver));
        assert!(!is_clockwise(&sliver));
        sliver.reverse();
        assert!(!is_clockwise(&sliver));
        assert!(is_degenerate(&sliver[..2]));
        assert!(!is_degenerate(&square_ccw()));
    }

    #[test]
    fn triangle_orientation() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let c = Point2::new(0.0, 2.0);
        assert!((triangle_signed_area(&a, &b, &c) - 2.0).abs() < TOLERANCE);
        assert!((triangle_signed_area(&a, &c, &b) + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn coincident_points() {
        let a = Point2::new(1.0, 1.0);
        assert!(points_coincide(&a, &Point2::new(1.0, 1.0 + 1e-12)));
        assert!(!points_coincide(&a, &Point2::new(1.0, 1.1)));
    }
}
