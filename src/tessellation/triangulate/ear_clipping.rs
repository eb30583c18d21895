use std::ops::Range;

use tracing::{trace, warn};

use crate::math::polygon_2d::is_degenerate;
use crate::math::Point2;

use super::{all_finite, contour_ranges, counter_clockwise, Triangle, Triangulate};

/// Ear-clipping triangulator.
///
/// Holes are merged into the outer contour through bridge edges and the
/// resulting simple polygon is clipped ear by ear. An outer contour without
/// usable area yields no triangles; such holes are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarClipping;

impl Triangulate for EarClipping {
    fn triangulate(&self, points: &[Point2], hole_starts: &[usize]) -> Vec<Triangle> {
        let ranges = contour_ranges(points.len(), hole_starts);
        let Some((outer, holes)) = ranges.split_first() else {
            return Vec::new();
        };
        if is_degenerate(&points[outer.clone()]) {
            trace!(points = outer.len(), "outer contour is degenerate");
            return Vec::new();
        }
        if !all_finite(points) {
            warn!("non-finite coordinates, skipping triangulation");
            return Vec::new();
        }

        // Flat coordinates of the usable contours; `source[i]` is the index
        // in `points` of flat vertex `i`.
        let mut coords = Vec::with_capacity(points.len() * 2);
        let mut source = Vec::with_capacity(points.len());
        let mut flat_hole_starts = Vec::with_capacity(holes.len());

        push_contour(points, outer.clone(), &mut coords, &mut source);
        for hole in holes {
            if is_degenerate(&points[hole.clone()]) {
                trace!(points = hole.len(), "skipping degenerate hole");
                continue;
            }
            flat_hole_starts.push(source.len());
            push_contour(points, hole.clone(), &mut coords, &mut source);
        }

        let Ok(indices) = earcutr::earcut(&coords, &flat_hole_starts, 2) else {
            warn!(points = source.len(), "ear clipping failed");
            return Vec::new();
        };

        let triangles: Vec<Triangle> = indices
            .chunks_exact(3)
            .filter_map(|t| {
                counter_clockwise(points, [source[t[0]], source[t[1]], source[t[2]]])
            })
            .collect();
        trace!(
            points = source.len(),
            holes = flat_hole_starts.len(),
            triangles = triangles.len(),
            "ear clipping done"
        );
        triangles
    }
}

fn push_contour(
    points: &[Point2],
    range: Range<usize>,
    coords: &mut Vec<f64>,
    source: &mut Vec<usize>,
) {
    for i in range {
        coords.push(points[i].x);
        coords.push(points[i].y);
        source.push(i);
    }
}
