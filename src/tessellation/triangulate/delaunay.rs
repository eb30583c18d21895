use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, Point2 as SpadePoint2, Triangulation};
use tracing::{trace, warn};

use crate::math::polygon_2d::is_degenerate;
use crate::math::Point2;

use super::{all_finite, contour_ranges, counter_clockwise, Triangle, Triangulate};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Constrained Delaunay triangulator.
///
/// Every contour is inserted as a loop of constraint edges. Faces are then
/// classified by the number of constraint edges crossed from the outside:
/// odd depth is solid, even depth is exterior or hole. Contours without
/// usable area are left out entirely. Coincident input points share the
/// vertex of the first occurrence, and constraint edges that would cross an
/// existing one are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedDelaunay;

impl Triangulate for ConstrainedDelaunay {
    fn triangulate(&self, points: &[Point2], hole_starts: &[usize]) -> Vec<Triangle> {
        let ranges = contour_ranges(points.len(), hole_starts);
        let Some(outer) = ranges.first() else {
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

        let contours: Vec<_> = ranges
            .into_iter()
            .filter(|r| !is_degenerate(&points[r.clone()]))
            .collect();

        let mut cdt = Cdt::new();
        let mut loops = Vec::with_capacity(contours.len());
        for range in &contours {
            let mut handles = Vec::with_capacity(range.len());
            for p in &points[range.clone()] {
                match cdt.insert(SpadePoint2::new(p.x, p.y)) {
                    Ok(h) => handles.push(h),
                    Err(e) => {
                        warn!(error = %e, "CDT insertion failed");
                        return Vec::new();
                    }
                }
            }
            loops.push(handles);
        }

        for handles in &loops {
            insert_constraint_loop(&mut cdt, handles);
        }

        // First input index for every CDT vertex; vertices of skipped
        // contours were never inserted.
        let mut source: Vec<Option<usize>> = vec![None; cdt.num_vertices()];
        for (range, handles) in contours.iter().zip(&loops) {
            for (i, h) in range.clone().zip(handles) {
                source[h.index()].get_or_insert(i);
            }
        }

        let interior = classify_interior_faces(&cdt);
        let mut triangles = Vec::with_capacity(interior.len());
        for face in cdt.inner_faces() {
            if !interior.contains(&face.fix().index()) {
                continue;
            }
            let [a, b, c] = face.vertices().map(|v| source[v.fix().index()]);
            let (Some(a), Some(b), Some(c)) = (a, b, c) else {
                continue;
            };
            if let Some(triangle) = counter_clockwise(points, [a, b, c]) {
                triangles.push(triangle);
            }
        }

        trace!(
            points = points.len(),
            vertices = cdt.num_vertices(),
            triangles = triangles.len(),
            "constrained delaunay done"
        );
        triangles
    }
}

/// Adds a closed loop of constraint edges through `handles`.
fn insert_constraint_loop(cdt: &mut Cdt, handles: &[FixedVertexHandle]) {
    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if cdt.can_add_constraint(from, to) {
            cdt.add_constraint(from, to);
        } else {
            trace!(from = from.index(), to = to.index(), "skipping crossing constraint");
        }
    }
}

/// Classifies which inner faces of the CDT are inside the polygon using flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each time
/// a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        let rev_face = edge.rev().face();
        let Some(inner) = rev_face.as_inner() else {
            continue;
        };
        let idx = inner.fix().index();
        if depth_map.contains_key(&idx) {
            continue;
        }
        let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
        depth_map.insert(idx, depth);
        if depth % 2 == 1 {
            interior.insert(idx);
        }
        queue.push_back((inner.fix(), depth));
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let neighbor_face = edge.rev().face();
            let Some(neighbor) = neighbor_face.as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let crossed = cdt.is_constraint_edge(edge.as_undirected().fix());
            let new_depth = depth + u32::from(crossed);
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
