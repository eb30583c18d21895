use tracing::{debug, warn};

use crate::error::{Result, TessellationError};
use crate::geometry::Shape;
use crate::math::polygon_2d::is_degenerate;

use super::preprocess::prepare_polygon;
use super::triangulate::Triangulate;
use super::{Group, MeshBuffers, TessellationParams};

/// Type label attached to meshes produced by [`TessellateShapes`].
pub const SHAPE_GEOMETRY_TYPE: &str = "ShapeGeometry";

/// Flat mesh of one or more planar shapes.
///
/// All vertices lie in the z = 0 plane with normal +Z, and each vertex's
/// texture coordinate is its own (x, y) position.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    mesh: MeshBuffers,
    params: TessellationParams,
}

impl ShapeGeometry {
    /// Returns the geometry type label.
    #[must_use]
    pub fn geometry_type(&self) -> &'static str {
        SHAPE_GEOMETRY_TYPE
    }

    /// Returns the mesh buffers.
    #[must_use]
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// Returns the parameters the geometry was built with.
    #[must_use]
    pub fn params(&self) -> &TessellationParams {
        &self.params
    }

    /// Consumes the geometry, returning its buffers.
    #[must_use]
    pub fn into_mesh(self) -> MeshBuffers {
        self.mesh
    }
}

impl From<ShapeGeometry> for MeshBuffers {
    fn from(geometry: ShapeGeometry) -> Self {
        geometry.mesh
    }
}

/// Tessellates planar shapes into a single indexed mesh.
///
/// Shapes are appended in order. When more than one shape is given, each
/// contributes one [`Group`] whose material slot is its position in the input.
pub struct TessellateShapes<'a> {
    shapes: &'a [Shape],
    params: TessellationParams,
}

impl<'a> TessellateShapes<'a> {
    /// Creates a new `TessellateShapes` operation.
    #[must_use]
    pub fn new(shapes: &'a [Shape], params: TessellationParams) -> Self {
        Self { shapes, params }
    }

    /// Creates an operation for a single shape.
    #[must_use]
    pub fn single(shape: &'a Shape, params: TessellationParams) -> Self {
        Self::new(std::slice::from_ref(shape), params)
    }

    /// Executes the tessellation.
    ///
    /// Degenerate shapes contribute their vertices but no triangles.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the mesh would need
    /// more vertices than a `u32` index can address.
    pub fn execute(&self) -> Result<ShapeGeometry> {
        self.params.validate()?;

        let mut mesh = MeshBuffers::default();
        let mut group_start = 0;
        for (material_index, shape) in self.shapes.iter().enumerate() {
            let count = self.append_shape(&mut mesh, shape, material_index)?;
            mesh.groups.push(Group {
                start: group_start,
                count,
                material_index,
            });
            group_start += count;
        }

        // A single shape draws with one implicit material.
        if self.shapes.len() == 1 {
            mesh.groups.clear();
        }

        debug!(
            shapes = self.shapes.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            groups = mesh.groups.len(),
            "shapes tessellated"
        );

        Ok(ShapeGeometry {
            mesh,
            params: self.params,
        })
    }

    /// Appends one shape to `mesh`, returning the number of indices added.
    #[allow(clippy::cast_possible_truncation)]
    fn append_shape(
        &self,
        mesh: &mut MeshBuffers,
        shape: &Shape,
        material_index: usize,
    ) -> Result<usize> {
        let index_offset = mesh.vertex_count();
        let sampled = shape.extract_points(self.params.curve_segments);
        let polygon = prepare_polygon(&sampled.outer, &sampled.holes);
        let triangles = self
            .params
            .triangulator
            .triangulate(&polygon.points, &polygon.hole_starts);

        let vertex_total = index_offset + polygon.points.len();
        if u32::try_from(vertex_total).is_err() {
            return Err(TessellationError::Failed(format!(
                "{vertex_total} vertices exceed the u32 index range"
            ))
            .into());
        }

        if triangles.is_empty() && !is_degenerate(polygon.outer()) {
            warn!(
                shape = material_index,
                points = polygon.points.len(),
                "shape produced no triangles"
            );
        }

        mesh.positions.reserve(polygon.points.len() * 3);
        mesh.normals.reserve(polygon.points.len() * 3);
        mesh.uvs.reserve(polygon.points.len() * 2);
        for p in &polygon.points {
            let (x, y) = (p.x as f32, p.y as f32);
            mesh.positions.extend_from_slice(&[x, y, 0.0]);
            mesh.normals.extend_from_slice(&[0.0, 0.0, 1.0]);
            mesh.uvs.extend_from_slice(&[x, y]);
        }

        let before = mesh.indices.len();
        mesh.indices.reserve(triangles.len() * 3);
        for triangle in triangles {
            // Bounded by `vertex_total`, checked above.
            mesh.indices
                .extend(triangle.map(|i| (i + index_offset) as u32));
        }
        let count = mesh.indices.len() - before;

        debug!(
            shape = material_index,
            index_offset,
            vertices = polygon.points.len(),
            holes = polygon.hole_starts.len(),
            indices = count,
            "shape appended"
        );
        Ok(count)
    }
}
