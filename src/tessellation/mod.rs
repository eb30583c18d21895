mod preprocess;
mod tessellate_shapes;
mod triangulate;

pub use preprocess::{prepare_polygon, PreparedPolygon};
pub use tessellate_shapes::{ShapeGeometry, TessellateShapes, SHAPE_GEOMETRY_TYPE};
pub use triangulate::{ConstrainedDelaunay, EarClipping, Triangle, Triangulate, TriangulatorKind};

use crate::error::{Result, TessellationError};

/// Parameters controlling shape tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    /// Number of divisions per curved path segment (arcs use twice as many).
    pub curve_segments: usize,
    /// Triangulation strategy.
    pub triangulator: TriangulatorKind,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            curve_segments: 12,
            triangulator: TriangulatorKind::default(),
        }
    }
}

impl TessellationParams {
    /// Creates parameters with the given curve resolution and the default
    /// triangulator.
    ///
    /// # Errors
    ///
    /// Returns an error if `curve_segments` is zero.
    pub fn new(curve_segments: usize) -> Result<Self> {
        let params = Self {
            curve_segments,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Returns a copy using the given triangulator.
    #[must_use]
    pub fn with_triangulator(mut self, triangulator: TriangulatorKind) -> Self {
        self.triangulator = triangulator;
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `curve_segments` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.curve_segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "curve segments must be at least 1".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

/// A contiguous range of the index buffer drawn with one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// First index in the index buffer.
    pub start: usize,
    /// Number of indices in the range.
    pub count: usize,
    /// Material slot, equal to the position of the source shape.
    pub material_index: usize,
}

/// A named, read-only view of one vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute<'a> {
    /// Attribute name: "position", "normal" or "uv".
    pub name: &'static str,
    /// Number of components per vertex.
    pub item_size: usize,
    /// Interleaved components, `item_size` per vertex.
    pub data: &'a [f32],
}

impl Attribute<'_> {
    /// Number of vertices covered by the attribute.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len() / self.item_size
    }
}

/// Flat, GPU-ready mesh buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions, 3 components per vertex.
    pub positions: Vec<f32>,
    /// Vertex normals, 3 components per vertex.
    pub normals: Vec<f32>,
    /// Texture coordinates, 2 components per vertex.
    pub uvs: Vec<f32>,
    /// Triangle indices, 3 per triangle.
    pub indices: Vec<u32>,
    /// Render groups; empty when the mesh has a single material.
    pub groups: Vec<Group>,
}

impl MeshBuffers {
    pub const POSITION: &'static str = "position";
    pub const NORMAL: &'static str = "normal";
    pub const UV: &'static str = "uv";

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the index buffer one triangle at a time.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Looks up a vertex attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        self.attributes().into_iter().find(|a| a.name == name)
    }

    /// Returns the position, normal and uv attributes.
    #[must_use]
    pub fn attributes(&self) -> [Attribute<'_>; 3] {
        [
            Attribute {
                name: Self::POSITION,
                item_size: 3,
                data: &self.positions,
            },
            Attribute {
                name: Self::NORMAL,
                item_size: 3,
                data: &self.normals,
            },
            Attribute {
                name: Self::UV,
                item_size: 2,
                data: &self.uvs,
            },
        ]
    }

    /// Returns `true` if there are no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = TessellationParams::default();
        assert_eq!(params.curve_segments, 12);
        assert_eq!(params.triangulator, TriangulatorKind::EarClipping);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_segments_rejected() {
        assert!(TessellationParams::new(0).is_err());
        let params = TessellationParams {
            curve_segments: 0,
            ..TessellationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn with_triangulator_overrides_kind() {
        let params = TessellationParams::new(4)
            .unwrap()
            .with_triangulator(TriangulatorKind::ConstrainedDelaunay);
        assert_eq!(params.curve_segments, 4);
        assert_eq!(params.triangulator, TriangulatorKind::ConstrainedDelaunay);
    }

    #[test]
    fn attribute_lookup() {
        let mesh = MeshBuffers {
            positions: vec![0.0; 9],
            normals: vec![0.0; 9],
            uvs: vec![0.0; 6],
            indices: vec![0, 1, 2],
            groups: Vec::new(),
        };
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.attribute("uv").unwrap().item_size, 2);
        assert_eq!(mesh.attribute("normal").unwrap().count(), 3);
        assert!(mesh.attribute("color").is_none());
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }
}
