//! Host-mesh boundary: the buffer contract a renderer implements, plus a
//! CPU reference implementation for headless runs and tests.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Mutable mesh buffers owned by the rendering host.
///
/// The surface pushes full position, index and uv arrays and asks for
/// normals to be rebuilt from them. It never resizes or re-triangulates
/// after the first push; per-frame traffic is positions only.
pub trait HostMesh {
    fn set_vertices(&mut self, positions: &[Vec3]);
    fn set_triangles(&mut self, indices: &[u32]);
    fn set_uvs(&mut self, uvs: &[Vec2]);
    fn vertices(&self) -> &[Vec3];

    /// Rebuild per-vertex normals from the current positions and topology.
    /// Normals are always derived, never written directly.
    fn recalculate_normals(&mut self);
}

/// Upload-ready vertex layout (position + uv coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PackedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Plain `Vec`-backed host mesh.
#[derive(Debug, Default, Clone)]
pub struct BufferMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
}

impl BufferMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Interleaved position + uv buffer in the layout GPU pipelines consume;
    /// cast to bytes with `bytemuck::cast_slice` for upload.
    pub fn packed_vertices(&self) -> Vec<PackedVertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .map(|(position, uv)| PackedVertex {
                position: position.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }
}

impl HostMesh for BufferMesh {
    fn set_vertices(&mut self, positions: &[Vec3]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
    }

    fn set_triangles(&mut self, indices: &[u32]) {
        self.indices.clear();
        self.indices.extend_from_slice(indices);
    }

    fn set_uvs(&mut self, uvs: &[Vec2]) {
        self.uvs.clear();
        self.uvs.extend_from_slice(uvs);
    }

    fn vertices(&self) -> &[Vec3] {
        &self.positions
    }

    fn recalculate_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);

        // Accumulate area-weighted face normals, then normalize per vertex.
        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (v0, v1, v2) = (self.positions[i0], self.positions[i1], self.positions[i2]);
            let face = (v1 - v0).cross(v2 - v0);
            self.normals[i0] += face;
            self.normals[i1] += face;
            self.normals[i2] += face;
        }
        for normal in &mut self.normals {
            *normal = normal.normalize_or_zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GridConfig;
    use crate::surface::SurfaceGrid;

    #[test]
    fn flat_grid_normals_point_up() {
        let config = GridConfig {
            width_verts: 6,
            length_verts: 5,
            width: 12.0,
            length: 10.0,
        };
        let grid = SurfaceGrid::new(&config).unwrap();

        let mut mesh = BufferMesh::new();
        mesh.set_vertices(&grid.vertices);
        mesh.set_triangles(&grid.indices);
        mesh.recalculate_normals();

        assert_eq!(mesh.normals().len(), grid.vertices.len());
        for normal in mesh.normals() {
            assert!(normal.y > 0.99, "expected +y normal, got {normal}");
            assert!(normal.x.abs() < 1e-5 && normal.z.abs() < 1e-5);
        }
    }

    #[test]
    fn packed_vertex_layout_is_tight() {
        assert_eq!(std::mem::size_of::<PackedVertex>(), 20);

        let mut mesh = BufferMesh::new();
        mesh.set_vertices(&[Vec3::new(1.0, 2.0, 3.0)]);
        mesh.set_uvs(&[Vec2::new(1.0, 3.0)]);

        let packed = mesh.packed_vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&packed);
        assert_eq!(bytes.len(), 20);
        assert_eq!(packed[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(packed[0].uv, [1.0, 3.0]);
    }

    #[test]
    fn normals_without_topology_are_zero() {
        let mut mesh = BufferMesh::new();
        mesh.set_vertices(&[Vec3::ZERO, Vec3::X, Vec3::Z]);
        mesh.recalculate_normals();
        assert!(mesh.normals().iter().all(|n| *n == Vec3::ZERO));
    }
}
