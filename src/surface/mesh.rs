//! Flat lattice construction: vertices, fixed triangulation, static uvs.

use glam::{Vec2, Vec3};

use crate::params::{ConfigError, GridConfig};

/// Regular rectangular lattice with a fixed triangulation.
///
/// Topology is immutable once built; animation only ever rewrites vertex
/// positions on the host's copy.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Vec2>,
}

impl SurfaceGrid {
    /// Build the flat base plane described by `config`.
    ///
    /// Vertices are row-major: vertex (i, j) sits at
    /// (j * width / width_verts, 0, i * length / length_verts).
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let width_verts = config.width_verts;
        let length_verts = config.length_verts;

        // Distance between neighboring vertices along each axis
        let width_step = config.width / width_verts as f32;
        let length_step = config.length / length_verts as f32;

        let mut vertices = Vec::with_capacity(config.vertex_count());
        let mut uvs = Vec::with_capacity(config.vertex_count());
        for i in 0..length_verts {
            for j in 0..width_verts {
                let vertex = Vec3::new(j as f32 * width_step, 0.0, i as f32 * length_step);
                vertices.push(vertex);
                // Texture coordinates come from the flat position and never
                // follow the displaced surface.
                uvs.push(Vec2::new(vertex.x, vertex.z));
            }
        }

        // Two triangles per grid cell. Corner naming:
        // ll/lr = lower left/right, ul/ur = upper left/right.
        let mut indices = Vec::with_capacity(config.triangle_count() * 3);
        for i in 0..length_verts - 1 {
            for j in 0..width_verts - 1 {
                let ll = (width_verts * i + j) as u32;
                let lr = ll + 1;
                let ul = ll + width_verts as u32;
                let ur = ul + 1;

                // This winding picks the front face; changing it flips every
                // recomputed normal.
                indices.extend_from_slice(&[ll, ul, lr]);
                indices.extend_from_slice(&[lr, ul, ur]);
            }
        }

        log::debug!(
            "surface grid built: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );

        Ok(Self {
            vertices,
            indices,
            uvs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GridConfig {
        GridConfig {
            width_verts: 4,
            length_verts: 4,
            width: 3.0,
            length: 3.0,
        }
    }

    #[test]
    fn vertex_and_triangle_counts() {
        let grid = SurfaceGrid::new(&small_config()).unwrap();
        assert_eq!(grid.vertices.len(), 16);
        assert_eq!(grid.uvs.len(), 16);
        assert_eq!(grid.indices.len(), 18 * 3);
    }

    #[test]
    fn every_index_is_in_range() {
        let config = GridConfig {
            width_verts: 7,
            length_verts: 3,
            width: 10.0,
            length: 4.0,
        };
        let grid = SurfaceGrid::new(&config).unwrap();
        assert_eq!(grid.indices.len(), config.triangle_count() * 3);
        for &index in &grid.indices {
            assert!((index as usize) < config.vertex_count());
        }
    }

    #[test]
    fn lattice_positions_are_row_major() {
        let grid = SurfaceGrid::new(&small_config()).unwrap();

        // Vertex (i=1, j=1) at (1 * 3/4, 0, 1 * 3/4)
        let vertex = grid.vertices[4 + 1];
        assert_eq!(vertex, Vec3::new(0.75, 0.0, 0.75));

        // Last vertex of the first row
        assert_eq!(grid.vertices[3], Vec3::new(2.25, 0.0, 0.0));
    }

    #[test]
    fn uvs_mirror_flat_positions() {
        let grid = SurfaceGrid::new(&small_config()).unwrap();
        for (vertex, uv) in grid.vertices.iter().zip(&grid.uvs) {
            assert_eq!(*uv, Vec2::new(vertex.x, vertex.z));
        }
    }

    #[test]
    fn first_cell_triangles() {
        let grid = SurfaceGrid::new(&small_config()).unwrap();
        // ll=0, lr=1, ul=4, ur=5
        assert_eq!(&grid.indices[..6], &[0, 4, 1, 1, 4, 5]);
    }

    #[test]
    fn degenerate_grid_is_a_construction_error() {
        let config = GridConfig {
            width_verts: 1,
            length_verts: 4,
            width: 3.0,
            length: 3.0,
        };
        assert!(SurfaceGrid::new(&config).is_err());
    }
}
