//! Per-frame displacement over a host-owned mesh.

use glam::{Vec2, Vec3};

use super::field::{displacement, HeightNoise};
use super::mesh::SurfaceGrid;
use crate::host::HostMesh;
use crate::params::{ConfigError, GridConfig, WaveField};

/// Animated wave surface: a fixed lattice plus the wave field that displaces
/// it every frame.
///
/// Lifecycle is two-phase. `attach` pushes the topology into a host mesh and
/// snapshots the host's vertex positions as the base heights; `update` then
/// rewrites the host's vertices each frame from that snapshot. The snapshot
/// is taken once. If the host swaps its mesh out afterwards, the base goes
/// stale and displacement keeps following the old positions.
pub struct WaveSurface {
    grid: SurfaceGrid,
    field: WaveField,
    noise: HeightNoise,
    /// Undisplaced reference positions, captured at attach
    base: Option<Vec<Vec3>>,
    /// Last-computed displaced positions, rewritten in full every update
    displaced: Vec<Vec3>,
}

impl WaveSurface {
    /// Build a surface for `config`, animated by `field`.
    pub fn new(config: &GridConfig, field: WaveField) -> Result<Self, ConfigError> {
        field.validate()?;
        let grid = SurfaceGrid::new(config)?;
        let displaced = grid.vertices.clone();
        let noise = HeightNoise::new(field.noise_seed);
        Ok(Self {
            grid,
            field,
            noise,
            base: None,
            displaced,
        })
    }

    /// Push the grid's vertices, triangles and uvs into the host mesh, then
    /// snapshot the host's vertices as the base heights. The first snapshot
    /// wins; attaching again re-pushes topology but keeps the base.
    pub fn attach<M: HostMesh>(&mut self, mesh: &mut M) {
        mesh.set_vertices(&self.grid.vertices);
        mesh.set_triangles(&self.grid.indices);
        mesh.set_uvs(&self.grid.uvs);
        mesh.recalculate_normals();

        if self.base.is_none() {
            self.base = Some(mesh.vertices().to_vec());
            log::debug!("base heights captured: {} vertices", self.grid.vertices.len());
        }
    }

    /// Displace every vertex from its base position at `time` and hand the
    /// result to the host, which rebuilds its normals.
    ///
    /// Each vertex is fully recomputed from the flat base every call, so the
    /// surface cannot drift no matter how long the clock runs. A surface that
    /// was never attached does nothing.
    pub fn update<M: HostMesh>(&mut self, mesh: &mut M, time: f32) {
        let Some(base) = &self.base else {
            return;
        };

        for (out, vertex) in self.displaced.iter_mut().zip(base) {
            let height_noise = self.noise.sample(vertex.x, vertex.z) * self.field.noise_strength;
            let offset = displacement(&self.field, Vec2::new(vertex.x, vertex.z), time);
            *out = Vec3::new(
                vertex.x + offset.x,
                vertex.y + height_noise + offset.y,
                vertex.z + offset.z,
            );
        }

        mesh.set_vertices(&self.displaced);
        mesh.recalculate_normals();
    }

    /// Wave parameters, for mutation between frames.
    pub fn field_mut(&mut self) -> &mut WaveField {
        &mut self.field
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    /// The static topology as built.
    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    /// Hand every last-computed vertex position to `draw`, for point-marker
    /// style debug overlays. Pure read; before the first update this walks
    /// the flat base plane.
    pub fn draw_markers(&self, mut draw: impl FnMut(Vec3)) {
        for &vertex in &self.displaced {
            draw(vertex);
        }
    }
}
