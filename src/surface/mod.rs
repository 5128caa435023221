//! Animated Gerstner wave surface over a host-owned mesh.

mod field;
mod mesh;
mod system;

// Re-export public types
pub use field::{displacement, HeightNoise};
pub use mesh::SurfaceGrid;
pub use system::WaveSurface;
