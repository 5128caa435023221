//! Swellgrid - procedural Gerstner-wave ocean surface
//!
//! Builds a flat rectangular lattice once, then displaces every vertex each
//! frame by superposing two trochoidal traveling waves and a static Perlin
//! height perturbation. The rendering host owns the mesh buffers behind the
//! [`host::HostMesh`] trait; the core only pushes positions and asks for
//! normals to be rebuilt.

pub mod host;
pub mod params;
pub mod surface;
