//! Grid dimensions and construction-time validation.

use std::fmt;

/// Surface grid configuration. Construction-time only; the lattice is never
/// resized after it is built.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Vertex count across the width (x) direction
    pub width_verts: usize,

    /// Vertex count across the length (z) direction
    pub length_verts: usize,

    /// Physical width in world units (x extent)
    pub width: f32,

    /// Physical length in world units (z extent)
    pub length: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width_verts: 100,
            length_verts: 100,
            width: 200.0,
            length: 200.0,
        }
    }
}

impl GridConfig {
    /// Check that a lattice can actually be triangulated from these
    /// dimensions. Fewer than 2 vertices per side or a non-positive extent
    /// yields an empty or degenerate triangle list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width_verts < 2 || self.length_verts < 2 {
            return Err(ConfigError::GridTooSmall {
                width_verts: self.width_verts,
                length_verts: self.length_verts,
            });
        }
        if self.width <= 0.0 || self.length <= 0.0 {
            return Err(ConfigError::NonPositiveExtent {
                width: self.width,
                length: self.length,
            });
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.width_verts * self.length_verts
    }

    pub fn triangle_count(&self) -> usize {
        (self.width_verts - 1) * (self.length_verts - 1) * 2
    }
}

/// Rejected surface configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    GridTooSmall {
        width_verts: usize,
        length_verts: usize,
    },
    NonPositiveExtent {
        width: f32,
        length: f32,
    },
    /// Wavelength is a divisor in the wavenumber and phase terms
    NonPositiveWavelength {
        wave: usize,
        wavelength: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall {
                width_verts,
                length_verts,
            } => write!(
                f,
                "grid needs at least 2x2 vertices, got {}x{}",
                width_verts, length_verts
            ),
            ConfigError::NonPositiveExtent { width, length } => {
                write!(f, "grid extents must be positive, got {}x{}", width, length)
            }
            ConfigError::NonPositiveWavelength { wave, wavelength } => write!(
                f,
                "wave {} wavelength must be positive, got {}",
                wave, wavelength
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
