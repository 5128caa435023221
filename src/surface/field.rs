//! Closed-form Gerstner evaluation and the static height-noise term.

use glam::{Vec2, Vec3};
use noise::{NoiseFn, Perlin};

use crate::params::{WaveField, WaveParams};

/// Displacement contribution of a single traveling wave at a horizontal
/// position and time. X/Z sharpen the crest horizontally, Y is height.
fn gerstner(wave: &WaveParams, direction: Vec2, position: Vec2, time: f32) -> Vec3 {
    let theta = wave.wavenumber() * direction.dot(position) + wave.phase_rate() * time;
    Vec3::new(
        wave.q * wave.amplitude * direction.x * theta.cos(),
        wave.amplitude * theta.sin(),
        wave.q * wave.amplitude * direction.y * theta.cos(),
    )
}

/// Total Gerstner displacement of the field at `position` and `time`,
/// relative to the flat base plane.
///
/// The two waves are summed as-is. Overlapping high-amplitude, high-steepness
/// waves may fold the surface through itself; that is model behavior, not a
/// condition to detect.
pub fn displacement(field: &WaveField, position: Vec2, time: f32) -> Vec3 {
    let (dir, dir2) = field.directions();
    gerstner(&field.wave, dir, position, time) + gerstner(&field.wave2, dir2, position, time)
}

/// Deterministic 2D height perturbation, pinned in space and time.
///
/// Sampled from the undisplaced planar coordinates only, so the perturbation
/// never animates and never drifts with the waves.
pub struct HeightNoise {
    perlin: Perlin,
}

impl HeightNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Noise height in [0, 1] for a vertex whose flat position is (x, _, z).
    /// Callers scale by the field's noise strength, so positive strength only
    /// ever lifts the surface.
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let raw = self.perlin.get([(x + 0.5) as f64, (z * 0.5) as f64]) as f32;
        raw * 0.5 + 0.5
    }
}
