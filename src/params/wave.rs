//! Traveling-wave parameters and the two-wave field.

use glam::Vec2;

use super::grid::ConfigError;

/// Gravity constant for the deep-water dispersion relation (m/s²)
pub const GRAVITY: f32 = 9.8;

/// Parameters of a single traveling wave
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Direction of travel in degrees, [0, 360)
    pub degree: f32,

    /// Wavelength in world units, (0, 200]
    pub wavelength: f32,

    /// Crest height in world units, [0, 5]
    pub amplitude: f32,

    /// Steepness (Q): horizontal crest sharpening, [0, 1]. Values near
    /// 1 / (k * amplitude * wave_count) cusp and self-intersect.
    pub q: f32,
}

impl WaveParams {
    /// Angular wavenumber, 2π / wavelength
    pub fn wavenumber(&self) -> f32 {
        std::f32::consts::TAU / self.wavelength
    }

    /// Propagation speed from the dispersion relation,
    /// sqrt(g * wavelength / 2π). Always derived from the current
    /// wavelength, never stored.
    pub fn speed(&self) -> f32 {
        (GRAVITY * self.wavelength / std::f32::consts::TAU).sqrt()
    }

    /// Phase advance per second of animation time. Couples the full
    /// 2π / wavelength factor with the dispersion speed, so shorter waves
    /// run disproportionately fast compared to the textbook ω = k·c form.
    pub fn phase_rate(&self) -> f32 {
        self.speed() * std::f32::consts::TAU / self.wavelength
    }
}

/// The complete wave field: exactly two traveling waves plus global noise
/// strength and directional spread.
///
/// Wave 2 never owns its travel direction. Its angle is always wave 1's
/// degree plus `direction_spread`, re-derived at every evaluation.
#[derive(Debug, Clone)]
pub struct WaveField {
    pub wave: WaveParams,
    pub wave2: WaveParams,

    /// Strength of the static height-noise perturbation
    pub noise_strength: f32,

    /// Angular offset (degrees) deriving wave 2's direction from wave 1's
    pub direction_spread: f32,

    /// Perlin seed, read once when a surface is built
    pub noise_seed: u32,
}

impl Default for WaveField {
    fn default() -> Self {
        // Slightly different parameters per wave make for more interesting
        // patterns.
        Self {
            wave: WaveParams {
                degree: 0.0,
                wavelength: 50.0,
                amplitude: 2.31,
                q: 0.8,
            },
            wave2: WaveParams {
                degree: 0.0,
                wavelength: 20.0,
                amplitude: 1.0,
                q: 0.8,
            },
            noise_strength: 1.2,
            direction_spread: 15.0,
            noise_seed: 42,
        }
    }
}

impl WaveField {
    /// Travel directions of both waves as unit vectors, derived from the
    /// current degree and spread.
    pub fn directions(&self) -> (Vec2, Vec2) {
        let deg = self.wave.degree.to_radians();
        let deg2 = (self.wave.degree + self.direction_spread).to_radians();
        (
            Vec2::new(deg.cos(), deg.sin()),
            Vec2::new(deg2.cos(), deg2.sin()),
        )
    }

    /// Reject wavelengths that would blow up the wavenumber and phase
    /// divisors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, wave) in [&self.wave, &self.wave2].into_iter().enumerate() {
            if wave.wavelength <= 0.0 {
                return Err(ConfigError::NonPositiveWavelength {
                    wave: index + 1,
                    wavelength: wave.wavelength,
                });
            }
        }
        Ok(())
    }

    // Runtime setters. Each takes effect on the next evaluation; none
    // validates, callers own the declared ranges.

    /// Set wave 1's travel direction in degrees, wrapped into [0, 360).
    /// Wave 2 follows at the configured spread.
    pub fn set_direction(&mut self, degrees: f32) {
        self.wave.degree = degrees.rem_euclid(360.0);
    }

    /// Set the global height-noise strength.
    pub fn set_noise(&mut self, strength: f32) {
        self.noise_strength = strength;
    }

    /// Set the steepness of both waves.
    pub fn set_steepness(&mut self, q: f32) {
        self.wave.q = q;
        self.wave2.q = q;
    }

    /// Set the angular spread (degrees) between the two waves.
    pub fn set_spread(&mut self, degrees: f32) {
        self.direction_spread = degrees;
    }

    /// Set wave 1's wavelength.
    pub fn set_wavelength(&mut self, wavelength: f32) {
        self.wave.wavelength = wavelength;
    }

    /// Set wave 1's amplitude.
    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.wave.amplitude = amplitude;
    }

    /// Set wave 2's wavelength.
    pub fn set_wavelength2(&mut self, wavelength: f32) {
        self.wave2.wavelength = wavelength;
    }

    /// Set wave 2's amplitude.
    pub fn set_amplitude2(&mut self, amplitude: f32) {
        self.wave2.amplitude = amplitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn directions_follow_degree_and_spread() {
        let mut field = WaveField::default();
        field.set_direction(90.0);
        field.set_spread(90.0);

        let (dir, dir2) = field.directions();
        assert!((dir.x - 0.0).abs() < EPS && (dir.y - 1.0).abs() < EPS);
        assert!((dir2.x - -1.0).abs() < EPS && (dir2.y - 0.0).abs() < EPS);
    }

    #[test]
    fn directions_are_unit_length() {
        let mut field = WaveField::default();
        field.set_direction(123.4);
        field.set_spread(-77.0);

        let (dir, dir2) = field.directions();
        assert!((dir.length() - 1.0).abs() < EPS);
        assert!((dir2.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn speed_follows_dispersion() {
        let wave = WaveParams {
            degree: 0.0,
            wavelength: std::f32::consts::TAU,
            amplitude: 1.0,
            q: 0.0,
        };
        // sqrt(g * 2π / 2π) = sqrt(g)
        assert!((wave.speed() - GRAVITY.sqrt()).abs() < EPS);
    }

    #[test]
    fn set_direction_wraps() {
        let mut field = WaveField::default();
        field.set_direction(400.0);
        assert!((field.wave.degree - 40.0).abs() < 1e-4);

        field.set_direction(-30.0);
        assert!((field.wave.degree - 330.0).abs() < 1e-4);
    }

    #[test]
    fn steepness_applies_to_both_waves() {
        let mut field = WaveField::default();
        field.set_steepness(0.25);
        assert_eq!(field.wave.q, 0.25);
        assert_eq!(field.wave2.q, 0.25);
    }

    #[test]
    fn validate_rejects_non_positive_wavelength() {
        let mut field = WaveField::default();
        assert!(field.validate().is_ok());

        field.set_wavelength2(0.0);
        assert_eq!(
            field.validate(),
            Err(ConfigError::NonPositiveWavelength {
                wave: 2,
                wavelength: 0.0
            })
        );
    }
}
