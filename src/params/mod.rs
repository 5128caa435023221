//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (world units, seconds, degrees)
//! - Documented ranges and meanings
//! - Construction-time validation for values the math divides by

mod grid;
mod wave;

// Re-export all types
pub use grid::{ConfigError, GridConfig};
pub use wave::{WaveField, WaveParams, GRAVITY};
