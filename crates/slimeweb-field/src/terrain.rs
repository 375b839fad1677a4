//! Terrain generation parameters.
//!
//! All four generated layers read the same [`GradientNoise`](crate::GradientNoise)
//! function at distinct offsets, so temperature, moisture, obstacles and
//! food share spatial structure without being identical.

use crate::error::GridError;

/// Parameters controlling how initial layers are drawn from noise.
///
/// Noise is sampled at `(x * scale + offset, y * scale + offset)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainConfig {
    /// Cell-to-noise-space scale factor. Default: 0.02.
    pub scale: f64,
    /// Noise-space offset for temperature. Default: 0.
    pub temperature_offset: f64,
    /// Noise-space offset for moisture. Default: 1000.
    pub moisture_offset: f64,
    /// Noise-space offset for obstacles. Default: 2000.
    pub obstacle_offset: f64,
    /// Noise-space offset for food. Default: 3000.
    pub food_offset: f64,
    /// Temperature is `noise * temperature_amplitude + temperature_mean`. Default: 10.
    pub temperature_amplitude: f64,
    /// Default: 20.
    pub temperature_mean: f64,
    /// Cells with obstacle noise above this become obstacles. Default: 0.7.
    pub obstacle_threshold: f64,
    /// Cells with food noise above this start with food 1.0. Default: 0.5.
    pub food_threshold: f64,
    /// Default: 3.
    pub temperature_octaves: u32,
    /// Default: 3.
    pub moisture_octaves: u32,
    /// Default: 2.
    pub obstacle_octaves: u32,
    /// Default: 4.
    pub food_octaves: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            scale: 0.02,
            temperature_offset: 0.0,
            moisture_offset: 1000.0,
            obstacle_offset: 2000.0,
            food_offset: 3000.0,
            temperature_amplitude: 10.0,
            temperature_mean: 20.0,
            obstacle_threshold: 0.7,
            food_threshold: 0.5,
            temperature_octaves: 3,
            moisture_octaves: 3,
            obstacle_octaves: 2,
            food_octaves: 4,
        }
    }
}

impl TerrainConfig {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), GridError> {
        let reals = [
            ("scale", self.scale),
            ("temperature_offset", self.temperature_offset),
            ("moisture_offset", self.moisture_offset),
            ("obstacle_offset", self.obstacle_offset),
            ("food_offset", self.food_offset),
            ("temperature_amplitude", self.temperature_amplitude),
            ("temperature_mean", self.temperature_mean),
            ("obstacle_threshold", self.obstacle_threshold),
            ("food_threshold", self.food_threshold),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(GridError::InvalidTerrain {
                    reason: format!("{name} must be finite, got {value}"),
                });
            }
        }
        if self.scale <= 0.0 {
            return Err(GridError::InvalidTerrain {
                reason: format!("scale must be positive, got {}", self.scale),
            });
        }
        let octaves = [
            ("temperature_octaves", self.temperature_octaves),
            ("moisture_octaves", self.moisture_octaves),
            ("obstacle_octaves", self.obstacle_octaves),
            ("food_octaves", self.food_octaves),
        ];
        for (name, value) in octaves {
            if value == 0 {
                return Err(GridError::InvalidTerrain {
                    reason: format!("{name} must be at least 1"),
                });
            }
        }
        Ok(())
    }

    /// A terrain with no obstacles and no food: both thresholds above the
    /// noise range. Useful for controlled experiments.
    pub fn barren() -> Self {
        Self {
            obstacle_threshold: 2.0,
            food_threshold: 2.0,
            ..Self::default()
        }
    }
}
