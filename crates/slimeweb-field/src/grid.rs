//! The five-layer toroidal [`FieldGrid`].

use rand::Rng;
use slimeweb_core::FieldKind;

use crate::error::GridError;
use crate::noise::GradientNoise;
use crate::terrain::TerrainConfig;

/// Wrap a continuous coordinate into `[0, len)`.
///
/// `rem_euclid` can round a tiny negative value up to exactly `len`;
/// that case, and any non-finite input, maps to 0.
pub fn wrap_position(value: f64, len: f64) -> f64 {
    let wrapped = value.rem_euclid(len);
    if wrapped.is_finite() && wrapped < len {
        wrapped
    } else {
        0.0
    }
}

/// Per-tick evolution rates for [`FieldGrid::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRates {
    /// Multiplicative pheromone retention per tick, in `(0, 1]`.
    pub pheromone_decay: f64,
    /// Amplitude of the global temperature oscillation per tick.
    pub temperature_rate: f64,
    /// Amplitude of the global moisture oscillation per tick.
    pub moisture_rate: f64,
}

impl Default for FieldRates {
    fn default() -> Self {
        Self {
            pheromone_decay: 0.99,
            temperature_rate: 0.1,
            moisture_rate: 0.05,
        }
    }
}

/// Five same-sized scalar layers over a `width × height` torus.
///
/// Cells are stored row-major (`y * width + x`). Continuous coordinates
/// are floored to their containing cell and wrapped on both axes, so no
/// access is ever out of range.
///
/// # Examples
///
/// ```
/// use slimeweb_core::FieldKind;
/// use slimeweb_field::FieldGrid;
///
/// let mut grid = FieldGrid::uniform(8, 4, 20.0, 0.5).unwrap();
/// grid.deposit(9.5, -1.0, 0.7);
/// // (9.5, -1.0) wraps to cell (1, 3).
/// assert_eq!(grid.sample(FieldKind::Pheromone, 1.2, 3.9), 0.7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldGrid {
    width: u32,
    height: u32,
    layers: [Vec<f64>; 5],
}

impl FieldGrid {
    /// Largest accepted dimension on either axis.
    pub const MAX_DIM: u32 = 1 << 16;

    /// Obstacle values above this mark a blocked cell.
    pub const OBSTACLE_THRESHOLD: f64 = 0.5;

    /// Check dimensions and return the cell count.
    pub fn validate_dims(width: u32, height: u32) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(width as usize * height as usize)
    }

    /// A grid with constant temperature and moisture, no obstacles,
    /// no food and no pheromone.
    pub fn uniform(
        width: u32,
        height: u32,
        temperature: f64,
        moisture: f64,
    ) -> Result<Self, GridError> {
        let n = Self::validate_dims(width, height)?;
        Ok(Self {
            width,
            height,
            layers: [
                vec![temperature; n],
                vec![moisture; n],
                vec![0.0; n],
                vec![0.0; n],
                vec![0.0; n],
            ],
        })
    }

    /// Build a grid from explicit layers, indexed in [`FieldKind::ALL`] order.
    pub fn from_layers(width: u32, height: u32, layers: [Vec<f64>; 5]) -> Result<Self, GridError> {
        let n = Self::validate_dims(width, height)?;
        for kind in FieldKind::ALL {
            let actual = layers[kind.index()].len();
            if actual != n {
                return Err(GridError::LayerSizeMismatch {
                    field: kind,
                    expected: n,
                    actual,
                });
            }
        }
        Ok(Self {
            width,
            height,
            layers,
        })
    }

    /// Generate temperature, moisture, obstacle and food layers from
    /// noise drawn with `rng`. Pheromone starts at zero.
    ///
    /// This is the only place obstacles are created; [`tick`](Self::tick)
    /// never touches them.
    pub fn generate<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        terrain: &TerrainConfig,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        terrain.validate()?;
        let n = Self::validate_dims(width, height)?;
        let noise = GradientNoise::new(rng);
        let s = terrain.scale;
        let mut layers: [Vec<f64>; 5] = Default::default();
        for layer in layers.iter_mut() {
            layer.reserve_exact(n);
        }

        for y in 0..height as usize {
            for x in 0..width as usize {
                let (nx, ny) = (x as f64 * s, y as f64 * s);
                let at = |offset: f64, octaves: u32| noise.fractal(nx + offset, ny + offset, octaves);
                let above = |offset: f64, octaves: u32, threshold: f64| {
                    if at(offset, octaves) > threshold {
                        1.0
                    } else {
                        0.0
                    }
                };

                layers[FieldKind::Temperature.index()].push(
                    at(terrain.temperature_offset, terrain.temperature_octaves)
                        * terrain.temperature_amplitude
                        + terrain.temperature_mean,
                );
                layers[FieldKind::Moisture.index()]
                    .push(at(terrain.moisture_offset, terrain.moisture_octaves) * 0.5 + 0.5);
                layers[FieldKind::Obstacle.index()].push(above(
                    terrain.obstacle_offset,
                    terrain.obstacle_octaves,
                    terrain.obstacle_threshold,
                ));
                layers[FieldKind::Food.index()].push(above(
                    terrain.food_offset,
                    terrain.food_octaves,
                    terrain.food_threshold,
                ));
                layers[FieldKind::Pheromone.index()].push(0.0);
            }
        }
        Self::from_layers(width, height, layers)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of the cell containing `(x, y)` after wrapping.
    pub fn cell_index(&self, x: f64, y: f64) -> usize {
        let cx = (x.floor() as i64).rem_euclid(self.width as i64) as usize;
        let cy = (y.floor() as i64).rem_euclid(self.height as i64) as usize;
        cy * self.width as usize + cx
    }

    /// Raw access to one layer, row-major.
    pub fn layer(&self, kind: FieldKind) -> &[f64] {
        &self.layers[kind.index()]
    }

    /// Value of `kind` at the cell containing `(x, y)`.
    pub fn sample(&self, kind: FieldKind, x: f64, y: f64) -> f64 {
        self.layers[kind.index()][self.cell_index(x, y)]
    }

    /// Whether the cell containing `(x, y)` is blocked.
    pub fn is_obstacle(&self, x: f64, y: f64) -> bool {
        self.sample(FieldKind::Obstacle, x, y) > Self::OBSTACLE_THRESHOLD
    }

    /// Add pheromone at `(x, y)`, capped at 1.0.
    pub fn deposit(&mut self, x: f64, y: f64, amount: f64) {
        let i = self.cell_index(x, y);
        let cell = &mut self.layers[FieldKind::Pheromone.index()][i];
        *cell = (*cell + amount).min(1.0);
    }

    /// Remove up to `amount` food at `(x, y)`, never going below zero.
    ///
    /// Returns the amount actually removed.
    pub fn consume(&mut self, x: f64, y: f64, amount: f64) -> f64 {
        let i = self.cell_index(x, y);
        let cell = &mut self.layers[FieldKind::Food.index()][i];
        let before = *cell;
        *cell = (before - amount).max(0.0);
        before - *cell
    }

    /// Overwrite `kind` at the cell containing `(x, y)`.
    pub fn set(&mut self, kind: FieldKind, x: f64, y: f64, value: f64) {
        let i = self.cell_index(x, y);
        self.layers[kind.index()][i] = value;
    }

    /// Number of cells whose `kind` value exceeds `threshold`.
    pub fn count_above(&self, kind: FieldKind, threshold: f64) -> usize {
        self.layers[kind.index()]
            .iter()
            .filter(|&&v| v > threshold)
            .count()
    }

    /// Advance one sub-step of field dynamics.
    ///
    /// Pheromone decays multiplicatively in every cell. Temperature and
    /// moisture receive a uniform additive forcing that oscillates with
    /// `elapsed_seconds / 60`, modelling a day/night cycle. Obstacles and
    /// food are untouched.
    pub fn tick(&mut self, elapsed_seconds: f64, rates: &FieldRates) {
        for v in self.layers[FieldKind::Pheromone.index()].iter_mut() {
            *v *= rates.pheromone_decay;
        }

        let phase = elapsed_seconds / 60.0;
        let dt = phase.sin() * rates.temperature_rate;
        let dm = phase.cos() * rates.moisture_rate;
        for v in self.layers[FieldKind::Temperature.index()].iter_mut() {
            *v += dt;
        }
        for v in self.layers[FieldKind::Moisture.index()].iter_mut() {
            *v += dm;
        }
    }
}
