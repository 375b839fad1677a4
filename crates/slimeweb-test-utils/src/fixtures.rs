//! Reusable grids, particles and worlds.
//!
//! - [`flat_grid`]: uniform climate, no obstacles, food or pheromone.
//! - [`lone_particle`] / [`still_particle`]: hand-placed agents.
//! - [`TestWorldBuilder`]: small worlds on a flat grid with a chosen
//!   species set, seed and speed.

use slimeweb_core::{SpeciesKind, SpeciesTable, SpeedSelector};
use slimeweb_engine::{ClockParams, Particle, SensorGeometry, SlimeWorld, WorldConfig};
use slimeweb_field::FieldGrid;

/// Temperature of [`flat_grid`] cells.
pub const NEUTRAL_TEMPERATURE: f64 = 22.0;
/// Moisture of [`flat_grid`] cells.
pub const NEUTRAL_MOISTURE: f64 = 0.7;

/// A `width x height` grid with uniform climate and nothing else.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn flat_grid(width: u32, height: u32) -> FieldGrid {
    FieldGrid::uniform(width, height, NEUTRAL_TEMPERATURE, NEUTRAL_MOISTURE)
        .expect("flat grid dimensions must be non-zero")
}

/// A 64x48 config with a small spawn disk.
pub fn small_config(seed: u64) -> WorldConfig {
    WorldConfig {
        width: 64,
        height: 48,
        seed,
        spawn_radius: 6.0,
        ..WorldConfig::default()
    }
}

/// A particle of `kind` at `(x, y)`, scaled from the default species
/// table at multiplier 1.
pub fn lone_particle(kind: SpeciesKind, x: f64, y: f64, heading: f64, energy: f64) -> Particle {
    let table = SpeciesTable::default();
    let params = table.get(kind).expect("default table covers every species");
    Particle::new(kind, params, &ClockParams::default(), x, y, heading, energy)
}

/// Like [`lone_particle`] but all three probes sit on the particle's own
/// cell and it never turns, so its path is fully predictable.
pub fn still_particle(kind: SpeciesKind, x: f64, y: f64, heading: f64, energy: f64) -> Particle {
    Particle {
        geometry: SensorGeometry {
            distance: 0.0,
            angle: 0.0,
            turn: 0.0,
        },
        ..lone_particle(kind, x, y, heading, energy)
    }
}

/// Builder for small deterministic worlds on a flat grid.
pub struct TestWorldBuilder {
    config: WorldConfig,
    grid: Option<FieldGrid>,
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self {
            config: small_config(0),
            grid: None,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Startup species. An empty list gives an unpopulated world.
    pub fn species(mut self, active: &[SpeciesKind]) -> Self {
        self.config.active_species = active.to_vec();
        self
    }

    pub fn speed(mut self, selector: SpeedSelector) -> Self {
        self.config.initial_speed = selector;
        self
    }

    pub fn spawn_radius(mut self, radius: f64) -> Self {
        self.config.spawn_radius = radius;
        self
    }

    /// Use `grid` instead of a flat one. Also sets the world size.
    pub fn grid(mut self, grid: FieldGrid) -> Self {
        self.config.width = grid.width();
        self.config.height = grid.height();
        self.grid = Some(grid);
        self
    }

    /// The config the world will be built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// # Panics
    ///
    /// Panics if the config is invalid.
    pub fn build(self) -> SlimeWorld {
        let grid = self
            .grid
            .unwrap_or_else(|| flat_grid(self.config.width, self.config.height));
        SlimeWorld::with_grid(self.config, grid).expect("test world config must be valid")
    }
}

impl Default for TestWorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slimeweb_core::FieldKind;

    #[test]
    fn flat_grid_is_empty() {
        let grid = flat_grid(8, 4);
        assert_eq!(grid.count_above(FieldKind::Obstacle, 0.0), 0);
        assert_eq!(grid.count_above(FieldKind::Food, 0.0), 0);
        assert_eq!(grid.sample(FieldKind::Temperature, 3.0, 3.0), NEUTRAL_TEMPERATURE);
    }

    #[test]
    fn builder_with_no_species_is_empty() {
        let world = TestWorldBuilder::new().species(&[]).build();
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn builder_uses_supplied_grid_size() {
        let world = TestWorldBuilder::new()
            .grid(flat_grid(20, 10))
            .species(&[SpeciesKind::Fuligo])
            .build();
        assert_eq!(world.grid().width(), 20);
        assert_eq!(world.population(), 200);
    }

    #[test]
    fn still_particle_has_collapsed_sensors() {
        let p = still_particle(SpeciesKind::Physarum, 1.0, 2.0, 0.0, 50.0);
        assert_eq!(p.geometry.distance, 0.0);
        assert_eq!(p.energy, 50.0);
    }
}
