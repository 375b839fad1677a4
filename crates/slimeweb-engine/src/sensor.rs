//! Three-probe field sensing.

use slimeweb_core::FieldKind;
use slimeweb_field::FieldGrid;

use crate::particle::{Particle, MAX_ENERGY};

/// Reading returned by a probe that lands on an obstacle.
pub const OBSTACLE_READING: f64 = -1.0;
/// Scale applied to food density before the hunger factor.
pub const FOOD_WEIGHT: f64 = 100.0;
/// Scale applied to pheromone density when no food is present.
pub const PHEROMONE_WEIGHT: f64 = 0.5;

/// Front, left and right probe readings for one agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorReadings {
    /// Probe along the current heading.
    pub front: f64,
    /// Probe at `heading - angle`.
    pub left: f64,
    /// Probe at `heading + angle`.
    pub right: f64,
}

/// Probe distance grows as energy falls: `1 + (100 - energy) / 50`.
pub fn reach_factor(energy: f64) -> f64 {
    1.0 + (MAX_ENERGY - energy) / 50.0
}

/// Food attraction grows as energy falls: `1 + (100 - energy) / 20`.
pub fn hunger_factor(energy: f64) -> f64 {
    1.0 + (MAX_ENERGY - energy) / 20.0
}

/// Evaluate a single probe point.
pub fn probe(grid: &FieldGrid, x: f64, y: f64, energy: f64) -> f64 {
    if grid.is_obstacle(x, y) {
        return OBSTACLE_READING;
    }
    let food = grid.sample(FieldKind::Food, x, y);
    if food > 0.0 {
        food * FOOD_WEIGHT * hunger_factor(energy)
    } else {
        grid.sample(FieldKind::Pheromone, x, y) * PHEROMONE_WEIGHT
    }
}

/// Sample the three probes for `particle`. Pure; the grid is not touched.
pub fn sample_sensors(particle: &Particle, grid: &FieldGrid) -> SensorReadings {
    let distance = particle.geometry.distance * reach_factor(particle.energy);
    let at = |angle: f64| {
        let px = particle.x + angle.cos() * distance;
        let py = particle.y + angle.sin() * distance;
        probe(grid, px, py, particle.energy)
    };
    SensorReadings {
        front: at(particle.heading),
        left: at(particle.heading - particle.geometry.angle),
        right: at(particle.heading + particle.geometry.angle),
    }
}
