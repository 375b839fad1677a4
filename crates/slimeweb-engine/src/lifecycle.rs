//! Per-agent lifecycle: stress, movement, feeding, energy, reproduction.
//!
//! [`step_particle`] runs the full per-agent sequence for one particle;
//! [`run_sub_step`] applies it to the whole store and then closes the
//! sub-step (field tick, birth commit, death filter).

use std::f64::consts::{PI, TAU};

use rand::Rng;
use slimeweb_core::{FieldKind, SpeciesKind, SpeciesParams};
use slimeweb_field::{wrap_position, FieldGrid};

use crate::clock::ClockParams;
use crate::particle::{Particle, ParticleStore, MAX_ENERGY};
use crate::roster::SpeciesRoster;
use crate::sensor::sample_sensors;
use crate::steering::steer;

/// Energy of a particle spawned at startup, reset or toggle.
pub const INITIAL_ENERGY: f64 = 100.0;
/// Energy gained per tick spent on a food cell.
pub const FOOD_GAIN: f64 = 20.0;
/// Food removed from a cell per feeding.
pub const FOOD_CONSUMPTION: f64 = 0.5;
/// Energy lost per tick while moving.
pub const ENERGY_DECAY: f64 = 0.005;
/// Decay multiplier for particles that did not move this tick.
pub const STATIONARY_FACTOR: f64 = 0.5;
/// Speed floor. Also the threshold below which a particle counts as stationary.
pub const MIN_SPEED: f64 = 0.1;
/// Energy a parent must exceed before it can reproduce.
pub const REPRODUCTION_THRESHOLD: f64 = 80.0;
/// Reproduction chance per tick at multiplier 1.
pub const REPRODUCTION_PROBABILITY: f64 = 0.001;
/// Energy charged to the parent per offspring.
pub const REPRODUCTION_COST: f64 = 30.0;
/// Energy an offspring starts with.
pub const CHILD_ENERGY: f64 = 50.0;

/// Births and deaths in one sub-step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubStepOutcome {
    /// Offspring committed to the live set.
    pub births: usize,
    /// Particles removed for having no energy left.
    pub deaths: usize,
}

/// Environmental stress at the particle's cell.
pub fn stress(params: &SpeciesParams, grid: &FieldGrid, x: f64, y: f64) -> f64 {
    let temperature = grid.sample(FieldKind::Temperature, x, y);
    let moisture = grid.sample(FieldKind::Moisture, x, y);
    (temperature - params.preferred_temperature).abs() / 10.0
        + (moisture - params.preferred_moisture).abs()
}

/// Speed after stress damping, floored at [`MIN_SPEED`].
///
/// Always derived from `cruise_speed`, so damping never compounds.
pub fn stressed_speed(cruise_speed: f64, stress: f64) -> f64 {
    (cruise_speed * (1.0 - stress * 0.1).max(0.0)).max(MIN_SPEED)
}

/// Feed from the particle's cell if it holds any food.
///
/// Returns `true` if the particle fed.
pub fn feed(particle: &mut Particle, grid: &mut FieldGrid) -> bool {
    if grid.sample(FieldKind::Food, particle.x, particle.y) > 0.0 {
        particle.energy = (particle.energy + FOOD_GAIN).min(MAX_ENERGY);
        grid.consume(particle.x, particle.y, FOOD_CONSUMPTION);
        true
    } else {
        false
    }
}

/// Per-tick energy loss, halved when the particle is stationary.
///
/// A particle is stationary if its speed is at most [`MIN_SPEED`] or if
/// `moved` is false. A move blocked by an obstacle therefore costs the
/// halved rate even when the particle was at full speed.
pub fn decay_energy(particle: &mut Particle, moved: bool) {
    let factor = if moved && particle.speed.abs() > MIN_SPEED {
        1.0
    } else {
        STATIONARY_FACTOR
    };
    particle.energy = (particle.energy - ENERGY_DECAY * factor).max(0.0);
}

/// Roll for reproduction. On success the parent pays
/// [`REPRODUCTION_COST`] and the returned child sits at the parent's
/// position with [`CHILD_ENERGY`] and a random heading.
pub fn try_reproduce<R: Rng + ?Sized>(
    particle: &mut Particle,
    multiplier: f64,
    rng: &mut R,
) -> Option<Particle> {
    if particle.energy <= REPRODUCTION_THRESHOLD {
        return None;
    }
    if rng.random::<f64>() >= REPRODUCTION_PROBABILITY * multiplier {
        return None;
    }
    particle.energy -= REPRODUCTION_COST;
    Some(Particle {
        heading: rng.random::<f64>() * TAU,
        energy: CHILD_ENERGY,
        ..particle.clone()
    })
}

/// Run the per-agent sequence for one particle.
///
/// Mutates `particle` and `grid`; returns an offspring if one was born.
pub fn step_particle<R: Rng + ?Sized>(
    particle: &mut Particle,
    params: &SpeciesParams,
    grid: &mut FieldGrid,
    clock: &ClockParams,
    rng: &mut R,
) -> Option<Particle> {
    // 1. Stress.
    let s = stress(params, grid, particle.x, particle.y);
    particle.speed = stressed_speed(particle.cruise_speed, s);

    // 2. Sense and steer.
    let readings = sample_sensors(particle, grid);
    particle.heading += steer(
        particle.species.behavior(),
        &readings,
        particle.geometry.turn,
        rng,
    );

    // 3. Move, or reflect off an obstacle.
    let nx = particle.x + particle.heading.cos() * particle.speed;
    let ny = particle.y + particle.heading.sin() * particle.speed;
    let moved = if grid.is_obstacle(nx, ny) {
        particle.heading += PI;
        false
    } else {
        particle.x = nx;
        particle.y = ny;
        true
    };

    // 4. Wrap.
    particle.x = wrap_position(particle.x, grid.width() as f64);
    particle.y = wrap_position(particle.y, grid.height() as f64);

    // 5-7. Deposit, feed, decay.
    grid.deposit(particle.x, particle.y, params.trail_strength);
    feed(particle, grid);
    decay_energy(particle, moved);

    // 8. Reproduce.
    try_reproduce(particle, clock.multiplier, rng)
}

/// Advance every particle one sub-step, then tick the grid, commit
/// offspring and drop the dead.
pub fn run_sub_step<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    grid: &mut FieldGrid,
    roster: &SpeciesRoster,
    clock: &ClockParams,
    elapsed_seconds: f64,
    rng: &mut R,
) -> SubStepOutcome {
    store.update_each(|p| {
        let params = roster.get(p.species);
        step_particle(p, params, grid, clock, rng)
    });
    grid.tick(elapsed_seconds, &clock.rates);
    let births = store.commit_births();
    let deaths = store.remove_dead();
    SubStepOutcome { births, deaths }
}

/// Spawn `count` particles of `species` on a disk of `radius` around
/// the grid center, with full energy and random headings.
#[allow(clippy::too_many_arguments)]
pub fn spawn_on_disk<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    species: SpeciesKind,
    params: &SpeciesParams,
    clock: &ClockParams,
    grid: &FieldGrid,
    radius: f64,
    count: usize,
    rng: &mut R,
) {
    let (w, h) = (grid.width() as f64, grid.height() as f64);
    let (cx, cy) = (w / 2.0, h / 2.0);
    for _ in 0..count {
        let angle = rng.random::<f64>() * TAU;
        let r = rng.random::<f64>() * radius;
        let x = wrap_position(cx + angle.cos() * r, w);
        let y = wrap_position(cy + angle.sin() * r, h);
        let heading = rng.random::<f64>() * TAU;
        store.push(Particle::new(
            species,
            params,
            clock,
            x,
            y,
            heading,
            INITIAL_ENERGY,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::SensorGeometry;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use slimeweb_core::SpeciesTable;

    fn params(kind: SpeciesKind) -> SpeciesParams {
        SpeciesTable::default().get(kind).unwrap().clone()
    }

    /// A flat grid where Physarum feels no stress.
    fn comfy(w: u32, h: u32) -> FieldGrid {
        FieldGrid::uniform(w, h, 25.0, 0.7).unwrap()
    }

    fn physarum_at(x: f64, y: f64, heading: f64, energy: f64) -> Particle {
        Particle::new(
            SpeciesKind::Physarum,
            &params(SpeciesKind::Physarum),
            &ClockParams::default(),
            x,
            y,
            heading,
            energy,
        )
    }

    #[test]
    fn stress_damps_but_never_stalls() {
        assert_eq!(stressed_speed(1.0, 0.0), 1.0);
        assert!((stressed_speed(2.0, 2.0) - 1.6).abs() < 1e-12);
        assert_eq!(stressed_speed(1.0, 50.0), MIN_SPEED);
        assert_eq!(stressed_speed(0.05, 0.0), MIN_SPEED);
    }

    #[test]
    fn stress_sums_temperature_and_moisture_mismatch() {
        let grid = FieldGrid::uniform(4, 4, 15.0, 0.2).unwrap();
        let s = stress(&params(SpeciesKind::Physarum), &grid, 1.0, 1.0);
        assert!((s - 1.5).abs() < 1e-12);
    }

    #[test]
    fn feeding_gains_twenty_and_halves_full_food() {
        let mut grid = comfy(8, 8);
        grid.set(FieldKind::Food, 2.0, 2.0, 1.0);
        let mut p = physarum_at(2.5, 2.5, 0.0, 50.0);
        assert!(feed(&mut p, &mut grid));
        assert_eq!(p.energy, 70.0);
        assert_eq!(grid.sample(FieldKind::Food, 2.0, 2.0), 0.5);
    }

    #[test]
    fn feeding_caps_at_max_energy() {
        let mut grid = comfy(8, 8);
        grid.set(FieldKind::Food, 0.0, 0.0, 0.2);
        let mut p = physarum_at(0.0, 0.0, 0.0, 95.0);
        feed(&mut p, &mut grid);
        assert_eq!(p.energy, MAX_ENERGY);
        assert_eq!(grid.sample(FieldKind::Food, 0.0, 0.0), 0.0);
    }

    #[test]
    fn no_food_no_gain() {
        let mut grid = comfy(8, 8);
        let mut p = physarum_at(0.0, 0.0, 0.0, 40.0);
        assert!(!feed(&mut p, &mut grid));
        assert_eq!(p.energy, 40.0);
    }

    #[test]
    fn stationary_particles_decay_at_half_rate() {
        let mut p = physarum_at(0.0, 0.0, 0.0, 10.0);
        decay_energy(&mut p, true);
        assert!((p.energy - (10.0 - ENERGY_DECAY)).abs() < 1e-12);
        decay_energy(&mut p, false);
        assert!((p.energy - (10.0 - 1.5 * ENERGY_DECAY)).abs() < 1e-12);

        p.speed = MIN_SPEED;
        p.energy = 1.0;
        decay_energy(&mut p, true);
        assert!((p.energy - (1.0 - ENERGY_DECAY * STATIONARY_FACTOR)).abs() < 1e-12);
    }

    #[test]
    fn decay_never_goes_negative() {
        let mut p = physarum_at(0.0, 0.0, 0.0, 0.001);
        decay_energy(&mut p, true);
        assert_eq!(p.energy, 0.0);
        assert!(p.is_dead());
    }

    #[test]
    fn no_reproduction_at_or_below_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut p = physarum_at(0.0, 0.0, 0.0, REPRODUCTION_THRESHOLD);
        for _ in 0..10_000 {
            // Huge multiplier makes the roll certain; only the threshold can stop it.
            assert!(try_reproduce(&mut p, 1e6, &mut rng).is_none());
        }
        assert_eq!(p.energy, REPRODUCTION_THRESHOLD);
    }

    #[test]
    fn reproduction_charges_parent_and_copies_species() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut p = physarum_at(4.0, 5.0, 0.3, 95.0);
        let child = try_reproduce(&mut p, 1e6, &mut rng).unwrap();
        assert_eq!(p.energy, 65.0);
        assert_eq!(child.energy, CHILD_ENERGY);
        assert_eq!((child.x, child.y), (4.0, 5.0));
        assert_eq!(child.species, p.species);
        assert_eq!(child.geometry, p.geometry);
        assert!((0.0..TAU).contains(&child.heading));
    }

    #[test]
    fn blocked_move_reflects_and_keeps_position() {
        let mut grid = comfy(16, 16);
        // Wall the cell ahead; keep all probes reading equal so steering turns right.
        grid.set(FieldKind::Obstacle, 6.0, 5.0, 1.0);
        let mut p = Particle {
            geometry: SensorGeometry {
                distance: 0.0,
                angle: 0.0,
                turn: 0.0,
            },
            ..physarum_at(5.5, 5.5, 0.0, 60.0)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        step_particle(
            &mut p,
            &params(SpeciesKind::Physarum),
            &mut grid,
            &ClockParams::default(),
            &mut rng,
        );
        assert_eq!((p.x, p.y), (5.5, 5.5));
        assert!((p.heading - PI).abs() < 1e-12);
        // Pinned at full speed still pays the stationary rate.
        assert!(p.speed > MIN_SPEED);
        let expected = 60.0 - ENERGY_DECAY * STATIONARY_FACTOR;
        assert!((p.energy - expected).abs() < 1e-12);
        assert_eq!(grid.sample(FieldKind::Pheromone, 5.5, 5.5), 1.0);
    }

    #[test]
    fn free_move_wraps_deposits_and_decays() {
        let mut grid = comfy(10, 10);
        let mut p = Particle {
            geometry: SensorGeometry {
                distance: 0.0,
                angle: 0.0,
                turn: 0.0,
            },
            ..physarum_at(9.5, 3.5, 0.0, 60.0)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        step_particle(
            &mut p,
            &params(SpeciesKind::Physarum),
            &mut grid,
            &ClockParams::default(),
            &mut rng,
        );
        assert!((p.x - 0.5).abs() < 1e-12);
        assert_eq!(p.y, 3.5);
        assert_eq!(grid.sample(FieldKind::Pheromone, 0.5, 3.5), 1.0);
        assert!((p.energy - (60.0 - ENERGY_DECAY)).abs() < 1e-12);
    }

    #[test]
    fn sub_step_ticks_grid_after_agents() {
        let mut grid = comfy(10, 10);
        let roster = SpeciesRoster::from_table(&SpeciesTable::default()).unwrap();
        let mut store = ParticleStore::new();
        store.push(physarum_at(2.5, 2.5, 0.0, 60.0));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let out = run_sub_step(
            &mut store,
            &mut grid,
            &roster,
            &ClockParams::default(),
            0.0,
            &mut rng,
        );
        assert_eq!(out, SubStepOutcome::default());
        let p = &store.particles()[0];
        // Deposit of 1.0 then one decay step.
        assert!((grid.sample(FieldKind::Pheromone, p.x, p.y) - 0.99).abs() < 1e-12);
    }

    #[test]
    fn dead_particles_are_removed_at_sub_step_end() {
        let mut grid = comfy(10, 10);
        let roster = SpeciesRoster::from_table(&SpeciesTable::default()).unwrap();
        let mut store = ParticleStore::new();
        store.push(physarum_at(2.5, 2.5, 0.0, 0.001));
        store.push(physarum_at(7.5, 7.5, 0.0, 50.0));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let out = run_sub_step(
            &mut store,
            &mut grid,
            &roster,
            &ClockParams::default(),
            0.0,
            &mut rng,
        );
        assert_eq!(out.deaths, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn spawn_lands_on_center_disk() {
        let grid = comfy(200, 100);
        let mut store = ParticleStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        spawn_on_disk(
            &mut store,
            SpeciesKind::Fuligo,
            &params(SpeciesKind::Fuligo),
            &ClockParams::default(),
            &grid,
            20.0,
            50,
            &mut rng,
        );
        assert_eq!(store.count_of(SpeciesKind::Fuligo), 50);
        for p in store.particles() {
            let d = ((p.x - 100.0).powi(2) + (p.y - 50.0).powi(2)).sqrt();
            assert!(d <= 20.0 + 1e-9);
            assert_eq!(p.energy, INITIAL_ENERGY);
        }
    }
}
