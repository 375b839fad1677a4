//! The simulation world and its external control surface.
//!
//! [`SlimeWorld`] owns the [`FieldGrid`], the [`ParticleStore`] and the
//! single seeded RNG. Every mutating method takes `&mut self` and runs to
//! completion, so any reference obtained from [`particles()`] or
//! [`grid()`] always observes a fully settled post-tick state.
//!
//! [`particles()`]: SlimeWorld::particles
//! [`grid()`]: SlimeWorld::grid

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slimeweb_core::{
    Command, FieldKind, SpeciesKind, SpeedSelector, SpeedSetting, UnknownName,
};
use slimeweb_field::FieldGrid;
use tracing::{debug, info, warn};

use crate::clock::SimulationClock;
use crate::config::{ConfigError, WorldConfig};
use crate::lifecycle::{run_sub_step, spawn_on_disk};
use crate::metrics::StepMetrics;
use crate::particle::{Particle, ParticleStore, ParticleView};
use crate::roster::SpeciesRoster;

// Compile-time assertion: SlimeWorld is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SlimeWorld>();
    }
};

// ── FrameResult ─────────────────────────────────────────────────

/// Result of a [`SlimeWorld::step_frame()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameResult {
    /// Sub-steps executed. Zero while paused.
    pub sub_steps: u32,
    /// Population metrics for this frame.
    pub metrics: StepMetrics,
}

// ── SlimeWorld ──────────────────────────────────────────────────

/// Single-threaded slime-mold simulation.
///
/// # Example
///
/// ```
/// use slimeweb_engine::{SlimeWorld, WorldConfig};
///
/// let config = WorldConfig {
///     width: 64,
///     height: 48,
///     spawn_radius: 5.0,
///     ..WorldConfig::default()
/// };
/// let mut world = SlimeWorld::new(config).unwrap();
/// world.step_frame();
/// assert!(world.population() <= 600);
/// ```
pub struct SlimeWorld {
    grid: FieldGrid,
    store: ParticleStore,
    roster: SpeciesRoster,
    clock: SimulationClock,
    active: [bool; 3],
    rng: ChaCha8Rng,
    seed: u64,
    spawn_radius: f64,
    frame_seconds: f64,
    elapsed_seconds: f64,
    sub_step_count: u64,
    paused: bool,
    extinct: bool,
    last_metrics: StepMetrics,
}

impl SlimeWorld {
    /// Build a world from `config`, generating terrain from noise.
    ///
    /// Validates the configuration first; any failure aborts construction.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = FieldGrid::generate(config.width, config.height, &config.terrain, &mut rng)?;
        Self::assemble(config, grid, rng)
    }

    /// Build a world on a caller-supplied grid. Terrain settings in
    /// `config` are ignored.
    pub fn with_grid(config: WorldConfig, grid: FieldGrid) -> Result<Self, ConfigError> {
        config.validate()?;
        let actual = (grid.width(), grid.height());
        if actual != (config.width, config.height) {
            return Err(ConfigError::GridSizeMismatch {
                expected: (config.width, config.height),
                actual,
            });
        }
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::assemble(config, grid, rng)
    }

    fn assemble(config: WorldConfig, grid: FieldGrid, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        let roster = SpeciesRoster::from_table(&config.species)?;
        let clock = SimulationClock::new(config.speeds, config.initial_speed)?;
        let mut world = Self {
            grid,
            store: ParticleStore::new(),
            roster,
            clock,
            active: [false; 3],
            rng,
            seed: config.seed,
            spawn_radius: config.spawn_radius,
            frame_seconds: config.frame_seconds,
            elapsed_seconds: 0.0,
            sub_step_count: 0,
            paused: false,
            extinct: false,
            last_metrics: StepMetrics::default(),
        };
        for kind in config.active_species {
            world.active[kind.index()] = true;
        }
        world.populate();
        info!(
            width = world.grid.width(),
            height = world.grid.height(),
            seed = world.seed,
            population = world.store.len(),
            obstacle_cells = world.grid.count_above(FieldKind::Obstacle, FieldGrid::OBSTACLE_THRESHOLD),
            food_cells = world.grid.count_above(FieldKind::Food, 0.0),
            speed = %world.clock.selector(),
            "world created"
        );
        Ok(world)
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Advance exactly `sub_steps` sub-steps, ignoring the pause flag.
    pub fn tick(&mut self, sub_steps: u32) {
        self.last_metrics = self.run(sub_steps);
    }

    /// Advance one rendered frame: as many sub-steps as the active speed
    /// multiplier calls for. Does nothing while paused.
    pub fn step_frame(&mut self) -> FrameResult {
        if self.paused {
            return FrameResult {
                sub_steps: 0,
                metrics: StepMetrics {
                    population: self.store.len(),
                    ..StepMetrics::default()
                },
            };
        }
        let metrics = self.run(self.clock.params().sub_steps);
        self.last_metrics = metrics.clone();
        FrameResult {
            sub_steps: metrics.sub_steps,
            metrics,
        }
    }

    fn run(&mut self, sub_steps: u32) -> StepMetrics {
        let start = Instant::now();
        let params = *self.clock.params();
        let dt = self.frame_seconds / params.sub_steps as f64;
        let mut metrics = StepMetrics {
            sub_steps,
            ..StepMetrics::default()
        };

        for _ in 0..sub_steps {
            let outcome = run_sub_step(
                &mut self.store,
                &mut self.grid,
                &self.roster,
                &params,
                self.elapsed_seconds,
                &mut self.rng,
            );
            self.elapsed_seconds += dt;
            self.sub_step_count += 1;
            metrics.births += outcome.births;
            metrics.deaths += outcome.deaths;
        }

        metrics.population = self.store.len();
        metrics.total_us = start.elapsed().as_micros() as u64;
        debug!(
            sub_steps,
            births = metrics.births,
            deaths = metrics.deaths,
            net_growth = metrics.net_growth(),
            population = metrics.population,
            "frame"
        );
        if self.store.is_empty() && metrics.deaths > 0 && !self.extinct {
            warn!(elapsed_seconds = self.elapsed_seconds, "population extinct");
            self.extinct = true;
        } else if !self.store.is_empty() {
            self.extinct = false;
        }
        metrics
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Live particles in iteration order.
    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }

    /// Owned copy of the public particle state.
    pub fn particles_snapshot(&self) -> Vec<ParticleView> {
        self.store.particles().iter().map(Particle::view).collect()
    }

    /// Value of `kind` at `(x, y)`, wrapping out-of-range coordinates.
    pub fn field_value(&self, kind: FieldKind, x: f64, y: f64) -> f64 {
        self.grid.sample(kind, x, y)
    }

    /// [`field_value`](Self::field_value) keyed by field name.
    pub fn field_value_by_name(&self, name: &str, x: f64, y: f64) -> Result<f64, UnknownName> {
        Ok(self.field_value(name.parse()?, x, y))
    }

    /// The environment grid.
    pub fn grid(&self) -> &FieldGrid {
        &self.grid
    }

    /// Number of live particles.
    pub fn population(&self) -> usize {
        self.store.len()
    }

    /// Number of live particles of `kind`.
    pub fn population_of(&self, kind: SpeciesKind) -> usize {
        self.store.count_of(kind)
    }

    /// Active speed selector and its table entry.
    pub fn current_speed(&self) -> (SpeedSelector, &SpeedSetting) {
        (self.clock.selector(), self.clock.setting())
    }

    /// The speed clock.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Simulated seconds since construction.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Sub-steps executed since construction.
    pub fn sub_step_count(&self) -> u64 {
        self.sub_step_count
    }

    /// Metrics from the most recent `tick()` or unpaused `step_frame()`.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The seed this world was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether `kind` is currently active.
    pub fn is_species_active(&self, kind: SpeciesKind) -> bool {
        self.active[kind.index()]
    }

    /// Active species in table order.
    pub fn active_species(&self) -> Vec<SpeciesKind> {
        SpeciesKind::ALL
            .into_iter()
            .filter(|k| self.active[k.index()])
            .collect()
    }

    /// Whether [`step_frame()`](Self::step_frame) is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // ── Controls ────────────────────────────────────────────────

    /// Suspend or resume [`step_frame()`](Self::step_frame).
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Set the food at the cell containing `(x, y)` to 1.0.
    pub fn deposit_food(&mut self, x: f64, y: f64) {
        self.grid.set(FieldKind::Food, x, y, 1.0);
    }

    /// Activate or deactivate a species.
    ///
    /// Deactivating removes every live particle of `kind`. Activating
    /// spawns the species' configured count on the center disk. Setting
    /// the current state again does nothing.
    pub fn set_species_active(&mut self, kind: SpeciesKind, active: bool) {
        if self.active[kind.index()] == active {
            return;
        }
        self.active[kind.index()] = active;
        if active {
            self.spawn(kind);
        } else {
            self.store.remove_species(kind);
        }
        info!(
            species = %kind,
            active,
            population = self.store.len(),
            "species toggled"
        );
    }

    /// Flip the active state of `kind`.
    pub fn toggle_species(&mut self, kind: SpeciesKind) {
        self.set_species_active(kind, !self.is_species_active(kind));
    }

    /// Switch the speed selector and rescale every live particle.
    ///
    /// Returns `false`, leaving everything unchanged, if the speed table
    /// has no entry for `selector`.
    pub fn set_speed_selector(&mut self, selector: SpeedSelector) -> bool {
        let Some(params) = self.clock.select(selector) else {
            warn!(speed = %selector, "speed selector not in table");
            return false;
        };
        let roster = &self.roster;
        self.store
            .for_each_mut(|p| p.rescale(roster.get(p.species), &params));
        info!(
            speed = %selector,
            multiplier = params.multiplier,
            sub_steps = params.sub_steps,
            "speed changed"
        );
        true
    }

    /// Advance to the next speed selector in table order, wrapping.
    pub fn cycle_speed(&mut self) -> SpeedSelector {
        let next = self.clock.next_selector();
        self.set_speed_selector(next);
        self.clock.selector()
    }

    /// Clear all particles and respawn every active species. The grid
    /// is left as it is.
    pub fn reset(&mut self) {
        self.store.clear();
        self.extinct = false;
        self.populate();
        info!(population = self.store.len(), "world reset");
    }

    /// Replace the active species set, then [`reset`](Self::reset).
    pub fn reset_with<I>(&mut self, active: I)
    where
        I: IntoIterator<Item = SpeciesKind>,
    {
        self.active = [false; 3];
        for kind in active {
            self.active[kind.index()] = true;
        }
        self.reset();
    }

    /// Apply one control command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => self.paused = !self.paused,
            Command::SetPaused(paused) => self.set_paused(paused),
            Command::ToggleSpecies(kind) => self.toggle_species(kind),
            Command::SetSpeciesActive(kind, active) => self.set_species_active(kind, active),
            Command::CycleSpeed => {
                self.cycle_speed();
            }
            Command::SetSpeed(selector) => {
                self.set_speed_selector(selector);
            }
            Command::DepositFood { x, y } => self.deposit_food(x, y),
            Command::Reset => self.reset(),
        }
    }

    fn populate(&mut self) {
        for kind in SpeciesKind::ALL {
            if self.active[kind.index()] {
                self.spawn(kind);
            }
        }
    }

    fn spawn(&mut self, kind: SpeciesKind) {
        let params = self.roster.get(kind);
        spawn_on_disk(
            &mut self.store,
            kind,
            params,
            self.clock.params(),
            &self.grid,
            self.spawn_radius,
            params.count,
            &mut self.rng,
        );
    }
}

impl std::fmt::Debug for SlimeWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlimeWorld")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("seed", &self.seed)
            .field("population", &self.store.len())
            .field("speed", &self.clock.selector())
            .field("paused", &self.paused)
            .field("sub_step_count", &self.sub_step_count)
            .finish()
    }
}
