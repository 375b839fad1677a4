//! Agents and the live population store.

use slimeweb_core::{SpeciesKind, SpeciesParams};

use crate::clock::ClockParams;

/// Full energy. Energy is always kept within `[0, MAX_ENERGY]`.
pub const MAX_ENERGY: f64 = 100.0;

/// Per-agent copy of the species sensor geometry.
///
/// Held on the agent so speed-multiplier changes can rescale it without
/// touching the immutable species table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorGeometry {
    /// Probe distance at full energy.
    pub distance: f64,
    /// Angle between the front probe and each side probe.
    pub angle: f64,
    /// Heading change for one steering decision.
    pub turn: f64,
}

/// One simulated agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position in `[0, width)`.
    pub x: f64,
    /// Vertical position in `[0, height)`.
    pub y: f64,
    /// Heading in radians. Unbounded; only its sine and cosine matter.
    pub heading: f64,
    /// Speed used for the most recent move, after stress damping.
    pub speed: f64,
    /// Unstressed speed: species base speed times the clock multiplier.
    pub cruise_speed: f64,
    /// Energy in `[0, 100]`. The particle dies when this reaches 0.
    pub energy: f64,
    /// Species tag. Never changes.
    pub species: SpeciesKind,
    /// Sensor geometry scaled for the active multiplier.
    pub geometry: SensorGeometry,
}

impl Particle {
    /// Create a particle of `species` with speed and sensor geometry
    /// scaled for `clock`.
    pub fn new(
        species: SpeciesKind,
        params: &SpeciesParams,
        clock: &ClockParams,
        x: f64,
        y: f64,
        heading: f64,
        energy: f64,
    ) -> Self {
        let cruise_speed = clock.cruise_speed(params.speed);
        Self {
            x,
            y,
            heading,
            speed: cruise_speed,
            cruise_speed,
            energy: energy.clamp(0.0, MAX_ENERGY),
            species,
            geometry: SensorGeometry {
                distance: clock.sensor_distance(params.sensor_distance),
                angle: params.sensor_angle,
                turn: params.turn_angle,
            },
        }
    }

    /// Reapply clock scaling to speed and sensor reach.
    pub fn rescale(&mut self, params: &SpeciesParams, clock: &ClockParams) {
        self.cruise_speed = clock.cruise_speed(params.speed);
        self.speed = self.cruise_speed;
        self.geometry.distance = clock.sensor_distance(params.sensor_distance);
    }

    /// Whether the particle has run out of energy.
    pub fn is_dead(&self) -> bool {
        self.energy <= 0.0
    }

    /// Read-only summary for external consumers.
    pub fn view(&self) -> ParticleView {
        ParticleView {
            x: self.x,
            y: self.y,
            species: self.species,
            energy: self.energy,
        }
    }
}

/// What a renderer needs to know about one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Species tag.
    pub species: SpeciesKind,
    /// Current energy.
    pub energy: f64,
}

/// The live population plus a staging buffer for offspring.
///
/// Offspring produced while iterating are staged and only join the live
/// set on [`commit_births`](Self::commit_births), so a newborn is never
/// processed in the sub-step that created it. Dead particles are removed
/// in one compacting pass by [`remove_dead`](Self::remove_dead).
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    live: Vec<Particle>,
    staged: Vec<Particle>,
}

impl ParticleStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Live particles in iteration order.
    pub fn particles(&self) -> &[Particle] {
        &self.live
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if no particle is alive.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of live particles of `species`.
    pub fn count_of(&self, species: SpeciesKind) -> usize {
        self.live.iter().filter(|p| p.species == species).count()
    }

    /// Append a particle directly to the live set.
    pub fn push(&mut self, particle: Particle) {
        self.live.push(particle);
    }

    /// Visit every live particle in order. Any particle returned by `f`
    /// is staged as offspring.
    pub fn update_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Particle) -> Option<Particle>,
    {
        for particle in self.live.iter_mut() {
            if let Some(child) = f(particle) {
                self.staged.push(child);
            }
        }
    }

    /// Apply `f` to every live particle.
    pub fn for_each_mut<F: FnMut(&mut Particle)>(&mut self, f: F) {
        self.live.iter_mut().for_each(f);
    }

    /// Move staged offspring into the live set. Returns how many joined.
    pub fn commit_births(&mut self) -> usize {
        let n = self.staged.len();
        self.live.append(&mut self.staged);
        n
    }

    /// Drop every particle with `energy <= 0`. Returns how many were removed.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.live.len();
        self.live.retain(|p| !p.is_dead());
        before - self.live.len()
    }

    /// Drop every particle of `species`. Returns how many were removed.
    pub fn remove_species(&mut self, species: SpeciesKind) -> usize {
        let before = self.live.len();
        self.live.retain(|p| p.species != species);
        self.staged.retain(|p| p.species != species);
        before - self.live.len()
    }

    /// Remove every particle, live and staged.
    pub fn clear(&mut self) {
        self.live.clear();
        self.staged.clear();
    }
}
