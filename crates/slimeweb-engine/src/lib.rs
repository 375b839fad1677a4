//! Agent simulation engine driving Slimeweb worlds.
//!
//! Provides [`SlimeWorld`], the single-threaded owner of the field grid
//! and the particle population, plus the pure building blocks it runs
//! each sub-step: sensing ([`sensor`]), steering ([`steering`]), the
//! per-agent lifecycle ([`lifecycle`]) and speed scaling ([`clock`]).
//!
//! # Sub-step order
//!
//! 1. Every live particle, in stable order: stress → sense → steer →
//!    move/reflect → wrap → deposit → feed → decay → maybe reproduce.
//!    Offspring are staged, never visited in the same sub-step.
//! 2. The grid advances one tick (pheromone decay, global forcing).
//! 3. Staged offspring are appended and dead particles are filtered out.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod metrics;
pub mod particle;
pub mod roster;
pub mod sensor;
pub mod steering;
pub mod world;

pub use clock::{ClockParams, SimulationClock};
pub use config::{ConfigError, WorldConfig};
pub use lifecycle::SubStepOutcome;
pub use metrics::StepMetrics;
pub use particle::{Particle, ParticleStore, ParticleView, SensorGeometry};
pub use roster::SpeciesRoster;
pub use sensor::{sample_sensors, SensorReadings};
pub use steering::steer;
pub use world::{FrameResult, SlimeWorld};
