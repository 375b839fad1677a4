//! Slimeweb: slime-mold agent simulation on toroidal scalar fields.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Slimeweb sub-crates. For most users, adding `slimeweb` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slimeweb::prelude::*;
//!
//! let config = WorldConfig {
//!     width: 128,
//!     height: 96,
//!     seed: 42,
//!     spawn_radius: 10.0,
//!     ..WorldConfig::default()
//! };
//! let mut world = SlimeWorld::new(config).unwrap();
//!
//! // An input layer would translate key presses into commands.
//! world.apply(Command::SetSpeed(SpeedSelector::Fast));
//! let frame = world.step_frame();
//! assert_eq!(frame.sub_steps, 3);
//!
//! for p in world.particles_snapshot() {
//!     assert!(p.x >= 0.0 && p.x < 128.0);
//!     assert!(p.energy <= 100.0);
//! }
//! let food = world.field_value(FieldKind::Food, 64.0, 48.0);
//! assert!((0.0..=1.0).contains(&food));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slimeweb-core` | Field/species/speed identifiers, parameter tables, commands |
//! | [`field`] | `slimeweb-field` | The five-layer field grid and terrain generation |
//! | [`engine`] | `slimeweb-engine` | Particles, sensing, steering, lifecycle, the world |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers, parameter tables and commands (`slimeweb-core`).
pub use slimeweb_core as types;

/// Field grid, noise and terrain generation (`slimeweb-field`).
///
/// [`field::FieldGrid`] owns the temperature, moisture, obstacle, food
/// and pheromone layers.
pub use slimeweb_field as field;

/// Simulation engine (`slimeweb-engine`).
///
/// [`engine::SlimeWorld`] is the entry point; the per-agent building
/// blocks live in [`engine::sensor`], [`engine::steering`] and
/// [`engine::lifecycle`].
pub use slimeweb_engine as engine;

/// Common imports for typical Slimeweb usage.
///
/// ```rust
/// use slimeweb::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use slimeweb_core::{
        Behavior, Command, FieldKind, SpeciesKind, SpeciesParams, SpeciesTable, SpeedSelector,
        SpeedSetting, SpeedTable, UnknownName,
    };

    // Field
    pub use slimeweb_field::{FieldGrid, GridError, TerrainConfig};

    // Engine
    pub use slimeweb_engine::{
        ConfigError, FrameResult, Particle, ParticleView, SlimeWorld, StepMetrics, WorldConfig,
    };
}
