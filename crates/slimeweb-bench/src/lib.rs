//! Benchmark profiles for the Slimeweb agent simulation.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: 800x600 grid, 600 particles, the default setup
//! - [`stress_profile`]: 1600x1200 grid, 6000 particles
//! - [`scaled_species`]: the default species table with every count scaled

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slimeweb_core::SpeciesTable;
use slimeweb_engine::WorldConfig;

/// The default world: 800x600, all three species at 200 each.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        seed,
        ..WorldConfig::default()
    }
}

/// Four times the area and ten times the population of
/// [`reference_profile`], with a proportionally wider spawn disk.
pub fn stress_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        width: 1600,
        height: 1200,
        seed,
        species: scaled_species(10),
        spawn_radius: 100.0,
        ..WorldConfig::default()
    }
}

/// The default species table with each initial count multiplied by `factor`.
pub fn scaled_species(factor: usize) -> SpeciesTable {
    SpeciesTable::new(SpeciesTable::default().iter().map(|(kind, params)| {
        let mut params = params.clone();
        params.count *= factor;
        (kind, params)
    }))
}
