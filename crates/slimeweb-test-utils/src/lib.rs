//! Test fixtures for Slimeweb development.
//!
//! Provides flat grids with no terrain, hand-placed particles, and a
//! [`TestWorldBuilder`] for small deterministic worlds.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    flat_grid, lone_particle, small_config, still_particle, TestWorldBuilder, NEUTRAL_MOISTURE,
    NEUTRAL_TEMPERATURE,
};
