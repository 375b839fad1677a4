//! Toroidal scalar field grid and terrain generation for Slimeweb.
//!
//! [`FieldGrid`] owns the five environmental layers (temperature,
//! moisture, obstacle, food, pheromone) over a `width × height` torus.
//! Every coordinate is wrapped before use, so sampling never fails.
//! [`TerrainConfig`] describes how the initial layers are drawn from a
//! single seeded [`GradientNoise`] function.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod noise;
pub mod terrain;

pub use error::GridError;
pub use grid::{wrap_position, FieldGrid, FieldRates};
pub use noise::GradientNoise;
pub use terrain::TerrainConfig;
