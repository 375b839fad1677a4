//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for [`SlimeWorld`](crate::SlimeWorld).
//! [`validate()`](WorldConfig::validate) checks every structural invariant
//! up front; a world is never constructed from a config that fails it.

use std::error::Error;
use std::fmt;

use slimeweb_core::{SpeciesKind, SpeciesTable, SpeedSelector, SpeedTable, UnknownName};
use slimeweb_field::{FieldGrid, GridError, TerrainConfig};

use crate::roster::SpeciesRoster;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`WorldConfig`] or building a world.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions or terrain parameters are invalid.
    Grid(GridError),
    /// A species, speed selector or field name did not parse.
    UnknownName(UnknownName),
    /// The species table has no entry for a species.
    MissingSpecies(SpeciesKind),
    /// The speed table has no entry for the requested selector.
    MissingSpeed(SpeedSelector),
    /// A species entry failed validation.
    InvalidSpecies {
        /// The offending species.
        species: SpeciesKind,
        /// Description of the validation failure.
        reason: String,
    },
    /// A speed table entry failed validation.
    InvalidSpeed {
        /// The offending selector.
        selector: SpeedSelector,
        /// Description of the validation failure.
        reason: String,
    },
    /// `spawn_radius` is negative, NaN, or infinite.
    InvalidSpawnRadius {
        /// The invalid value.
        value: f64,
    },
    /// `frame_seconds` is not finite and positive.
    InvalidFrameSeconds {
        /// The invalid value.
        value: f64,
    },
    /// A supplied grid does not match the configured dimensions.
    GridSizeMismatch {
        /// Configured `(width, height)`.
        expected: (u32, u32),
        /// Dimensions of the supplied grid.
        actual: (u32, u32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::UnknownName(e) => write!(f, "{e}"),
            Self::MissingSpecies(kind) => write!(f, "species table has no entry for {kind}"),
            Self::MissingSpeed(sel) => write!(f, "speed table has no entry for {sel}"),
            Self::InvalidSpecies { species, reason } => {
                write!(f, "invalid species {species}: {reason}")
            }
            Self::InvalidSpeed { selector, reason } => {
                write!(f, "invalid speed {selector}: {reason}")
            }
            Self::InvalidSpawnRadius { value } => {
                write!(f, "spawn_radius must be finite and non-negative, got {value}")
            }
            Self::InvalidFrameSeconds { value } => {
                write!(f, "frame_seconds must be finite and positive, got {value}")
            }
            Self::GridSizeMismatch { expected, actual } => write!(
                f,
                "grid is {}x{}, config expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::UnknownName(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<UnknownName> for ConfigError {
    fn from(e: UnknownName) -> Self {
        Self::UnknownName(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`SlimeWorld`](crate::SlimeWorld).
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Grid width in cells. Default: 800.
    pub width: u32,
    /// Grid height in cells. Default: 600.
    pub height: u32,
    /// Seed for every random draw in the world. Default: 0.
    pub seed: u64,
    /// Per-species parameters. Must cover every [`SpeciesKind`].
    pub species: SpeciesTable,
    /// Speed selectors and their multipliers.
    pub speeds: SpeedTable,
    /// Selector active at startup. Default: [`SpeedSelector::Normal`].
    pub initial_speed: SpeedSelector,
    /// Species populated at startup. Default: all.
    pub active_species: Vec<SpeciesKind>,
    /// Noise-driven terrain generation parameters.
    pub terrain: TerrainConfig,
    /// Radius of the spawn disk around the grid center. Default: 50.
    pub spawn_radius: f64,
    /// Simulated seconds per rendered frame. Default: 1/60.
    pub frame_seconds: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            seed: 0,
            species: SpeciesTable::default(),
            speeds: SpeedTable::default(),
            initial_speed: SpeedSelector::Normal,
            active_species: SpeciesKind::ALL.to_vec(),
            terrain: TerrainConfig::default(),
            spawn_radius: 50.0,
            frame_seconds: 1.0 / 60.0,
        }
    }
}

impl WorldConfig {
    /// Set the initial speed selector by name.
    pub fn with_initial_speed_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.initial_speed = name.parse()?;
        Ok(self)
    }

    /// Set the startup species by name. Duplicates are collapsed.
    pub fn with_active_species_names<'a, I>(mut self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut active = Vec::new();
        for name in names {
            let kind: SpeciesKind = name.parse()?;
            if !active.contains(&kind) {
                active.push(kind);
            }
        }
        self.active_species = active;
        Ok(self)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid dimensions and terrain.
        FieldGrid::validate_dims(self.width, self.height)?;
        self.terrain.validate()?;
        // 2. Every species present and well-formed.
        SpeciesRoster::from_table(&self.species)?;
        // 3. Every speed entry well-formed; initial selector present.
        for (selector, setting) in self.speeds.iter() {
            setting
                .validate()
                .map_err(|reason| ConfigError::InvalidSpeed { selector, reason })?;
        }
        if self.speeds.get(self.initial_speed).is_none() {
            return Err(ConfigError::MissingSpeed(self.initial_speed));
        }
        // 4. Spawn disk and frame duration.
        if !self.spawn_radius.is_finite() || self.spawn_radius < 0.0 {
            return Err(ConfigError::InvalidSpawnRadius {
                value: self.spawn_radius,
            });
        }
        if !self.frame_seconds.is_finite() || self.frame_seconds <= 0.0 {
            return Err(ConfigError::InvalidFrameSeconds {
                value: self.frame_seconds,
            });
        }
        Ok(())
    }
}
