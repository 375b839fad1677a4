//! Speed scaling: from a speed selector to the derived per-tick constants.
//!
//! A multiplier `m` packs `round(m)` sub-steps into each rendered frame.
//! Agent speed scales by `m`, sensor reach by `1 + (m - 1) / 2`, and the
//! pheromone retention becomes `0.99^(1/m)` so that one frame's worth of
//! sub-steps decays trails by the same factor regardless of `m`.

use slimeweb_core::{SpeedSelector, SpeedSetting, SpeedTable};
use slimeweb_field::FieldRates;

use crate::config::ConfigError;

/// Pheromone retention per sub-step at multiplier 1.
pub const BASE_PHEROMONE_DECAY: f64 = 0.99;
/// Temperature forcing amplitude per sub-step at multiplier 1.
pub const BASE_TEMPERATURE_RATE: f64 = 0.1;
/// Moisture forcing amplitude per sub-step at multiplier 1.
pub const BASE_MOISTURE_RATE: f64 = 0.05;
/// Fraction of the extra multiplier applied to sensor reach.
pub const SENSOR_REACH_GAIN: f64 = 0.5;

/// Immutable bundle of every constant derived from the active multiplier.
///
/// Recomputed as a whole on selector change and passed explicitly to the
/// sub-step, never read from shared mutable settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockParams {
    /// The speed multiplier `m`.
    pub multiplier: f64,
    /// Sub-steps per rendered frame: `max(1, round(m))`.
    pub sub_steps: u32,
    /// Field evolution rates for [`FieldGrid::tick`](slimeweb_field::FieldGrid::tick).
    pub rates: FieldRates,
}

impl ClockParams {
    /// Derive all clock parameters from a multiplier.
    pub fn from_multiplier(multiplier: f64) -> Self {
        Self {
            multiplier,
            sub_steps: (multiplier.round() as u32).max(1),
            rates: FieldRates {
                pheromone_decay: BASE_PHEROMONE_DECAY.powf(1.0 / multiplier),
                temperature_rate: BASE_TEMPERATURE_RATE * multiplier,
                moisture_rate: BASE_MOISTURE_RATE * multiplier,
            },
        }
    }

    /// Unstressed agent speed for a species base speed.
    pub fn cruise_speed(&self, base_speed: f64) -> f64 {
        base_speed * self.multiplier
    }

    /// Sensor probe distance for a species base distance.
    pub fn sensor_distance(&self, base_distance: f64) -> f64 {
        base_distance * (1.0 + (self.multiplier - 1.0) * SENSOR_REACH_GAIN)
    }
}

impl Default for ClockParams {
    fn default() -> Self {
        Self::from_multiplier(1.0)
    }
}

/// The active entry of a [`SpeedTable`] and its derived [`ClockParams`].
#[derive(Clone, Debug)]
pub struct SimulationClock {
    table: SpeedTable,
    selector: SpeedSelector,
    setting: SpeedSetting,
    params: ClockParams,
}

impl SimulationClock {
    /// Start the clock on `initial`.
    ///
    /// Fails if `initial` has no entry in `table`.
    pub fn new(table: SpeedTable, initial: SpeedSelector) -> Result<Self, ConfigError> {
        let setting = table
            .get(initial)
            .cloned()
            .ok_or(ConfigError::MissingSpeed(initial))?;
        let params = ClockParams::from_multiplier(setting.multiplier);
        Ok(Self {
            table,
            selector: initial,
            setting,
            params,
        })
    }

    /// The active selector.
    pub fn selector(&self) -> SpeedSelector {
        self.selector
    }

    /// The active table entry.
    pub fn setting(&self) -> &SpeedSetting {
        &self.setting
    }

    /// Parameters derived from the active multiplier.
    pub fn params(&self) -> &ClockParams {
        &self.params
    }

    /// Switch to `selector`. Returns the new parameters, or `None` (and
    /// leaves the clock unchanged) if the table has no such entry.
    pub fn select(&mut self, selector: SpeedSelector) -> Option<ClockParams> {
        let setting = self.table.get(selector)?.clone();
        self.params = ClockParams::from_multiplier(setting.multiplier);
        self.selector = selector;
        self.setting = setting;
        Some(self.params)
    }

    /// The selector after the active one in table order, wrapping.
    pub fn next_selector(&self) -> SpeedSelector {
        self.table
            .next_after(self.selector)
            .unwrap_or(self.selector)
    }
}
