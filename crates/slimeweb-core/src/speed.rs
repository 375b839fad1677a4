//! Playback speed settings and the [`SpeedTable`].

use indexmap::IndexMap;

use crate::id::SpeedSelector;

/// One entry of the speed table.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedSetting {
    /// Simulation speed multiplier `m >= 1`.
    pub multiplier: f64,
    /// Human-readable label for HUD display.
    pub label: String,
}

impl SpeedSetting {
    /// Create a setting with the given multiplier and label.
    pub fn new(multiplier: f64, label: impl Into<String>) -> Self {
        Self {
            multiplier,
            label: label.into(),
        }
    }

    /// Check that the multiplier is finite and at least 1.
    pub fn validate(&self) -> Result<(), String> {
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(format!(
                "multiplier must be finite and >= 1, got {}",
                self.multiplier
            ));
        }
        Ok(())
    }
}

/// Ordered set of speed settings. Cycling follows insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedTable {
    entries: IndexMap<SpeedSelector, SpeedSetting>,
}

impl SpeedTable {
    /// Build a table from explicit entries.
    pub fn new(entries: impl IntoIterator<Item = (SpeedSelector, SpeedSetting)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Setting for `selector`, if present.
    pub fn get(&self, selector: SpeedSelector) -> Option<&SpeedSetting> {
        self.entries.get(&selector)
    }

    /// Iterate `(selector, setting)` in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (SpeedSelector, &SpeedSetting)> {
        self.entries.iter().map(|(k, s)| (*k, s))
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The selector following `current` in cycle order, wrapping at the end.
    ///
    /// Returns `None` if `current` is not in the table.
    pub fn next_after(&self, current: SpeedSelector) -> Option<SpeedSelector> {
        let idx = self.entries.get_index_of(&current)?;
        let next = (idx + 1) % self.entries.len();
        self.entries.get_index(next).map(|(k, _)| *k)
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self::new([
            (SpeedSelector::Normal, SpeedSetting::new(1.0, "Normal")),
            (SpeedSelector::Fast, SpeedSetting::new(3.0, "Fast")),
            (SpeedSelector::Supaslime, SpeedSetting::new(6.0, "Supaslime!")),
        ])
    }
}
