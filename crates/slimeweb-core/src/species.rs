//! Species parameters and the immutable [`SpeciesTable`].

use std::f64::consts::PI;

use indexmap::IndexMap;

use crate::id::SpeciesKind;

/// Steering variant shared by every agent of a species.
///
/// The base rule keeps heading when the front reading is the strict
/// maximum and otherwise turns toward the larger side reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Applies the base rule unmodified.
    TrailFollower,
    /// Occasionally replaces the base rule with a random heading perturbation.
    Explorer,
    /// Applies the base rule with the turn increment halved.
    Cautious,
}

/// Per-species parameter set. Immutable once placed in a [`SpeciesTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesParams {
    /// Distance travelled per sub-step at multiplier 1, before stress.
    pub speed: f64,
    /// Distance from the agent to each sensor probe at full energy.
    pub sensor_distance: f64,
    /// Angle between the front probe and each side probe, in radians.
    pub sensor_angle: f64,
    /// Heading change applied by a single steering decision, in radians.
    pub turn_angle: f64,
    /// Pheromone added to the occupied cell each sub-step.
    pub trail_strength: f64,
    /// Temperature at which the species feels no thermal stress.
    pub preferred_temperature: f64,
    /// Moisture at which the species feels no moisture stress.
    pub preferred_moisture: f64,
    /// Number of agents spawned at startup, reset, and re-activation.
    pub count: usize,
}

impl SpeciesParams {
    /// Check that every parameter is finite and within its domain.
    pub fn validate(&self) -> Result<(), String> {
        let reals = [
            ("speed", self.speed),
            ("sensor_distance", self.sensor_distance),
            ("sensor_angle", self.sensor_angle),
            ("turn_angle", self.turn_angle),
            ("trail_strength", self.trail_strength),
            ("preferred_temperature", self.preferred_temperature),
            ("preferred_moisture", self.preferred_moisture),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        let non_negative = [
            ("speed", self.speed),
            ("sensor_distance", self.sensor_distance),
            ("sensor_angle", self.sensor_angle),
            ("turn_angle", self.turn_angle),
            ("trail_strength", self.trail_strength),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(format!("{name} must be >= 0, got {value}"));
            }
        }
        Ok(())
    }
}

/// Read-only mapping from every [`SpeciesKind`] to its parameters.
///
/// Iteration follows insertion order, which is also the order in which
/// initial populations are spawned.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesTable {
    entries: IndexMap<SpeciesKind, SpeciesParams>,
}

impl SpeciesTable {
    /// Build a table from explicit entries. Later duplicates replace earlier ones.
    pub fn new(entries: impl IntoIterator<Item = (SpeciesKind, SpeciesParams)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parameters for `kind`, if present.
    pub fn get(&self, kind: SpeciesKind) -> Option<&SpeciesParams> {
        self.entries.get(&kind)
    }

    /// Iterate `(kind, params)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (SpeciesKind, &SpeciesParams)> {
        self.entries.iter().map(|(k, p)| (*k, p))
    }

    /// Number of species in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first species kind with no entry, if any.
    pub fn first_missing(&self) -> Option<SpeciesKind> {
        SpeciesKind::ALL
            .into_iter()
            .find(|k| !self.entries.contains_key(k))
    }
}

impl Default for SpeciesTable {
    /// The three reference species with 200 agents each.
    fn default() -> Self {
        let base = |speed, sensor_distance, trail_strength, temp, moist| SpeciesParams {
            speed,
            sensor_distance,
            sensor_angle: PI / 4.0,
            turn_angle: PI / 8.0,
            trail_strength,
            preferred_temperature: temp,
            preferred_moisture: moist,
            count: 200,
        };
        Self::new([
            (SpeciesKind::Physarum, base(1.0, 9.0, 1.0, 25.0, 0.7)),
            (SpeciesKind::Dictyostelium, base(1.5, 7.0, 0.8, 22.0, 0.8)),
            (SpeciesKind::Fuligo, base(0.8, 11.0, 1.2, 20.0, 0.6)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_species() {
        let table = SpeciesTable::default();
        assert_eq!(table.len(), 3);
        assert_eq!(table.first_missing(), None);
        let order: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(order, SpeciesKind::ALL.to_vec());
    }

    #[test]
    fn default_parameters_match_reference() {
        let table = SpeciesTable::default();
        let fuligo = table.get(SpeciesKind::Fuligo).unwrap();
        assert_eq!(fuligo.speed, 0.8);
        assert_eq!(fuligo.sensor_distance, 11.0);
        assert_eq!(fuligo.trail_strength, 1.2);
        assert_eq!(fuligo.count, 200);
        assert!((fuligo.turn_angle - PI / 8.0).abs() < 1e-12);
        for (_, params) in table.iter() {
            params.validate().unwrap();
        }
    }

    #[test]
    fn missing_species_is_reported() {
        let full = SpeciesTable::default();
        let partial = SpeciesTable::new(
            full.iter()
                .filter(|(k, _)| *k != SpeciesKind::Dictyostelium)
                .map(|(k, p)| (k, p.clone())),
        );
        assert_eq!(partial.first_missing(), Some(SpeciesKind::Dictyostelium));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut params = SpeciesTable::default()
            .get(SpeciesKind::Physarum)
            .unwrap()
            .clone();
        params.speed = -1.0;
        assert!(params.validate().unwrap_err().contains("speed"));
        params.speed = 1.0;
        params.preferred_moisture = f64::NAN;
        assert!(params.validate().unwrap_err().contains("preferred_moisture"));
    }
}
