//! Closed identifier enums: fields, species, and speed selectors.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownName;
use crate::species::Behavior;

/// One of the five scalar layers laid over the simulation domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    /// Ambient temperature. Nominal range roughly 10..30.
    Temperature,
    /// Ambient moisture. Nominal range `[0, 1]`, may drift under forcing.
    Moisture,
    /// Obstacle mask. A cell is blocked when its value exceeds 0.5.
    Obstacle,
    /// Food density in `[0, 1]`. Consumed, never regenerated.
    Food,
    /// Pheromone trail density in `[0, 1]`. Decays every tick.
    Pheromone,
}

impl FieldKind {
    /// All field kinds in storage order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Temperature,
        FieldKind::Moisture,
        FieldKind::Obstacle,
        FieldKind::Food,
        FieldKind::Pheromone,
    ];

    /// Position of this field in [`FieldKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name used for parsing and display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Moisture => "moisture",
            Self::Obstacle => "obstacle",
            Self::Food => "food",
            Self::Pheromone => "pheromone",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName::new("field", s))
    }
}

/// One of the closed set of simulated slime-mold species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpeciesKind {
    /// Dense network builder; follows trails and food strictly.
    Physarum,
    /// Erratic forager; occasionally ignores its sensors.
    Dictyostelium,
    /// Slow, smooth turner.
    Fuligo,
}

impl SpeciesKind {
    /// All species in table order.
    pub const ALL: [SpeciesKind; 3] = [
        SpeciesKind::Physarum,
        SpeciesKind::Dictyostelium,
        SpeciesKind::Fuligo,
    ];

    /// Position of this species in [`SpeciesKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name used for parsing and display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Physarum => "physarum",
            Self::Dictyostelium => "dictyostelium",
            Self::Fuligo => "fuligo",
        }
    }

    /// The steering behavior this species uses.
    pub fn behavior(self) -> Behavior {
        match self {
            Self::Physarum => Behavior::TrailFollower,
            Self::Dictyostelium => Behavior::Explorer,
            Self::Fuligo => Behavior::Cautious,
        }
    }
}

impl fmt::Display for SpeciesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpeciesKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName::new("species", s))
    }
}

/// Key into the [`SpeedTable`](crate::SpeedTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpeedSelector {
    /// Real-time playback (multiplier 1).
    Normal,
    /// Accelerated playback.
    Fast,
    /// Heavily accelerated playback.
    Supaslime,
}

impl SpeedSelector {
    /// All selectors in cycle order.
    pub const ALL: [SpeedSelector; 3] = [
        SpeedSelector::Normal,
        SpeedSelector::Fast,
        SpeedSelector::Supaslime,
    ];

    /// Lower-case name used for parsing and display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::Supaslime => "supaslime",
        }
    }
}

impl fmt::Display for SpeedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpeedSelector {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName::new("speed selector", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_index_matches_all_order() {
        for (i, kind) in FieldKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn species_index_matches_all_order() {
        for (i, kind) in SpeciesKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.name().parse::<FieldKind>().unwrap(), kind);
        }
        for kind in SpeciesKind::ALL {
            assert_eq!(kind.to_string().parse::<SpeciesKind>().unwrap(), kind);
        }
        for sel in SpeedSelector::ALL {
            assert_eq!(sel.name().parse::<SpeedSelector>().unwrap(), sel);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" Fuligo ".parse::<SpeciesKind>(), Ok(SpeciesKind::Fuligo));
        assert_eq!("SUPASLIME".parse::<SpeedSelector>(), Ok(SpeedSelector::Supaslime));
    }

    #[test]
    fn unknown_species_is_rejected() {
        let err = "amoeba".parse::<SpeciesKind>().unwrap_err();
        assert_eq!(err.kind, "species");
        assert_eq!(err.name, "amoeba");
        assert_eq!(err.to_string(), "unknown species 'amoeba'");
    }

    #[test]
    fn unknown_speed_is_rejected() {
        assert!("ludicrous".parse::<SpeedSelector>().is_err());
        assert!("".parse::<FieldKind>().is_err());
    }

    #[test]
    fn each_species_has_distinct_behavior() {
        assert_eq!(SpeciesKind::Physarum.behavior(), Behavior::TrailFollower);
        assert_eq!(SpeciesKind::Dictyostelium.behavior(), Behavior::Explorer);
        assert_eq!(SpeciesKind::Fuligo.behavior(), Behavior::Cautious);
    }
}
