//! Dense, validated view of the species table.

use slimeweb_core::{SpeciesKind, SpeciesParams, SpeciesTable};

use crate::config::ConfigError;

/// One [`SpeciesParams`] per [`SpeciesKind`], indexed by
/// [`SpeciesKind::index`].
///
/// Built once from a [`SpeciesTable`] at world construction so that the
/// per-agent hot path never performs a fallible lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesRoster {
    params: [SpeciesParams; 3],
}

impl SpeciesRoster {
    /// Resolve every species from `table`, validating each entry.
    pub fn from_table(table: &SpeciesTable) -> Result<Self, ConfigError> {
        if let Some(kind) = table.first_missing() {
            return Err(ConfigError::MissingSpecies(kind));
        }
        let [a, b, c] = SpeciesKind::ALL.map(|kind| -> Result<SpeciesParams, ConfigError> {
            let params = table.get(kind).ok_or(ConfigError::MissingSpecies(kind))?;
            params
                .validate()
                .map_err(|reason| ConfigError::InvalidSpecies {
                    species: kind,
                    reason,
                })?;
            Ok(params.clone())
        });
        Ok(Self {
            params: [a?, b?, c?],
        })
    }

    /// Parameters for `kind`.
    pub fn get(&self, kind: SpeciesKind) -> &SpeciesParams {
        &self.params[kind.index()]
    }
}
