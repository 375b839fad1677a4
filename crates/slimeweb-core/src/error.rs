//! Error type for parsing the closed name vocabularies.

use std::error::Error;
use std::fmt;

/// A name did not match any member of a closed vocabulary.
///
/// Returned by the `FromStr` impls of [`FieldKind`](crate::FieldKind),
/// [`SpeciesKind`](crate::SpeciesKind) and
/// [`SpeedSelector`](crate::SpeedSelector). Configuration loaders turn
/// this into a construction failure rather than ignoring the entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownName {
    /// Which vocabulary was searched (e.g. `"species"`).
    pub kind: &'static str,
    /// The name that failed to parse.
    pub name: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.name)
    }
}

impl Error for UnknownName {}
