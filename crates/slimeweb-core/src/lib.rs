//! Core types for the Slimeweb agent simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the closed vocabularies shared by the rest of the workspace: field
//! and species identifiers, the immutable species and speed tables,
//! control commands, and the name-parsing error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod species;
pub mod speed;

pub use command::Command;
pub use error::UnknownName;
pub use id::{FieldKind, SpeciesKind, SpeedSelector};
pub use species::{Behavior, SpeciesParams, SpeciesTable};
pub use speed::{SpeedSetting, SpeedTable};
