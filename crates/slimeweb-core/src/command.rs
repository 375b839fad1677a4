//! Control commands injected by an input layer.
//!
//! An input/rendering shell translates key and mouse events into
//! [`Command`] values and hands them to the world. Commands carry no
//! simulation logic of their own.

use crate::id::{SpeciesKind, SpeedSelector};

/// A control event applied between frames.
///
/// # Examples
///
/// ```
/// use slimeweb_core::{Command, SpeciesKind};
///
/// let cmd = Command::ToggleSpecies(SpeciesKind::Fuligo);
/// assert!(matches!(cmd, Command::ToggleSpecies(SpeciesKind::Fuligo)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Flip between paused and running.
    TogglePause,
    /// Pause (`true`) or resume (`false`).
    SetPaused(bool),
    /// Flip whether a species is active.
    ToggleSpecies(SpeciesKind),
    /// Activate or deactivate a species.
    SetSpeciesActive(SpeciesKind, bool),
    /// Advance to the next speed setting, wrapping.
    CycleSpeed,
    /// Switch to a specific speed setting.
    SetSpeed(SpeedSelector),
    /// Set food to 1.0 at the cell containing `(x, y)`.
    DepositFood {
        /// Horizontal coordinate; wrapped into the grid.
        x: f64,
        /// Vertical coordinate; wrapped into the grid.
        y: f64,
    },
    /// Restart the population for the currently active species.
    Reset,
}
