//! Error types for grid construction.

use slimeweb_core::FieldKind;
use std::fmt;

/// Errors arising from [`FieldGrid`](crate::FieldGrid) construction.
///
/// Only construction can fail; every runtime access wraps its
/// coordinates and clamps its values.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds [`FieldGrid::MAX_DIM`](crate::FieldGrid::MAX_DIM).
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A supplied layer does not have `width * height` cells.
    LayerSizeMismatch {
        /// The offending layer.
        field: FieldKind,
        /// Expected cell count.
        expected: usize,
        /// Supplied cell count.
        actual: usize,
    },
    /// Terrain generation parameters are out of range.
    InvalidTerrain {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::LayerSizeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{field} layer has {actual} cells, expected {expected}"
            ),
            Self::InvalidTerrain { reason } => write!(f, "invalid terrain: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
