//! Icons and their per-round placement.
//!
//! An `Icon` pairs an identity (`IconId`) with the placement the layout
//! assigned to it and the screen center the renderer last reported.

use serde::{Deserialize, Serialize};

/// Index of an icon inside the pack's image matrix (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IconId(pub u32);

impl IconId {
    /// Create a new icon ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Icon({})", self.0)
    }
}

/// Polar placement of an icon on its card.
///
/// `angle` is measured clockwise from the right of the card center (screen
/// y grows downwards). `rotation` spins the icon about its own center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Distance from the card center, in pixels.
    pub radius: f64,
    /// Direction from the card center, in degrees.
    pub angle: f64,
    /// Spin of the icon, in degrees.
    pub rotation: f64,
    /// Size multiplier relative to the drawn icon size.
    pub scale: f64,
}

impl Placement {
    /// Icon drawn unrotated at the card center.
    pub const CENTER: Placement = Placement {
        radius: 0.0,
        angle: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };
}

impl Default for Placement {
    fn default() -> Self {
        Self::CENTER
    }
}

/// An icon on a card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub id: IconId,
    pub placement: Placement,
    /// Where the renderer last drew this icon. `None` until painted.
    pub center: Option<(i32, i32)>,
}

impl Icon {
    /// Create an unplaced icon.
    #[must_use]
    pub fn new(id: IconId) -> Self {
        Self {
            id,
            placement: Placement::CENTER,
            center: None,
        }
    }
}
