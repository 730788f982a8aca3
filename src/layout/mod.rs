//! Card geometry and icon layout.

pub mod geometry;
pub mod placer;

pub use geometry::{distance, icon_location_in_matrix, CardSlot, Geometry, Rect};
pub use placer::IconPlacer;
