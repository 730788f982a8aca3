//! Screen geometry shared by the layout, the resolver and renderers.
//!
//! The upper card sits below a four-line header band, the lower card sits
//! one line above the bottom edge. Angles are clockwise from the right
//! because screen y grows downwards.

use serde::{Deserialize, Serialize};

use crate::cards::IconId;
use crate::core::config::WindowConfig;

/// Which of the two round slots a card occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSlot {
    Upper,
    Lower,
}

impl CardSlot {
    pub const ALL: [CardSlot; 2] = [CardSlot::Upper, CardSlot::Lower];
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Check whether a point lies inside (left/top edges inclusive).
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && i64::from(x) < i64::from(self.x) + i64::from(self.width)
            && i64::from(y) < i64::from(self.y) + i64::from(self.height)
    }

    /// Center point, rounded towards the top-left.
    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (self.x + (self.width / 2) as i32, self.y + (self.height / 2) as i32)
    }
}

/// Scaled window geometry in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub card_radius: f64,
    pub font_size: u32,
    /// Side of one icon in the pack image (unscaled source pixels).
    pub icon_size: u32,
    /// Side of an icon drawn at scale 1.0.
    pub draw_icon_size: f64,
}

impl Geometry {
    /// Apply the window scale to the configured dimensions.
    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        let s = window.scale;
        let px = |v: u32| (f64::from(v) * s).round() as u32;
        Self {
            width: px(window.width),
            height: px(window.height),
            card_radius: f64::from(window.card_radius) * s,
            font_size: px(window.font_size).max(1),
            icon_size: window.icon_size,
            draw_icon_size: f64::from(window.draw_icon_size) * s,
        }
    }

    /// Screen center of a card slot.
    #[must_use]
    pub fn card_center(&self, slot: CardSlot) -> (i32, i32) {
        let r = self.card_radius.round() as i32;
        let font = self.font_size as i32;
        let x = self.width as i32 / 2;
        match slot {
            CardSlot::Upper => (x, 4 * font + r),
            CardSlot::Lower => (x, self.height as i32 - r - font),
        }
    }

    /// Screen position of a point given in polar coordinates around a card
    /// center. Truncates towards zero like the pixel grid does.
    #[must_use]
    pub fn polar_to_screen(&self, slot: CardSlot, radius: f64, angle_deg: f64) -> (i32, i32) {
        let (cx, cy) = self.card_center(slot);
        let theta = angle_deg.to_radians();
        let x = radius * theta.cos() + f64::from(cx);
        let y = radius * theta.sin() + f64::from(cy);
        (x as i32, y as i32)
    }

    /// On-screen diameter of an icon drawn at `scale`.
    #[must_use]
    pub fn icon_diameter(&self, scale: f64) -> f64 {
        scale * self.draw_icon_size
    }
}

/// Euclidean distance between two screen points.
#[must_use]
pub fn distance(a: (i32, i32), b: (i32, i32)) -> f64 {
    let dx = f64::from(a.0) - f64::from(b.0);
    let dy = f64::from(a.1) - f64::from(b.1);
    dx.hypot(dy)
}

/// Top-left pixel of an icon inside a pack's image matrix.
///
/// Icons are stored row-major, `columns` per row, each `icon_size` wide.
#[must_use]
pub fn icon_location_in_matrix(icon: IconId, columns: u32, icon_size: u32) -> (u32, u32) {
    let columns = columns.max(1);
    let col = icon.raw() % columns;
    let row = icon.raw() / columns;
    (col * icon_size, row * icon_size)
}
