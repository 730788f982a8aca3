//! Renderer trait: the drawing and timing collaborator of the session.
//!
//! The session decides what goes on screen; a `Renderer` decides how. The
//! only value flowing back is where each icon actually landed, which the
//! click resolver needs.

use serde::{Deserialize, Serialize};

use crate::cards::{IconId, Placement};
use crate::core::config::IconPack;
use crate::core::error::RenderError;
use crate::layout::{CardSlot, Geometry, Rect};
use crate::round::Outcome;

/// Horizontal anchor of a text draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Card face tint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Plain,
    Success,
    Failure,
}

impl From<Outcome> for Tint {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::None => Tint::Plain,
            Outcome::Correct => Tint::Success,
            Outcome::Incorrect => Tint::Failure,
        }
    }
}

/// Drawing and timer services the session relies on.
///
/// ## Implementation Notes
///
/// - `draw_icon`: must return the screen center the icon was drawn at
/// - `present`: ends a frame; draws before it may be buffered
/// - `start_countdown`: ticks are delivered as `Event::TimerTick` through
///   the event queue, never by calling into the session
/// - `request_countdown_stop`: takes effect at the next tick
pub trait Renderer {
    /// Scaled screen geometry.
    fn geometry(&self) -> Geometry;

    /// Bind an icon pack. Returns how many icons it holds.
    fn load_icon_pack(&mut self, pack: &IconPack) -> Result<usize, RenderError>;

    /// Start a new frame.
    fn clear(&mut self);

    /// Draw a line of text anchored at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align);

    /// Draw a card's background and outline.
    fn draw_card_shape(&mut self, slot: CardSlot, tint: Tint);

    /// Draw an icon on a card and report its screen center.
    fn draw_icon(&mut self, slot: CardSlot, icon: IconId, placement: &Placement) -> (i32, i32);

    /// Draw a menu button.
    fn draw_button(&mut self, label: &str, rect: Rect, hovered: bool);

    /// Show the frame.
    fn present(&mut self);

    /// Start the one-second countdown.
    fn start_countdown(&mut self);

    /// Ask the countdown to stop at its next tick.
    fn request_countdown_stop(&mut self);
}
