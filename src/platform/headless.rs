//! Renderer that records draw calls instead of painting pixels.
//!
//! Icon centers are computed with the same polar math a pixel renderer
//! uses, so click resolution behaves exactly as on screen. The recorded
//! frames drive the tests and the terminal front end.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::renderer::{Align, Renderer, Tint};
use crate::cards::{IconId, Placement};
use crate::core::config::IconPack;
use crate::core::error::RenderError;
use crate::layout::{icon_location_in_matrix, CardSlot, Geometry, Rect};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Text {
        text: String,
        x: i32,
        y: i32,
        align: Align,
    },
    CardShape {
        slot: CardSlot,
        tint: Tint,
    },
    Icon {
        slot: CardSlot,
        icon: IconId,
        placement: Placement,
        center: (i32, i32),
        /// Top-left of the icon in the pack matrix.
        source: (u32, u32),
    },
    Button {
        label: String,
        rect: Rect,
        hovered: bool,
    },
}

/// Recording renderer.
#[derive(Clone, Debug)]
pub struct HeadlessRenderer {
    geometry: Geometry,
    asset_root: Option<PathBuf>,
    pack_columns: u32,
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: usize,
    countdown_running: bool,
    countdown_stop_requested: bool,
}

impl HeadlessRenderer {
    /// Create a renderer that accepts every icon pack.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            asset_root: None,
            pack_columns: 1,
            pending: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
            countdown_running: false,
            countdown_stop_requested: false,
        }
    }

    /// Require pack images to exist under `root`.
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Draw calls of the last presented frame.
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Number of frames presented so far.
    #[must_use]
    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// Whether the countdown is (logically) running.
    #[must_use]
    pub fn countdown_running(&self) -> bool {
        self.countdown_running
    }

    /// Whether a countdown stop has been requested and not withdrawn.
    #[must_use]
    pub fn countdown_stop_requested(&self) -> bool {
        self.countdown_stop_requested
    }

    /// Texts of the last frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.last_frame.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Buttons of the last frame, in draw order.
    pub fn buttons(&self) -> impl Iterator<Item = (&str, Rect, bool)> {
        self.last_frame.iter().filter_map(|c| match c {
            DrawCommand::Button { label, rect, hovered } => Some((label.as_str(), *rect, *hovered)),
            _ => None,
        })
    }

    /// Card tints of the last frame.
    pub fn tints(&self) -> impl Iterator<Item = (CardSlot, Tint)> + '_ {
        self.last_frame.iter().filter_map(|c| match c {
            DrawCommand::CardShape { slot, tint } => Some((*slot, *tint)),
            _ => None,
        })
    }
}

impl Renderer for HeadlessRenderer {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn load_icon_pack(&mut self, pack: &IconPack) -> Result<usize, RenderError> {
        if let Some(root) = &self.asset_root {
            let path = root.join(&pack.image);
            if !path.is_file() {
                return Err(RenderError::PackUnavailable {
                    name: pack.name.clone(),
                    path,
                });
            }
        }
        self.pack_columns = pack.columns;
        Ok(pack.capacity())
    }

    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            align,
        });
    }

    fn draw_card_shape(&mut self, slot: CardSlot, tint: Tint) {
        self.pending.push(DrawCommand::CardShape { slot, tint });
    }

    fn draw_icon(&mut self, slot: CardSlot, icon: IconId, placement: &Placement) -> (i32, i32) {
        let center = self
            .geometry
            .polar_to_screen(slot, placement.radius, placement.angle);
        let source = icon_location_in_matrix(icon, self.pack_columns, self.geometry.icon_size);
        self.pending.push(DrawCommand::Icon {
            slot,
            icon,
            placement: *placement,
            center,
            source,
        });
        center
    }

    fn draw_button(&mut self, label: &str, rect: Rect, hovered: bool) {
        self.pending.push(DrawCommand::Button {
            label: label.to_string(),
            rect,
            hovered,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }

    fn start_countdown(&mut self) {
        self.countdown_running = true;
        self.countdown_stop_requested = false;
    }

    fn request_countdown_stop(&mut self) {
        if self.countdown_running {
            self.countdown_stop_requested = true;
        }
    }
}
