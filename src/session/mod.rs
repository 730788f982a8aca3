//! Game session: menus, countdown, scoring and replay.

pub mod game;
pub mod menu;

pub use game::{GameSession, Phase, SessionStats};
pub use menu::{Button, Menu, MenuAction};
