//! # spot-it
//!
//! Game-state and layout engine for the Spot It! (Dobble) minigame: two
//! cards share exactly one icon, and the player has to click it on the
//! upper card before the countdown runs out.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: Drawing, fonts and images live behind the
//!    `Renderer` trait. The engine only supplies placements and reads back
//!    where icons landed.
//!
//! 2. **Index Identity**: Cards are copied by value into round slots and
//!    are always identified by their deck index.
//!
//! 3. **One Mutator**: All state lives in a `GameSession` driven by a
//!    single-threaded event loop. Timers post events; they never call in.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Icons, cards, deck loading and validation
//! - `layout`: Screen geometry and per-round icon layout
//! - `round`: Anti-repeat card draw and click resolution
//! - `session`: Menus, countdown, scoring, replay
//! - `platform`: Renderer trait, events, timer, event loop

pub mod cards;
pub mod core;
pub mod layout;
pub mod platform;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DeckError, GameConfig, GameRng, IconPack, RenderError, RulesConfig,
    SessionError, WindowConfig,
};

pub use crate::cards::{content_file_name, Card, CardIndex, Deck, Icon, IconId, Placement};

pub use crate::layout::{CardSlot, Geometry, IconPlacer, Rect};

pub use crate::round::{shared_icon, ClickOutcome, ClickResolver, Outcome, Round, RoundSelector, SlotOutcomes};

pub use crate::session::{GameSession, Menu, MenuAction, Phase, SessionStats};

pub use crate::platform::{
    Align, CountdownTimer, DrawCommand, Event, EventReceiver, EventSender, Flow, HeadlessRenderer,
    Renderer, Tint,
};
