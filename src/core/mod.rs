//! Core engine types: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, IconPack, RulesConfig, WindowConfig};
pub use error::{ConfigError, DeckError, RenderError, SessionError};
pub use rng::GameRng;
