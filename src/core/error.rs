//! Error types.
//!
//! Content and integrity problems are fatal: they mean the data on disk is
//! wrong, not that the player did something unusual. Ordinary gameplay
//! events (misses, clicks outside the card) are never errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::{CardIndex, IconId};

/// Failures while loading or validating a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The content file could not be opened or read.
    #[error("content file {path} could not be read")]
    ContentAbsent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header or row did not match the expected format.
    #[error("malformed content at line {line}: {reason}")]
    ContentMalformed { line: usize, reason: String },

    /// Two cards do not share exactly one icon.
    #[error("cards {first} and {second} share {shared} icons (expected exactly 1)")]
    IntegrityViolation {
        first: CardIndex,
        second: CardIndex,
        shared: usize,
    },
}

impl DeckError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        DeckError::ContentMalformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Failures reported by a `Renderer`.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("icon pack {name} is unavailable at {path}")]
    PackUnavailable { name: String, path: PathBuf },
}

/// Fatal failures surfaced by the game session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("a round needs at least 2 cards, deck has {nb_cards}")]
    DeckTooSmall { nb_cards: usize },

    #[error("icon {icon} is outside the pack, which holds {available} icons")]
    IconOutOfRange { icon: IconId, available: usize },

    #[error("no icon pack at index {index}")]
    UnknownPack { index: usize },
}

/// Failures while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
