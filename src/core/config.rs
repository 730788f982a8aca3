//! Game configuration types.
//!
//! - `WindowConfig`: Window and card geometry, before scaling
//! - `RulesConfig`: Countdown length, bonus and penalty
//! - `IconPack`: An icon image matrix the player can choose
//! - `GameConfig`: Combines all configuration
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```
//! use spot_it::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("[rules]\nstarting_secs = 60\n").unwrap();
//! assert_eq!(config.rules.starting_secs, 60);
//! assert_eq!(config.rules.correct_bonus_secs, 3);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Window and card geometry in unscaled pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,

    /// Multiplier applied to every dimension below.
    pub scale: f64,

    pub card_radius: u32,
    pub font_size: u32,

    /// Side of one icon inside the pack image matrix.
    pub icon_size: u32,

    /// Side of an icon drawn at scale 1.0.
    pub draw_icon_size: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 1100,
            scale: 1.0,
            card_radius: 220,
            font_size: 30,
            icon_size: 90,
            draw_icon_size: 80,
        }
    }
}

/// Countdown and scoring rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Time on the clock when a game starts.
    pub starting_secs: u32,
    /// Added on a correct click.
    pub correct_bonus_secs: u32,
    /// Removed on an incorrect click.
    pub incorrect_penalty_secs: u32,
    /// Countdown period.
    pub tick_millis: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_secs: 30,
            correct_bonus_secs: 3,
            incorrect_penalty_secs: 3,
            tick_millis: 1000,
        }
    }
}

/// An icon image matrix: `columns × rows` icons laid out row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPack {
    /// Name shown on the menu button.
    pub name: String,
    /// Image file, relative to the content directory.
    pub image: PathBuf,
    pub columns: u32,
    pub rows: u32,
}

impl IconPack {
    /// Create a pack description.
    pub fn new(name: impl Into<String>, image: impl Into<PathBuf>, columns: u32, rows: u32) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            columns,
            rows,
        }
    }

    /// Number of icons in the matrix.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub rules: RulesConfig,

    /// Packs offered on the first menu.
    pub packs: Vec<IconPack>,

    /// Icon counts per card offered on the second menu. Each needs a
    /// matching content file in `content_dir`.
    pub sizes: Vec<usize>,

    /// Directory holding content files and pack images.
    pub content_dir: PathBuf,

    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            rules: RulesConfig::default(),
            packs: vec![IconPack::new("classic", "Matrice8x10_Icones90x90.png", 8, 10)],
            sizes: vec![3, 4, 6, 8],
            content_dir: PathBuf::from("data"),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file.
    ///
    /// A relative `content_dir` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if config.content_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.content_dir = parent.join(&config.content_dir);
            }
        }
        Ok(config)
    }

    /// Check values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packs.is_empty() {
            return Err(ConfigError::Invalid("at least one icon pack is required".into()));
        }
        if let Some(pack) = self.packs.iter().find(|p| p.capacity() == 0) {
            return Err(ConfigError::Invalid(format!("icon pack {} holds no icons", pack.name)));
        }
        if self.sizes.is_empty() || self.sizes.contains(&0) {
            return Err(ConfigError::Invalid("sizes must be non-empty and positive".into()));
        }
        let w = &self.window;
        if w.width == 0 || w.height == 0 || w.card_radius == 0 || w.draw_icon_size == 0 {
            return Err(ConfigError::Invalid("window geometry must be positive".into()));
        }
        if !(w.scale > 0.0) {
            return Err(ConfigError::Invalid(format!("scale must be positive, got {}", w.scale)));
        }
        if self.rules.starting_secs == 0 || self.rules.tick_millis == 0 {
            return Err(ConfigError::Invalid("starting time and tick period must be positive".into()));
        }
        Ok(())
    }

    /// Set the content directory.
    #[must_use]
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the countdown starting time.
    #[must_use]
    pub fn with_starting_secs(mut self, secs: u32) -> Self {
        self.rules.starting_secs = secs;
        self
    }

    /// Replace the offered packs.
    #[must_use]
    pub fn with_packs(mut self, packs: Vec<IconPack>) -> Self {
        self.packs = packs;
        self
    }

    /// Replace the offered icon counts.
    #[must_use]
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Path of a pack's image.
    #[must_use]
    pub fn pack_image_path(&self, pack: &IconPack) -> PathBuf {
        self.content_dir.join(&pack.image)
    }
}
