//! Card system: icons, cards and the deck.
//!
//! ## Key Types
//!
//! - `IconId`: Index into the pack's icon matrix
//! - `Placement`: Where a layout put an icon on its card
//! - `CardIndex`: A card's position in the deck, and its identity
//! - `Card`: Ordered icons, copied by value into round slots
//! - `Deck`: Validated, immutable catalogue

pub mod card;
pub mod deck;
pub mod icon;

pub use card::{Card, CardIndex};
pub use deck::{content_file_name, Deck};
pub use icon::{Icon, IconId, Placement};
