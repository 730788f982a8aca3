//! Rounds: which cards are shown, and how clicks on them are judged.
//!
//! - `RoundSelector`: Anti-repeat draw of the card pair
//! - `ClickResolver`: Pointer position to verdict
//! - `Round`: The active pair plus the last verdict's per-slot tint

pub mod resolver;
pub mod selector;
pub mod state;

pub use resolver::{shared_icon, ClickOutcome, ClickResolver};
pub use selector::RoundSelector;
pub use state::{Outcome, Round, SlotOutcomes};
