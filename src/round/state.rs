//! The active pair of cards and the outcome of the last judged click.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardIndex};
use crate::layout::CardSlot;

/// Verdict tint carried by a slot for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    None,
    Correct,
    Incorrect,
}

/// Per-slot outcome record.
///
/// Each slot keeps its own tint, so painting order cannot leak one card's
/// tint onto the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOutcomes {
    pub upper: Outcome,
    pub lower: Outcome,
}

impl SlotOutcomes {
    /// Same outcome on both slots.
    #[must_use]
    pub fn both(outcome: Outcome) -> Self {
        Self {
            upper: outcome,
            lower: outcome,
        }
    }

    #[must_use]
    pub fn get(&self, slot: CardSlot) -> Outcome {
        match slot {
            CardSlot::Upper => self.upper,
            CardSlot::Lower => self.lower,
        }
    }
}

/// Two laid-out cards on display until the next judged click.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub upper: Card,
    pub lower: Card,
    pub outcomes: SlotOutcomes,
}

impl Round {
    /// Deck indices of the two cards, upper first.
    #[must_use]
    pub fn indices(&self) -> (CardIndex, CardIndex) {
        (self.upper.index, self.lower.index)
    }

    #[must_use]
    pub fn card(&self, slot: CardSlot) -> &Card {
        match slot {
            CardSlot::Upper => &self.upper,
            CardSlot::Lower => &self.lower,
        }
    }

    pub fn card_mut(&mut self, slot: CardSlot) -> &mut Card {
        match slot {
            CardSlot::Upper => &mut self.upper,
            CardSlot::Lower => &mut self.lower,
        }
    }
}
